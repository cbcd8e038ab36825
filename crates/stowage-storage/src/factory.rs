use std::sync::Arc;

use crate::config::{GatewayBackend, StorageConfig};
#[cfg(feature = "storage-local")]
use crate::LocalGateway;
#[cfg(feature = "storage-s3")]
use crate::S3Gateway;
use crate::{StorageError, StorageGateway, StorageResult};

/// Create a storage gateway based on configuration.
///
/// Missing mandatory parameters fail here, before any file is processed.
pub async fn create_gateway(config: &StorageConfig) -> StorageResult<Arc<dyn StorageGateway>> {
    match config.backend {
        #[cfg(feature = "storage-s3")]
        GatewayBackend::S3 => {
            let bucket = config
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;
            let region = config
                .s3_region
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_REGION not configured".to_string()))?;
            let endpoint = config.s3_endpoint.clone();

            let gateway = S3Gateway::new(bucket, region, endpoint).await?;
            Ok(Arc::new(gateway))
        }

        #[cfg(not(feature = "storage-s3"))]
        GatewayBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-local")]
        GatewayBackend::Local => {
            let base_path = config.local_storage_path.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = config.local_storage_base_url.clone().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;

            let gateway = LocalGateway::new(base_path, base_url).await?;
            Ok(Arc::new(gateway))
        }

        #[cfg(not(feature = "storage-local"))]
        GatewayBackend::Local => Err(StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
