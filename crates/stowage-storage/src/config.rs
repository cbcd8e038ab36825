//! Gateway configuration.
//!
//! Connection parameters are supplied explicitly at construction time; the
//! orchestrator and models never read the environment. `from_env` exists as
//! an edge convenience for binaries and reports every missing variable in a
//! single error.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayBackend {
    S3,
    Local,
}

impl FromStr for GatewayBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(GatewayBackend::S3),
            "local" => Ok(GatewayBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid storage backend: {}", s)),
        }
    }
}

impl Display for GatewayBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GatewayBackend::S3 => write!(f, "s3"),
            GatewayBackend::Local => write!(f, "local"),
        }
    }
}

/// Connection parameters for the storage gateway.
///
/// Only the fields of the selected backend are consulted; the factory fails
/// with a configuration error when a mandatory one is missing.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: GatewayBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    // Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
}

impl StorageConfig {
    /// S3 configuration for the given bucket and region.
    pub fn s3(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            backend: GatewayBackend::S3,
            s3_bucket: Some(bucket.into()),
            s3_region: Some(region.into()),
            s3_endpoint: None,
            local_storage_path: None,
            local_storage_base_url: None,
        }
    }

    /// Custom endpoint for S3-compatible providers.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.s3_endpoint = Some(endpoint.into());
        self
    }

    /// Local-filesystem configuration with the given storage root and
    /// serving base URL.
    pub fn local(base_path: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            backend: GatewayBackend::Local,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            local_storage_path: Some(base_path.into()),
            local_storage_base_url: Some(base_url.into()),
        }
    }

    /// Load gateway configuration from the environment (and a `.env` file if
    /// present).
    ///
    /// `STORAGE_BACKEND` selects the backend (default: `s3`). Mandatory
    /// variables for the selected backend are checked up front and reported
    /// together when missing.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => GatewayBackend::S3,
        };

        let config = Self {
            backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
        };

        let mut missing = Vec::new();
        match backend {
            GatewayBackend::S3 => {
                if config.s3_bucket.is_none() {
                    missing.push("S3_BUCKET");
                }
                if config.s3_region.is_none() {
                    missing.push("S3_REGION");
                }
            }
            GatewayBackend::Local => {
                if config.local_storage_path.is_none() {
                    missing.push("LOCAL_STORAGE_PATH");
                }
                if config.local_storage_base_url.is_none() {
                    missing.push("LOCAL_STORAGE_BASE_URL");
                }
            }
        }

        if !missing.is_empty() {
            anyhow::bail!(
                "Missing required environment variables: {}",
                missing.join(", ")
            );
        }

        Ok(config)
    }
}
