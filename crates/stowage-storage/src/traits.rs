//! Storage gateway abstraction.
//!
//! This module defines the `StorageGateway` trait that all storage backends
//! must implement.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failure payload reported by the remote storage service. The display
    /// form is the service's message, unmodified, so the orchestrator can
    /// surface it verbatim.
    #[error("{0}")]
    Remote(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Remote object-storage capability the upload orchestrator depends on.
///
/// All storage backends (S3, local filesystem) implement this trait. The
/// orchestrator couples only to this surface, never to a specific provider's
/// API.
///
/// **Key format:** keys come from [`keys::generate_object_key`](crate::keys)
/// and must not contain `..` or a leading `/`. See the crate root
/// documentation.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// Store `data` under `key` and return the key the backend assigned to
    /// the stored object.
    async fn put_object(&self, key: &str, data: Bytes) -> StorageResult<String>;

    /// Publicly resolvable URL for a stored key.
    fn public_url(&self, key: &str) -> String;

    /// Fetch the content stored under `key`.
    async fn download(&self, key: &str) -> StorageResult<Vec<u8>>;
}
