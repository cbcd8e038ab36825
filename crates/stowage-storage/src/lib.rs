//! Stowage Storage Library
//!
//! This crate provides the storage gateway abstraction and its backends.
//! It includes the `StorageGateway` trait and implementations for S3 and the
//! local filesystem, plus a config-driven factory.
//!
//! # Object key format
//!
//! Object keys have the form `{unix_millis}-{random suffix}-{filename}`, so
//! files sharing a name never collide on the same key across submissions.
//! Keys must not contain `..` or a leading `/`. Key generation is centralized
//! in the `keys` module so all backends stay consistent.

pub mod config;
pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use config::{GatewayBackend, StorageConfig};
pub use factory::create_gateway;
pub use keys::generate_object_key;
#[cfg(feature = "storage-local")]
pub use local::LocalGateway;
#[cfg(feature = "storage-s3")]
pub use s3::S3Gateway;
pub use traits::{StorageError, StorageGateway, StorageResult};
