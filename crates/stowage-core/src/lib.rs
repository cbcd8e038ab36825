//! Stowage Core Library
//!
//! This crate provides the domain models, upload policy validation, and shared
//! constants used by the storage gateway and the upload orchestrator.

pub mod constants;
pub mod content_type;
pub mod models;
pub mod policy;

// Re-export commonly used types
pub use models::{CandidateFile, UploadError, UploadedFile};
pub use policy::{PolicyViolation, UploadPolicy};
