//! Stowage Uploader Library
//!
//! Batch upload orchestration over a pluggable storage gateway. A session
//! validates each candidate file against an upload policy, drives one gateway
//! upload per accepted file (sequentially, in input order), and reconciles
//! the results into two observable collections: accepted files and per-file
//! errors. Per-file failures never abort the rest of a batch.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use stowage_core::constants::MAX_FILE_SIZE_10_MIB;
//! use stowage_core::{CandidateFile, UploadPolicy};
//! use stowage_storage::LocalGateway;
//! use stowage_uploader::UploadSession;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = Arc::new(
//!     LocalGateway::new(
//!         "/var/lib/stowage/media",
//!         "http://localhost:3000/media".to_string(),
//!     )
//!     .await?,
//! );
//! let policy = UploadPolicy::new(MAX_FILE_SIZE_10_MIB, vec!["image/jpeg".to_string()]);
//! let mut session = UploadSession::new(policy, gateway);
//!
//! let photo = CandidateFile::from_path("photo.jpg").await?;
//! let report = session.submit_batch(vec![photo]).await;
//! println!("{} uploaded, {} failed", report.uploaded, report.failed);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod session;
pub mod telemetry;

// Re-export commonly used types
pub use batch::BatchReport;
pub use session::UploadSession;
pub use telemetry::init_telemetry;
