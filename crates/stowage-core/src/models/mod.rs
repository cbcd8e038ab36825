//! Data models shared by the storage gateway and the upload orchestrator.

mod candidate;
mod uploaded;

pub use candidate::CandidateFile;
pub use uploaded::{UploadError, UploadedFile};
