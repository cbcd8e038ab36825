//! Upload result records.

use serde::{Deserialize, Serialize};

use super::candidate::CandidateFile;

/// A file that passed validation and was stored, with its public reference.
///
/// Created only after a successful gateway round trip and immutable
/// thereafter. Owned by the session until removed by id or cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Storage-assigned object key.
    pub id: String,
    /// Original file name as submitted.
    pub name: String,
    /// Publicly resolvable reference to the stored object.
    pub url: String,
    pub size_bytes: u64,
}

/// A per-file failure: a policy rejection or a gateway failure.
#[derive(Debug, Clone)]
pub struct UploadError {
    /// The candidate that failed.
    pub file: CandidateFile,
    /// Human-readable failure message.
    pub message: String,
}
