//! Upload policy and validation.
//!
//! The policy is a pure predicate over a candidate's declared size and MIME
//! type. It performs no I/O and is safe to run any number of times.

use serde::{Deserialize, Serialize};

use crate::models::CandidateFile;

/// Why a candidate was rejected before any upload was attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyViolation {
    #[error("File {name} is too large. Maximum size is {max_mb}MB")]
    TooLarge { name: String, max_mb: u64 },

    #[error("File {name} type is not allowed. Allowed types: {}", .allowed.join(", "))]
    TypeNotAllowed { name: String, allowed: Vec<String> },
}

/// Validation policy applied to every file in a batch.
///
/// An empty `allowed_mime_types` list allows every type. There is no default
/// size cap; see [`constants`](crate::constants) for the common choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: Vec<String>,
}

impl UploadPolicy {
    pub fn new(max_file_size_bytes: u64, allowed_mime_types: Vec<String>) -> Self {
        Self {
            max_file_size_bytes,
            allowed_mime_types,
        }
    }

    /// Allow every MIME type under the given size cap.
    pub fn any_type(max_file_size_bytes: u64) -> Self {
        Self::new(max_file_size_bytes, Vec::new())
    }

    /// Check a candidate against this policy.
    ///
    /// Size is checked first; the first failing check wins and no further
    /// checks run, so a file that is both oversized and of a disallowed type
    /// reports only the size violation. MIME types match exactly,
    /// case-sensitive.
    pub fn validate(&self, file: &CandidateFile) -> Result<(), PolicyViolation> {
        if file.size_bytes > self.max_file_size_bytes {
            return Err(PolicyViolation::TooLarge {
                name: file.name.clone(),
                max_mb: whole_megabytes(self.max_file_size_bytes),
            });
        }

        if !self.allowed_mime_types.is_empty()
            && !self.allowed_mime_types.iter().any(|t| t == &file.mime_type)
        {
            return Err(PolicyViolation::TypeNotAllowed {
                name: file.name.clone(),
                allowed: self.allowed_mime_types.clone(),
            });
        }

        Ok(())
    }
}

/// Byte limit rendered in whole megabytes for rejection messages.
fn whole_megabytes(bytes: u64) -> u64 {
    (bytes as f64 / (1024.0 * 1024.0)).round() as u64
}
