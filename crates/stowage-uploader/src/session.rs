//! Upload session state.

use std::sync::Arc;

use stowage_core::{UploadError, UploadPolicy, UploadedFile};
use stowage_storage::StorageGateway;

/// Mutable state for a sequence of batch uploads.
///
/// The session owns the accepted-file collection, the error collection, and
/// the busy flag. All mutation goes through `&mut self` entry points —
/// [`submit_batch`](Self::submit_batch) plus the explicit operations below —
/// so there is a single writer by construction. Consumers read the
/// collections through the accessors as read-only snapshots.
///
/// Accepted files accumulate across batches; the error collection is replaced
/// wholesale by each batch and reflects only the most recent one.
pub struct UploadSession {
    pub(crate) policy: UploadPolicy,
    pub(crate) gateway: Arc<dyn StorageGateway>,
    pub(crate) files: Vec<UploadedFile>,
    pub(crate) errors: Vec<UploadError>,
    pub(crate) uploading: bool,
}

impl UploadSession {
    /// Create a session with the given policy and gateway.
    pub fn new(policy: UploadPolicy, gateway: Arc<dyn StorageGateway>) -> Self {
        Self {
            policy,
            gateway,
            files: Vec::new(),
            errors: Vec::new(),
            uploading: false,
        }
    }

    /// Accepted files across all batches so far, in upload order.
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Failures from the most recent batch, in input order.
    pub fn errors(&self) -> &[UploadError] {
        &self.errors
    }

    /// True while a batch is being processed.
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Remove the uploaded file whose `id` matches. Absent ids are a no-op,
    /// not an error.
    pub fn remove_file(&mut self, id: &str) {
        self.files.retain(|f| f.id != id);
    }

    /// Empty the error collection.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Empty the accepted-file collection.
    pub fn clear_files(&mut self) {
        self.files.clear();
    }
}
