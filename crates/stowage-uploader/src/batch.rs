//! Batch submission: validate, store, reconcile.

use std::time::Instant;

use stowage_core::{CandidateFile, UploadError, UploadedFile};
use stowage_storage::{keys, StorageError};

use crate::session::UploadSession;

/// Summary of one batch submission. The authoritative results live in the
/// session's collections; the report only carries counts for callers that
/// want to log or branch on the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub uploaded: usize,
    pub failed: usize,
}

impl UploadSession {
    /// Submit a batch without progress notifications.
    pub async fn submit_batch(&mut self, files: Vec<CandidateFile>) -> BatchReport {
        self.submit_batch_with_progress(files, |_, _| {}).await
    }

    /// Submit a batch of candidate files.
    ///
    /// Files are processed strictly in the order given, one upload in flight
    /// at a time; the order is visible in gateway call order and in the error
    /// collection. Per-file failures — policy rejections and gateway errors —
    /// are recorded and never abort the rest of the batch.
    ///
    /// `on_progress` is called with `(file, 0)` when an accepted file's
    /// upload starts and `(file, 100)` once its public URL has been resolved;
    /// files that fail at the gateway receive no completion call.
    ///
    /// When the batch finishes, the new uploads are appended to the session's
    /// accepted-file collection and the error collection is replaced with
    /// this batch's failures.
    pub async fn submit_batch_with_progress<F>(
        &mut self,
        files: Vec<CandidateFile>,
        mut on_progress: F,
    ) -> BatchReport
    where
        F: FnMut(&CandidateFile, u8),
    {
        let start = Instant::now();
        let batch_size = files.len();

        self.uploading = true;
        self.errors.clear();

        let mut uploaded: Vec<UploadedFile> = Vec::new();
        let mut batch_errors: Vec<UploadError> = Vec::new();

        for file in files {
            if let Err(violation) = self.policy.validate(&file) {
                tracing::debug!(
                    file = %file.name,
                    error = %violation,
                    "Candidate rejected by policy"
                );
                batch_errors.push(UploadError {
                    message: violation.to_string(),
                    file,
                });
                continue;
            }

            let key = keys::generate_object_key(&file.name);
            on_progress(&file, 0);

            match self.gateway.put_object(&key, file.data.clone()).await {
                Ok(stored_key) => {
                    let url = self.gateway.public_url(&stored_key);
                    on_progress(&file, 100);
                    uploaded.push(UploadedFile {
                        id: stored_key,
                        name: file.name.clone(),
                        url,
                        size_bytes: file.size_bytes,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        file = %file.name,
                        key = %key,
                        error = %e,
                        "Gateway upload failed"
                    );
                    batch_errors.push(UploadError {
                        message: failure_message(&e),
                        file,
                    });
                }
            }
        }

        let report = BatchReport {
            uploaded: uploaded.len(),
            failed: batch_errors.len(),
        };

        self.files.extend(uploaded);
        self.errors = batch_errors;
        self.uploading = false;

        tracing::info!(
            batch_size,
            uploaded = report.uploaded,
            failed = report.failed,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Batch submission finished"
        );

        report
    }
}

/// Display form of a gateway failure. Errors that render empty fall back to
/// a generic message so no failure surfaces blank.
fn failure_message(error: &StorageError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}
