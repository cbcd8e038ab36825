//! Candidate files proposed for upload.

use std::path::Path;

use bytes::Bytes;

use crate::constants::OCTET_STREAM;
use crate::content_type;

/// A local file proposed for upload.
///
/// Candidates are supplied by callers and never constructed by the
/// orchestrator itself. The name is not guaranteed unique; the declared size
/// and MIME type are what the upload policy validates, without touching the
/// content again.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub data: Bytes,
}

impl CandidateFile {
    /// Build a candidate from in-memory content. The declared size is taken
    /// from the content length.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            size_bytes: data.len() as u64,
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Load a candidate from a local path.
    ///
    /// The MIME type is guessed from the file extension; unrecognized
    /// extensions fall back to `application/octet-stream`.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        let mime_type = content_type::guess_content_type(&name)
            .unwrap_or(OCTET_STREAM)
            .to_string();
        Ok(Self::new(name, mime_type, data))
    }
}
