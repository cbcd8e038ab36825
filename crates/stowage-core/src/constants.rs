//! Shared constants.

/// 5 MiB upload size cap.
pub const MAX_FILE_SIZE_5_MIB: u64 = 5 * 1024 * 1024;

/// 10 MiB upload size cap.
///
/// There is deliberately no default cap on [`UploadPolicy`](crate::UploadPolicy);
/// callers pick a limit explicitly.
pub const MAX_FILE_SIZE_10_MIB: u64 = 10 * 1024 * 1024;

/// Length of the random suffix in generated object keys.
pub const OBJECT_KEY_SUFFIX_LEN: usize = 12;

/// Fallback content type when a file's extension is not recognized.
pub const OCTET_STREAM: &str = "application/octet-stream";
