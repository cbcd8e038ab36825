//! Object key generation, shared by all backends.
//!
//! Key format: `{unix_millis}-{random suffix}-{sanitized filename}`. The
//! leading token keeps same-named files from colliding across submissions;
//! uniqueness is best effort, not cryptographic. Only the key is sanitized;
//! display names keep their original spelling.

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;

use stowage_core::constants::OBJECT_KEY_SUFFIX_LEN;

/// Generate an object key for the given filename.
pub fn generate_object_key(filename: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(OBJECT_KEY_SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!(
        "{}-{}-{}",
        Utc::now().timestamp_millis(),
        suffix,
        sanitize_filename(filename)
    )
}

fn sanitize_filename(filename: &str) -> String {
    const MAX: usize = 255;
    let path = std::path::Path::new(filename);
    let base = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);
    if base.contains("..") {
        return "invalid_filename".to_string();
    }
    let s: String = base
        .chars()
        .take(MAX)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if s.trim().is_empty() || s.len() < 3 {
        "file".to_string()
    } else {
        s
    }
}
