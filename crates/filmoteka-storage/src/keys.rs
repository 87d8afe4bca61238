//! Storage key generation.
//!
//! Key format: `{uuid}-{sanitized original filename}`. The random token makes
//! keys unique per upload, so identical original filenames never overwrite
//! each other.

use uuid::Uuid;

const MAX_FILENAME_LENGTH: usize = 255;

/// Strip any path components from the client-supplied filename and replace
/// characters outside `[A-Za-z0-9._-]` with underscores. A name that
/// sanitizes to nothing useful becomes "file".
pub fn sanitize_filename(filename: &str) -> String {
    let filename_only = std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(|c| c == '.' || c == '_').is_empty() {
        return "file".to_string();
    }

    sanitized
}

/// Generate a fresh collision-safe storage key for an upload.
pub fn generate_storage_key(original_name: &str) -> String {
    format!("{}-{}", Uuid::new_v4(), sanitize_filename(original_name))
}
