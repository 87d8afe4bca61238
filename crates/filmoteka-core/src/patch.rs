//! JSON merge-patch application (RFC 7386 semantics, flat documents).
//!
//! The record is serialized to its structural document form, the patch is
//! merged key by key, and the result is deserialized back into a document.
//! Per-key semantics: present+value overwrites, present+null clears the field
//! back to its default, absent leaves it untouched.

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::MovieDocument;

/// Apply a merge-patch to the document form of a movie record.
///
/// Fails with `InvalidPatch` when the patch is not a JSON object or when the
/// merged document no longer maps back to a valid record shape (wrong field
/// types, for example). Unknown keys in the patch are rejected for the same
/// reason.
pub fn apply_merge_patch(current: &MovieDocument, patch: &Value) -> Result<MovieDocument, AppError> {
    let patch_object = patch
        .as_object()
        .ok_or_else(|| AppError::InvalidPatch("patch must be a JSON object".to_string()))?;

    let mut document: Map<String, Value> = match serde_json::to_value(current) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(AppError::Internal(
                "movie document did not serialize to an object".to_string(),
            ))
        }
        Err(e) => return Err(AppError::Internal(e.to_string())),
    };

    for (key, value) in patch_object {
        if value.is_null() {
            // Explicit null clears the field; deserializing with defaults
            // resets it below.
            document.remove(key);
        } else {
            document.insert(key.clone(), value.clone());
        }
    }

    serde_json::from_value(Value::Object(document))
        .map_err(|e| AppError::InvalidPatch(e.to_string()))
}
