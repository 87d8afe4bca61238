//! External metadata lookup result.

use serde::{Deserialize, Serialize};

/// Sentinel language code used when a lookup succeeds but finds no match.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Best-guess language/rating pair for a title. Transient: consumed once when
/// a movie is created, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub language_code: String,
    pub average_rating: f64,
}

impl MovieMetadata {
    /// Neutral default substituted when the search returns zero matches.
    /// Distinct from `MetadataUnavailable`, which means the search itself failed.
    pub fn neutral() -> Self {
        Self {
            language_code: UNKNOWN_LANGUAGE.to_string(),
            average_rating: 0.0,
        }
    }
}
