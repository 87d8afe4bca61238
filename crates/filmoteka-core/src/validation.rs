//! Input validation for the catalog.
//!
//! Explicit validation functions per input type: each returns the full set of
//! violation messages joined into one `ValidationFailed` error so clients see
//! every problem at once.

use crate::error::AppError;
use crate::models::CreateMovieRequest;

pub const MAX_TITLE_LENGTH: usize = 300;
pub const MAX_DIRECTOR_LENGTH: usize = 200;

/// Content types accepted for uploaded movie files. Anything else is rejected
/// before any disk write or metadata lookup.
pub const ALLOWED_VIDEO_CONTENT_TYPES: [&str; 3] =
    ["video/mp4", "video/x-matroska", "video/x-msvideo"];

/// Validate the movie creation request, collecting all violations.
pub fn validate_new_movie(request: &CreateMovieRequest) -> Result<(), AppError> {
    let mut violations = Vec::new();

    if request.title.trim().is_empty() {
        violations.push("Title cannot be blank".to_string());
    }
    if request.title.chars().count() > MAX_TITLE_LENGTH {
        violations.push(format!(
            "Title must be at most {} characters",
            MAX_TITLE_LENGTH
        ));
    }
    if request.director.trim().is_empty() {
        violations.push("Director cannot be blank".to_string());
    }
    if request.director.chars().count() > MAX_DIRECTOR_LENGTH {
        violations.push(format!(
            "Director must be at most {} characters",
            MAX_DIRECTOR_LENGTH
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationFailed(violations.join(", ")))
    }
}

/// Check the declared content type against the video allow-list.
pub fn validate_video_content_type(content_type: &str) -> Result<(), AppError> {
    if ALLOWED_VIDEO_CONTENT_TYPES
        .iter()
        .any(|allowed| *allowed == content_type)
    {
        Ok(())
    } else {
        Err(AppError::UnsupportedMediaKind(content_type.to_string()))
    }
}
