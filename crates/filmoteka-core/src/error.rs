//! Error types module
//!
//! This module provides the core error types used throughout the Filmoteka
//! application. All expected failure conditions are unified under the
//! `AppError` enum; each variant maps to exactly one HTTP status at the API
//! boundary and none of them is silently swallowed or downgraded on the way
//! there.
//!
//! The `From<sqlx::Error>` conversion is gated behind the `sqlx` feature so
//! the crate can be used without a database dependency.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "DUPLICATE_TITLE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Movie with title already exists: {0}")]
    DuplicateTitle(String),

    #[error("Unsupported media kind: {0}")]
    UnsupportedMediaKind(String),

    #[error("Storage failure: {0}")]
    StorageIoFailure(String),

    #[error("Metadata service unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("Movie {0} not found")]
    MovieNotFound(String),

    #[error("Invalid patch document: {0}")]
    InvalidPatch(String),

    #[error("File not found on disk: {0}")]
    FileMissing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

/// Static metadata per variant: (http_status, error_code, log_level).
/// `client_message` stays per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::Database(_) => (500, "DATABASE_ERROR", LogLevel::Error),
        AppError::ValidationFailed(_) => (400, "VALIDATION_FAILED", LogLevel::Debug),
        AppError::DuplicateTitle(_) => (409, "DUPLICATE_TITLE", LogLevel::Debug),
        AppError::UnsupportedMediaKind(_) => (415, "UNSUPPORTED_MEDIA_KIND", LogLevel::Debug),
        AppError::StorageIoFailure(_) => (500, "STORAGE_IO_FAILURE", LogLevel::Error),
        AppError::MetadataUnavailable(_) => (502, "METADATA_UNAVAILABLE", LogLevel::Error),
        AppError::MovieNotFound(_) => (404, "MOVIE_NOT_FOUND", LogLevel::Debug),
        AppError::InvalidPatch(_) => (400, "INVALID_PATCH", LogLevel::Debug),
        AppError::FileMissing(_) => (500, "FILE_MISSING", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for structured log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database",
            AppError::ValidationFailed(_) => "ValidationFailed",
            AppError::DuplicateTitle(_) => "DuplicateTitle",
            AppError::UnsupportedMediaKind(_) => "UnsupportedMediaKind",
            AppError::StorageIoFailure(_) => "StorageIoFailure",
            AppError::MetadataUnavailable(_) => "MetadataUnavailable",
            AppError::MovieNotFound(_) => "MovieNotFound",
            AppError::InvalidPatch(_) => "InvalidPatch",
            AppError::FileMissing(_) => "FileMissing",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            // Server-side faults hide internals from clients
            AppError::Database(_) => "Failed to access database".to_string(),
            AppError::StorageIoFailure(_) => "Failed to save file".to_string(),
            AppError::MetadataUnavailable(_) => "Metadata service unavailable".to_string(),
            AppError::FileMissing(_) => "File not found on disk".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_duplicate_title() {
        let err = AppError::DuplicateTitle("Heat".to_string());
        assert_eq!(err.http_status_code(), 409);
        assert_eq!(err.error_code(), "DUPLICATE_TITLE");
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert!(err.client_message().contains("Heat"));
    }

    #[test]
    fn test_error_metadata_unsupported_media_kind() {
        let err = AppError::UnsupportedMediaKind("text/plain".to_string());
        assert_eq!(err.http_status_code(), 415);
        assert_eq!(err.error_code(), "UNSUPPORTED_MEDIA_KIND");
    }

    #[test]
    fn test_error_metadata_hides_storage_internals() {
        let err = AppError::StorageIoFailure("/var/lib/filmoteka/x: permission denied".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "Failed to save file");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_error_metadata_metadata_unavailable_is_gateway_fault() {
        let err = AppError::MetadataUnavailable("connection refused".to_string());
        assert_eq!(err.http_status_code(), 502);
        assert_eq!(err.error_code(), "METADATA_UNAVAILABLE");
    }

    #[test]
    fn test_error_metadata_not_found() {
        let err = AppError::MovieNotFound("Solaris".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.client_message(), "Movie Solaris not found");
    }
}
