//! Storage abstraction trait
//!
//! This module defines the FileStore trait the movie catalog persists file
//! artifacts through, together with the storage error taxonomy.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Handle to a stored artifact. The key is recorded on the movie record and
/// doubles as the download filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub key: String,
}

/// Storage abstraction trait
///
/// The catalog works against this trait so the storage backend can be swapped
/// without touching orchestration logic.
///
/// **Key format:** `{uuid}-{sanitized original filename}`; see the crate root
/// documentation.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Validate the declared content type and persist the uploaded bytes
    /// under a freshly generated collision-safe key.
    ///
    /// Fails with `UnsupportedMediaType` before any disk write when the
    /// declared content type is not on the video allow-list, and with
    /// `WriteFailed` when the underlying write cannot complete. Write
    /// failures are surfaced to the caller, never retried here.
    async fn store(
        &self,
        original_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredFile>;

    /// Check whether the artifact for a storage key is still on disk.
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Read the artifact for a storage key.
    async fn read(&self, storage_key: &str) -> StorageResult<Vec<u8>>;
}
