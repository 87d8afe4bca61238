//! Filmoteka Storage Library
//!
//! File-acceptance and on-disk persistence for uploaded movie files.
//!
//! # Storage key format
//!
//! Every upload gets the key `{uuid}-{sanitized original filename}` under the
//! configured root directory, so two uploads with identical original names
//! never collide. Keys must not contain `..` or a leading `/`. Key generation
//! is centralized in the `keys` module.

pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalFileStore;
pub use traits::{FileStore, StorageError, StorageResult, StoredFile};
