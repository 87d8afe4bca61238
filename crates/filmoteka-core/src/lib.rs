//! Filmoteka Core Library
//!
//! This crate provides the domain models, ranking classifier, validation,
//! merge-patch application, error types, and configuration shared across all
//! Filmoteka components.

pub mod config;
pub mod error;
pub mod models;
pub mod patch;
pub mod ranking;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    CreateMovieRequest, MovieDocument, MovieMetadata, MovieRecord, MovieResponse, MovieSortField,
    MovieSummary, NewMovieRecord,
};
pub use patch::apply_merge_patch;
