//! Domain models

pub mod metadata;
pub mod movie;

pub use metadata::{MovieMetadata, UNKNOWN_LANGUAGE};
pub use movie::{
    CreateMovieRequest, MovieDocument, MovieRecord, MovieResponse, MovieSortField, MovieSummary,
    NewMovieRecord,
};
