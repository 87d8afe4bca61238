//! Movie store trait.
//!
//! The catalog issues one read-modify-write sequence per update and does not
//! implement concurrency control itself; locking and transaction semantics
//! are delegated to the implementation behind this trait.

use async_trait::async_trait;
use filmoteka_core::{AppError, MovieRecord, MovieSortField, NewMovieRecord};

#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Look up a record by its exact, case-sensitive title.
    async fn find_by_title(&self, title: &str) -> Result<Option<MovieRecord>, AppError>;

    /// Persist a new record and return it with its assigned identity.
    async fn insert(&self, movie: NewMovieRecord) -> Result<MovieRecord, AppError>;

    /// Replace an existing record by identity (last write wins).
    async fn update(&self, movie: &MovieRecord) -> Result<MovieRecord, AppError>;

    /// All records, sorted ascending by the given field.
    async fn find_all(&self, sort: MovieSortField) -> Result<Vec<MovieRecord>, AppError>;
}
