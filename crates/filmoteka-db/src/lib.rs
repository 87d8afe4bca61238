//! Filmoteka Database Library
//!
//! Persistence for movie records: the `MovieStore` trait the catalog works
//! against and its Postgres implementation.

pub mod postgres;
pub mod store;

pub use postgres::PostgresMovieStore;
pub use store::MovieStore;
