//! Filmoteka TMDB Library
//!
//! Title-search client for The Movie Database. The catalog depends on the
//! `MetadataLookup` trait; `TmdbClient` is the production implementation.

pub mod client;

pub use client::{MetadataLookup, TmdbClient};
