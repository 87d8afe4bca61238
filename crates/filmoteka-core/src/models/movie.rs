//! Movie record and its public projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted movie record. The id is assigned by the store on creation and
/// never changes afterwards; every other field can be rewritten through the
/// merge-patch update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub production_year: i32,
    pub ranking: i32,
    pub size_in_bytes: i64,
    pub storage_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully assembled record waiting for an identity from the store.
#[derive(Debug, Clone)]
pub struct NewMovieRecord {
    pub title: String,
    pub director: String,
    pub production_year: i32,
    pub ranking: i32,
    pub size_in_bytes: i64,
    pub storage_path: String,
}

/// JSON part of the multipart upload request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    pub title: String,
    pub director: String,
    pub production_year: i32,
}

/// Creation response: echoes the write model, without ranking/size/path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    pub title: String,
    pub director: String,
    pub production_year: i32,
}

impl From<&MovieRecord> for MovieResponse {
    fn from(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            director: record.director.clone(),
            production_year: record.production_year,
        }
    }
}

/// Listing projection: the read model exposed by `GET /movies`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieSummary {
    pub title: String,
    pub director: String,
    pub production_year: i32,
    pub ranking: i32,
    pub size_in_bytes: i64,
}

impl From<&MovieRecord> for MovieSummary {
    fn from(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            director: record.director.clone(),
            production_year: record.production_year,
            ranking: record.ranking,
            size_in_bytes: record.size_in_bytes,
        }
    }
}

/// Sortable fields for the listing endpoint. Unknown or absent parameters
/// fall back to `Id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieSortField {
    Id,
    Ranking,
    FilmSize,
}

impl MovieSortField {
    /// Parse the query parameter value, defaulting to sort-by-id.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("ranking") => MovieSortField::Ranking,
            Some("film_size") => MovieSortField::FilmSize,
            _ => MovieSortField::Id,
        }
    }

    /// Column the persistence store orders by.
    pub fn column(&self) -> &'static str {
        match self {
            MovieSortField::Id => "id",
            MovieSortField::Ranking => "ranking",
            MovieSortField::FilmSize => "size_in_bytes",
        }
    }

    /// Parameter names advertised by the sort-fields endpoint.
    pub fn api_names() -> Vec<&'static str> {
        vec!["ranking", "film_size"]
    }
}

/// Structural document form of a record used by the merge-patch update path.
/// The record id is deliberately absent: identity is immutable.
///
/// Every field defaults when missing so that a patch clearing a field with an
/// explicit `null` resets it. No business re-validation happens on patch
/// application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MovieDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub production_year: i32,
    #[serde(default)]
    pub ranking: i32,
    #[serde(default)]
    pub size_in_bytes: i64,
    #[serde(default)]
    pub storage_path: String,
}

impl From<&MovieRecord> for MovieDocument {
    fn from(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            director: record.director.clone(),
            production_year: record.production_year,
            ranking: record.ranking,
            size_in_bytes: record.size_in_bytes,
            storage_path: record.storage_path.clone(),
        }
    }
}

impl MovieDocument {
    /// Rebuild a record from this document, keeping the original identity and
    /// creation timestamp.
    pub fn into_record(self, original: &MovieRecord) -> MovieRecord {
        MovieRecord {
            id: original.id,
            title: self.title,
            director: self.director,
            production_year: self.production_year,
            ranking: self.ranking,
            size_in_bytes: self.size_in_bytes,
            storage_path: self.storage_path,
            created_at: original.created_at,
            updated_at: Utc::now(),
        }
    }
}
