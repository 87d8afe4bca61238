//! TMDB search-by-title client.
//!
//! Policy: an empty `results` array is a successful lookup and yields the
//! neutral default metadata; a transport failure or non-2xx response is
//! `MetadataUnavailable` and propagates. "Searched, found nothing" and
//! "could not search" are never conflated.

use anyhow::{Context, Result};
use async_trait::async_trait;
use filmoteka_core::{AppError, MovieMetadata};
use serde::Deserialize;
use std::time::Duration;

/// Best-guess language/rating lookup for a movie title.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    async fn lookup(&self, title: &str) -> Result<MovieMetadata, AppError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    original_language: String,
    #[serde(default)]
    vote_average: f64,
}

/// TMDB HTTP client. Timeout policy lives here, at the collaborator, not in
/// the catalog.
pub struct TmdbClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client for TMDB")?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl MetadataLookup for TmdbClient {
    async fn lookup(&self, title: &str) -> Result<MovieMetadata, AppError> {
        let url = format!("{}/3/search/movie", self.base_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await
            .map_err(|e| AppError::MetadataUnavailable(format!("TMDB request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::MetadataUnavailable(format!(
                "TMDB returned status {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            AppError::MetadataUnavailable(format!("Failed to decode TMDB response: {}", e))
        })?;

        match body.results.into_iter().next() {
            Some(first) => {
                tracing::debug!(
                    title = %title,
                    language = %first.original_language,
                    vote_average = first.vote_average,
                    "TMDB match found"
                );
                Ok(MovieMetadata {
                    language_code: first.original_language,
                    average_rating: first.vote_average,
                })
            }
            None => {
                tracing::debug!(title = %title, "No TMDB match, using neutral metadata");
                Ok(MovieMetadata::neutral())
            }
        }
    }
}
