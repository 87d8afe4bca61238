//! Application setup and initialization
//!
//! All startup wiring lives here: tracing, database pool and migrations,
//! file store, metadata client, catalog, and routes.

pub mod database;
pub mod routes;
pub mod server;

use crate::services::MovieCatalog;
use crate::state::AppState;
use anyhow::{Context, Result};
use filmoteka_core::Config;
use filmoteka_db::PostgresMovieStore;
use filmoteka_storage::LocalFileStore;
use filmoteka_tmdb::TmdbClient;
use std::sync::Arc;
use std::time::Duration;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_tracing();

    tracing::info!("Configuration loaded");

    let pool = database::setup_database(&config).await?;

    let files = LocalFileStore::new(config.storage_path())
        .await
        .with_context(|| format!("Failed to initialize storage at {}", config.storage_path()))?;

    let metadata = TmdbClient::new(
        config.tmdb_base_url(),
        config.tmdb_api_key(),
        Duration::from_secs(config.metadata_timeout_seconds()),
    )?;

    let catalog = MovieCatalog::new(
        Arc::new(PostgresMovieStore::new(pool)),
        Arc::new(files),
        Arc::new(metadata),
    );

    let state = Arc::new(AppState {
        catalog,
        config: config.clone(),
    });

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
