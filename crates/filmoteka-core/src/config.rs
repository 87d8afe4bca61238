//! Configuration module
//!
//! Environment-driven configuration with defaults suitable for local
//! development. Loaded once at startup; components receive the values they
//! need through explicit constructor parameters.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STORAGE_PATH: &str = "./storage/movies";
const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org";
const DEFAULT_METADATA_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 2048;

#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    database_url: String,
    db_max_connections: u32,
    db_timeout_seconds: u64,
    storage_path: String,
    tmdb_base_url: String,
    tmdb_api_key: String,
    metadata_timeout_seconds: u64,
    max_upload_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;
        let tmdb_api_key = env::var("TMDB_API_KEY")
            .map_err(|_| anyhow::anyhow!("TMDB_API_KEY environment variable is required"))?;

        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
        let db_timeout_seconds = env::var("DB_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DB_TIMEOUT_SECS);
        let storage_path =
            env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());
        let tmdb_base_url =
            env::var("TMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_TMDB_BASE_URL.to_string());
        let metadata_timeout_seconds = env::var("METADATA_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_METADATA_TIMEOUT_SECS);
        let max_upload_size_bytes = env::var("MAX_UPLOAD_SIZE_MB")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB)
            * 1024
            * 1024;

        Ok(Config {
            server_port,
            database_url,
            db_max_connections,
            db_timeout_seconds,
            storage_path,
            tmdb_base_url,
            tmdb_api_key,
            metadata_timeout_seconds,
            max_upload_size_bytes,
        })
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn storage_path(&self) -> &str {
        &self.storage_path
    }

    pub fn tmdb_base_url(&self) -> &str {
        &self.tmdb_base_url
    }

    pub fn tmdb_api_key(&self) -> &str {
        &self.tmdb_api_key
    }

    pub fn metadata_timeout_seconds(&self) -> u64 {
        self.metadata_timeout_seconds
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_bytes
    }
}
