//! Postgres-backed movie store.

use async_trait::async_trait;
use chrono::Utc;
use filmoteka_core::{AppError, MovieRecord, MovieSortField, NewMovieRecord};
use sqlx::{PgPool, Postgres};

use crate::store::MovieStore;

#[derive(Clone)]
pub struct PostgresMovieStore {
    pool: PgPool,
}

impl PostgresMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PostgresMovieStore {
    #[tracing::instrument(skip(self), fields(db.table = "movies", db.operation = "select"))]
    async fn find_by_title(&self, title: &str) -> Result<Option<MovieRecord>, AppError> {
        let row: Option<MovieRecord> = sqlx::query_as::<Postgres, MovieRecord>(
            "SELECT * FROM movies WHERE title = $1",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self, movie), fields(db.table = "movies", db.operation = "insert"))]
    async fn insert(&self, movie: NewMovieRecord) -> Result<MovieRecord, AppError> {
        let now = Utc::now();

        let row: MovieRecord = sqlx::query_as::<Postgres, MovieRecord>(
            r#"
            INSERT INTO movies (
                title, director, production_year, ranking,
                size_in_bytes, storage_path, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.production_year)
        .bind(movie.ranking)
        .bind(movie.size_in_bytes)
        .bind(&movie.storage_path)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self, movie), fields(db.table = "movies", db.operation = "update"))]
    async fn update(&self, movie: &MovieRecord) -> Result<MovieRecord, AppError> {
        let row: MovieRecord = sqlx::query_as::<Postgres, MovieRecord>(
            r#"
            UPDATE movies
            SET title = $1, director = $2, production_year = $3, ranking = $4,
                size_in_bytes = $5, storage_path = $6, updated_at = $7
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.director)
        .bind(movie.production_year)
        .bind(movie.ranking)
        .bind(movie.size_in_bytes)
        .bind(&movie.storage_path)
        .bind(movie.updated_at)
        .bind(movie.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "movies", db.operation = "select"))]
    async fn find_all(&self, sort: MovieSortField) -> Result<Vec<MovieRecord>, AppError> {
        // Column names come from the enum, never from user input
        let query = format!("SELECT * FROM movies ORDER BY {} ASC", sort.column());

        let rows: Vec<MovieRecord> = sqlx::query_as::<Postgres, MovieRecord>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
