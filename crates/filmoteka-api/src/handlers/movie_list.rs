use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use filmoteka_core::{MovieSortField, MovieSummary};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    sort: Option<String>,
}

#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    params(
        ("sort" = Option<String>, Query, description = "Sort field: 'id' (default), 'ranking', or 'film_size'")
    ),
    responses(
        (status = 200, description = "All movies, ascending by the sort field", body = [MovieSummary]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MovieSummary>>, HttpAppError> {
    let sort = MovieSortField::from_param(query.sort.as_deref());

    let movies = state.catalog.list(sort).await?;

    Ok(Json(movies))
}
