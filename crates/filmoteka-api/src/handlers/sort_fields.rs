use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/movies/sort_fields",
    tag = "movies",
    responses(
        (status = 200, description = "Sortable field names beyond the default", body = [String])
    )
)]
pub async fn sort_fields(State(state): State<Arc<AppState>>) -> Json<Vec<&'static str>> {
    Json(state.catalog.sort_fields())
}
