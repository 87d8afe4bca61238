use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use filmoteka_core::AppError;
use std::sync::Arc;

/// Merge-patch update. The body is read raw so clients may send either
/// `application/json` or `application/merge-patch+json`.
#[utoipa::path(
    patch,
    path = "/movies/{title}",
    tag = "movies",
    params(
        ("title" = String, Path, description = "Exact title of the movie to update")
    ),
    request_body(content = inline(Object), content_type = "application/merge-patch+json"),
    responses(
        (status = 204, description = "Movie updated"),
        (status = 400, description = "Invalid patch document", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    body: Bytes,
) -> Result<StatusCode, HttpAppError> {
    let patch: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidPatch(format!("Body is not valid JSON: {}", e)))?;

    state.catalog.update(&title, &patch).await?;

    Ok(StatusCode::NO_CONTENT)
}
