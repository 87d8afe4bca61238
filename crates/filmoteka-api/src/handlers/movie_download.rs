use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/movies/{title}/download",
    tag = "movies",
    params(
        ("title" = String, Path, description = "Exact title of the movie to download")
    ),
    responses(
        (status = 200, description = "Movie file bytes", content_type = "application/octet-stream"),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "File missing on disk or storage failure", body = ErrorResponse)
    )
)]
pub async fn download_movie(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let (filename, data) = state.catalog.download(&title).await?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "application/octet-stream".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, data))
}
