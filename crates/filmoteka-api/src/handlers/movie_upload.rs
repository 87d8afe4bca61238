use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_movie_multipart;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use filmoteka_core::MovieResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Title already exists", body = ErrorResponse),
        (status = 415, description = "Unsupported media kind", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
        (status = 502, description = "Metadata service unavailable", body = ErrorResponse)
    )
)]
pub async fn upload_movie(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MovieResponse>), HttpAppError> {
    let (request, file) = extract_movie_multipart(multipart).await?;

    let response = state.catalog.create(request, file).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
