//! Multipart extraction for the movie upload endpoint.

use axum::extract::Multipart;
use filmoteka_core::{AppError, CreateMovieRequest};

use crate::services::UploadedFile;

/// Extract the `movie` JSON part and the `file` binary part from the upload
/// request. Exactly one of each is accepted.
pub async fn extract_movie_multipart(
    mut multipart: Multipart,
) -> Result<(CreateMovieRequest, UploadedFile), AppError> {
    let mut movie: Option<CreateMovieRequest> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationFailed(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "movie" => {
                if movie.is_some() {
                    return Err(AppError::ValidationFailed(
                        "Multiple movie parts are not allowed".to_string(),
                    ));
                }
                let data = field.bytes().await.map_err(|e| {
                    AppError::ValidationFailed(format!("Failed to read movie part: {}", e))
                })?;
                movie = Some(serde_json::from_slice(&data).map_err(|e| {
                    AppError::ValidationFailed(format!("Movie part is not valid JSON: {}", e))
                })?);
            }
            "file" => {
                if file.is_some() {
                    return Err(AppError::ValidationFailed(
                        "Multiple file parts are not allowed".to_string(),
                    ));
                }
                let original_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::ValidationFailed(format!("Failed to read file data: {}", e))
                })?;

                file = Some(UploadedFile {
                    data: data.to_vec(),
                    original_name,
                    content_type,
                });
            }
            _ => {}
        }
    }

    let movie =
        movie.ok_or_else(|| AppError::ValidationFailed("No movie part provided".to_string()))?;
    let file =
        file.ok_or_else(|| AppError::ValidationFailed("No file part provided".to_string()))?;

    Ok((movie, file))
}
