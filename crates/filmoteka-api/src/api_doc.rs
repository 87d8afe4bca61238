//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use filmoteka_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filmoteka API",
        version = "0.1.0",
        description = "Movie catalog API: multipart upload with ranking classification, listing with sort-by-field, JSON merge-patch updates, and file download."
    ),
    paths(
        handlers::movie_upload::upload_movie,
        handlers::movie_list::list_movies,
        handlers::sort_fields::sort_fields,
        handlers::movie_update::update_movie,
        handlers::movie_download::download_movie,
        handlers::health::health,
    ),
    components(schemas(
        models::movie::CreateMovieRequest,
        models::movie::MovieResponse,
        models::movie::MovieSummary,
        models::movie::MovieDocument,
        error::ErrorResponse,
    )),
    tags(
        (name = "movies", description = "Movie catalog operations"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
