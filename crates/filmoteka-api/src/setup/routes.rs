//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::Method,
    routing::{get, patch, post},
    Json, Router,
};
use filmoteka_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/movies", post(handlers::movie_upload::upload_movie))
        .route("/movies", get(handlers::movie_list::list_movies))
        .route(
            "/movies/sort_fields",
            get(handlers::sort_fields::sort_fields),
        )
        .route(
            "/movies/{title}",
            patch(handlers::movie_update::update_movie),
        )
        .route(
            "/movies/{title}/download",
            get(handlers::movie_download::download_movie),
        )
        .route("/health", get(handlers::health::health))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(axum::extract::DefaultBodyLimit::max(
            config.max_upload_size_bytes(),
        ))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
