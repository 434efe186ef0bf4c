//! Router configuration for the HTTP API.
//!
//! Sets up the API routes, middleware (CORS, body limit, tracing) and the
//! optional static frontend.

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::Limits;

/// Headroom above the upload limit for base64 inflation and multipart framing.
fn body_limit(limits: &Limits) -> usize {
    limits.max_upload_bytes / 3 * 4 + 1024 * 1024
}

/// Create the application router.
///
/// When `static_dir` is given, its files are served for every non-API path,
/// with `index.html` as the fallback for client-side routes.
pub fn create_router(state: AppState, limits: &Limits, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/analyze", post(handlers::analyze_upload))
        .route("/analyze-base64", post(handlers::analyze_base64));

    let mut router = Router::new().nest("/api", api);

    if let Some(dir) = static_dir {
        let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(spa);
    }

    router
        .layer(DefaultBodyLimit::max(body_limit(limits)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
