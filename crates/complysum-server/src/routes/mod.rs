//! HTTP route handlers — matches the original Express API surface.

pub mod documents;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Uploads are capped at 10 MB, like the original multer configuration.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/documents", documents::routes())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
