pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::email::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-email", post(handlers::handle_generate_email))
        .route("/api/v1/keywords", post(handlers::handle_preview_keywords))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
