//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers::AppState;
use super::handlers::{
    self,
};

/// Create the chat router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Browser chat page
        .route("/", get(handlers::index))
        // Chat endpoint
        .route("/chat", post(handlers::chat))
        // Health check
        .route("/health", get(handlers::health))
        .with_state(state)
}
