//! API Routes
//!
//! Configures the Axum router with all avatar service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{avatars_handler, health_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/avatars?accounts=...` - Avatars for one or more accounts
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// Other methods on these paths are answered with 405.
///
/// # Middleware
/// - CORS: Allows any origin (the marketplace front end is served elsewhere)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/avatars", get(avatars_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
