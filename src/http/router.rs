//! Router configuration for the HTTP API.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
///
/// CORS is wide open: the API serves a browser dashboard that may be
/// hosted anywhere, carries no credentials, and is read-only.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/teams/{team}/schedule", get(handlers::get_schedule))
        .route("/games/{game_id}/metrics", get(handlers::get_game_metrics))
        .route("/games/{game_id}/shots", get(handlers::get_game_shots))
        .route("/games/{game_id}/flow", get(handlers::get_game_flow));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
