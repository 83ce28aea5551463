// Presentation layer - HTTP routing and JSON payloads
pub mod app_state;
pub mod handlers;
pub mod responses;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{average, health_check, history, live};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with every route and layer the service exposes
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/data/live", get(live))
        .route("/data/average/:days", get(average))
        .route("/data/history/:days", get(history))
        .layer(TraceLayer::new_for_http())
        // Mirrors origin, methods and headers so credentials can be allowed
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
