//! # Web API Route Definitions

use crate::web::handlers;
use crate::web::state::AppState;
use axum::routing::get;
use axum::Router;

/// Task status lookup route
///
/// - `/redis-status/{task_id}` - status record for one task
pub fn status_routes() -> Router<AppState> {
    Router::new().route(
        "/redis-status/{task_id}",
        get(handlers::status::get_task_status),
    )
}

/// Create health routes
///
/// - `/health` - liveness, never touches the store
/// - `/health/ready` - readiness, pings the store
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::basic_health))
        .route("/health/ready", get(handlers::health::readiness_probe))
}
