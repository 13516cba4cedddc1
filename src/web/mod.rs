//! # Web API Module
//!
//! Axum-based HTTP surface of the status service.
//!
//! ## Core Components
//!
//! - [`routes`] - route table
//! - [`handlers`] - status lookup and health probe handlers
//! - [`response`] - the JSON response envelope
//! - [`state`] - shared, read-only application state

pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

/// Create the Axum application with all routes and middleware
///
/// Each request is served on its own tokio task; handlers share only `app_state`.
/// Handlers log their own failures, so the trace layer reports 5xx responses at
/// `debug` only.
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::status_routes())
        .merge(routes::health_routes())
        .layer(TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::DEBUG)))
        .with_state(app_state)
}
