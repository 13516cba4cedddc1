//! # Health Check Handlers
//!
//! Liveness and readiness endpoints for load balancers and orchestrators.
//! Liveness never touches the store, so a store outage does not get the
//! process restarted; readiness reports whether status lookups can succeed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, warn};

use crate::store;
use crate::web::state::AppState;

/// Basic health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Result of one dependency check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: Option<String>,
    pub duration_ms: u64,
}

/// Readiness response with per-dependency checks
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: String,
    pub store_provider: String,
    pub startup_probe: String,
    pub checks: BTreeMap<String, HealthCheck>,
}

/// Liveness probe: GET /health
///
/// Returns 200 while the process can serve HTTP at all.
pub async fn basic_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Readiness probe: GET /health/ready
///
/// Pings the store under the probe timeout. 200 when it answers, 503 otherwise.
pub async fn readiness_probe(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    debug!("Performing readiness probe");

    let store_check = check_store_health(&state).await;
    let ready = store_check.status == "healthy";

    let mut checks = BTreeMap::new();
    checks.insert("store".to_string(), store_check);

    let response = ReadinessResponse {
        status: if ready { "ready" } else { "not_ready" }.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        store_provider: state.store.provider_name().to_string(),
        startup_probe: state.startup_probe.to_string(),
        checks,
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

async fn check_store_health(state: &AppState) -> HealthCheck {
    let start = Instant::now();
    let result = store::with_timeout(
        "PING",
        state.probe_timeout(),
        state.store.health_check(),
    )
    .await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthCheck {
            status: "healthy".to_string(),
            message: None,
            duration_ms,
        },
        Err(e) => {
            warn!(provider = state.store.provider_name(), error = %e, "Store readiness check failed");
            HealthCheck {
                status: "unhealthy".to_string(),
                message: Some(e.to_string()),
                duration_ms,
            }
        }
    }
}
