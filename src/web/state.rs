//! # Web API Application State
//!
//! Read-only state shared by every request handler: configuration, the status
//! store handle, and what the startup probe found.

use crate::config::ServiceConfig;
use crate::store::StatusStore;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of the store probe run before the listener opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupProbe {
    /// Store answered the probe
    Healthy,
    /// Probe failed; the service started anyway and surfaces store errors per request
    Degraded,
}

impl fmt::Display for StartupProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Degraded => write!(f, "degraded"),
        }
    }
}

/// Shared application state for the web API
///
/// Cloned per request by axum; every field is behind an `Arc` or `Copy`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub store: Arc<dyn StatusStore>,
    pub startup_probe: StartupProbe,
}

impl AppState {
    pub fn new(
        config: ServiceConfig,
        store: Arc<dyn StatusStore>,
        startup_probe: StartupProbe,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            startup_probe,
        }
    }

    /// Bound on a single status fetch
    pub fn fetch_timeout(&self) -> Duration {
        self.config.store.fetch_timeout()
    }

    /// Bound on a store liveness probe
    pub fn probe_timeout(&self) -> Duration {
        self.config.store.probe_timeout()
    }
}
