//! # Service Bootstrap
//!
//! Startup sequence for the status service:
//!
//! 1. build the store client (no network traffic)
//! 2. probe the store once under the probe timeout; a failure is logged and
//!    the service starts degraded
//! 3. bind the listener and serve until asked to stop
//!
//! The returned [`ServiceHandle`] owns the running server.

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::store::{self, RedisStatusStore, StatusStore};
use crate::web::{self, state::AppState, state::StartupProbe};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Handle to a running status service
#[derive(Debug)]
pub struct ServiceHandle {
    /// Address the listener actually bound (resolves port 0)
    pub local_addr: SocketAddr,
    /// What the startup probe found
    pub startup_probe: StartupProbe,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server: JoinHandle<ServiceResult<()>>,
}

impl ServiceHandle {
    /// Serve until `signal` completes, then drain in-flight requests and return
    ///
    /// Returns early with the server's error if serving fails on its own.
    pub async fn run_until<F>(mut self, signal: F) -> ServiceResult<()>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = &mut self.server => return flatten_join(result),
            _ = signal => {}
        }

        self.stop().await
    }

    /// Stop accepting connections and wait for in-flight requests to finish
    pub async fn stop(mut self) -> ServiceResult<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            // The server may already have exited; nothing to signal then
            let _ = tx.send(());
        }
        flatten_join(self.server.await)
    }
}

fn flatten_join(
    result: Result<ServiceResult<()>, tokio::task::JoinError>,
) -> ServiceResult<()> {
    result.map_err(|e| ServiceError::Server(format!("Server task failed: {e}")))?
}

pub struct ServiceBootstrap;

impl ServiceBootstrap {
    /// Bootstrap against the Redis store named in `config.store`
    ///
    /// Fails only if the store address cannot be parsed or the listener cannot bind.
    pub async fn bootstrap(config: ServiceConfig) -> ServiceResult<ServiceHandle> {
        let store = RedisStatusStore::from_config(&config.store)?;
        info!(
            store_url = %store.redacted_url(),
            "Status store client created"
        );
        Self::bootstrap_with_store(config, Arc::new(store)).await
    }

    /// Bootstrap against an already constructed store
    pub async fn bootstrap_with_store(
        config: ServiceConfig,
        store: Arc<dyn StatusStore>,
    ) -> ServiceResult<ServiceHandle> {
        let startup_probe = probe_store(store.as_ref(), config.store.probe_timeout()).await;

        let bind_address = config.server.bind_address();
        let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
            ServiceError::Server(format!("Failed to bind {bind_address}: {e}"))
        })?;
        let local_addr = listener.local_addr()?;

        let app = web::create_app(AppState::new(config, store, startup_probe));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .map_err(|e| {
                    error!(error = %e, "HTTP server failed");
                    ServiceError::Server(e.to_string())
                })
        });

        info!(
            address = %local_addr,
            startup_probe = %startup_probe,
            "Status server listening"
        );

        Ok(ServiceHandle {
            local_addr,
            startup_probe,
            shutdown_tx: Some(shutdown_tx),
            server,
        })
    }
}

/// One bounded liveness probe; failure is logged and reported as degraded
pub async fn probe_store(store: &dyn StatusStore, timeout: Duration) -> StartupProbe {
    match store::with_timeout("PING", timeout, store.health_check()).await {
        Ok(()) => {
            info!(provider = store.provider_name(), "Status store reachable");
            StartupProbe::Healthy
        }
        Err(e) => {
            error!(
                provider = store.provider_name(),
                error = %e,
                "Could not connect to status store; serving in degraded mode"
            );
            StartupProbe::Degraded
        }
    }
}
