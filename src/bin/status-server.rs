//! # Task Status Server
//!
//! Standalone binary serving `GET /redis-status/{task_id}`.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: port 9900, Redis at localhost:6379
//! cargo run --bin status-server
//!
//! # Explicit port and Redis address
//! cargo run --bin status-server -- --port 8080 --redis-addr redis.internal:6379
//!
//! # Settings from a file, overridden by environment
//! STATUS_API_STORE__FETCH_TIMEOUT_MS=2000 cargo run --bin status-server -- --config status-api.toml
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};

use task_status_api::bootstrap::ServiceBootstrap;
use task_status_api::config::{ConfigOverrides, LogFormat, ServiceConfig};
use task_status_api::logging;

#[derive(Parser, Debug)]
#[command(name = "status-server")]
#[command(about = "Serve task status records from Redis over HTTP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// API server port
    #[arg(long)]
    port: Option<u16>,

    /// Redis server address (host:port or redis:// URL)
    #[arg(long = "redis-addr", alias = "redisAddr")]
    redis_addr: Option<String>,

    /// Interface to listen on
    #[arg(long)]
    host: Option<String>,

    /// Log output format (json, pretty)
    #[arg(long = "log-format")]
    log_format: Option<LogFormat>,

    /// Optional TOML configuration file
    #[arg(short, long, env = "STATUS_API_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        ServiceConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    ConfigOverrides {
        host: cli.host,
        port: cli.port,
        store_address: cli.redis_addr,
        log_format: cli.log_format,
    }
    .apply(&mut config);
    config.validate().context("Invalid configuration")?;

    logging::init_structured_logging(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.server.port,
        store_address = %config.store.address,
        "Starting task status server"
    );

    let handle = ServiceBootstrap::bootstrap(config)
        .await
        .context("Failed to start status server")?;

    if let Err(e) = handle.run_until(shutdown_signal()).await {
        error!(error = %e, "Status server stopped with an error");
        return Err(e.into());
    }

    info!("Status server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
