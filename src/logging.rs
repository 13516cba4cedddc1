//! # Structured Logging Module
//!
//! Environment-aware console logging on top of `tracing`. Output goes to stdout
//! so container log collectors pick it up unchanged.
//!
//! - `json` format: one JSON object per event, with fields flattened
//! - `pretty` format: human-readable, ANSI colors only when stdout is a terminal
//!
//! The filter comes from `logging.level`, then `RUST_LOG`, then a default derived
//! from the deployment environment (`STATUS_API_ENV` / `APP_ENV`).

use crate::config::{LogFormat, LoggingConfig};
use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process
///
/// Later calls are no-ops. If a global subscriber is already installed (tests,
/// embedding binaries), that subscriber is kept.
pub fn init_structured_logging(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = build_filter(config, &environment);

        let layer = match config.format {
            LogFormat::Json => fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_target(true)
                .with_filter(filter)
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(std::io::stdout().is_terminal())
                .with_filter(filter)
                .boxed(),
        };

        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
            return;
        }

        tracing::info!(
            environment = %environment,
            format = %config.format,
            "Structured logging initialized"
        );
    });
}

fn build_filter(config: &LoggingConfig, environment: &str) -> EnvFilter {
    if let Some(level) = config.level.as_deref() {
        if let Ok(filter) = EnvFilter::try_new(level) {
            return filter;
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(get_log_level(environment)))
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("STATUS_API_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get default log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        "test" => "warn",
        _ => "debug",
    }
}
