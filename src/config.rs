//! # Service Configuration
//!
//! Layered configuration for the status service. Sources, lowest precedence first:
//!
//! 1. built-in defaults ([`ServiceConfig::default`])
//! 2. an optional TOML file
//! 3. `STATUS_API_` environment variables, `__` between nested keys
//!    (`STATUS_API_SERVER__PORT=9911`, `STATUS_API_STORE__ADDRESS=redis:6379`)
//! 4. command-line overrides ([`ConfigOverrides`])
//!
//! The configured store address is the only address the service connects to.

use crate::error::{ServiceError, ServiceResult};
use redis::IntoConnectionInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "STATUS_API";

pub const DEFAULT_PORT: u16 = 9900;
pub const DEFAULT_STORE_ADDRESS: &str = "localhost:6379";
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Status store connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// `host:port`, or a full `redis://` / `rediss://` URL
    pub address: String,
    /// Bound on the startup and readiness `PING`
    pub probe_timeout_ms: u64,
    /// Bound on each per-request `HGETALL`
    pub fetch_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_STORE_ADDRESS.to_string(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Connection URL for the store; bare `host:port` gets a `redis://` scheme
    pub fn connection_url(&self) -> String {
        let address = self.address.trim();
        if address.contains("://") {
            address.to_string()
        } else {
            format!("redis://{address}")
        }
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line on stdout
    #[default]
    Json,
    /// Human-readable, colored when stdout is a terminal
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(ServiceError::Configuration(format!(
                "Unknown log format '{other}' (expected 'json' or 'pretty')"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive; falls back to `RUST_LOG`, then the environment default
    pub level: Option<String>,
}

/// Values supplied on the command line; `None` leaves the loaded value alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub store_address: Option<String>,
    pub log_format: Option<LogFormat>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut ServiceConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(address) = self.store_address {
            config.store.address = address;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}

impl ServiceConfig {
    /// Load defaults, `config_file` (if given) and `STATUS_API_*` environment variables
    pub fn load(config_file: Option<&Path>) -> ServiceResult<Self> {
        Self::load_with_environment(config_file, config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Same as [`ServiceConfig::load`] with a caller-supplied environment source
    pub fn load_with_environment(
        config_file: Option<&Path>,
        environment: config::Environment,
    ) -> ServiceResult<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                environment
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> ServiceResult<()> {
        if self.server.port == 0 {
            return Err(ServiceError::Configuration(
                "server.port must be between 1 and 65535".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(ServiceError::Configuration(
                "server.host cannot be empty".to_string(),
            ));
        }
        if self.store.address.trim().is_empty() {
            return Err(ServiceError::Configuration(
                "store.address cannot be empty".to_string(),
            ));
        }
        if self.store.probe_timeout_ms == 0 || self.store.fetch_timeout_ms == 0 {
            return Err(ServiceError::Configuration(
                "store timeouts must be greater than zero".to_string(),
            ));
        }

        self.store
            .connection_url()
            .as_str()
            .into_connection_info()
            .map_err(|e| {
                ServiceError::Configuration(format!(
                    "store.address '{}' is not a valid Redis address: {e}",
                    self.store.address
                ))
            })?;

        Ok(())
    }
}
