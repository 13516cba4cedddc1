//! Service-level error types
//!
//! Per-request failures never reach this type; they are turned into response
//! envelopes by the web layer. These are the errors that can stop the process.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<config::ConfigError> for ServiceError {
    fn from(error: config::ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(error: std::io::Error) -> Self {
        Self::Server(error.to_string())
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
