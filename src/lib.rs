#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Task Status API
//!
//! Read-only HTTP facade over task status records kept in Redis.
//!
//! Some other system runs tasks and writes each task's progress into a Redis
//! hash keyed by the task's UUID. This crate serves those hashes back over HTTP:
//!
//! ```text
//! GET /redis-status/3fa85f64-5717-4562-b3fc-2c963f66afa6
//!
//! {"message":"Successful","status":200,"data":{"progress":"100","state":"done"},"error":null}
//! ```
//!
//! It never writes to the store, and it never creates or expires records.
//!
//! ## Module Organization
//!
//! - [`config`] - layered configuration (defaults, TOML file, environment, CLI)
//! - [`logging`] - structured `tracing` setup
//! - [`validation`] - task id validation
//! - [`store`] - status store trait with Redis and in-memory providers
//! - [`web`] - axum router, handlers and the response envelope
//! - [`bootstrap`] - startup probe, listener and graceful shutdown
//! - [`error`] - process-level errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use task_status_api::bootstrap::ServiceBootstrap;
//! use task_status_api::config::ServiceConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServiceConfig::load(None)?;
//! config.validate()?;
//!
//! let handle = ServiceBootstrap::bootstrap(config).await?;
//! handle.run_until(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod validation;
pub mod web;

pub use error::{ServiceError, ServiceResult};
