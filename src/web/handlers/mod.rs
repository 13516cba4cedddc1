//! # Web API Handlers
//!
//! - [`status`] - task status lookup
//! - [`health`] - liveness and readiness probes

pub mod health;
pub mod status;
