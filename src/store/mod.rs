//! # Status Store Module
//!
//! Read-only access to the task status records that an external producer
//! writes into Redis.
//!
//! ## Architecture
//!
//! ```text
//! Arc<dyn StatusStore>             <- shared by every request handler
//!   ├── RedisStatusStore           <- lazily connected ConnectionManager, HGETALL / PING
//!   └── InMemoryStatusStore        <- map-backed test double
//! ```
//!
//! ## Design Decisions
//!
//! - **Lazy connection**: building a provider never touches the network, so a
//!   store outage cannot block startup
//! - **Bounded calls**: callers wrap every store call in [`with_timeout`]; an
//!   elapsed bound becomes [`StoreError::Timeout`]
//! - **No writes**: the trait has no mutating operations

pub mod errors;
pub mod providers;
pub mod traits;

pub use errors::{StoreError, StoreResult};
pub use providers::{InMemoryStatusStore, RedisStatusStore};
pub use traits::{StatusStore, TaskStatusRecord};

use std::future::Future;
use std::time::Duration;

/// Run a store operation under a time bound
///
/// The operation is dropped when the bound elapses; no partial result is kept.
pub async fn with_timeout<T, F>(operation: &str, limit: Duration, future: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout(format!(
            "{operation} exceeded {}ms",
            limit.as_millis()
        ))),
    }
}
