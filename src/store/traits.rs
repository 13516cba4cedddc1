//! Status store trait definition

use super::errors::StoreResult;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// A task status record: field name to field value, exactly as the producer wrote it.
///
/// An absent record is represented by an empty map.
pub type TaskStatusRecord = BTreeMap<String, String>;

/// Read-only access to externally owned task status records
///
/// Implemented by concrete providers (Redis, in-memory). Shared across request
/// handlers as `Arc<dyn StatusStore>`, so implementations must be cheap to call
/// concurrently.
#[async_trait]
pub trait StatusStore: Send + Sync + std::fmt::Debug {
    /// Fetch every field of the record stored under `task_id`
    ///
    /// Returns an empty record when the key does not exist.
    async fn fetch_status(&self, task_id: &str) -> StoreResult<TaskStatusRecord>;

    /// Liveness probe against the backend
    async fn health_check(&self) -> StoreResult<()>;

    /// Get the name of the store provider
    fn provider_name(&self) -> &'static str;
}
