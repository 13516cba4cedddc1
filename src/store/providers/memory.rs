//! In-memory status store provider
//!
//! Holds records in a process-local map. This is the store double for tests and
//! is never selected by the server binary: it counts every call and can be told
//! to fail or to stall, which is how outages and slow stores are simulated.

use crate::store::errors::{StoreError, StoreResult};
use crate::store::traits::{StatusStore, TaskStatusRecord};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
struct Inner {
    records: RwLock<HashMap<String, TaskStatusRecord>>,
    failure: RwLock<Option<StoreError>>,
    latency: RwLock<Option<Duration>>,
    fetch_calls: AtomicUsize,
    health_calls: AtomicUsize,
}

/// Map-backed status store
///
/// Clones share state, so a test can keep one handle while the server holds another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusStore {
    inner: Arc<Inner>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) the record for `task_id`
    pub fn insert<I, K, V>(&self, task_id: impl Into<String>, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let record = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.inner.records.write().insert(task_id.into(), record);
    }

    /// Drop the record for `task_id`, as an expiry would
    pub fn remove(&self, task_id: &str) {
        self.inner.records.write().remove(task_id);
    }

    /// Make every subsequent call fail with `error` until cleared
    pub fn fail_with(&self, error: StoreError) {
        *self.inner.failure.write() = Some(error);
    }

    /// Stop failing calls
    pub fn recover(&self) {
        *self.inner.failure.write() = None;
    }

    /// Delay every subsequent call by `latency`
    pub fn set_latency(&self, latency: Duration) {
        *self.inner.latency.write() = Some(latency);
    }

    /// Number of `fetch_status` calls received so far
    pub fn fetch_count(&self) -> usize {
        self.inner.fetch_calls.load(Ordering::SeqCst)
    }

    /// Number of `health_check` calls received so far
    pub fn health_check_count(&self) -> usize {
        self.inner.health_calls.load(Ordering::SeqCst)
    }

    async fn simulate(&self) -> StoreResult<()> {
        let latency = *self.inner.latency.read();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        match self.inner.failure.read().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn fetch_status(&self, task_id: &str) -> StoreResult<TaskStatusRecord> {
        self.inner.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate().await?;

        Ok(self
            .inner
            .records
            .read()
            .get(task_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.inner.health_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate().await
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
