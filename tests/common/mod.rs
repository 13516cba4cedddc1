//! Shared test infrastructure: a real status server on an ephemeral port backed
//! by an in-memory store, plus a small HTTP client for it.

#![allow(dead_code)]

use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use task_status_api::bootstrap::{ServiceBootstrap, ServiceHandle};
use task_status_api::config::ServiceConfig;
use task_status_api::store::InMemoryStatusStore;
use task_status_api::ServiceResult;

pub const TASK_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Running server plus a handle on the store behind it
pub struct TestServer {
    pub store: InMemoryStatusStore,
    handle: ServiceHandle,
}

impl TestServer {
    /// Start with default settings on 127.0.0.1, any free port
    pub async fn start() -> ServiceResult<Self> {
        Self::start_with(InMemoryStatusStore::new(), test_config()).await
    }

    /// Start with a prepared store (e.g. one that fails the startup probe)
    pub async fn start_with(store: InMemoryStatusStore, config: ServiceConfig) -> ServiceResult<Self> {
        let handle = ServiceBootstrap::bootstrap_with_store(config, Arc::new(store.clone())).await?;
        Ok(Self { store, handle })
    }

    pub fn addr(&self) -> SocketAddr {
        self.handle.local_addr
    }

    pub fn handle(&self) -> &ServiceHandle {
        &self.handle
    }

    pub async fn shutdown(self) -> ServiceResult<()> {
        self.handle.stop().await
    }
}

pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config
}

pub struct WebTestClient {
    base_url: String,
    client: reqwest::Client,
}

impl WebTestClient {
    pub fn for_server(server: &TestServer) -> Self {
        Self {
            base_url: format!("http://{}", server.addr()),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
    }
}

/// Assert status code and JSON content type, return the parsed body
pub async fn assert_json_response(response: Response, expected: StatusCode) -> Value {
    assert_eq!(response.status(), expected);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type: {content_type}"
    );

    let text = response.text().await.expect("Failed to read body");
    assert!(text.ends_with('\n'), "body should end with a newline");
    serde_json::from_str(&text).expect("Failed to parse JSON body")
}
