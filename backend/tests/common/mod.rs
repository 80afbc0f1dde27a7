//! Common test utilities for integration tests
//!
//! The router runs against the in-memory store; the AI gateway is
//! disabled unless a test supplies its own model.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitcoach_backend::{
    config::AppConfig,
    gateway::{CoachingModel, DisabledModel},
    routes,
    state::AppState,
    store::{MemoryStore, PreferenceStore},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub store: PreferenceStore,
}

impl TestApp {
    /// Fresh app with an empty store and no AI gateway
    pub async fn new() -> Self {
        Self::with_model(Arc::new(DisabledModel)).await
    }

    pub async fn with_model(model: Arc<dyn CoachingModel>) -> Self {
        let store = PreferenceStore::new(Arc::new(MemoryStore::new()));
        Self::build(test_config(), store, model).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let store = PreferenceStore::new(Arc::new(MemoryStore::new()));
        Self::build(config, store, Arc::new(DisabledModel)).await
    }

    /// Second app over the same store, as after a restart
    pub async fn restart(&self) -> Self {
        let config = (*self.state.config).clone();
        Self::build(config, self.store.clone(), Arc::clone(&self.state.model)).await
    }

    async fn build(
        config: AppConfig,
        store: PreferenceStore,
        model: Arc<dyn CoachingModel>,
    ) -> Self {
        let state = AppState::new(config, store.clone(), model).await;
        let app = routes::create_router(state.clone());
        Self { app, state, store }
    }

    async fn send(&self, method: &str, path: &str, body: Option<&str>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body)).await
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> (StatusCode, String) {
        self.send("POST", path, None).await
    }

    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("PUT", path, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("PATCH", path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        self.send("DELETE", path, None).await
    }
}

/// Parse a response body
pub fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON ({}): {}", e, body))
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: fitcoach_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        ..AppConfig::default()
    }
}
