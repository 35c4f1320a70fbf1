//! Common test utilities and helpers

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use feedback_monitor_core::{
    api::{server::build_router, AppState},
    FeedbackStore, ResponseLogger,
};
use tempfile::TempDir;
use tower::ServiceExt;

/// Feedback store in a fresh temporary directory
pub fn create_test_store() -> (TempDir, FeedbackStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FeedbackStore::open(dir.path().join("feedback_data.json"));
    (dir, store)
}

/// Router over a fresh temporary store
pub fn create_test_app() -> (TempDir, Router) {
    let (dir, store) = create_test_store();
    let router = build_router(AppState::new(store, ResponseLogger::default()));
    (dir, router)
}

/// Send one request through the router and decode the JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router call failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, value)
}
