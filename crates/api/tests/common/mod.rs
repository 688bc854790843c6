//! Common test utilities for integration tests.
//!
//! The stores are in-memory, so every test builds a fresh app and drives it
//! through `tower::ServiceExt::oneshot`; no external fixtures are needed.

// Allow dead code in this module - these are helper utilities that may not be
// used by all integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use serde_json::Value;

use config_tracker_api::app::create_app;
use config_tracker_api::config::Config;
use domain::services::RecordingNotifier;

/// A freshly built app plus a handle on its recording notifier.
pub struct TestApp {
    pub router: Router,
    pub notifier: Arc<RecordingNotifier>,
}

/// Build a test app with default configuration and empty stores.
pub fn create_test_app() -> TestApp {
    create_test_app_with_config(test_config())
}

/// Build a test app with a custom configuration.
pub fn create_test_app_with_config(config: Config) -> TestApp {
    let notifier = Arc::new(RecordingNotifier::new());
    let router = create_app(config, notifier.clone());
    TestApp { router, notifier }
}

/// Default test configuration.
pub fn test_config() -> Config {
    Config::default()
}

/// Build a JSON request with the given method, URI and body.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a bodyless DELETE request.
pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}
