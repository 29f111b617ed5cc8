//! Common test utilities for in-process API testing.
//!
//! Builds the real router around a test configuration and drives it with
//! `tower::ServiceExt::oneshot`, so no port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use torrentstream_core::{load_config_from_str, validate_config, Config, StreamService};
use torrentstream_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
#[allow(unused_imports)]
pub use torrentstream_core::testing::fixtures;

pub const TEST_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[addon]
url = "http://addon.test/"
"#;

/// In-process server around a test configuration.
pub struct TestFixture {
    pub router: Router,
    pub config: Config,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_config(TEST_CONFIG)
    }

    /// Create a fixture from a TOML config.
    pub fn with_config(toml: &str) -> Self {
        let config = load_config_from_str(toml).expect("Failed to parse test config");
        validate_config(&config).expect("Invalid test config");
        let service = StreamService::from_config(&config).expect("Failed to create service");

        let state = Arc::new(AppState::new(config.clone(), service));
        let router = create_router(state);

        Self { router, config }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}
