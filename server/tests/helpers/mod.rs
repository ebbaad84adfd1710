//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for building and sending requests through the full axum
//! router with in-memory backends: a `MemoryStore` instead of DynamoDB and a
//! `RecordingSender` instead of the LINE reply client.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{self, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use wb_server::api::{create_router, AppState};
use wb_server::config::Config;
use wb_server::line::{ReplyError, ReplySender};
use wb_server::store::MemoryStore;

/// Reply sender that records outbound replies instead of calling the platform.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSender {
    /// All `(reply_token, text)` pairs sent so far, in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySender for RecordingSender {
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), ReplyError> {
        self.sent
            .lock()
            .unwrap()
            .push((reply_token.to_string(), text.to_string()));
        Ok(())
    }
}

/// Test application: full router plus handles on the substituted backends.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub replies: Arc<RecordingSender>,
    pub config: Config,
}

impl TestApp {
    /// App with default test configuration (no signature verification).
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// App with a caller-provided configuration.
    pub fn with_config(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        let replies = Arc::new(RecordingSender::default());
        let state = AppState::new(store.clone(), replies.clone(), config.clone());

        Self {
            router: create_router(state),
            store,
            replies,
            config,
        }
    }

    /// Send a request through the router.
    pub async fn oneshot(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("request failed")
    }

    /// Start building a request.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }
}

/// Configuration for tests: no AWS, no signature verification.
pub fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:8080".into(),
        channel_access_token: "test-channel-token".into(),
        channel_secret: None,
        weight_table: "MyWeight".into(),
        dynamodb_endpoint: None,
        line_api_base: "https://api.line.me".into(),
    }
}

/// Collect a response body as JSON.
pub async fn body_to_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}

/// Collect a response body as a string.
pub async fn body_to_string(resp: Response<Body>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body is not UTF-8")
}
