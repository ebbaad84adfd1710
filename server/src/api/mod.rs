//! API Router and Application State
//!
//! Central routing configuration and shared state.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::line::ReplySender;
use crate::store::WeightStore;
use crate::webhook;

/// Shared application state.
///
/// The store and reply sender are trait objects so tests can swap in an
/// in-memory store and a recording sender.
#[derive(Clone)]
pub struct AppState {
    /// Measurement storage
    pub store: Arc<dyn WeightStore>,
    /// Outbound reply client
    pub replies: Arc<dyn ReplySender>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        store: Arc<dyn WeightStore>,
        replies: Arc<dyn ReplySender>,
        config: Config,
    ) -> Self {
        Self {
            store,
            replies,
            config: Arc::new(config),
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness greeting
        .route("/", get(greeting))
        // Health check
        .route("/health", get(health_check))
        // Webhook intake
        .merge(webhook::router())
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

/// Liveness endpoint.
async fn greeting() -> &'static str {
    "Hello, WeightBot!"
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
    /// Whether webhook signature verification is enabled
    signature_verification: bool,
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        signature_verification: state.config.has_signature_verification(),
    })
}
