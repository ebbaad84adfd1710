//! LINE Webhook Intake
//!
//! Inbound event batches from the platform: wire types, signature
//! verification, and the receiving endpoint.

pub mod events;
pub mod handlers;
pub mod signing;

use axum::routing::post;
use axum::Router;

use crate::api::AppState;

/// Create the webhook router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/webhook", post(handlers::receive))
}
