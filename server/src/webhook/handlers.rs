//! Webhook Endpoint Handler
//!
//! Receives a batch of events, verifies its signature when a channel secret
//! is configured, dispatches every event concurrently, and acknowledges.
//!
//! Ack policy: once the payload parses, the response is always
//! `200 {"message":"ok"}` — the platform redelivers the whole batch on
//! anything else, which would duplicate the events that already succeeded.
//! Per-event failures are logged and counted instead.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::future::join_all;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use super::events::WebhookPayload;
use super::signing;
use crate::api::AppState;
use crate::bot::{self, EventOutcome};

/// Header carrying the base64 HMAC-SHA256 signature of the body.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Request-level webhook failures. Per-event failures never surface here.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Body was not a well-formed webhook payload.
    #[error("Malformed webhook payload: {0}")]
    MalformedPayload(String),

    /// Signature verification is on and the header is missing.
    #[error("Missing signature header")]
    MissingSignature,

    /// Signature verification is on and the signature does not match.
    #[error("Signature verification failed")]
    InvalidSignature,
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Fixed error marker.
    status: &'static str,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            Self::MissingSignature | Self::InvalidSignature => StatusCode::UNAUTHORIZED,
        };

        let body = Json(ErrorBody {
            status: "error",
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Batch acknowledgment body.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    message: &'static str,
}

/// POST `/api/webhook`
pub async fn receive(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AckResponse>, WebhookError> {
    // Signature check runs over the raw body, before any parsing
    if let Some(secret) = &state.config.channel_secret {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(WebhookError::MissingSignature)?;

        if !signing::verify_signature(secret, &body, signature) {
            warn!("Rejected webhook delivery with invalid signature");
            return Err(WebhookError::InvalidSignature);
        }
    }

    let payload: WebhookPayload = serde_json::from_slice(&body)
        .map_err(|e| WebhookError::MalformedPayload(e.to_string()))?;

    // Every event runs concurrently; the join collects one result per event
    // so failures are observed rather than dropped. Events for the same user
    // are not serialized — two concurrent messages can both read the same
    // previous value (lost-update race, accepted).
    let results = join_all(payload.events.into_iter().map(|event| {
        bot::handle_event(state.store.as_ref(), state.replies.as_ref(), event)
    }))
    .await;

    let mut recorded = 0usize;
    let mut rejected = 0usize;
    let mut ignored = 0usize;
    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(EventOutcome::Recorded) => recorded += 1,
            Ok(EventOutcome::Rejected) => rejected += 1,
            Ok(EventOutcome::Ignored) => ignored += 1,
            Err(e) => {
                failed += 1;
                error!(error = %e, "Event handling failed");
            }
        }
    }

    info!(recorded, rejected, ignored, failed, "Webhook batch processed");

    Ok(Json(AckResponse { message: "ok" }))
}
