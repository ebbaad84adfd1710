//! LINE Messaging API Client
//!
//! Outbound reply calls to the LINE platform. Replies are single-use: one
//! reply token, one call.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::Config;

/// Request timeout for the reply call.
const REPLY_TIMEOUT: Duration = Duration::from_secs(10);

/// Reply delivery errors.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Transport-level failure talking to the platform.
    #[error("Reply request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform rejected the reply.
    #[error("Reply rejected: HTTP {0}")]
    Status(u16),
}

/// Sender of text replies keyed by a reply token.
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Send a single text message in reply to the triggering event.
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), ReplyError>;
}

/// One outbound message in a reply body.
#[derive(Debug, Serialize)]
struct TextMessage<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

/// Body of `POST /v2/bot/message/reply`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<TextMessage<'a>>,
}

/// Reply client backed by the LINE Messaging API.
#[derive(Clone)]
pub struct LineClient {
    http: reqwest::Client,
    reply_url: String,
    access_token: String,
}

impl LineClient {
    /// Create a new client from server configuration.
    pub fn new(config: &Config) -> Result<Self, ReplyError> {
        let http = reqwest::Client::builder()
            .timeout(REPLY_TIMEOUT)
            .build()
            .map_err(|e| ReplyError::Client(e.to_string()))?;

        info!(api_base = %config.line_api_base, "LINE client initialized");

        Ok(Self {
            http,
            reply_url: format!(
                "{}/v2/bot/message/reply",
                config.line_api_base.trim_end_matches('/')
            ),
            access_token: config.channel_access_token.clone(),
        })
    }
}

#[async_trait]
impl ReplySender for LineClient {
    async fn reply_text(&self, reply_token: &str, text: &str) -> Result<(), ReplyError> {
        let body = ReplyRequest {
            reply_token,
            messages: vec![TextMessage { kind: "text", text }],
        };

        let resp = self
            .http
            .post(&self.reply_url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ReplyError::Status(resp.status().as_u16()));
        }

        Ok(())
    }
}
