//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// LINE channel access token for the outbound reply call
    pub channel_access_token: String,

    /// LINE channel secret for webhook signature verification (optional;
    /// verification is skipped when unset)
    pub channel_secret: Option<String>,

    /// DynamoDB table holding measurement records
    pub weight_table: String,

    /// Custom DynamoDB endpoint (e.g., DynamoDB Local) (optional)
    pub dynamodb_endpoint: Option<String>,

    /// Base URL of the LINE Messaging API
    pub line_api_base: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            channel_access_token: env::var("CHANNEL_ACCESS_TOKEN")
                .context("CHANNEL_ACCESS_TOKEN must be set")?,
            channel_secret: env::var("CHANNEL_SECRET").ok(),
            weight_table: env::var("WEIGHT_TABLE").unwrap_or_else(|_| "MyWeight".into()),
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT").ok(),
            line_api_base: env::var("LINE_API_BASE")
                .unwrap_or_else(|_| "https://api.line.me".into()),
        })
    }

    /// Check if webhook signature verification is configured.
    #[must_use]
    pub const fn has_signature_verification(&self) -> bool {
        self.channel_secret.is_some()
    }

    /// Create a default configuration for testing.
    ///
    /// Points at DynamoDB Local: `docker run -d --name weightbot-test-dynamo -p 8000:8000 amazon/dynamodb-local`
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            channel_access_token: "test-channel-token".into(),
            channel_secret: None,
            weight_table: "MyWeight".into(),
            dynamodb_endpoint: Some("http://localhost:8000".into()),
            line_api_base: "https://api.line.me".into(),
        }
    }
}
