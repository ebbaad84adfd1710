//! LINE Webhook Wire Types
//!
//! The subset of the webhook event schema this bot consumes. Event and
//! message types outside that subset deserialize into catch-all variants so
//! a batch containing them still parses.

use serde::Deserialize;

/// Top-level webhook request body.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    /// Bot user ID the payload was sent to.
    #[serde(default)]
    pub destination: Option<String>,
    /// Ordered batch of events.
    pub events: Vec<WebhookEvent>,
}

/// One inbound platform event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WebhookEvent {
    /// A user sent the bot a message.
    Message(MessageEvent),
    /// Any other event type (follow, unfollow, join, ...). Ignored.
    #[serde(other)]
    Other,
}

/// A `message` event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    /// Single-use token for replying to this event.
    pub reply_token: String,
    /// Where the message came from. `userId` may be absent in group chats.
    #[serde(default)]
    pub source: Option<EventSource>,
    /// The message itself.
    pub message: MessageContent,
}

impl MessageEvent {
    /// The sender's user ID, if the event carries one.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.user_id.as_deref())
    }
}

/// Origin of an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    /// Source kind: `user`, `group`, or `room`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Sender's user ID.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Payload of a `message` event.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    /// Plain text message.
    Text(TextContent),
    /// Stickers, images, and other non-text messages. Ignored.
    #[serde(other)]
    Other,
}

/// A text message body.
#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    /// Platform message ID.
    #[serde(default)]
    pub id: Option<String>,
    /// The message text.
    pub text: String,
}
