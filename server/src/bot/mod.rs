//! Bot Event Handling
//!
//! Per-event orchestration: filter to text messages, parse the weight,
//! compare against the stored history, persist, reply.

mod error;
pub mod message;

pub use error::BotError;

use tracing::debug;

use crate::line::ReplySender;
use crate::store::WeightStore;
use crate::webhook::events::{MessageContent, WebhookEvent};

/// Fixed reply for input that does not parse as a weight.
pub const INVALID_VALUE_REPLY: &str = "invalid value, please enter a numeric value";

/// What happened to one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// A measurement was stored and the delta reply sent.
    Recorded,
    /// Input was invalid; the fixed validation reply was sent, nothing stored.
    Rejected,
    /// Not a text message; no action taken.
    Ignored,
}

/// Handle a single webhook event.
///
/// Reads the previous measurement before writing the new one, and sends the
/// reply last. Reply and save are not transactional: a failed reply can leave
/// a stored measurement behind.
pub async fn handle_event(
    store: &dyn WeightStore,
    replies: &dyn ReplySender,
    event: WebhookEvent,
) -> Result<EventOutcome, BotError> {
    let WebhookEvent::Message(event) = event else {
        return Ok(EventOutcome::Ignored);
    };
    let MessageContent::Text(ref content) = event.message else {
        return Ok(EventOutcome::Ignored);
    };

    let (reply, outcome) = match (parse_weight(&content.text), event.user_id()) {
        (Some(weight), Some(user_id)) => {
            let previous = store.latest(user_id).await?;
            let reply = message::delta_message(previous, weight);
            store.save(user_id, weight).await?;
            debug!(user_id = %user_id, weight, previous = ?previous, "Measurement recorded");
            (reply, EventOutcome::Recorded)
        }
        _ => {
            debug!(text = %content.text, "Rejected non-numeric input");
            (INVALID_VALUE_REPLY.to_string(), EventOutcome::Rejected)
        }
    };

    replies.reply_text(&event.reply_token, &reply).await?;
    Ok(outcome)
}

/// Parse a chat message as a weight. Finite numbers only.
fn parse_weight(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|w| w.is_finite())
}
