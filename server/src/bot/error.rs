//! Bot Error Types

use thiserror::Error;

use crate::line::ReplyError;
use crate::store::StoreError;

/// Failures while handling a single webhook event.
///
/// Validation problems (non-numeric text, missing sender) are not errors —
/// they resolve to a reply with the fixed validation message. These variants
/// cover the infrastructure calls around that logic.
#[derive(Debug, Error)]
pub enum BotError {
    /// Measurement storage failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// The reply call to the platform failed.
    #[error("Reply error: {0}")]
    Reply(#[from] ReplyError),
}
