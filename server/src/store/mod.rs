//! Measurement Storage
//!
//! Append-only storage of weight measurements, keyed by LINE user ID and
//! ordered by creation time. The production backend is DynamoDB; an
//! in-memory implementation backs tests and local runs.

mod dynamo;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

/// Storage-related errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to query the latest measurement.
    #[error("Failed to query latest measurement: {0}")]
    Query(String),

    /// Failed to write a measurement.
    #[error("Failed to save measurement: {0}")]
    Put(String),

    /// A stored record is missing or has an unreadable weight attribute.
    #[error("Malformed measurement record: {0}")]
    Malformed(String),

    /// Storage configuration error.
    #[error("Storage configuration error: {0}")]
    Config(String),
}

/// Accessor for per-user weight measurements.
///
/// `latest` must return `Ok(None)` for a user with no history; errors are
/// reserved for genuine storage failures. `save` appends a new record stamped
/// with the current time — duplicate sends create duplicate records.
#[async_trait]
pub trait WeightStore: Send + Sync {
    /// Fetch the most recently stored weight for a user, if any.
    async fn latest(&self, user_id: &str) -> Result<Option<f64>, StoreError>;

    /// Append a new measurement for a user.
    async fn save(&self, user_id: &str, weight: f64) -> Result<(), StoreError>;
}
