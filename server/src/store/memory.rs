//! In-Memory Measurement Store
//!
//! Same contract as the DynamoDB backend, kept in a process-local map.
//! Used by the test suite and handy for running the bot without AWS.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{StoreError, WeightStore};

/// A single stored measurement.
#[derive(Debug, Clone)]
struct Record {
    weight: f64,
    created_at: DateTime<Utc>,
}

/// Measurement store backed by a `Mutex<HashMap>`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records stored for a user. Test observability helper.
    pub fn record_count(&self, user_id: &str) -> usize {
        self.records
            .lock()
            .map_or(0, |records| records.get(user_id).map_or(0, Vec::len))
    }
}

#[async_trait]
impl WeightStore for MemoryStore {
    async fn latest(&self, user_id: &str) -> Result<Option<f64>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::Query("store lock poisoned".into()))?;

        // Greatest CreatedAt wins; max_by_key keeps the last maximum, which
        // matches the storage-order tiebreak of the real table.
        Ok(records.get(user_id).and_then(|history| {
            history
                .iter()
                .max_by_key(|r| r.created_at)
                .map(|r| r.weight)
        }))
    }

    async fn save(&self, user_id: &str, weight: f64) -> Result<(), StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Put("store lock poisoned".into()))?;

        records.entry(user_id.to_string()).or_default().push(Record {
            weight,
            created_at: Utc::now(),
        });

        Ok(())
    }
}
