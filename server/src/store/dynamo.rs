//! DynamoDB Measurement Store
//!
//! Production storage backend. One table, `UserId` partition key and
//! `CreatedAt` sort key; "latest" is a descending query with limit 1.
//! Supports a custom endpoint for DynamoDB Local.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_dynamodb::{
    config::{Credentials, SharedCredentialsProvider},
    types::AttributeValue,
    Client,
};
use chrono::{SecondsFormat, Utc};
use tracing::info;

use super::{StoreError, WeightStore};
use crate::config::Config;

/// DynamoDB client wrapper bound to the measurement table.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    /// Create a new store from server configuration.
    ///
    /// Credentials and region come from the environment; a custom endpoint
    /// (DynamoDB Local) can be set via configuration.
    pub fn new(config: &Config) -> Self {
        let region = Region::new(
            std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        );

        let mut db_config_builder = aws_sdk_dynamodb::Config::builder().region(region);

        // Configure credentials from environment
        if let (Ok(access_key), Ok(secret_key)) = (
            std::env::var("AWS_ACCESS_KEY_ID"),
            std::env::var("AWS_SECRET_ACCESS_KEY"),
        ) {
            let credentials = Credentials::new(
                access_key,
                secret_key,
                None, // session token
                None, // expiry
                "environment",
            );
            db_config_builder =
                db_config_builder.credentials_provider(SharedCredentialsProvider::new(credentials));
        }

        // Configure custom endpoint (DynamoDB Local)
        if let Some(endpoint) = &config.dynamodb_endpoint {
            db_config_builder = db_config_builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(db_config_builder.build());

        info!(
            table = %config.weight_table,
            endpoint = ?config.dynamodb_endpoint,
            "DynamoDB client initialized"
        );

        Self {
            client,
            table: config.weight_table.clone(),
        }
    }

    /// Verify the measurement table is reachable.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.client
            .describe_table()
            .table_name(&self.table)
            .send()
            .await
            .map_err(|e| StoreError::Config(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl WeightStore for DynamoStore {
    async fn latest(&self, user_id: &str) -> Result<Option<f64>, StoreError> {
        let resp = self
            .client
            .query()
            .table_name(&self.table)
            .key_condition_expression("UserId = :userId")
            .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
            .scan_index_forward(false)
            .limit(1)
            .send()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match resp.items().first() {
            Some(item) => weight_attribute(item).map(Some),
            None => Ok(None),
        }
    }

    async fn save(&self, user_id: &str, weight: f64) -> Result<(), StoreError> {
        // Millisecond precision with Z suffix keeps CreatedAt lexicographically
        // sortable and interleaves with records written by other tooling.
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        self.client
            .put_item()
            .table_name(&self.table)
            .item("UserId", AttributeValue::S(user_id.to_string()))
            .item("Weight", AttributeValue::N(weight.to_string()))
            .item("CreatedAt", AttributeValue::S(created_at))
            .send()
            .await
            .map_err(|e| StoreError::Put(e.to_string()))?;

        Ok(())
    }
}

/// Extract the numeric `Weight` attribute from a record.
fn weight_attribute(item: &HashMap<String, AttributeValue>) -> Result<f64, StoreError> {
    let value = item
        .get("Weight")
        .ok_or_else(|| StoreError::Malformed("missing Weight attribute".into()))?;

    value
        .as_n()
        .map_err(|_| StoreError::Malformed("Weight attribute is not a number".into()))?
        .parse::<f64>()
        .map_err(|e| StoreError::Malformed(format!("unparseable Weight attribute: {e}")))
}
