//! DynamoDB store implementation.
//!
//! Implements the store trait from `platelist_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use platelist_core::restaurant::Restaurant;
use platelist_core::storage::{RestaurantStore, Result};

use super::conversions::item_to_restaurant;
use super::error::map_scan_error;

/// DynamoDB-based store implementation.
///
/// Holds a shared SDK client and the table name resolved at startup.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

}

#[async_trait]
impl RestaurantStore for DynamoDbStore {
    async fn list_restaurants(&self, limit: u32) -> Result<Vec<Restaurant>> {
        tracing::info!(count = limit, table = %self.table_name, "fetching restaurants");

        // One bounded scan, first page only. DynamoDB may return a short
        // page even when the table holds more rows; the short page is
        // returned as-is.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .limit(limit.min(i32::MAX as u32) as i32)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        tracing::info!(found = items.len(), "scan returned restaurants");

        items.iter().map(item_to_restaurant).collect()
    }
}
