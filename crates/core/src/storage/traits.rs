use async_trait::async_trait;

use crate::restaurant::Restaurant;

use super::Result;

/// Store for restaurant records.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Returns up to `limit` restaurants in the store's native order.
    ///
    /// A single bounded read: no filter, no continuation token. The
    /// result never holds more than `limit` records, but may hold fewer
    /// even when the store does.
    async fn list_restaurants(&self, limit: u32) -> Result<Vec<Restaurant>>;
}
