//! In-memory store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use platelist_core::restaurant::Restaurant;
use platelist_core::storage::{RestaurantStore, Result};

/// In-memory storage backend for testing.
///
/// Keeps records in insertion order, so listing is deterministic and
/// repeated reads over unchanged data return identical results. Data is
/// not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    restaurants: Arc<RwLock<Vec<Restaurant>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    pub fn with_restaurants(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: Arc::new(RwLock::new(restaurants)),
        }
    }

    /// Appends a record to the store.
    pub async fn insert(&self, restaurant: Restaurant) {
        let mut restaurants = self.restaurants.write().await;
        restaurants.push(restaurant);
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn list_restaurants(&self, limit: u32) -> Result<Vec<Restaurant>> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
