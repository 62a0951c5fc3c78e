//! Application state with store-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a store trait object for storage abstraction
//! and supports different backends via feature flags.

use std::sync::Arc;

use platelist_core::storage::RestaurantStore;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// This is cloned for each request handler. The store and configuration
/// are read-only after initialization, so cloning is cheap and sharing
/// needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Restaurant store backend.
    pub store: Arc<dyn RestaurantStore>,
    /// Configuration loaded at startup.
    pub config: Config,
}

impl AppState {
    /// Creates a new AppState with the given store and configuration.
    fn build(store: Arc<dyn RestaurantStore>, config: Config) -> Self {
        Self { store, config }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());

            Ok(Self::build(store, config.clone()))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use anyhow::Context;

    use crate::storage::DynamoDbStore;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// Uses the AWS SDK default credential chain. Fails when
        /// `restaurants_table` is unset, so the service never starts
        /// without a table to scan.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let table_name = config
                .table_name
                .clone()
                .context("restaurants_table must be set for the dynamodb backend")?;

            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let store = Arc::new(DynamoDbStore::new(client, table_name));

            Ok(Self::build(store, config.clone()))
        }
    }

}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates an AppState over the given store for tests.
        pub(crate) fn for_tests(store: Arc<dyn RestaurantStore>, config: Config) -> Self {
            Self::build(store, config)
        }
    }

    impl Default for AppState {
        /// Creates an AppState with empty in-memory storage for testing.
        fn default() -> Self {
            let config = Config {
                default_results: 8,
                table_name: None,
            };

            Self::build(Arc::new(InMemoryStore::new()), config)
        }
    }
}
