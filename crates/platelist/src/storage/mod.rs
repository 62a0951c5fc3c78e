//! Storage backend implementations.
//!
//! This module provides concrete implementations of the store trait
//! defined in `platelist_core::storage`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory storage backend for tests and local dev
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p platelist --no-default-features --features dynamodb
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryStore;
