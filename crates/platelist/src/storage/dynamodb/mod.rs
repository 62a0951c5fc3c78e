//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the store trait
//! using `aws-sdk-dynamodb`. Listing is a single bounded `Scan` against
//! the configured table.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;
