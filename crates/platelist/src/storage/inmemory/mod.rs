//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the store trait
//! that keeps records in a `Vec` wrapped in `Arc<RwLock<_>>`. Useful for
//! testing and development scenarios where no table exists.

mod store;

pub use store::InMemoryStore;
