//! SportSpot event engine
//!
//! A client-side event listing engine for local sporting communities.
//! This library owns the canonical event collection and provides category
//! and date filtering, capacity-checked participant registration, and
//! key-value persistence for view-layer consumers.

#![allow(non_snake_case)]

pub mod config;
pub mod models;
pub mod storage;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, SportSpotError};

// Re-export main components for easy access
pub use models::{Event, Registration};
pub use storage::{JsonFileStorage, MemoryStorage, StorageBackend};
pub use store::{CategoryFilter, EventStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
