//! Shared helpers for integration tests

pub mod test_data;

pub use test_data::*;
