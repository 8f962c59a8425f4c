//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod event;

// Re-export commonly used models
pub use event::{
    CreateEventRequest, Event, ImageSource, Registration, RegistrationRequest, UpdateEventRequest,
};
