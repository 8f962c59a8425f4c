//! Error handling for SportSpot
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for SportSpot operations
#[derive(Error, Debug)]
pub enum SportSpotError {
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Event is at full capacity: {event_id}")]
    CapacityExceeded { event_id: i64 },

    #[error("Storage write failed: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for SportSpot operations
pub type Result<T> = std::result::Result<T, SportSpotError>;

impl SportSpotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            SportSpotError::EventNotFound { .. } => false,
            SportSpotError::CapacityExceeded { .. } => true,
            SportSpotError::Persistence(_) => true,
            SportSpotError::Serialization(_) => false,
            SportSpotError::Io(_) => true,
            SportSpotError::Config(_) => false,
            SportSpotError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SportSpotError::Config(_) => ErrorSeverity::Critical,
            SportSpotError::Persistence(_) => ErrorSeverity::Warning,
            SportSpotError::CapacityExceeded { .. } => ErrorSeverity::Info,
            SportSpotError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
