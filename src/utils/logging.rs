//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the SportSpot crate.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard must stay alive for the lifetime of the application,
/// otherwise buffered file output is lost on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "sportspot.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log event management actions with structured data
pub fn log_event_action(event_id: i64, action: &str, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        details = details,
        "Event action performed"
    );
}

/// Log registration admissions against capacity
pub fn log_registration(event_id: i64, participants: u32, max_participants: u32) {
    info!(
        event_id = event_id,
        participants = participants,
        max_participants = max_participants,
        "Participant registered"
    );
}

/// Log storage reads and writes
pub fn log_storage_operation(operation: &str, key: &str, success: bool) {
    if success {
        debug!(
            operation = operation,
            key = key,
            "Storage operation completed"
        );
    } else {
        warn!(operation = operation, key = key, "Storage operation failed");
    }
}
