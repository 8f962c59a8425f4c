//! Configuration validation module
//!
//! This module provides validation functions for crate configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{Result, SportSpotError};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.path.is_empty() {
        return Err(SportSpotError::Config(
            "Storage path is required".to_string(),
        ));
    }

    if config.namespace.is_empty() {
        return Err(SportSpotError::Config(
            "Storage namespace is required".to_string(),
        ));
    }

    // The namespace lands in storage key names and file names
    if !config
        .namespace
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(SportSpotError::Config(format!(
            "Storage namespace contains unsafe characters: {}",
            config.namespace
        )));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SportSpotError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SportSpotError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    if config.max_files == 0 {
        return Err(SportSpotError::Config(
            "Max log files must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
