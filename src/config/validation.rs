//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{KilaHubError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_storage_config(&settings.storage)?;
    validate_uploads_config(&settings.uploads)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(KilaHubError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(KilaHubError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.data_dir.is_empty() {
        return Err(KilaHubError::Config(
            "Storage data directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate uploads configuration
fn validate_uploads_config(config: &super::UploadsConfig) -> Result<()> {
    if config.dir.is_empty() {
        return Err(KilaHubError::Config(
            "Uploads directory is required".to_string()
        ));
    }

    if config.max_bytes == 0 {
        return Err(KilaHubError::Config(
            "Upload size limit must be greater than 0".to_string()
        ));
    }

    if config.allowed_types.is_empty() {
        return Err(KilaHubError::Config(
            "At least one allowed upload content type is required".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(KilaHubError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(KilaHubError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(KilaHubError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(KilaHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(KilaHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
