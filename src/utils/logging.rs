//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the KilaHub application.

use tracing::{info, warn, debug};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "kilahub.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log registration lifecycle actions with structured data
pub fn log_registration_action(registration_id: &str, action: &str, details: Option<&str>) {
    info!(
        registration_id = registration_id,
        action = action,
        details = details,
        "Registration action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin: &str, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin = admin,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log catalog changes (organizations, sports, events)
pub fn log_catalog_action(entity: &str, entity_id: &str, action: &str, details: Option<&str>) {
    info!(
        entity = entity,
        entity_id = entity_id,
        action = action,
        details = details,
        "Catalog action performed"
    );
}

/// Log storage operations
pub fn log_storage_operation(operation: &str, collection: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            collection = collection,
            duration_ms = duration_ms,
            "Storage operation completed"
        );
    } else {
        tracing::error!(
            operation = operation,
            collection = collection,
            duration_ms = duration_ms,
            "Storage operation failed"
        );
    }
}

/// Log rejected uploads
pub fn log_upload_rejected(registration_id: &str, reason: &str) {
    warn!(
        registration_id = registration_id,
        reason = reason,
        "Photo upload rejected"
    );
}
