//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub uploads: UploadsConfig,
    pub admin: AdminConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

/// JSON file storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one JSON array file per entity collection
    pub data_dir: String,
}

/// Photo upload configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadsConfig {
    pub dir: String,
    pub max_bytes: u64,
    /// Accepted content types, e.g. image/jpeg
    pub allowed_types: Vec<String>,
}

/// Administrative access configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    /// Bearer tokens granting admin access, keyed by admin display name
    pub tokens: std::collections::HashMap<String, String>,
    /// Admins are exempt from rate limiting
    pub rate_limit_exempt: bool,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub translations_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    /// Reject a registration whose document number already exists for the event
    pub duplicate_check: bool,
    pub recommendations: bool,
    /// Accept public registrations only while the event is open
    pub enforce_event_status: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("KILAHUB").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::KilaHubError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                cors_origins: vec![],
            },
            storage: StorageConfig {
                data_dir: "data".to_string(),
            },
            uploads: UploadsConfig {
                dir: "uploads".to_string(),
                max_bytes: 5 * 1024 * 1024,
                allowed_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
            },
            admin: AdminConfig {
                tokens: std::collections::HashMap::new(),
                rate_limit_exempt: true,
            },
            i18n: I18nConfig {
                default_language: "km".to_string(),
                supported_languages: vec!["km".to_string(), "en".to_string()],
                translations_dir: "translations".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs".to_string(),
            },
            features: FeaturesConfig {
                duplicate_check: true,
                recommendations: true,
                enforce_event_status: true,
            },
        }
    }
}
