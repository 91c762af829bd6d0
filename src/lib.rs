//! KilaHub registration backend
//!
//! A bilingual (Khmer/English) backend for national sports-event registration.
//! This library provides modular components for participant registration,
//! catalog management (organizations, sports, events), administrative review,
//! dashboard statistics and event recommendations with multi-language support.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod storage;
pub mod validation;
pub mod i18n;
pub mod utils;
pub mod middleware;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{KilaHubError, Result};

// Re-export main components for easy access
pub use storage::StorageService;
pub use services::ServiceFactory;
pub use i18n::I18n;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
