//! Internationalization module
//!
//! This module handles Khmer/English language support for the KilaHub
//! backend. It provides translation loading, language negotiation from the
//! Accept-Language header, message formatting and pluralization.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams, TranslationStats, LanguageStats};
