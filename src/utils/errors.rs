//! Error handling for KilaHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy, including the mapping of
//! domain errors onto HTTP responses.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Main error type for the KilaHub application
#[derive(Error, Debug)]
pub enum KilaHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Registration not found: {id}")]
    RegistrationNotFound { id: String },

    #[error("Organization not found: {id}")]
    OrganizationNotFound { id: String },

    #[error("Sport not found: {id}")]
    SportNotFound { id: String },

    #[error("Event not found: {id}")]
    EventNotFound { id: String },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Duplicate document number for this event: {document_number}")]
    DuplicateDocument { document_number: String },

    #[error("Validation failed")]
    Validation(HashMap<String, String>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for KilaHub operations
pub type Result<T> = std::result::Result<T, KilaHubError>;

impl KilaHubError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            KilaHubError::Config(_) => false,
            KilaHubError::Storage(_) => false,
            KilaHubError::PermissionDenied(_) => false,
            KilaHubError::Authentication(_) => false,
            KilaHubError::RegistrationNotFound { .. } => false,
            KilaHubError::OrganizationNotFound { .. } => false,
            KilaHubError::SportNotFound { .. } => false,
            KilaHubError::EventNotFound { .. } => false,
            KilaHubError::InvalidStateTransition { .. } => false,
            KilaHubError::DuplicateDocument { .. } => false,
            KilaHubError::Validation(_) => false,
            KilaHubError::Serialization(_) => false,
            KilaHubError::Io(_) => true,
            KilaHubError::UrlParse(_) => false,
            KilaHubError::RateLimitExceeded => true,
            KilaHubError::InvalidInput(_) => false,
            KilaHubError::UploadRejected(_) => false,
            KilaHubError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KilaHubError::Config(_) => ErrorSeverity::Critical,
            KilaHubError::Storage(_) => ErrorSeverity::Critical,
            KilaHubError::Io(_) => ErrorSeverity::Error,
            KilaHubError::PermissionDenied(_) => ErrorSeverity::Warning,
            KilaHubError::Authentication(_) => ErrorSeverity::Warning,
            KilaHubError::RateLimitExceeded => ErrorSeverity::Warning,
            KilaHubError::Validation(_) => ErrorSeverity::Info,
            KilaHubError::InvalidInput(_) => ErrorSeverity::Info,
            KilaHubError::UploadRejected(_) => ErrorSeverity::Info,
            KilaHubError::DuplicateDocument { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            KilaHubError::RegistrationNotFound { .. }
            | KilaHubError::OrganizationNotFound { .. }
            | KilaHubError::SportNotFound { .. }
            | KilaHubError::EventNotFound { .. } => StatusCode::NOT_FOUND,
            KilaHubError::Validation(_) | KilaHubError::InvalidStateTransition { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            KilaHubError::DuplicateDocument { .. } => StatusCode::CONFLICT,
            KilaHubError::Authentication(_) => StatusCode::UNAUTHORIZED,
            KilaHubError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            KilaHubError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            KilaHubError::InvalidInput(_) | KilaHubError::UrlParse(_) => StatusCode::BAD_REQUEST,
            KilaHubError::UploadRejected(_) => StatusCode::PAYLOAD_TOO_LARGE,
            KilaHubError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for KilaHubError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            KilaHubError::Validation(errors) => json!({
                "error": "validation_failed",
                "fields": errors,
            }),
            _ => json!({
                "error": self.to_string(),
            }),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        }

        (status, Json(body)).into_response()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = KilaHubError::RegistrationNotFound { id: "abc".into() };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = KilaHubError::DuplicateDocument { document_number: "123".into() };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err = KilaHubError::Validation(HashMap::new());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = KilaHubError::RateLimitExceeded;
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_severity_and_recovery() {
        assert_eq!(KilaHubError::Config("x".into()).severity(), ErrorSeverity::Critical);
        assert!(!KilaHubError::Config("x".into()).is_recoverable());
        assert!(KilaHubError::RateLimitExceeded.is_recoverable());
    }
}
