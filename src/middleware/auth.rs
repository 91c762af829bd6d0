//! Authentication middleware
//!
//! Admin access is granted by static bearer tokens configured per admin.
//! The extractor below rejects requests without a valid token, so any
//! handler taking an `AdminUser` argument is admin-only.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use tracing::{debug, warn};

use crate::config::AdminConfig;
use crate::handlers::AppState;
use crate::utils::errors::KilaHubError;

/// An authenticated administrator
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub name: String,
}

/// Pull the bearer token from Authorization or the X-Admin-Token header
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.trim());
        }
    }

    headers
        .get("x-admin-token")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
}

/// Look up the admin name owning a token
pub fn verify_token(config: &AdminConfig, token: &str) -> Option<String> {
    config
        .tokens
        .iter()
        .find(|(_, t)| t.as_str() == token)
        .map(|(name, _)| name.clone())
}

/// Whether the request carries a valid admin token
pub fn is_admin_request(config: &AdminConfig, headers: &HeaderMap) -> bool {
    extract_token(headers)
        .map(|token| verify_token(config, token).is_some())
        .unwrap_or(false)
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = KilaHubError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers).ok_or_else(|| {
            KilaHubError::Authentication("Missing admin token".to_string())
        })?;

        match verify_token(&state.settings.admin, token) {
            Some(name) => {
                debug!(admin = %name, "Admin request authenticated");
                Ok(AdminUser { name })
            }
            None => {
                warn!(path = %parts.uri.path(), "Invalid admin token presented");
                Err(KilaHubError::PermissionDenied("Invalid admin token".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config_with_token(name: &str, token: &str) -> AdminConfig {
        let mut tokens = std::collections::HashMap::new();
        tokens.insert(name.to_string(), token.to_string());
        AdminConfig { tokens, rate_limit_exempt: true }
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer secret-1"));
        assert_eq!(extract_token(&headers), Some("secret-1"));
    }

    #[test]
    fn test_extract_custom_header_token() {
        let mut headers = HeaderMap::new();
        headers.insert("x-admin-token", HeaderValue::from_static("secret-2"));
        assert_eq!(extract_token(&headers), Some("secret-2"));
    }

    #[test]
    fn test_verify_token() {
        let config = config_with_token("dara", "secret");
        assert_eq!(verify_token(&config, "secret"), Some("dara".to_string()));
        assert_eq!(verify_token(&config, "wrong"), None);
    }

    #[test]
    fn test_is_admin_request() {
        let config = config_with_token("dara", "secret");

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer secret"));
        assert!(is_admin_request(&config, &headers));

        let empty = HeaderMap::new();
        assert!(!is_admin_request(&config, &empty));
    }
}
