//! Rate limiting middleware
//!
//! This module provides rate limiting functionality to prevent abuse
//! and ensure fair usage of the registration API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn, info};

use crate::handlers::AppState;
use crate::middleware::auth::is_admin_request;
use crate::utils::errors::{KilaHubError, Result};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    /// Time window duration
    pub window_duration: Duration,
    /// Burst allowance (extra requests allowed in short bursts)
    pub burst_allowance: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 30,
            window_duration: Duration::from_secs(60),
            burst_allowance: 10,
        }
    }
}

/// Rate limit entry for tracking client requests
#[derive(Debug, Clone)]
struct RateLimitEntry {
    requests: Vec<Instant>,
    burst_used: u32,
    last_reset: Instant,
}

impl RateLimitEntry {
    fn new() -> Self {
        Self {
            requests: Vec::new(),
            burst_used: 0,
            last_reset: Instant::now(),
        }
    }

    /// Clean up old requests outside the window
    fn cleanup(&mut self, window_duration: Duration) {
        let cutoff = Instant::now() - window_duration;
        self.requests.retain(|&time| time > cutoff);

        // Reset burst if enough time has passed
        if self.last_reset.elapsed() > window_duration {
            self.burst_used = 0;
            self.last_reset = Instant::now();
        }
    }

    /// Check if request is allowed
    fn is_allowed(&mut self, config: &RateLimitConfig) -> bool {
        self.cleanup(config.window_duration);

        let current_requests = self.requests.len() as u32;

        // Check if within normal limits
        if current_requests < config.max_requests {
            return true;
        }

        // Check if burst allowance is available
        if self.burst_used < config.burst_allowance {
            self.burst_used += 1;
            return true;
        }

        false
    }

    /// Record a new request
    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }
}

/// Rate limiting middleware keyed by client address
#[derive(Clone)]
pub struct RateLimitMiddleware {
    config: RateLimitConfig,
    entries: Arc<Mutex<HashMap<String, RateLimitEntry>>>,
    admin_exempt: bool,
}

impl RateLimitMiddleware {
    /// Create a new RateLimitMiddleware instance
    pub fn new(config: RateLimitConfig, admin_exempt: bool) -> Self {
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
            admin_exempt,
        }
    }

    /// Check if a client is rate limited
    pub fn check_rate_limit(&self, client: &str, is_admin: bool) -> Result<()> {
        // Exempt admins if configured
        if self.admin_exempt && is_admin {
            debug!(client = client, "Admin client exempt from rate limiting");
            return Ok(());
        }

        let mut entries = self.entries.lock().unwrap();
        let entry = entries.entry(client.to_string()).or_insert_with(RateLimitEntry::new);

        if entry.is_allowed(&self.config) {
            entry.record_request();
            debug!(client = client, "Rate limit check passed");
            Ok(())
        } else {
            warn!(client = client, "Rate limit exceeded");
            Err(KilaHubError::RateLimitExceeded)
        }
    }

    /// Clear rate limit for a specific client (admin function)
    pub fn clear_client(&self, client: &str) -> bool {
        let mut entries = self.entries.lock().unwrap();
        let removed = entries.remove(client).is_some();

        if removed {
            info!(client = client, "Rate limit cleared for client");
        }

        removed
    }

    /// Cleanup old entries (should be called periodically)
    pub fn cleanup_old_entries(&self) {
        let mut entries = self.entries.lock().unwrap();
        let cutoff = Instant::now() - self.config.window_duration * 2;

        entries.retain(|_, entry| {
            entry.requests.iter().any(|&time| time > cutoff)
        });

        debug!(remaining_entries = entries.len(), "Cleaned up old rate limit entries");
    }
}

impl Default for RateLimitMiddleware {
    fn default() -> Self {
        Self::new(RateLimitConfig::default(), true)
    }
}

/// Client key for rate limiting: forwarded address when behind a proxy,
/// otherwise one shared bucket for direct connections
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "direct".to_string())
}

/// Axum layer enforcing the rate limit before the request reaches a handler
pub async fn enforce(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> std::result::Result<Response, KilaHubError> {
    let headers = request.headers();
    let is_admin = is_admin_request(&state.settings.admin, headers)
        && state.settings.admin.rate_limit_exempt;
    let client = client_key(headers);

    state.rate_limiter.check_rate_limit(&client, is_admin)?;

    Ok(next.run(request).await)
}
