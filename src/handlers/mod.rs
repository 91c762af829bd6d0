//! HTTP handlers module
//!
//! This module contains all API handlers organized by resource:
//! - Registration handlers for submission, review and photo upload
//! - Catalog handlers for organizations, sports and events
//! - Survey, dashboard and recommendation handlers

pub mod registrations;
pub mod organizations;
pub mod sports;
pub mod events;
pub mod surveys;
pub mod dashboard;
pub mod recommendations;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderMap, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::Settings;
use crate::i18n::I18n;
use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::middleware::{logging, rate_limit};
use crate::services::ServiceFactory;

/// Shared application state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
    pub settings: Arc<Settings>,
    pub i18n: Arc<I18n>,
    pub rate_limiter: Arc<RateLimitMiddleware>,
}

/// A page of results with pagination metadata
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Negotiate the response language from the Accept-Language header
pub(crate) fn response_language(state: &AppState, headers: &HeaderMap) -> String {
    let accept = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    state.i18n.negotiate_language(accept)
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": crate::NAME,
        "version": crate::VERSION,
    }))
}

/// Build the CORS layer from the configured origins
fn cors_layer(settings: &Settings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    if settings.server.cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = settings
            .server
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}

/// Assemble the application router with all routes and layers
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings);
    let body_limit = state.settings.uploads.max_bytes as usize + 1024 * 1024;

    Router::new()
        .route("/health", get(health))
        .nest("/api/registrations", registrations::router())
        .nest("/api/organizations", organizations::router())
        .nest("/api/sports", sports::router())
        .nest("/api/events", events::router())
        .nest("/api/surveys", surveys::router())
        .route("/api/dashboard/stats", get(dashboard::stats))
        .route("/api/recommendations", post(recommendations::recommend))
        .nest_service("/uploads", ServeDir::new(&state.settings.uploads.dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ))
        .layer(axum::middleware::from_fn(logging::log_requests))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}
