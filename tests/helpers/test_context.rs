//! Test application context
//!
//! Spins up the full router over temporary data and upload directories,
//! with one admin token configured.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use KilaHub::config::Settings;
use KilaHub::handlers::{build_router, AppState};
use KilaHub::i18n::I18n;
use KilaHub::middleware::rate_limit::{RateLimitConfig, RateLimitMiddleware};
use KilaHub::services::ServiceFactory;
use KilaHub::storage::StorageService;

pub const ADMIN_TOKEN: &str = "test-admin-token";

pub struct TestContext {
    pub app: Router,
    // Held so the directories outlive the test
    _data_dir: TempDir,
    _uploads_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let data_dir = TempDir::new().expect("data dir");
        let uploads_dir = TempDir::new().expect("uploads dir");

        let mut settings = Settings::default();
        settings.storage.data_dir = data_dir.path().to_string_lossy().to_string();
        settings.uploads.dir = uploads_dir.path().to_string_lossy().to_string();
        settings.uploads.max_bytes = 1024 * 1024;
        settings
            .admin
            .tokens
            .insert("tester".to_string(), ADMIN_TOKEN.to_string());

        let storage = StorageService::open(&settings.storage)
            .await
            .expect("open storage");

        // Integration tests run from the package root, where the real
        // translation catalogs live
        let mut i18n = I18n::new(&settings.i18n);
        i18n.load_translations().await.expect("load translations");

        let services = ServiceFactory::new(settings.clone(), storage).expect("services");

        let rate_limiter = RateLimitMiddleware::new(
            RateLimitConfig {
                max_requests: 10_000,
                window_duration: std::time::Duration::from_secs(60),
                burst_allowance: 0,
            },
            settings.admin.rate_limit_exempt,
        );

        let state = AppState {
            services: Arc::new(services),
            settings: Arc::new(settings),
            i18n: Arc::new(i18n),
            rate_limiter: Arc::new(rate_limiter),
        };

        Self {
            app: build_router(state),
            _data_dir: data_dir,
            _uploads_dir: uploads_dir,
        }
    }

    /// Send a JSON request; `token` adds a bearer Authorization header
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.raw_request(method, uri, token, None, body).await;
        Self::json_response(response).await
    }

    /// Send a JSON request with an Accept-Language header
    pub async fn request_with_language(
        &self,
        method: &str,
        uri: &str,
        language: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.raw_request(method, uri, None, Some(language), body).await;
        Self::json_response(response).await
    }

    pub async fn raw_request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        language: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(language) = language {
            builder = builder.header(header::ACCEPT_LANGUAGE, language);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.app.clone().oneshot(request).await.expect("request")
    }

    /// Send a multipart request with a single "photo" field
    pub async fn upload_photo(
        &self,
        uri: &str,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> (StatusCode, Value) {
        let boundary = "kilahub-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"photo\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.expect("request");
        Self::json_response(response).await
    }

    async fn json_response(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }
}
