//! KilaHub registration backend
//!
//! Main application entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use KilaHub::{
    config::Settings,
    handlers::{build_router, AppState},
    i18n::I18n,
    middleware::rate_limit::{RateLimitConfig, RateLimitMiddleware},
    services::ServiceFactory,
    storage::StorageService,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting KilaHub registration backend...");

    // Open the JSON file collections
    info!("Opening data collections...");
    let storage = StorageService::open(&settings.storage).await?;

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await?;

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(settings.clone(), storage)?;

    let rate_limiter = RateLimitMiddleware::new(
        RateLimitConfig::default(),
        settings.admin.rate_limit_exempt,
    );

    let state = AppState {
        services: Arc::new(services),
        settings: Arc::new(settings.clone()),
        i18n: Arc::new(i18n),
        rate_limiter: Arc::new(rate_limiter),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("KilaHub is ready on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("KilaHub has been shut down.");

    Ok(())
}

/// Resolve when Ctrl-C is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
    }
}
