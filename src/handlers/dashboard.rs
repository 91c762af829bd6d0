//! Dashboard handlers

use axum::extract::State;
use axum::Json;

use crate::middleware::auth::AdminUser;
use crate::services::DashboardStats;
use crate::utils::errors::Result;

use super::AppState;

/// Aggregated registration counts for the admin dashboard
pub async fn stats(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<DashboardStats>> {
    tracing::debug!(admin = %admin.name, "Dashboard stats requested");
    let stats = state.services.stats_service.dashboard_stats().await?;
    Ok(Json(stats))
}
