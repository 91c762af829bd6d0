//! Survey handlers
//!
//! Organizations submit pre-registration interest polls; admins read the
//! entries and their aggregated summary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::middleware::auth::AdminUser;
use crate::models::survey::{CreateSurveyRequest, SurveyEntry, SurveySummary};
use crate::utils::errors::{KilaHubError, Result};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/summary", get(summary))
}

async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateSurveyRequest>,
) -> Result<(StatusCode, Json<SurveyEntry>)> {
    if request.estimated_participants == 0 {
        return Err(KilaHubError::InvalidInput(
            "estimated_participants must be greater than 0".to_string(),
        ));
    }

    // The poll references catalog entries; reject unknown ids early
    state
        .services
        .catalog_service
        .get_organization(request.organization_id)
        .await?;
    state.services.catalog_service.get_sport(request.sport_id).await?;

    let entry = state.services.stats_service.record_survey(request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<SurveyEntry>>> {
    let entries = state.services.stats_service.list_surveys().await?;
    Ok(Json(entries))
}

async fn summary(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<SurveySummary>> {
    let summary = state.services.stats_service.survey_summary().await?;
    Ok(Json(summary))
}
