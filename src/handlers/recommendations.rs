//! Recommendation handlers

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::services::{AthleteProfile, ScoredEvent};
use crate::utils::errors::{KilaHubError, Result};

use super::AppState;

/// Score and rank events for an athlete profile, best match first
pub async fn recommend(
    State(state): State<AppState>,
    Json(profile): Json<AthleteProfile>,
) -> Result<Json<Vec<ScoredEvent>>> {
    if !state.settings.features.recommendations {
        return Err(KilaHubError::ServiceUnavailable(
            "Recommendations are disabled".to_string(),
        ));
    }

    let ranked = state
        .services
        .recommendation_service
        .recommend_events(&profile, Utc::now().date_naive())
        .await?;

    Ok(Json(ranked))
}
