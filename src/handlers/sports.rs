//! Sport catalog handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::middleware::auth::AdminUser;
use crate::models::sport::{CreateSportRequest, Sport, UpdateSportRequest};
use crate::utils::errors::Result;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(get_one).put(update).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(request): Json<CreateSportRequest>,
) -> Result<(StatusCode, Json<Sport>)> {
    let sport = state.services.catalog_service.create_sport(request).await?;
    Ok((StatusCode::CREATED, Json(sport)))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Sport>>> {
    let sports = state.services.catalog_service.list_sports().await?;
    Ok(Json(sports))
}

async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Sport>> {
    let sport = state.services.catalog_service.get_sport(id).await?;
    Ok(Json(sport))
}

async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSportRequest>,
) -> Result<Json<Sport>> {
    let sport = state.services.catalog_service.update_sport(id, request).await?;
    Ok(Json(sport))
}

async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.services.catalog_service.delete_sport(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
