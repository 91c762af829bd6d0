//! Event handlers
//!
//! Events are public to browse; creating and editing them is admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::middleware::auth::AdminUser;
use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
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
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>)> {
    let event = state.services.catalog_service.create_event(request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Event>>> {
    let events = state.services.catalog_service.list_events().await?;
    Ok(Json(events))
}

async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Event>> {
    let event = state.services.catalog_service.get_event(id).await?;
    Ok(Json(event))
}

async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<Event>> {
    let event = state.services.catalog_service.update_event(id, request).await?;
    Ok(Json(event))
}

async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.services.catalog_service.delete_event(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
