//! Organization handlers
//!
//! The organization list backs the public registration form's dropdown;
//! mutations are admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::middleware::auth::AdminUser;
use crate::models::organization::{
    CreateOrganizationRequest, Organization, UpdateOrganizationRequest,
};
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
    Json(request): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<Organization>)> {
    let organization = state.services.catalog_service.create_organization(request).await?;
    Ok((StatusCode::CREATED, Json(organization)))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Organization>>> {
    let organizations = state.services.catalog_service.list_organizations().await?;
    Ok(Json(organizations))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Organization>> {
    let organization = state.services.catalog_service.get_organization(id).await?;
    Ok(Json(organization))
}

async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateOrganizationRequest>,
) -> Result<Json<Organization>> {
    let organization = state
        .services
        .catalog_service
        .update_organization(id, request)
        .await?;
    Ok(Json(organization))
}

async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.services.catalog_service.delete_organization(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
