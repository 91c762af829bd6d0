//! Registration handlers
//!
//! Public submission plus the admin review surface: listing, editing,
//! status transitions, deletion and photo upload.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::middleware::auth::AdminUser;
use crate::models::registration::{
    CreateRegistrationRequest, Registration, RegistrationStatus, Role, UpdateRegistrationRequest,
    UpdateStatusRequest,
};
use crate::storage::RegistrationFilter;
use crate::utils::errors::{KilaHubError, Result};

use super::{response_language, AppState, Page};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(get_one).put(update).delete(delete))
        .route("/:id/status", patch(update_status))
        .route("/:id/photo", post(upload_photo))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<RegistrationStatus>,
    pub event_id: Option<Uuid>,
    pub organization_id: Option<Uuid>,
    pub role: Option<Role>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Submit a registration from the public form.
///
/// Validation failures come back as one localized message per field,
/// resolved against the caller's Accept-Language.
async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateRegistrationRequest>,
) -> Response {
    let lang = response_language(&state, &headers);

    match state.services.registration_service.submit(request).await {
        Ok(registration) => (StatusCode::CREATED, Json(registration)).into_response(),
        Err(KilaHubError::Validation(errors)) => {
            let fields: HashMap<String, String> = errors
                .into_iter()
                .map(|(field, key)| {
                    let message = state.i18n.t(&key, &lang, None);
                    (field, message)
                })
                .collect();

            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "validation_failed",
                    "fields": fields,
                })),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// List registrations for admin review
async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Registration>>> {
    let filter = RegistrationFilter {
        status: query.status,
        event_id: query.event_id,
        organization_id: query.organization_id,
        role: query.role,
    };
    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(20);

    let (items, total) = state
        .services
        .registration_service
        .list(filter, page, page_size)
        .await?;

    Ok(Json(Page {
        items,
        total,
        page,
        page_size: page_size.clamp(1, 100),
    }))
}

/// Fetch a single registration
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Registration>> {
    let registration = state.services.registration_service.get(id).await?;
    Ok(Json(registration))
}

/// Admin edit of registration fields
async fn update(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRegistrationRequest>,
) -> Result<Json<Registration>> {
    let registration = state
        .services
        .registration_service
        .update(id, request, &admin.name)
        .await?;
    Ok(Json(registration))
}

/// Admin status transition
async fn update_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Registration>> {
    let registration = state
        .services
        .registration_service
        .update_status(id, request.status, &admin.name)
        .await?;
    Ok(Json(registration))
}

/// Admin delete
async fn delete(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state
        .services
        .registration_service
        .delete(id, &admin.name)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Attach a photo to a registration (multipart field "photo")
async fn upload_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Registration>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| KilaHubError::InvalidInput(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("photo") {
            continue;
        }

        let filename = field.file_name().unwrap_or("photo").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| KilaHubError::InvalidInput(format!("Failed to read photo: {}", e)))?;

        // Reject uploads for unknown registrations before writing anything
        state.services.registration_service.get(id).await?;

        let photo_url = state
            .services
            .photo_storage
            .store_photo(id, &filename, &content_type, &data)
            .await?;
        let registration = state
            .services
            .registration_service
            .attach_photo(id, photo_url)
            .await?;

        return Ok(Json(registration));
    }

    Err(KilaHubError::InvalidInput("Missing multipart field: photo".to_string()))
}
