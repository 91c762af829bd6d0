//! Registration repository implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::models::registration::{
    CreateRegistrationRequest, Position, Registration, RegistrationStatus, Role,
    UpdateRegistrationRequest,
};
use crate::models::{DocumentType, Gender};
use crate::storage::store::JsonCollection;
use crate::utils::errors::{KilaHubError, Result};

/// Optional filters for listing registrations
#[derive(Debug, Clone, Default)]
pub struct RegistrationFilter {
    pub status: Option<RegistrationStatus>,
    pub event_id: Option<Uuid>,
    pub organization_id: Option<Uuid>,
    pub role: Option<Role>,
}

impl RegistrationFilter {
    pub fn matches(&self, registration: &Registration) -> bool {
        if let Some(status) = self.status {
            if registration.status != status {
                return false;
            }
        }
        if let Some(event_id) = self.event_id {
            if registration.event_id != event_id {
                return false;
            }
        }
        if let Some(organization_id) = self.organization_id {
            if registration.organization_id != organization_id {
                return false;
            }
        }
        if let Some(role) = self.role {
            if registration.position.role != role {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    collection: Arc<JsonCollection<Registration>>,
}

impl RegistrationRepository {
    pub fn new(collection: Arc<JsonCollection<Registration>>) -> Self {
        Self { collection }
    }

    /// Create a new registration in pending status.
    ///
    /// The request is expected to be validated already; missing mandatory
    /// fields surface as an invalid-input error rather than a panic.
    pub async fn create(&self, request: CreateRegistrationRequest) -> Result<Registration> {
        let now = Utc::now();
        let registration = Registration {
            id: Uuid::new_v4(),
            name_km: request.name_km,
            name_en: request.name_en,
            date_of_birth: request
                .date_of_birth
                .ok_or_else(|| KilaHubError::InvalidInput("date_of_birth is required".to_string()))?,
            gender: request.gender.unwrap_or(Gender::Male),
            document_type: request.document_type.unwrap_or(DocumentType::NationalId),
            document_number: request.document_number,
            phone: request.phone,
            photo_url: request.photo_url,
            position: Position {
                role: request.role.unwrap_or(Role::Athlete),
                sport_id: request.sport_id,
                category_id: request.category_id,
                title: request.title,
            },
            organization_id: request
                .organization_id
                .ok_or_else(|| KilaHubError::InvalidInput("organization_id is required".to_string()))?,
            event_id: request
                .event_id
                .ok_or_else(|| KilaHubError::InvalidInput("event_id is required".to_string()))?,
            status: RegistrationStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let created = registration.clone();
        self.collection
            .mutate(move |items| items.push(registration))
            .await?;

        Ok(created)
    }

    /// Find registration by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Registration>> {
        Ok(self
            .collection
            .read(|items| items.iter().find(|r| r.id == id).cloned())
            .await)
    }

    /// Find a registration for the same event carrying the same document number
    pub async fn find_duplicate(
        &self,
        event_id: Uuid,
        document_number: &str,
    ) -> Result<Option<Registration>> {
        let needle = document_number.trim().to_string();
        Ok(self
            .collection
            .read(move |items| {
                items
                    .iter()
                    .find(|r| {
                        r.event_id == event_id
                            && r.status != RegistrationStatus::Cancelled
                            && r.document_number == needle
                    })
                    .cloned()
            })
            .await)
    }

    /// Update registration fields
    pub async fn update(&self, id: Uuid, request: UpdateRegistrationRequest) -> Result<Registration> {
        self.collection
            .mutate(move |items| {
                let registration = items
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(KilaHubError::RegistrationNotFound { id: id.to_string() })?;

                if let Some(name_km) = request.name_km {
                    registration.name_km = name_km;
                }
                if let Some(name_en) = request.name_en {
                    registration.name_en = name_en;
                }
                if let Some(date_of_birth) = request.date_of_birth {
                    registration.date_of_birth = date_of_birth;
                }
                if let Some(gender) = request.gender {
                    registration.gender = gender;
                }
                if let Some(document_type) = request.document_type {
                    registration.document_type = document_type;
                }
                if let Some(document_number) = request.document_number {
                    registration.document_number = document_number;
                }
                if let Some(phone) = request.phone {
                    registration.phone = phone;
                }
                if let Some(photo_url) = request.photo_url {
                    registration.photo_url = Some(photo_url);
                }
                if let Some(position) = request.position {
                    registration.position = position;
                }
                if let Some(organization_id) = request.organization_id {
                    registration.organization_id = organization_id;
                }
                if let Some(event_id) = request.event_id {
                    registration.event_id = event_id;
                }
                registration.updated_at = Utc::now();

                Ok(registration.clone())
            })
            .await?
    }

    /// Set the lifecycle status
    pub async fn set_status(&self, id: Uuid, status: RegistrationStatus) -> Result<Registration> {
        self.collection
            .mutate(move |items| {
                let registration = items
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(KilaHubError::RegistrationNotFound { id: id.to_string() })?;
                registration.status = status;
                registration.updated_at = Utc::now();
                Ok(registration.clone())
            })
            .await?
    }

    /// Record the stored photo URL
    pub async fn set_photo_url(&self, id: Uuid, photo_url: String) -> Result<Registration> {
        self.collection
            .mutate(move |items| {
                let registration = items
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(KilaHubError::RegistrationNotFound { id: id.to_string() })?;
                registration.photo_url = Some(photo_url);
                registration.updated_at = Utc::now();
                Ok(registration.clone())
            })
            .await?
    }

    /// Delete registration
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.collection
            .mutate(move |items| {
                let before = items.len();
                items.retain(|r| r.id != id);
                if items.len() == before {
                    Err(KilaHubError::RegistrationNotFound { id: id.to_string() })
                } else {
                    Ok(())
                }
            })
            .await?
    }

    /// List registrations matching a filter, newest first, with pagination
    pub async fn list(
        &self,
        filter: &RegistrationFilter,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Registration>> {
        let filter = filter.clone();
        Ok(self
            .collection
            .read(move |items| {
                let mut matching: Vec<Registration> =
                    items.iter().filter(|r| filter.matches(r)).cloned().collect();
                matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                matching.into_iter().skip(offset).take(limit).collect()
            })
            .await)
    }

    /// All registrations, in insertion order
    pub async fn all(&self) -> Result<Vec<Registration>> {
        Ok(self.collection.all().await)
    }

    /// Count total registrations
    pub async fn count(&self) -> Result<usize> {
        Ok(self.collection.count().await)
    }
}
