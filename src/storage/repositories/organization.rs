//! Organization repository implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::models::organization::{CreateOrganizationRequest, Organization, UpdateOrganizationRequest};
use crate::storage::store::JsonCollection;
use crate::utils::errors::{KilaHubError, Result};

#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    collection: Arc<JsonCollection<Organization>>,
}

impl OrganizationRepository {
    pub fn new(collection: Arc<JsonCollection<Organization>>) -> Self {
        Self { collection }
    }

    /// Create a new organization
    pub async fn create(&self, request: CreateOrganizationRequest) -> Result<Organization> {
        let now = Utc::now();
        let organization = Organization {
            id: Uuid::new_v4(),
            kind: request.kind,
            name: request.name,
            created_at: now,
            updated_at: now,
        };

        let created = organization.clone();
        self.collection
            .mutate(move |items| items.push(organization))
            .await?;

        Ok(created)
    }

    /// Find organization by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>> {
        Ok(self
            .collection
            .read(|items| items.iter().find(|o| o.id == id).cloned())
            .await)
    }

    /// Update organization
    pub async fn update(&self, id: Uuid, request: UpdateOrganizationRequest) -> Result<Organization> {
        self.collection
            .mutate(move |items| {
                let organization = items
                    .iter_mut()
                    .find(|o| o.id == id)
                    .ok_or(KilaHubError::OrganizationNotFound { id: id.to_string() })?;

                if let Some(kind) = request.kind {
                    organization.kind = kind;
                }
                if let Some(name) = request.name {
                    organization.name = name;
                }
                organization.updated_at = Utc::now();

                Ok(organization.clone())
            })
            .await?
    }

    /// Delete organization
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.collection
            .mutate(move |items| {
                let before = items.len();
                items.retain(|o| o.id != id);
                if items.len() == before {
                    Err(KilaHubError::OrganizationNotFound { id: id.to_string() })
                } else {
                    Ok(())
                }
            })
            .await?
    }

    /// All organizations, in insertion order
    pub async fn all(&self) -> Result<Vec<Organization>> {
        Ok(self.collection.all().await)
    }

    /// Count total organizations
    pub async fn count(&self) -> Result<usize> {
        Ok(self.collection.count().await)
    }
}
