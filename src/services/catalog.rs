//! Catalog service implementation
//!
//! This service manages the reference data registrations point at:
//! organizations (provinces and ministries), the sport catalog with its
//! categories, and events with their embedded sport lists.

use tracing::{info, debug};
use uuid::Uuid;

use crate::models::event::{CreateEventRequest, Event, UpdateEventRequest};
use crate::models::organization::{CreateOrganizationRequest, Organization, UpdateOrganizationRequest};
use crate::models::sport::{CreateSportRequest, Sport, UpdateSportRequest};
use crate::storage::StorageService;
use crate::utils::errors::{KilaHubError, Result};
use crate::utils::logging::log_catalog_action;

/// Catalog service for organizations, sports and events
#[derive(Clone)]
pub struct CatalogService {
    storage: StorageService,
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(storage: StorageService) -> Self {
        Self { storage }
    }

    // Organizations

    pub async fn create_organization(&self, request: CreateOrganizationRequest) -> Result<Organization> {
        let organization = self.storage.organizations.create(request).await?;
        log_catalog_action("organization", &organization.id.to_string(), "created", None);
        Ok(organization)
    }

    pub async fn get_organization(&self, id: Uuid) -> Result<Organization> {
        self.storage
            .organizations
            .find_by_id(id)
            .await?
            .ok_or(KilaHubError::OrganizationNotFound { id: id.to_string() })
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.storage.organizations.all().await
    }

    pub async fn update_organization(
        &self,
        id: Uuid,
        request: UpdateOrganizationRequest,
    ) -> Result<Organization> {
        let organization = self.storage.organizations.update(id, request).await?;
        log_catalog_action("organization", &id.to_string(), "updated", None);
        Ok(organization)
    }

    pub async fn delete_organization(&self, id: Uuid) -> Result<()> {
        self.storage.organizations.delete(id).await?;
        log_catalog_action("organization", &id.to_string(), "deleted", None);
        Ok(())
    }

    // Sports

    pub async fn create_sport(&self, request: CreateSportRequest) -> Result<Sport> {
        let sport = self.storage.sports.create(request).await?;
        log_catalog_action("sport", &sport.id.to_string(), "created", None);
        Ok(sport)
    }

    pub async fn get_sport(&self, id: Uuid) -> Result<Sport> {
        self.storage
            .sports
            .find_by_id(id)
            .await?
            .ok_or(KilaHubError::SportNotFound { id: id.to_string() })
    }

    pub async fn list_sports(&self) -> Result<Vec<Sport>> {
        self.storage.sports.all().await
    }

    pub async fn update_sport(&self, id: Uuid, request: UpdateSportRequest) -> Result<Sport> {
        let sport = self.storage.sports.update(id, request).await?;
        log_catalog_action("sport", &id.to_string(), "updated", None);
        Ok(sport)
    }

    pub async fn delete_sport(&self, id: Uuid) -> Result<()> {
        self.storage.sports.delete(id).await?;
        log_catalog_action("sport", &id.to_string(), "deleted", None);
        Ok(())
    }

    // Events

    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let sports = self.resolve_sports(&request.sport_ids).await?;
        let event = self.storage.events.create(request, sports).await?;
        log_catalog_action("event", &event.id.to_string(), "created", None);
        info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Event> {
        self.storage
            .events
            .find_by_id(id)
            .await?
            .ok_or(KilaHubError::EventNotFound { id: id.to_string() })
    }

    pub async fn list_events(&self) -> Result<Vec<Event>> {
        self.storage.events.all().await
    }

    pub async fn update_event(&self, id: Uuid, request: UpdateEventRequest) -> Result<Event> {
        let sports = match &request.sport_ids {
            Some(ids) => Some(self.resolve_sports(ids).await?),
            None => None,
        };
        let event = self.storage.events.update(id, request, sports).await?;
        log_catalog_action("event", &id.to_string(), "updated", None);
        Ok(event)
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<()> {
        self.storage.events.delete(id).await?;
        log_catalog_action("event", &id.to_string(), "deleted", None);
        Ok(())
    }

    /// Resolve sport ids against the catalog, embedding full sport records
    async fn resolve_sports(&self, sport_ids: &[Uuid]) -> Result<Vec<Sport>> {
        debug!(count = sport_ids.len(), "Resolving event sports");

        let mut sports = Vec::with_capacity(sport_ids.len());
        for id in sport_ids {
            let sport = self
                .storage
                .sports
                .find_by_id(*id)
                .await?
                .ok_or(KilaHubError::SportNotFound { id: id.to_string() })?;
            sports.push(sport);
        }

        Ok(sports)
    }
}
