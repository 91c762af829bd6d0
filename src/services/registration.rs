//! Registration service implementation
//!
//! This service handles registration submission, admin edits, status
//! transitions and deletion, including form validation, event eligibility
//! and the duplicate document check.

use chrono::Utc;
use tracing::{info, warn, debug};
use uuid::Uuid;

use crate::config::settings::Settings;
use crate::models::registration::{
    CreateRegistrationRequest, Registration, RegistrationStatus, UpdateRegistrationRequest,
};
use crate::storage::{RegistrationFilter, StorageService};
use crate::utils::errors::{KilaHubError, Result};
use crate::utils::logging::log_registration_action;
use crate::validation::validate_registration;

/// Registration service for managing participant entries
#[derive(Clone)]
pub struct RegistrationService {
    storage: StorageService,
    settings: Settings,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(storage: StorageService, settings: Settings) -> Self {
        Self { storage, settings }
    }

    /// Submit a new registration from the public form
    pub async fn submit(&self, request: CreateRegistrationRequest) -> Result<Registration> {
        debug!(event_id = ?request.event_id, "Submitting registration");

        let errors = validate_registration(&request, Utc::now().date_naive());
        if !errors.is_empty() {
            debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Registration failed validation");
            return Err(KilaHubError::Validation(errors));
        }

        // Validation guarantees both ids are present
        let event_id = request.event_id.unwrap_or_default();
        let organization_id = request.organization_id.unwrap_or_default();

        let event = self
            .storage
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| KilaHubError::EventNotFound { id: event_id.to_string() })?;

        if self.settings.features.enforce_event_status && !event.status.accepts_registrations() {
            warn!(event_id = %event_id, status = %event.status.as_str(), "Registration for closed event rejected");
            return Err(KilaHubError::InvalidInput(format!(
                "Event is not open for registration (status: {})",
                event.status.as_str()
            )));
        }

        if self
            .storage
            .organizations
            .find_by_id(organization_id)
            .await?
            .is_none()
        {
            return Err(KilaHubError::OrganizationNotFound { id: organization_id.to_string() });
        }

        if self.settings.features.duplicate_check {
            if let Some(existing) = self
                .storage
                .registrations
                .find_duplicate(event_id, &request.document_number)
                .await?
            {
                warn!(
                    event_id = %event_id,
                    existing_id = %existing.id,
                    "Duplicate document number for event"
                );
                return Err(KilaHubError::DuplicateDocument {
                    document_number: request.document_number,
                });
            }
        }

        let registration = self.storage.registrations.create(request).await?;
        log_registration_action(&registration.id.to_string(), "submitted", None);
        info!(registration_id = %registration.id, event_id = %event_id, "Registration submitted");

        Ok(registration)
    }

    /// Get a registration by ID
    pub async fn get(&self, id: Uuid) -> Result<Registration> {
        self.storage
            .registrations
            .find_by_id(id)
            .await?
            .ok_or(KilaHubError::RegistrationNotFound { id: id.to_string() })
    }

    /// List registrations matching a filter, paginated
    pub async fn list(
        &self,
        filter: RegistrationFilter,
        page: usize,
        page_size: usize,
    ) -> Result<(Vec<Registration>, usize)> {
        let page_size = page_size.clamp(1, 100);
        let offset = crate::utils::helpers::calculate_offset(page.max(1), page_size);

        let total = self
            .storage
            .registrations
            .all()
            .await?
            .iter()
            .filter(|r| filter.matches(r))
            .count();
        let items = self.storage.registrations.list(&filter, page_size, offset).await?;

        Ok((items, total))
    }

    /// Apply an admin edit to a registration
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRegistrationRequest,
        admin: &str,
    ) -> Result<Registration> {
        let updated = self.storage.registrations.update(id, request).await?;
        crate::utils::logging::log_admin_action(admin, "edit_registration", Some(&id.to_string()), None);

        Ok(updated)
    }

    /// Apply an admin status transition
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
        admin: &str,
    ) -> Result<Registration> {
        let current = self.get(id).await?;

        if !current.status.can_transition_to(status) {
            return Err(KilaHubError::InvalidStateTransition {
                from: current.status.to_string(),
                to: status.to_string(),
            });
        }

        let updated = self.storage.registrations.set_status(id, status).await?;
        crate::utils::logging::log_admin_action(
            admin,
            "update_status",
            Some(&id.to_string()),
            Some(status.as_str()),
        );
        info!(registration_id = %id, status = %status, "Registration status updated");

        Ok(updated)
    }

    /// Record a stored photo on the registration
    pub async fn attach_photo(&self, id: Uuid, photo_url: String) -> Result<Registration> {
        // Ensure the registration exists before the file reference is recorded
        self.get(id).await?;
        self.storage.registrations.set_photo_url(id, photo_url).await
    }

    /// Delete a registration
    pub async fn delete(&self, id: Uuid, admin: &str) -> Result<()> {
        self.storage.registrations.delete(id).await?;
        crate::utils::logging::log_admin_action(admin, "delete_registration", Some(&id.to_string()), None);

        Ok(())
    }
}
