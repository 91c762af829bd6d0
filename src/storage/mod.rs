//! Storage module
//!
//! This module handles JSON file persistence and data access

pub mod store;
pub mod repositories;

use std::path::Path;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::utils::errors::Result;

pub use store::JsonCollection;
pub use repositories::{
    EventRepository, OrganizationRepository, RegistrationFilter, RegistrationRepository,
    SportRepository, SurveyRepository,
};

/// Storage service bundling all repositories over one data directory
#[derive(Debug, Clone)]
pub struct StorageService {
    pub registrations: RegistrationRepository,
    pub organizations: OrganizationRepository,
    pub sports: SportRepository,
    pub events: EventRepository,
    pub surveys: SurveyRepository,
}

impl StorageService {
    /// Open all collections under the configured data directory
    pub async fn open(config: &StorageConfig) -> Result<Self> {
        let data_dir = Path::new(&config.data_dir);

        Ok(Self {
            registrations: RegistrationRepository::new(Arc::new(
                JsonCollection::open(data_dir, "registrations").await?,
            )),
            organizations: OrganizationRepository::new(Arc::new(
                JsonCollection::open(data_dir, "organizations").await?,
            )),
            sports: SportRepository::new(Arc::new(
                JsonCollection::open(data_dir, "sports").await?,
            )),
            events: EventRepository::new(Arc::new(
                JsonCollection::open(data_dir, "events").await?,
            )),
            surveys: SurveyRepository::new(Arc::new(
                JsonCollection::open(data_dir, "surveys").await?,
            )),
        })
    }
}
