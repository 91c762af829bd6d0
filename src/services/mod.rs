//! Services module
//!
//! This module contains business logic services

pub mod registration;
pub mod catalog;
pub mod stats;
pub mod recommend;
pub mod upload;

// Re-export commonly used services
pub use registration::RegistrationService;
pub use catalog::CatalogService;
pub use stats::{StatsService, DashboardStats};
pub use recommend::{RecommendationService, AthleteProfile, ScoredEvent};
pub use upload::PhotoStorage;

use crate::config::settings::Settings;
use crate::storage::StorageService;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub registration_service: RegistrationService,
    pub catalog_service: CatalogService,
    pub stats_service: StatsService,
    pub recommendation_service: RecommendationService,
    pub photo_storage: PhotoStorage,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, storage: StorageService) -> Result<Self> {
        let registration_service = RegistrationService::new(storage.clone(), settings.clone());
        let catalog_service = CatalogService::new(storage.clone());
        let stats_service = StatsService::new(storage.clone());
        let recommendation_service = RecommendationService::new(storage);
        let photo_storage = PhotoStorage::new(settings.uploads);

        Ok(Self {
            registration_service,
            catalog_service,
            stats_service,
            recommendation_service,
            photo_storage,
        })
    }
}
