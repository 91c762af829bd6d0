//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod registration;
pub mod organization;
pub mod sport;
pub mod event;
pub mod survey;

use serde::{Deserialize, Serialize};

// Re-export commonly used models
pub use registration::{Registration, CreateRegistrationRequest, UpdateRegistrationRequest, UpdateStatusRequest, RegistrationStatus, Role, Position, Gender, DocumentType};
pub use organization::{Organization, OrganizationKind, CreateOrganizationRequest, UpdateOrganizationRequest};
pub use sport::{Sport, SportCategory, CategoryGender, CreateSportRequest, UpdateSportRequest};
pub use event::{Event, EventStatus, CreateEventRequest, UpdateEventRequest};
pub use survey::{SurveyEntry, CreateSurveyRequest, SurveySummary};

/// A name carried in both Khmer and English scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualName {
    pub km: String,
    pub en: String,
}

impl BilingualName {
    pub fn new(km: impl Into<String>, en: impl Into<String>) -> Self {
        Self { km: km.into(), en: en.into() }
    }

    /// Pick the variant for a language code, falling back to English
    pub fn for_language(&self, lang: &str) -> &str {
        match lang {
            "km" => &self.km,
            _ => &self.en,
        }
    }
}
