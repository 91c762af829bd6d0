//! Repository implementations
//!
//! This module contains the data access layer, one repository per
//! persisted collection.

pub mod registration;
pub mod organization;
pub mod sport;
pub mod event;
pub mod survey;

pub use registration::{RegistrationRepository, RegistrationFilter};
pub use organization::OrganizationRepository;
pub use sport::SportRepository;
pub use event::EventRepository;
pub use survey::SurveyRepository;
