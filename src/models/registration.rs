//! Registration model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Lifecycle status of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Approved => "approved",
            RegistrationStatus::Rejected => "rejected",
            RegistrationStatus::Cancelled => "cancelled",
        }
    }

    /// Allowed admin transitions. Cancelled is terminal; a rejected
    /// registration may be sent back for review.
    pub fn can_transition_to(&self, next: RegistrationStatus) -> bool {
        use RegistrationStatus::*;
        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Rejected) | (Pending, Cancelled)
                | (Approved, Cancelled)
                | (Rejected, Pending)
        )
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Participant gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Nationality document presented at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    NationalId,
    Passport,
    BirthCertificate,
}

/// Role a participant fills at the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Athlete,
    Coach,
    Official,
    Medical,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Athlete => "athlete",
            Role::Coach => "coach",
            Role::Official => "official",
            Role::Medical => "medical",
        }
    }
}

/// Role plus its role-specific sub-fields. Athletes and coaches name a
/// sport (athletes optionally a category); officials carry a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub role: Role,
    pub sport_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub name_km: String,
    pub name_en: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub document_type: DocumentType,
    pub document_number: String,
    pub phone: String,
    pub photo_url: Option<String>,
    pub position: Position,
    pub organization_id: Uuid,
    pub event_id: Uuid,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegistrationRequest {
    pub name_km: String,
    pub name_en: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub document_type: Option<DocumentType>,
    pub document_number: String,
    pub phone: String,
    pub photo_url: Option<String>,
    pub role: Option<Role>,
    pub sport_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub title: Option<String>,
    pub organization_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRegistrationRequest {
    pub name_km: Option<String>,
    pub name_en: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub document_type: Option<DocumentType>,
    pub document_number: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub position: Option<Position>,
    pub organization_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: RegistrationStatus,
}
