//! Survey model
//!
//! A survey entry is a pre-registration interest poll: an organization
//! declares how many participants it expects to send for a sport.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyEntry {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub sport_id: Uuid,
    pub estimated_participants: u32,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSurveyRequest {
    pub organization_id: Uuid,
    pub sport_id: Uuid,
    pub estimated_participants: u32,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
}

/// Aggregated survey totals for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveySummary {
    pub total_entries: usize,
    pub total_estimated_participants: u64,
    pub by_organization: std::collections::HashMap<Uuid, u64>,
    pub by_sport: std::collections::HashMap<Uuid, u64>,
}
