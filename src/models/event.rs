//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::sport::Sport;
use super::BilingualName;

/// Where an event sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    RegistrationOpen,
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::RegistrationOpen => "registration_open",
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    /// Whether public registrations are accepted in this status
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, EventStatus::RegistrationOpen)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub name: BilingualName,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub status: EventStatus,
    /// Sports contested at this event, embedded denormalized
    pub sports: Vec<Sport>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn sport(&self, sport_id: Uuid) -> Option<&Sport> {
        self.sports.iter().find(|s| s.id == sport_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: BilingualName,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub status: Option<EventStatus>,
    /// Ids of catalog sports contested at the event
    #[serde(default)]
    pub sport_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<BilingualName>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub status: Option<EventStatus>,
    /// When present, replaces the embedded sport list
    pub sport_ids: Option<Vec<Uuid>>,
}
