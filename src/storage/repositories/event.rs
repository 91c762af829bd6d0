//! Event repository implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::models::event::{CreateEventRequest, Event, EventStatus, UpdateEventRequest};
use crate::models::sport::Sport;
use crate::storage::store::JsonCollection;
use crate::utils::errors::{KilaHubError, Result};

#[derive(Debug, Clone)]
pub struct EventRepository {
    collection: Arc<JsonCollection<Event>>,
}

impl EventRepository {
    pub fn new(collection: Arc<JsonCollection<Event>>) -> Self {
        Self { collection }
    }

    /// Create a new event. The embedded sport list is resolved by the caller
    /// from the sport catalog.
    pub async fn create(&self, request: CreateEventRequest, sports: Vec<Sport>) -> Result<Event> {
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            name: request.name,
            start_date: request.start_date,
            end_date: request.end_date,
            location: request.location,
            status: request.status.unwrap_or(EventStatus::Draft),
            sports,
            created_at: now,
            updated_at: now,
        };

        let created = event.clone();
        self.collection.mutate(move |items| items.push(event)).await?;

        Ok(created)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        Ok(self
            .collection
            .read(|items| items.iter().find(|e| e.id == id).cloned())
            .await)
    }

    /// Update event. `sports` replaces the embedded list when present.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateEventRequest,
        sports: Option<Vec<Sport>>,
    ) -> Result<Event> {
        self.collection
            .mutate(move |items| {
                let event = items
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or(KilaHubError::EventNotFound { id: id.to_string() })?;

                if let Some(name) = request.name {
                    event.name = name;
                }
                if let Some(start_date) = request.start_date {
                    event.start_date = start_date;
                }
                if let Some(end_date) = request.end_date {
                    event.end_date = end_date;
                }
                if let Some(location) = request.location {
                    event.location = location;
                }
                if let Some(status) = request.status {
                    event.status = status;
                }
                if let Some(sports) = sports {
                    event.sports = sports;
                }
                event.updated_at = Utc::now();

                Ok(event.clone())
            })
            .await?
    }

    /// Delete event
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.collection
            .mutate(move |items| {
                let before = items.len();
                items.retain(|e| e.id != id);
                if items.len() == before {
                    Err(KilaHubError::EventNotFound { id: id.to_string() })
                } else {
                    Ok(())
                }
            })
            .await?
    }

    /// All events, in insertion order
    pub async fn all(&self) -> Result<Vec<Event>> {
        Ok(self.collection.all().await)
    }

    /// Count total events
    pub async fn count(&self) -> Result<usize> {
        Ok(self.collection.count().await)
    }
}
