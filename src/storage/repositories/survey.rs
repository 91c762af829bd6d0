//! Survey repository implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::models::survey::{CreateSurveyRequest, SurveyEntry};
use crate::storage::store::JsonCollection;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct SurveyRepository {
    collection: Arc<JsonCollection<SurveyEntry>>,
}

impl SurveyRepository {
    pub fn new(collection: Arc<JsonCollection<SurveyEntry>>) -> Self {
        Self { collection }
    }

    /// Record a survey entry
    pub async fn create(&self, request: CreateSurveyRequest) -> Result<SurveyEntry> {
        let entry = SurveyEntry {
            id: Uuid::new_v4(),
            organization_id: request.organization_id,
            sport_id: request.sport_id,
            estimated_participants: request.estimated_participants,
            contact_name: request.contact_name,
            contact_phone: request.contact_phone,
            created_at: Utc::now(),
        };

        let created = entry.clone();
        self.collection.mutate(move |items| items.push(entry)).await?;

        Ok(created)
    }

    /// All survey entries, in insertion order
    pub async fn all(&self) -> Result<Vec<SurveyEntry>> {
        Ok(self.collection.all().await)
    }

    /// Count total survey entries
    pub async fn count(&self) -> Result<usize> {
        Ok(self.collection.count().await)
    }
}
