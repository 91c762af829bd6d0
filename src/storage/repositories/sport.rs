//! Sport repository implementation

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::models::sport::{
    CreateSportCategoryRequest, CreateSportRequest, Sport, SportCategory, UpdateSportRequest,
};
use crate::storage::store::JsonCollection;
use crate::utils::errors::{KilaHubError, Result};

fn build_categories(requests: Vec<CreateSportCategoryRequest>) -> Vec<SportCategory> {
    requests
        .into_iter()
        .map(|c| SportCategory {
            id: Uuid::new_v4(),
            name: c.name,
            gender: c.gender,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SportRepository {
    collection: Arc<JsonCollection<Sport>>,
}

impl SportRepository {
    pub fn new(collection: Arc<JsonCollection<Sport>>) -> Self {
        Self { collection }
    }

    /// Create a new sport with its categories
    pub async fn create(&self, request: CreateSportRequest) -> Result<Sport> {
        let now = Utc::now();
        let sport = Sport {
            id: Uuid::new_v4(),
            name: request.name,
            categories: build_categories(request.categories),
            created_at: now,
            updated_at: now,
        };

        let created = sport.clone();
        self.collection.mutate(move |items| items.push(sport)).await?;

        Ok(created)
    }

    /// Find sport by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Sport>> {
        Ok(self
            .collection
            .read(|items| items.iter().find(|s| s.id == id).cloned())
            .await)
    }

    /// Update sport
    pub async fn update(&self, id: Uuid, request: UpdateSportRequest) -> Result<Sport> {
        self.collection
            .mutate(move |items| {
                let sport = items
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or(KilaHubError::SportNotFound { id: id.to_string() })?;

                if let Some(name) = request.name {
                    sport.name = name;
                }
                if let Some(categories) = request.categories {
                    sport.categories = build_categories(categories);
                }
                sport.updated_at = Utc::now();

                Ok(sport.clone())
            })
            .await?
    }

    /// Delete sport
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.collection
            .mutate(move |items| {
                let before = items.len();
                items.retain(|s| s.id != id);
                if items.len() == before {
                    Err(KilaHubError::SportNotFound { id: id.to_string() })
                } else {
                    Ok(())
                }
            })
            .await?
    }

    /// All sports, in insertion order
    pub async fn all(&self) -> Result<Vec<Sport>> {
        Ok(self.collection.all().await)
    }

    /// Count total sports
    pub async fn count(&self) -> Result<usize> {
        Ok(self.collection.count().await)
    }
}
