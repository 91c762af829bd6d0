//! Sport and sport category models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::BilingualName;

/// Gender segmentation for a sport category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGender {
    Men,
    Women,
    Mixed,
}

/// A competition category within a sport, e.g. "Men's 65kg"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportCategory {
    pub id: Uuid,
    pub name: BilingualName,
    pub gender: CategoryGender,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sport {
    pub id: Uuid,
    pub name: BilingualName,
    pub categories: Vec<SportCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sport {
    pub fn category(&self, category_id: Uuid) -> Option<&SportCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSportRequest {
    pub name: BilingualName,
    #[serde(default)]
    pub categories: Vec<CreateSportCategoryRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSportCategoryRequest {
    pub name: BilingualName,
    pub gender: CategoryGender,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSportRequest {
    pub name: Option<BilingualName>,
    /// When present, replaces the whole category list
    pub categories: Option<Vec<CreateSportCategoryRequest>>,
}
