//! Dashboard aggregation service
//!
//! Pure grouping/counting over in-memory registration and survey lists,
//! plus the service wrapper that assembles the dashboard payload.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::models::registration::{Registration, RegistrationStatus};
use crate::models::survey::{CreateSurveyRequest, SurveyEntry, SurveySummary};
use crate::storage::StorageService;
use crate::utils::errors::Result;

/// Aggregated counts shown on the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_registrations: usize,
    pub by_status: HashMap<String, usize>,
    pub by_role: HashMap<String, usize>,
    pub by_sport: HashMap<String, usize>,
    pub by_organization: HashMap<String, usize>,
    /// Approved share of all decided (approved + rejected) registrations
    pub approval_rate: f64,
    pub total_events: usize,
    pub total_organizations: usize,
}

/// Count items per key; every item lands in exactly one group
pub fn count_by<T, K, F>(items: &[T], key_fn: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key_fn(item)).or_insert(0) += 1;
    }
    counts
}

/// Group registrations by lifecycle status
pub fn count_by_status(registrations: &[Registration]) -> HashMap<String, usize> {
    count_by(registrations, |r| r.status.as_str().to_string())
}

/// Group registrations by participant role
pub fn count_by_role(registrations: &[Registration]) -> HashMap<String, usize> {
    count_by(registrations, |r| r.position.role.as_str().to_string())
}

/// Group registrations by sport; entries without a sport land under "unassigned"
pub fn count_by_sport(registrations: &[Registration]) -> HashMap<String, usize> {
    count_by(registrations, |r| {
        r.position
            .sport_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unassigned".to_string())
    })
}

/// Group registrations by sending organization
pub fn count_by_organization(registrations: &[Registration]) -> HashMap<String, usize> {
    count_by(registrations, |r| r.organization_id.to_string())
}

/// Approved share of decided registrations; 0.0 when nothing is decided
pub fn approval_rate(registrations: &[Registration]) -> f64 {
    let approved = registrations
        .iter()
        .filter(|r| r.status == RegistrationStatus::Approved)
        .count();
    let rejected = registrations
        .iter()
        .filter(|r| r.status == RegistrationStatus::Rejected)
        .count();
    let decided = approved + rejected;

    if decided == 0 {
        0.0
    } else {
        approved as f64 / decided as f64
    }
}

/// Aggregate survey entries into per-organization and per-sport totals
pub fn summarize_surveys(entries: &[SurveyEntry]) -> SurveySummary {
    let mut by_organization = HashMap::new();
    let mut by_sport = HashMap::new();
    let mut total = 0u64;

    for entry in entries {
        let estimate = entry.estimated_participants as u64;
        *by_organization.entry(entry.organization_id).or_insert(0) += estimate;
        *by_sport.entry(entry.sport_id).or_insert(0) += estimate;
        total += estimate;
    }

    SurveySummary {
        total_entries: entries.len(),
        total_estimated_participants: total,
        by_organization,
        by_sport,
    }
}

/// Dashboard service assembling aggregate views for the admin UI
#[derive(Clone)]
pub struct StatsService {
    storage: StorageService,
}

impl StatsService {
    /// Create a new StatsService instance
    pub fn new(storage: StorageService) -> Self {
        Self { storage }
    }

    /// Build the dashboard statistics payload
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let registrations = self.storage.registrations.all().await?;

        Ok(DashboardStats {
            total_registrations: registrations.len(),
            by_status: count_by_status(&registrations),
            by_role: count_by_role(&registrations),
            by_sport: count_by_sport(&registrations),
            by_organization: count_by_organization(&registrations),
            approval_rate: approval_rate(&registrations),
            total_events: self.storage.events.count().await?,
            total_organizations: self.storage.organizations.count().await?,
        })
    }

    /// Record a survey entry
    pub async fn record_survey(&self, request: CreateSurveyRequest) -> Result<SurveyEntry> {
        self.storage.surveys.create(request).await
    }

    /// All recorded survey entries
    pub async fn list_surveys(&self) -> Result<Vec<SurveyEntry>> {
        self.storage.surveys.all().await
    }

    /// Build the survey summary payload
    pub async fn survey_summary(&self) -> Result<SurveySummary> {
        let entries = self.storage.surveys.all().await?;
        Ok(summarize_surveys(&entries))
    }
}
