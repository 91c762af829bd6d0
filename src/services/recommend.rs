//! Event recommendation scorer
//!
//! Pure weighted scoring of events against an athlete's sport preferences
//! and registration history. Each rule contributes a fixed weight; the total
//! is bounded by the sum of all weights. Sorting is stable and descending,
//! so equal scores keep their input order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::event::{Event, EventStatus};
use crate::storage::StorageService;
use crate::utils::errors::Result;

/// Rule weights
const WEIGHT_SPORT_MATCH: f64 = 40.0;
const WEIGHT_STATUS_OPEN: f64 = 25.0;
const WEIGHT_STATUS_UPCOMING: f64 = 15.0;
const WEIGHT_STATUS_ONGOING: f64 = 10.0;
const WEIGHT_TIME_PROXIMITY: f64 = 20.0;
const WEIGHT_HISTORY: f64 = 15.0;

/// Upper bound on any score
pub const MAX_SCORE: f64 =
    WEIGHT_SPORT_MATCH + WEIGHT_STATUS_OPEN + WEIGHT_TIME_PROXIMITY + WEIGHT_HISTORY;

/// Full proximity weight inside this horizon, decaying to zero at the far one
const NEAR_HORIZON_DAYS: i64 = 30;
const FAR_HORIZON_DAYS: i64 = 90;

/// The athlete's preferences and history, as submitted by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Sports the athlete wants to compete in
    #[serde(default)]
    pub preferred_sports: Vec<Uuid>,
    /// Sports from the athlete's past registrations
    #[serde(default)]
    pub registered_sports: Vec<Uuid>,
}

/// An event with its computed score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredEvent {
    pub event: Event,
    pub score: f64,
}

/// Score a single event against a profile
pub fn score_event(profile: &AthleteProfile, event: &Event, today: NaiveDate) -> f64 {
    let mut score = 0.0;

    if event
        .sports
        .iter()
        .any(|s| profile.preferred_sports.contains(&s.id))
    {
        score += WEIGHT_SPORT_MATCH;
    }

    score += match event.status {
        EventStatus::RegistrationOpen => WEIGHT_STATUS_OPEN,
        EventStatus::Upcoming => WEIGHT_STATUS_UPCOMING,
        EventStatus::Ongoing => WEIGHT_STATUS_ONGOING,
        EventStatus::Draft | EventStatus::Completed | EventStatus::Cancelled => 0.0,
    };

    score += time_proximity_score(event.start_date, today);

    if event
        .sports
        .iter()
        .any(|s| profile.registered_sports.contains(&s.id))
    {
        score += WEIGHT_HISTORY;
    }

    score
}

/// Full weight within the near horizon, linear decay to the far horizon,
/// nothing for events already started or too far out
fn time_proximity_score(start_date: NaiveDate, today: NaiveDate) -> f64 {
    let days_until = (start_date - today).num_days();

    if days_until < 0 || days_until >= FAR_HORIZON_DAYS {
        0.0
    } else if days_until <= NEAR_HORIZON_DAYS {
        WEIGHT_TIME_PROXIMITY
    } else {
        let range = (FAR_HORIZON_DAYS - NEAR_HORIZON_DAYS) as f64;
        WEIGHT_TIME_PROXIMITY * (FAR_HORIZON_DAYS - days_until) as f64 / range
    }
}

/// Score every event and sort descending; stable, so ties keep input order
pub fn recommend(profile: &AthleteProfile, events: Vec<Event>, today: NaiveDate) -> Vec<ScoredEvent> {
    let mut scored: Vec<ScoredEvent> = events
        .into_iter()
        .map(|event| {
            let score = score_event(profile, &event, today);
            ScoredEvent { event, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored
}

/// Recommendation service over the event collection
#[derive(Clone)]
pub struct RecommendationService {
    storage: StorageService,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(storage: StorageService) -> Self {
        Self { storage }
    }

    /// Recommend events for a profile, best first
    pub async fn recommend_events(
        &self,
        profile: &AthleteProfile,
        today: NaiveDate,
    ) -> Result<Vec<ScoredEvent>> {
        let events = self.storage.events.all().await?;
        Ok(recommend(profile, events, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sport::Sport;
    use crate::models::BilingualName;
    use chrono::Utc;
    use proptest::prelude::*;

    fn sport(id: Uuid) -> Sport {
        Sport {
            id,
            name: BilingualName::new("បាល់ទាត់", "Football"),
            categories: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn event(status: EventStatus, start: NaiveDate, sports: Vec<Sport>) -> Event {
        Event {
            id: Uuid::new_v4(),
            name: BilingualName::new("ព្រឹត្តិការណ៍", "Event"),
            start_date: start,
            end_date: start + chrono::Duration::days(7),
            location: "Phnom Penh".to_string(),
            status,
            sports,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    #[test]
    fn test_all_rules_stack_to_max() {
        let sport_id = Uuid::new_v4();
        let profile = AthleteProfile {
            preferred_sports: vec![sport_id],
            registered_sports: vec![sport_id],
        };
        let event = event(
            EventStatus::RegistrationOpen,
            today() + chrono::Duration::days(10),
            vec![sport(sport_id)],
        );

        let score = score_event(&profile, &event, today());
        assert!((score - MAX_SCORE).abs() < 1e-9);
    }

    #[test]
    fn test_no_match_scores_only_status_and_time() {
        let profile = AthleteProfile::default();
        let event = event(
            EventStatus::Upcoming,
            today() + chrono::Duration::days(120),
            vec![sport(Uuid::new_v4())],
        );

        let score = score_event(&profile, &event, today());
        assert!((score - WEIGHT_STATUS_UPCOMING).abs() < 1e-9);
    }

    #[test]
    fn test_time_proximity_decay() {
        assert_eq!(time_proximity_score(today() + chrono::Duration::days(10), today()), 20.0);
        assert_eq!(time_proximity_score(today() + chrono::Duration::days(30), today()), 20.0);

        let mid = time_proximity_score(today() + chrono::Duration::days(60), today());
        assert!(mid > 0.0 && mid < 20.0);

        assert_eq!(time_proximity_score(today() + chrono::Duration::days(90), today()), 0.0);
        assert_eq!(time_proximity_score(today() - chrono::Duration::days(1), today()), 0.0);
    }

    #[test]
    fn test_sort_is_descending_and_stable_on_ties() {
        let sport_id = Uuid::new_v4();
        let profile = AthleteProfile {
            preferred_sports: vec![sport_id],
            registered_sports: vec![],
        };

        let low_a = event(EventStatus::Completed, today() - chrono::Duration::days(200), vec![]);
        let low_b = event(EventStatus::Completed, today() - chrono::Duration::days(100), vec![]);
        let high = event(
            EventStatus::RegistrationOpen,
            today() + chrono::Duration::days(5),
            vec![sport(sport_id)],
        );

        let low_a_id = low_a.id;
        let low_b_id = low_b.id;
        let high_id = high.id;

        let ranked = recommend(&profile, vec![low_a, high, low_b], today());
        assert_eq!(ranked[0].event.id, high_id);
        // Both completed events score zero; input order is preserved
        assert_eq!(ranked[1].event.id, low_a_id);
        assert_eq!(ranked[2].event.id, low_b_id);
    }

    proptest! {
        /// Scores stay within [0, MAX_SCORE] for any day offset and status
        #[test]
        fn prop_score_is_bounded(days in -365i64..365, status_idx in 0usize..6) {
            let statuses = [
                EventStatus::Draft,
                EventStatus::RegistrationOpen,
                EventStatus::Upcoming,
                EventStatus::Ongoing,
                EventStatus::Completed,
                EventStatus::Cancelled,
            ];
            let sport_id = Uuid::new_v4();
            let profile = AthleteProfile {
                preferred_sports: vec![sport_id],
                registered_sports: vec![sport_id],
            };
            let event = event(
                statuses[status_idx],
                today() + chrono::Duration::days(days),
                vec![sport(sport_id)],
            );

            let score = score_event(&profile, &event, today());
            prop_assert!(score >= 0.0);
            prop_assert!(score <= MAX_SCORE + 1e-9);
        }
    }
}
