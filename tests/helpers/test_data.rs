//! Test data builders

use serde_json::{json, Value};

pub fn organization_request(name_en: &str) -> Value {
    json!({
        "kind": "province",
        "name": { "km": "ខេត្ត", "en": name_en }
    })
}

pub fn sport_request(name_en: &str) -> Value {
    json!({
        "name": { "km": "កីឡា", "en": name_en },
        "categories": [
            { "name": { "km": "បុរស", "en": "Men" }, "gender": "men" },
            { "name": { "km": "នារី", "en": "Women" }, "gender": "women" }
        ]
    })
}

pub fn event_request(name_en: &str, status: &str, start_date: &str, sport_ids: &[&str]) -> Value {
    json!({
        "name": { "km": "ព្រឹត្តិការណ៍", "en": name_en },
        "start_date": start_date,
        "end_date": "2027-12-31",
        "location": "Phnom Penh",
        "status": status,
        "sport_ids": sport_ids,
    })
}

pub fn registration_request(event_id: &str, organization_id: &str, sport_id: &str) -> Value {
    json!({
        "name_km": "សុខ ចាន់ថា",
        "name_en": "Sok Chantha",
        "date_of_birth": "2000-03-14",
        "gender": "male",
        "document_type": "national_id",
        "document_number": "012345678",
        "phone": "+85512345678",
        "role": "athlete",
        "sport_id": sport_id,
        "organization_id": organization_id,
        "event_id": event_id,
    })
}

pub fn survey_request(organization_id: &str, sport_id: &str, estimate: u32) -> Value {
    json!({
        "organization_id": organization_id,
        "sport_id": sport_id,
        "estimated_participants": estimate,
        "contact_name": "Dara",
        "contact_phone": "012345678",
    })
}
