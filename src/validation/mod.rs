//! Registration form validation
//!
//! Pure functions that check a registration form's fields against regex
//! patterns and length/date constraints. Each invalid field maps to exactly
//! one message key; the keys resolve to Khmer/English text through the i18n
//! catalog at the HTTP boundary.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::models::registration::{CreateRegistrationRequest, DocumentType, Role};

/// Field name to error message key
pub type FieldErrors = HashMap<String, String>;

const MAX_NAME_LEN: usize = 100;
const MIN_AGE_YEARS: i32 = 5;
const MAX_AGE_YEARS: i32 = 99;

static KHMER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\u{1780}-\u{17FF}\u{200B}\u{200C}\s]+$").unwrap());
static LATIN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z .'\-]*$").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\+855|0)[1-9][0-9]{7,8}$").unwrap());
static NATIONAL_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9,12}$").unwrap());
static PASSPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][0-9]{7,8}$").unwrap());
static BIRTH_CERTIFICATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{6,15}$").unwrap());

/// Validate a registration form against `today`.
///
/// Returns an empty map for a fully valid form; otherwise one error key per
/// invalid field.
pub fn validate_registration(request: &CreateRegistrationRequest, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(key) = check_khmer_name(&request.name_km) {
        errors.insert("name_km".to_string(), key);
    }
    if let Some(key) = check_latin_name(&request.name_en) {
        errors.insert("name_en".to_string(), key);
    }
    if let Some(key) = check_date_of_birth(request.date_of_birth, today) {
        errors.insert("date_of_birth".to_string(), key);
    }
    if request.gender.is_none() {
        errors.insert("gender".to_string(), "validation.gender.required".to_string());
    }
    if request.document_type.is_none() {
        errors.insert(
            "document_type".to_string(),
            "validation.document_type.required".to_string(),
        );
    }
    if let Some(key) = check_document_number(request.document_type, &request.document_number) {
        errors.insert("document_number".to_string(), key);
    }
    if let Some(key) = check_phone(&request.phone) {
        errors.insert("phone".to_string(), key);
    }
    if let Some(url) = request.photo_url.as_deref() {
        if !is_acceptable_photo_url(url) {
            errors.insert("photo_url".to_string(), "validation.photo_url.invalid".to_string());
        }
    }
    check_position(request, &mut errors);
    if request.organization_id.is_none() {
        errors.insert(
            "organization_id".to_string(),
            "validation.organization_id.required".to_string(),
        );
    }
    if request.event_id.is_none() {
        errors.insert("event_id".to_string(), "validation.event_id.required".to_string());
    }

    errors
}

fn check_khmer_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return Some("validation.name_km.required".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Some("validation.name_km.too_long".to_string());
    }
    if !KHMER_NAME.is_match(name) {
        return Some("validation.name_km.invalid_script".to_string());
    }
    None
}

fn check_latin_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return Some("validation.name_en.required".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Some("validation.name_en.too_long".to_string());
    }
    if !LATIN_NAME.is_match(name) {
        return Some("validation.name_en.invalid".to_string());
    }
    None
}

fn check_date_of_birth(date_of_birth: Option<NaiveDate>, today: NaiveDate) -> Option<String> {
    let dob = match date_of_birth {
        Some(dob) => dob,
        None => return Some("validation.date_of_birth.required".to_string()),
    };
    if dob > today {
        return Some("validation.date_of_birth.in_future".to_string());
    }
    let age = age_on(dob, today);
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age) {
        return Some("validation.date_of_birth.out_of_range".to_string());
    }
    None
}

fn check_document_number(document_type: Option<DocumentType>, number: &str) -> Option<String> {
    let number = number.trim();
    if number.is_empty() {
        return Some("validation.document_number.required".to_string());
    }
    let pattern = match document_type {
        Some(DocumentType::NationalId) => &*NATIONAL_ID,
        Some(DocumentType::Passport) => &*PASSPORT,
        Some(DocumentType::BirthCertificate) => &*BIRTH_CERTIFICATE,
        // Pattern check needs a document type; its absence is reported separately
        None => return None,
    };
    if !pattern.is_match(number) {
        return Some("validation.document_number.invalid".to_string());
    }
    None
}

fn check_phone(phone: &str) -> Option<String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Some("validation.phone.required".to_string());
    }
    if !PHONE.is_match(phone) {
        return Some("validation.phone.invalid".to_string());
    }
    None
}

fn is_acceptable_photo_url(url: &str) -> bool {
    url.starts_with('/') || Url::parse(url).is_ok()
}

fn check_position(request: &CreateRegistrationRequest, errors: &mut FieldErrors) {
    let role = match request.role {
        Some(role) => role,
        None => {
            errors.insert("role".to_string(), "validation.role.required".to_string());
            return;
        }
    };

    match role {
        Role::Athlete | Role::Coach => {
            if request.sport_id.is_none() {
                errors.insert("sport_id".to_string(), "validation.sport_id.required".to_string());
            }
        }
        Role::Official => {
            if request.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
                errors.insert("title".to_string(), "validation.title.required".to_string());
            }
        }
        Role::Medical => {}
    }
}

/// Whole years between a birth date and `today`
fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.years_since(date_of_birth).unwrap_or(0) as i32;
    if date_of_birth > today {
        age = -1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registration::Gender;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    fn valid_request() -> CreateRegistrationRequest {
        CreateRegistrationRequest {
            name_km: "សុខ ចាន់ថា".to_string(),
            name_en: "Sok Chantha".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 3, 14),
            gender: Some(Gender::Male),
            document_type: Some(DocumentType::NationalId),
            document_number: "012345678".to_string(),
            phone: "+85512345678".to_string(),
            photo_url: None,
            role: Some(Role::Athlete),
            sport_id: Some(Uuid::new_v4()),
            category_id: None,
            title: None,
            organization_id: Some(Uuid::new_v4()),
            event_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn test_valid_form_produces_empty_error_map() {
        let errors = validate_registration(&valid_request(), today());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_every_required_field_reports_its_key() {
        let request = CreateRegistrationRequest {
            name_km: String::new(),
            name_en: String::new(),
            date_of_birth: None,
            gender: None,
            document_type: None,
            document_number: String::new(),
            phone: String::new(),
            photo_url: None,
            role: None,
            sport_id: None,
            category_id: None,
            title: None,
            organization_id: None,
            event_id: None,
        };

        let errors = validate_registration(&request, today());
        for field in [
            "name_km",
            "name_en",
            "date_of_birth",
            "gender",
            "document_type",
            "document_number",
            "phone",
            "role",
            "organization_id",
            "event_id",
        ] {
            assert_eq!(
                errors.get(field).map(String::as_str),
                Some(format!("validation.{}.required", field).as_str()),
                "missing error for {}",
                field
            );
        }
    }

    #[test]
    fn test_one_error_per_invalid_field() {
        let mut request = valid_request();
        request.name_km = "Latin Name".to_string();
        request.phone = "12345".to_string();

        let errors = validate_registration(&request, today());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name_km"], "validation.name_km.invalid_script");
        assert_eq!(errors["phone"], "validation.phone.invalid");
    }

    #[test]
    fn test_khmer_name_rejects_latin_script() {
        let mut request = valid_request();
        request.name_km = "Sok Chantha".to_string();
        let errors = validate_registration(&request, today());
        assert_eq!(errors["name_km"], "validation.name_km.invalid_script");
    }

    #[test]
    fn test_latin_name_rejects_khmer_script() {
        let mut request = valid_request();
        request.name_en = "សុខ".to_string();
        let errors = validate_registration(&request, today());
        assert_eq!(errors["name_en"], "validation.name_en.invalid");
    }

    #[test]
    fn test_date_of_birth_bounds() {
        let mut request = valid_request();
        request.date_of_birth = NaiveDate::from_ymd_opt(2030, 1, 1);
        let errors = validate_registration(&request, today());
        assert_eq!(errors["date_of_birth"], "validation.date_of_birth.in_future");

        request.date_of_birth = NaiveDate::from_ymd_opt(2024, 1, 1);
        let errors = validate_registration(&request, today());
        assert_eq!(errors["date_of_birth"], "validation.date_of_birth.out_of_range");

        request.date_of_birth = NaiveDate::from_ymd_opt(1900, 1, 1);
        let errors = validate_registration(&request, today());
        assert_eq!(errors["date_of_birth"], "validation.date_of_birth.out_of_range");
    }

    #[test]
    fn test_document_number_patterns() {
        let mut request = valid_request();

        request.document_type = Some(DocumentType::NationalId);
        request.document_number = "12345".to_string();
        let errors = validate_registration(&request, today());
        assert_eq!(errors["document_number"], "validation.document_number.invalid");

        request.document_type = Some(DocumentType::Passport);
        request.document_number = "N1234567".to_string();
        assert!(validate_registration(&request, today()).is_empty());

        request.document_number = "n1234567".to_string();
        let errors = validate_registration(&request, today());
        assert_eq!(errors["document_number"], "validation.document_number.invalid");

        request.document_type = Some(DocumentType::BirthCertificate);
        request.document_number = "BC20260701".to_string();
        assert!(validate_registration(&request, today()).is_empty());
    }

    #[test]
    fn test_phone_formats() {
        let mut request = valid_request();

        for phone in ["+85512345678", "012345678", "0123456789"] {
            request.phone = phone.to_string();
            assert!(
                validate_registration(&request, today()).is_empty(),
                "expected {} to be valid",
                phone
            );
        }

        for phone in ["85512345678", "+8551234", "abc", "00123456789"] {
            request.phone = phone.to_string();
            let errors = validate_registration(&request, today());
            assert!(errors.contains_key("phone"), "expected {} to be invalid", phone);
        }
    }

    #[test]
    fn test_role_specific_fields() {
        let mut request = valid_request();
        request.role = Some(Role::Athlete);
        request.sport_id = None;
        let errors = validate_registration(&request, today());
        assert_eq!(errors["sport_id"], "validation.sport_id.required");

        let mut request = valid_request();
        request.role = Some(Role::Official);
        request.title = None;
        let errors = validate_registration(&request, today());
        assert_eq!(errors["title"], "validation.title.required");

        let mut request = valid_request();
        request.role = Some(Role::Medical);
        request.sport_id = None;
        assert!(validate_registration(&request, today()).is_empty());
    }

    #[test]
    fn test_photo_url_accepts_paths_and_urls() {
        let mut request = valid_request();
        request.photo_url = Some("/uploads/abc.jpg".to_string());
        assert!(validate_registration(&request, today()).is_empty());

        request.photo_url = Some("https://example.org/p.jpg".to_string());
        assert!(validate_registration(&request, today()).is_empty());

        request.photo_url = Some("not a url".to_string());
        let errors = validate_registration(&request, today());
        assert_eq!(errors["photo_url"], "validation.photo_url.invalid");
    }
}
