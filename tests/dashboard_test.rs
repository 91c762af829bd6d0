//! Dashboard aggregation and survey endpoints

mod helpers;

use axum::http::StatusCode;
use helpers::test_context::{TestContext, ADMIN_TOKEN};
use helpers::test_data;
use serde_json::json;

async fn seed_catalog(ctx: &TestContext) -> (String, String, String) {
    let (_, organization) = ctx
        .request(
            "POST",
            "/api/organizations",
            Some(ADMIN_TOKEN),
            Some(test_data::organization_request("Siem Reap")),
        )
        .await;
    let organization_id = organization["id"].as_str().unwrap().to_string();

    let (_, sport) = ctx
        .request(
            "POST",
            "/api/sports",
            Some(ADMIN_TOKEN),
            Some(test_data::sport_request("Volleyball")),
        )
        .await;
    let sport_id = sport["id"].as_str().unwrap().to_string();

    let (_, event) = ctx
        .request(
            "POST",
            "/api/events",
            Some(ADMIN_TOKEN),
            Some(test_data::event_request(
                "Provincial Games",
                "registration_open",
                "2027-03-01",
                &[&sport_id],
            )),
        )
        .await;
    let event_id = event["id"].as_str().unwrap().to_string();

    (event_id, organization_id, sport_id)
}

async fn submit_registration(
    ctx: &TestContext,
    event_id: &str,
    organization_id: &str,
    sport_id: &str,
    document_number: &str,
) -> String {
    let mut request = test_data::registration_request(event_id, organization_id, sport_id);
    request["document_number"] = json!(document_number);

    let (status, created) = ctx
        .request("POST", "/api/registrations", None, Some(request))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    created["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_dashboard_counts_sum_to_total() {
    let ctx = TestContext::new().await;
    let (event_id, organization_id, sport_id) = seed_catalog(&ctx).await;

    let first = submit_registration(&ctx, &event_id, &organization_id, &sport_id, "111111111").await;
    let second = submit_registration(&ctx, &event_id, &organization_id, &sport_id, "222222222").await;
    submit_registration(&ctx, &event_id, &organization_id, &sport_id, "333333333").await;

    for (id, status) in [(&first, "approved"), (&second, "rejected")] {
        let (code, _) = ctx
            .request(
                "PATCH",
                &format!("/api/registrations/{}/status", id),
                Some(ADMIN_TOKEN),
                Some(json!({ "status": status })),
            )
            .await;
        assert_eq!(code, StatusCode::OK);
    }

    let (status, stats) = ctx
        .request("GET", "/api/dashboard/stats", Some(ADMIN_TOKEN), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(stats["total_registrations"], 3);
    assert_eq!(stats["by_status"]["pending"], 1);
    assert_eq!(stats["by_status"]["approved"], 1);
    assert_eq!(stats["by_status"]["rejected"], 1);

    let status_sum: u64 = stats["by_status"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(status_sum, 3);

    let role_sum: u64 = stats["by_role"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(role_sum, 3);

    // One approved of two decided
    assert!((stats["approval_rate"].as_f64().unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(stats["total_events"], 1);
    assert_eq!(stats["total_organizations"], 1);
}

#[tokio::test]
async fn test_dashboard_requires_admin() {
    let ctx = TestContext::new().await;

    let (status, _) = ctx.request("GET", "/api/dashboard/stats", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_survey_summary_totals() {
    let ctx = TestContext::new().await;
    let (_, organization_id, sport_id) = seed_catalog(&ctx).await;

    let (_, other_organization) = ctx
        .request(
            "POST",
            "/api/organizations",
            Some(ADMIN_TOKEN),
            Some(test_data::organization_request("Ministry of Defence")),
        )
        .await;
    let other_organization_id = other_organization["id"].as_str().unwrap().to_string();

    for (org, estimate) in [(&organization_id, 12), (&other_organization_id, 8)] {
        let (status, _) = ctx
            .request(
                "POST",
                "/api/surveys",
                None,
                Some(test_data::survey_request(org, &sport_id, estimate)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, summary) = ctx
        .request("GET", "/api/surveys/summary", Some(ADMIN_TOKEN), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_entries"], 2);
    assert_eq!(summary["total_estimated_participants"], 20);
    assert_eq!(summary["by_organization"][&organization_id], 12);
    assert_eq!(summary["by_sport"][&sport_id], 20);
}

#[tokio::test]
async fn test_survey_rejects_bad_input() {
    let ctx = TestContext::new().await;
    let (_, organization_id, sport_id) = seed_catalog(&ctx).await;

    // Zero estimate
    let (status, _) = ctx
        .request(
            "POST",
            "/api/surveys",
            None,
            Some(test_data::survey_request(&organization_id, &sport_id, 0)),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown organization
    let unknown = uuid::Uuid::new_v4().to_string();
    let (status, _) = ctx
        .request(
            "POST",
            "/api/surveys",
            None,
            Some(test_data::survey_request(&unknown, &sport_id, 5)),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
