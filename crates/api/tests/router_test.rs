//! Router tests that never reach a live database.
//!
//! The state is wired to a disconnected pool, so every request that passes
//! validation fails at the store and must surface as a 500.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

use scholar_api::{AppState, create_router};
use scholar_core::reports::SchoolInfo;
use scholar_shared::LearningAreaPolicy;

fn app() -> Router {
    create_router(AppState::new(
        DatabaseConnection::Disconnected,
        SchoolInfo::default(),
        LearningAreaPolicy::Other,
    ))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, staff: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(staff) = staff {
        builder = builder.header("x-staff-id", staff);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_reports_degraded_database() {
    let (status, body) = send(get("/api/v1/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "down");
}

#[tokio::test]
async fn test_report_card_rejects_bad_term() {
    let (status, body) = send(get("/api/v1/students/ADM-001/report-card?term=4&year=2025")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_store_failure_is_a_server_error() {
    let (status, body) = send(get("/api/v1/students/ADM-001/report-card?term=1&year=2025")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "STORE_FAILURE");
    assert_eq!(body["message"], "An error occurred");
}

#[tokio::test]
async fn test_balance_rejects_bad_year() {
    let (status, body) = send(get("/api/v1/students/ADM-001/balance?term=1&year=0")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_payment_requires_staff_header() {
    let payment = json!({
        "admission_no": "ADM-001",
        "term": 1,
        "year": 2025,
        "amount": "1200.00",
        "payment_method": "cash"
    });

    let (status, body) = send(post_json("/api/v1/payments", None, &payment)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_payment_amount_must_be_positive() {
    let payment = json!({
        "admission_no": "ADM-001",
        "term": 1,
        "year": 2025,
        "amount": "0",
        "payment_method": "cash"
    });

    let (status, body) = send(post_json("/api/v1/payments", Some("bursar"), &payment)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "NON_POSITIVE_AMOUNT");
}

#[tokio::test]
async fn test_summary_rejects_inverted_range() {
    let (status, body) = send(get("/api/v1/finance/summary?from=2025-03-01&to=2025-01-01")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_DATE_RANGE");
}
