//! Estimate integration tests

use axum::http::{Method, StatusCode};
use rust_decimal::Decimal;
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{decimal, json_request, parse_body, TestApp};

#[tokio::test]
#[ignore] // Requires database setup
#[serial]
async fn test_reference_estimate_with_seeded_data() {
    let app = TestApp::new().await.unwrap();
    let paper = app.paper_type_id("Offset 90g").await.unwrap();
    let cover = app.cover_type_id("Paperback").await.unwrap();

    let resp = app
        .router()
        .oneshot(json_request(
            Method::POST,
            "/v1/estimates",
            Some(json!({
                "page_count": 200,
                "print_run": 1000,
                "paper_type_id": paper,
                "cover_type_id": cover
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    assert_eq!(body["sheets_per_copy"], 100);
    assert_eq!(decimal(&body["base_cost"]), Decimal::new(12000, 0));
    assert_eq!(decimal(&body["total_cost"]), Decimal::new(15660, 0));
    assert_eq!(decimal(&body["suggested_price"]), Decimal::new(21924, 0));
    assert_eq!(decimal(&body["price_per_copy"]), Decimal::new(21924, 3));
}

#[tokio::test]
#[ignore] // Requires database setup
#[serial]
async fn test_unknown_material_returns_400() {
    let app = TestApp::new().await.unwrap();
    let cover = app.cover_type_id("Paperback").await.unwrap();

    let resp = app
        .router()
        .oneshot(json_request(
            Method::POST,
            "/v1/estimates",
            Some(json!({
                "page_count": 200,
                "print_run": 1000,
                "paper_type_id": Uuid::new_v4(),
                "cover_type_id": cover
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
