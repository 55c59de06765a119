//! Material catalog integration tests

use axum::http::{Method, StatusCode};
use serial_test::serial;
use tower::ServiceExt;

use crate::common::{json_request, parse_body, TestApp};

#[tokio::test]
#[ignore] // Requires database setup
#[serial]
async fn test_paper_types_listed_by_name_with_labels() {
    let app = TestApp::new().await.unwrap();

    let resp = app
        .router()
        .oneshot(json_request(Method::GET, "/v1/paper-types", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    let items = body.as_array().unwrap();
    let names: Vec<&str> = items.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Bond 75g", "Couché 115g", "Offset 90g"]);
    assert_eq!(items[2]["label"], "Offset 90g - $0.10/sheet");
}

#[tokio::test]
#[ignore] // Requires database setup
#[serial]
async fn test_cover_types_listed_with_labels() {
    let app = TestApp::new().await.unwrap();

    let resp = app
        .router()
        .oneshot(json_request(Method::GET, "/v1/cover-types", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = parse_body(resp).await;
    let paperback = body
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Paperback")
        .unwrap()
        .clone();
    assert_eq!(paperback["label"], "Paperback - +$2.00");
}
