//! Transport-level tests, driven through `axum_test::TestServer` against the
//! `/api/v1/schedule/solve` route. Mirrors the concrete scenarios covered at
//! the library level in `schedule_solve_tests.rs`.

use std::time::Duration;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use scheduling_service::api::{create_router, AppState};
use scheduling_service::domain::solver::DriverConfig;
use serde_json::json;

fn test_server() -> TestServer {
    let state = AppState::new(DriverConfig {
        time_limit: Duration::from_secs(5),
        num_search_workers: 8,
    });
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn health_check_is_ok() {
    let server = test_server();
    let response: TestResponse = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn solve_endpoint_returns_success_for_a_solvable_instance() {
    let server = test_server();
    let request_body = json!({
        "days": 2,
        "weekdayOfDay1": 1,
        "shifts": [{"code": "A", "start": 9, "end": 17}],
        "people": [{"id": "p1", "canWork": ["A"], "monthlyMin": 0, "monthlyMax": 2}]
    });

    let response: TestResponse = server
        .post("/api/v1/schedule/solve")
        .json(&request_body)
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["shifts"]["1"]["A"], json!(["p1"]));
    assert_eq!(body["shifts"]["2"]["A"], json!(["p1"]));
    assert_eq!(body["shortages"], json!([]));
}

#[tokio::test]
async fn solve_endpoint_returns_400_for_an_uncoverable_shift() {
    let server = test_server();
    let request_body = json!({
        "days": 1,
        "shifts": [{"code": "A", "start": 9, "end": 17}, {"code": "B", "start": 17, "end": 22}],
        "people": [{"id": "p1", "canWork": ["A"]}]
    });

    let response: TestResponse = server
        .post("/api/v1/schedule/solve")
        .json(&request_body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains('B'));
}

#[tokio::test]
async fn solve_endpoint_returns_200_with_error_status_for_an_unsolvable_instance() {
    let server = test_server();
    let request_body = json!({
        "days": 4,
        "shifts": [{"code": "A", "start": 9, "end": 17}],
        "people": [{"id": "p1", "canWork": ["A"], "consecMax": 2}]
    });

    let response: TestResponse = server
        .post("/api/v1/schedule/solve")
        .json(&request_body)
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn solve_endpoint_reports_shortages() {
    let server = test_server();
    let request_body = json!({
        "days": 1,
        "shifts": [{"code": "A", "start": 9, "end": 17}],
        "people": [{"id": "p1", "canWork": ["A"]}],
        "needTemplate": {"weekday": {"9-12": 2}},
        "dayTypeByDate": ["weekday"]
    });

    let response: TestResponse = server
        .post("/api/v1/schedule/solve")
        .json(&request_body)
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "success");
    let shortages = body["shortages"].as_array().unwrap();
    assert_eq!(shortages.len(), 1);
    assert_eq!(shortages[0]["date"], 1);
    assert_eq!(shortages[0]["time_range"], "9-12");
    assert_eq!(shortages[0]["shortage_count"], 1);
}

#[tokio::test]
async fn swagger_ui_is_mounted() {
    let server = test_server();
    let response: TestResponse = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/api/v1/schedule/solve"].is_object());
}
