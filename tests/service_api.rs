//! End-to-end tests of the HTTP prediction service.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use seasonal_forecast::config::ServiceSettings;
use seasonal_forecast::service::{router, AppState, Prediction};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::new(ServiceSettings::default()))
}

fn reference_history() -> Value {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let values = [10, 20, 30, 40, 12, 22, 32, 42];
    Value::Array(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let timestamp = base + Duration::weeks(i as i64);
                json!({ "timestamp": timestamp.to_rfc3339(), "value": v })
            })
            .collect(),
    )
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_predict(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn latest_prediction_is_empty_before_any_request() {
    let app = app();
    let (status, body) = send(&app, get("/prediction")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn predict_returns_ten_weekly_periods_and_is_remembered() {
    let app = app();
    let request = json!({
        "data": reference_history(),
        "params": [{"name": "alpha", "value": 0.5}]
    });

    let (status, body) = send(&app, post_predict(request)).await;
    assert_eq!(status, StatusCode::OK);

    let prediction: Prediction = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(prediction.data.len(), 10);
    assert_eq!(
        prediction.data[0].timestamp.to_rfc3339(),
        "2024-02-26T00:00:00+00:00"
    );
    assert!((prediction.data[0].value - 15.747245206501185).abs() < 1e-9);
    assert_eq!(body["params"], json!([{"name": "alpha", "value": 0.5}]));

    let (status, latest) = send(&app, get("/prediction")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(latest, body);
}

#[tokio::test]
async fn failed_request_does_not_replace_latest_result() {
    let app = app();
    let (status, first) = send(&app, post_predict(json!({ "data": reference_history() }))).await;
    assert_eq!(status, StatusCode::OK);

    let degenerate = json!({
        "data": [
            {"timestamp": "2024-01-01", "value": 0},
            {"timestamp": "2024-01-08", "value": 0},
            {"timestamp": "2024-01-15", "value": 0},
            {"timestamp": "2024-01-22", "value": 0},
            {"timestamp": "2024-01-29", "value": 5}
        ]
    });
    let (status, body) = send(&app, post_predict(degenerate)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("degenerate series"));

    let (_, latest) = send(&app, get("/prediction")).await;
    assert_eq!(latest, first);
}

#[tokio::test]
async fn short_history_is_a_bad_request() {
    let app = app();
    let request = json!({
        "data": [
            {"timestamp": "2024-01-01", "value": 1},
            {"timestamp": "2024-01-08", "value": 2}
        ],
        "params": [{"name": "seasonLength", "value": 2}]
    });
    let (status, body) = send(&app, post_predict(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "insufficient data: need at least 3, got 2");
}

#[tokio::test]
async fn explicit_zero_season_length_is_a_bad_request() {
    let app = app();
    let request = json!({
        "data": reference_history(),
        "params": [{"name": "seasonLength", "value": 0}]
    });
    let (status, body) = send(&app, post_predict(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("season length"));
}

#[tokio::test]
async fn malformed_body_is_rejected_by_the_extractor() {
    let app = app();
    let (status, _) = send(&app, post_predict(json!({ "history": [] }))).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn health_reports_version() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
