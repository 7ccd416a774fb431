// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Full request path: HTTP upload -> RoboflowClient -> stand-in provider -> normalized response

use axum::{
    body::{Body, Bytes},
    extract::Query,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use roadsign_detect::api::http_server::{create_router, AppState};
use roadsign_detect::config::DetectorConfig;
use serde_json::{json, Value};
use std::collections::HashMap;
use tower::ServiceExt;

const BOUNDARY: &str = "e2e-boundary";

/// Answers like a hosted detector, but only for the expected key
async fn provider(
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> axum::response::Response {
    if params.get("api_key").map(String::as_str) != Some("e2e-key") {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }
    if body.is_empty() {
        return (StatusCode::BAD_REQUEST, "no image").into_response();
    }

    Json(json!({
        "time": 0.05,
        "predictions": [
            {"class": "Stop", "confidence": 0.88, "x": 100, "y": 80, "width": 40, "height": 40},
            {"label": "pedestrian crossing", "score": "0.64",
             "bbox": {"x1": 10, "y1": 10, "x2": 30, "y2": 50}}
        ]
    }))
    .into_response()
}

async fn spawn_provider() -> String {
    let app = Router::new().route("/traffic-signs/2", post(provider));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/traffic-signs/2", addr)
}

fn config_for(api_url: String, api_key: &str) -> DetectorConfig {
    let vars: HashMap<&str, String> = HashMap::from([
        ("ROBOFLOW_API_URL", api_url),
        ("ROBOFLOW_API_KEY", api_key.to_string()),
        ("REQUEST_TIMEOUT", "5".to_string()),
    ]);
    DetectorConfig::from_lookup(|name: &str| vars.get(name).cloned()).unwrap()
}

fn upload_request() -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"crossing.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0, 0x01, 0x02]);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/detect")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: Router) -> (StatusCode, Value) {
    let response = app.oneshot(upload_request()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_detect_end_to_end() {
    let url = spawn_provider().await;
    let state = AppState::from_config(&config_for(url, "e2e-key")).unwrap();

    let (status, body) = send(create_router(state)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Detection successful");

    let detections = body["detections"].as_array().unwrap();
    assert_eq!(detections.len(), 2);

    assert_eq!(detections[0]["label"], "Stop");
    assert_eq!(detections[0]["x"], 100.0);

    assert_eq!(detections[1]["label"], "pedestrian crossing");
    assert_eq!(detections[1]["confidence"], 0.64);
    assert_eq!(detections[1]["x"], 20.0);
    assert_eq!(detections[1]["y"], 30.0);
    assert_eq!(detections[1]["width"], 20.0);
    assert_eq!(detections[1]["height"], 40.0);

    // Catalog lookup is case-insensitive
    assert_eq!(
        body["descriptions"][0],
        "Come to a full stop and check for traffic."
    );
    assert_eq!(body["raw"]["time"], 0.05);
}

#[tokio::test]
async fn test_detect_end_to_end_wrong_key() {
    let url = spawn_provider().await;
    let state = AppState::from_config(&config_for(url, "wrong-key")).unwrap();

    let (status, body) = send(create_router(state)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Roboflow returned 403: Forbidden");
    assert!(body["request_id"].is_string());
}
