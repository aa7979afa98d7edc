// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the gateway pipeline.
//!
//! Each test builds an isolated router over a fresh in-memory registry and
//! drives it in-process with tower's `oneshot`. Tests are independent and
//! order-insensitive.

use std::sync::Arc;

use aster_gateway::{GatewayState, build_router};
use aster_plugin::MemoryRegistry;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a gateway router over an empty registry with open CORS.
fn app() -> Router {
    let state = GatewayState::new(Arc::new(MemoryRegistry::new()));
    build_router(state, &["*".to_string()])
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Option<Value>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).ok())
}

fn registration(id: &str, capabilities: &[&str]) -> Value {
    json!({
        "id": id,
        "name": format!("Plugin {id}"),
        "version": "1.0.0",
        "description": "test plugin",
        "capabilities": capabilities,
        "endpoint": "http://localhost:9001",
    })
}

// ---- Health ----

#[tokio::test]
async fn health_reports_healthy_with_monotonic_uptime() {
    let app = app();

    let (status, first) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "healthy");
    assert!(!first["version"].as_str().unwrap().is_empty());
    assert!(!first["timestamp"].as_str().unwrap().is_empty());

    let first_uptime = first["uptime"].as_f64().unwrap();
    assert!(first_uptime >= 0.0);

    let (_, second) = get(app, "/health").await;
    let second_uptime = second["uptime"].as_f64().unwrap();
    assert!(second_uptime >= first_uptime, "uptime must not decrease");
}

// ---- Intent pipeline ----

#[tokio::test]
async fn intent_priority_order_holds_when_categories_co_occur() {
    // "remember" is a note_taking keyword, but music_control is checked
    // first and must win.
    let (status, body) = post_json(
        app(),
        "/intent",
        json!({"text": "remember to play music"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["intent"], "music_control");
}

#[tokio::test]
async fn intent_without_matching_plugin_uses_fallback_response() {
    let (status, body) = post_json(
        app(),
        "/intent",
        json!({"text": "What's the weather tomorrow?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["intent"], "weather_query");
    assert_eq!(body["confidence"].as_f64().unwrap(), 0.8);
    assert!(body["plugin_id"].is_null());
    assert_eq!(
        body["response"],
        "I understand you want to weather_query. Let me help you with that."
    );
}

#[tokio::test]
async fn intent_extracts_media_entity_with_token_offsets() {
    let (_, body) = post_json(app(), "/intent", json!({"text": "play the music now"})).await;

    let body = body.unwrap();
    assert_eq!(
        body["entities"],
        json!([{"type": "media_type", "value": "music", "start": 2, "end": 3}])
    );
}

#[tokio::test]
async fn intent_extracts_event_entity_with_token_offsets() {
    let (_, body) = post_json(
        app(),
        "/intent",
        json!({"text": "schedule a meeting tomorrow"}),
    )
    .await;

    let body = body.unwrap();
    assert_eq!(body["intent"], "calendar_management");
    assert_eq!(
        body["entities"],
        json!([{"type": "event_type", "value": "meeting", "start": 2, "end": 3}])
    );
}

#[tokio::test]
async fn intent_accepts_unused_context_and_identifiers() {
    let (status, body) = post_json(
        app(),
        "/intent",
        json!({
            "text": "any news today?",
            "context": {"room": "kitchen"},
            "user_id": "u-1",
            "session_id": "s-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["intent"], "news_query");
}

#[tokio::test]
async fn intent_missing_text_is_a_client_error() {
    let (status, _) = post_json(app(), "/intent", json!({"user_id": "u-1"})).await;
    assert!(status.is_client_error());
}

// ---- Plugin registration and routing ----

#[tokio::test]
async fn plugins_list_is_empty_before_any_registration() {
    let (status, body) = get(app(), "/plugins").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn registered_plugins_are_listed_with_active_status() {
    let app = app();

    post_json(app.clone(), "/plugins", registration("p1", &["music_control"])).await;
    post_json(app.clone(), "/plugins", registration("p2", &["weather_query"])).await;

    let (_, body) = get(app, "/plugins").await;
    let plugins = body.as_array().unwrap();
    assert_eq!(plugins.len(), 2);
    assert_eq!(plugins[0]["id"], "p1");
    assert_eq!(plugins[0]["status"], "active");
    assert_eq!(plugins[0]["capabilities"], json!(["music_control"]));
    assert!(
        plugins[0].get("endpoint").is_none(),
        "endpoint must not be stored"
    );
    assert_eq!(plugins[1]["id"], "p2");
}

#[tokio::test]
async fn registration_response_echoes_stored_record() {
    let (status, body) =
        post_json(app(), "/plugins", registration("p1", &["music_control"])).await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["id"], "p1");
    assert_eq!(body["name"], "Plugin p1");
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn submitted_status_is_ignored_and_forced_active() {
    let mut payload = registration("p1", &["music_control"]);
    payload["status"] = json!("disabled");

    let (status, body) = post_json(app(), "/plugins", payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["status"], "active");
}

#[tokio::test]
async fn reregistration_overwrites_instead_of_duplicating() {
    let app = app();

    post_json(app.clone(), "/plugins", registration("p1", &["music_control"])).await;
    let mut updated = registration("p1", &["weather_query"]);
    updated["name"] = json!("Renamed");
    post_json(app.clone(), "/plugins", updated).await;

    let (_, body) = get(app, "/plugins").await;
    let plugins = body.as_array().unwrap();
    assert_eq!(plugins.len(), 1, "same id must not duplicate");
    assert_eq!(plugins[0]["name"], "Renamed");
    assert_eq!(plugins[0]["capabilities"], json!(["weather_query"]));
}

#[tokio::test]
async fn registered_capability_routes_matching_intent() {
    let app = app();

    post_json(app.clone(), "/plugins", registration("p1", &["music_control"])).await;

    let (status, body) = post_json(app, "/intent", json!({"text": "play a song"})).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["intent"], "music_control");
    assert_eq!(body["plugin_id"], "p1");
    assert_eq!(body["response"], "Processing music_control using plugin p1");
}

#[tokio::test]
async fn registration_missing_endpoint_is_a_client_error() {
    let mut payload = registration("p1", &["music_control"]);
    payload.as_object_mut().unwrap().remove("endpoint");

    let (status, _) = post_json(app(), "/plugins", payload).await;
    assert!(status.is_client_error(), "endpoint is required on the wire");
}
