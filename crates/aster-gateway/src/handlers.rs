// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles GET /health, POST /intent, GET /plugins, POST /plugins.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use aster_core::{AsterError, Entity, Intent, PluginRegistration};
use aster_router::{INTENT_CONFIDENCE, classify, extract, generate_response, route};

use crate::server::GatewayState;

/// Request body for POST /intent.
#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    /// Free text to classify and route.
    pub text: String,
    /// Optional free-form context map. Accepted but not consumed by any
    /// pipeline stage.
    #[serde(default)]
    pub context: Option<serde_json::Map<String, serde_json::Value>>,
    /// Optional user identifier. Accepted but not consumed.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Optional session identifier. Accepted but not consumed.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response body for POST /intent.
#[derive(Debug, Serialize)]
pub struct IntentResponse {
    /// Assigned intent label.
    pub intent: Intent,
    /// Constant placeholder score; no scoring model exists.
    pub confidence: f32,
    /// Extracted entities in input order.
    pub entities: Vec<Entity>,
    /// Generated human-readable response.
    pub response: String,
    /// Id of the routed plugin, or null when none declares the intent.
    pub plugin_id: Option<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// ISO 8601 timestamp of this check.
    pub timestamp: String,
    /// Binary version.
    pub version: String,
    /// Seconds since process start.
    pub uptime: f64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// GET /health
///
/// Always succeeds; uptime is monotonically non-decreasing within a run.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

/// POST /intent
///
/// Runs the pipeline: classify, extract, route, generate response. The
/// pipeline is read-only on the registry, so a failure needs no rollback;
/// it is logged with the triggering input and reported as a generic 500.
pub async fn post_intent(
    State(state): State<GatewayState>,
    Json(body): Json<IntentRequest>,
) -> Response {
    info!(text = %body.text, "processing intent");

    match run_pipeline(&state, &body).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!(text = %body.text, error = %e, "intent processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// The intent pipeline behind POST /intent, in request order.
async fn run_pipeline(
    state: &GatewayState,
    request: &IntentRequest,
) -> Result<IntentResponse, AsterError> {
    let intent = classify(&request.text);
    let entities = extract(&request.text);
    let plugin_id = route(intent, &entities, state.store.as_ref()).await?;
    let response = generate_response(intent, &entities, plugin_id.as_deref()).await;

    Ok(IntentResponse {
        intent,
        confidence: INTENT_CONFIDENCE,
        entities,
        response,
        plugin_id,
    })
}

/// GET /plugins
///
/// Returns all registered plugins in the store's stable iteration order.
pub async fn get_plugins(State(state): State<GatewayState>) -> Response {
    match state.store.list().await {
        Ok(plugins) => (StatusCode::OK, Json(plugins)).into_response(),
        Err(e) => {
            error!(error = %e, "plugin listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "failed to list plugins".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// POST /plugins
///
/// Registers (or overwrites) a plugin and returns the stored record with
/// status forced to `active`. The `endpoint` field is required on the wire
/// but discarded; no dispatch call is ever made to it.
pub async fn post_plugins(
    State(state): State<GatewayState>,
    Json(body): Json<PluginRegistration>,
) -> Response {
    let plugin_id = body.id.clone();

    match state.store.register(body.into()).await {
        Ok(info) => {
            info!(plugin_id = %plugin_id, "registered plugin");
            (StatusCode::OK, Json(info)).into_response()
        }
        Err(e) => {
            error!(plugin_id = %plugin_id, error = %e, "plugin registration failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "failed to register plugin".to_string(),
                }),
            )
                .into_response()
        }
    }
}
