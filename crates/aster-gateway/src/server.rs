// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use aster_core::{AsterError, PluginStore};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Plugin metadata store read by routing and the listing endpoint.
    pub store: Arc<dyn PluginStore>,
    /// Process start time for uptime calculation, captured once at startup.
    pub started_at: Instant,
}

impl GatewayState {
    /// Create gateway state over a plugin store, capturing the start time.
    pub fn new(store: Arc<dyn PluginStore>) -> Self {
        Self {
            store,
            started_at: Instant::now(),
        }
    }
}

/// Gateway server configuration (mirrors `GatewayConfig` from aster-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Allowed CORS origins; a `*` entry means fully open.
    pub cors_allowed_origins: Vec<String>,
}

/// Build the gateway router with all routes and middleware.
///
/// Routes:
/// - GET  /health  -- liveness, version, uptime
/// - POST /intent  -- classify, extract, route, respond
/// - GET  /plugins -- list registered plugins
/// - POST /plugins -- register a plugin
pub fn build_router(state: GatewayState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/intent", post(handlers::post_intent))
        .route(
            "/plugins",
            get(handlers::get_plugins).post(handlers::post_plugins),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_allowed_origins))
        .with_state(state)
}

/// Build the CORS layer from the configured origin list.
///
/// A `*` entry reproduces the reference's hard-permissive behavior; an
/// explicit list restricts origins while leaving methods and headers open.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until the task is aborted
/// or the listener fails.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), AsterError> {
    let app = build_router(state, &config.cors_allowed_origins);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AsterError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AsterError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
