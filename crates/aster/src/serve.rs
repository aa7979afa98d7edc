// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `aster serve` command implementation.
//!
//! Wires the in-memory plugin registry into the gateway and serves until
//! interrupted. The registry starts empty on every boot; plugins register
//! themselves over POST /plugins.

use std::sync::Arc;

use aster_config::AsterConfig;
use aster_core::{AsterError, PluginStore};
use aster_gateway::{GatewayState, ServerConfig, start_server};
use aster_plugin::MemoryRegistry;
use tracing::info;

/// Runs the `aster serve` command.
pub async fn run_serve(config: AsterConfig) -> Result<(), AsterError> {
    init_tracing(&config.agent.log_level);

    info!(agent = %config.agent.name, "starting aster serve");

    let store: Arc<dyn PluginStore> = Arc::new(MemoryRegistry::new());
    let state = GatewayState::new(store);

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
        cors_allowed_origins: config.gateway.cors_allowed_origins.clone(),
    };

    tokio::select! {
        result = start_server(&server_config, state) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber from the configured log level.
///
/// `RUST_LOG` takes precedence when set; everything outside the workspace
/// is capped at warn.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "aster={log_level},aster_config={log_level},aster_router={log_level},\
             aster_plugin={log_level},aster_gateway={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
