// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./aster.toml` > `~/.config/aster/aster.toml`
//! > `/etc/aster/aster.toml`, with environment variable overrides via the
//! `ASTER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AsterConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/aster/aster.toml` (system-wide)
/// 3. `~/.config/aster/aster.toml` (user XDG config)
/// 4. `./aster.toml` (local directory)
/// 5. `ASTER_*` environment variables
pub fn load_config() -> Result<AsterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AsterConfig::default()))
        .merge(Toml::file("/etc/aster/aster.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("aster/aster.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("aster.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AsterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AsterConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AsterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AsterConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `ASTER_GATEWAY_CORS_ALLOWED_ORIGINS`
/// must map to `gateway.cors_allowed_origins`, not `gateway.cors.allowed.origins`.
fn env_provider() -> Env {
    Env::prefixed("ASTER_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: ASTER_GATEWAY_PORT -> "gateway_port"
        let mapped = key
            .as_str()
            .replacen("agent_", "agent.", 1)
            .replacen("gateway_", "gateway.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_str_applies_overrides_over_defaults() {
        let config = load_config_from_str(
            r#"
            [agent]
            log_level = "debug"

            [gateway]
            host = "127.0.0.1"
            port = 8080
            cors_allowed_origins = ["https://app.example.com"]
            "#,
        )
        .expect("config should load");

        assert_eq!(config.agent.log_level, "debug");
        assert_eq!(config.agent.name, "aster");
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(
            config.gateway.cors_allowed_origins,
            vec!["https://app.example.com".to_string()]
        );
    }

    #[test]
    fn load_from_str_rejects_unknown_sections() {
        let result = load_config_from_str(
            r#"
            [gatway]
            port = 8080
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_config_yields_defaults() {
        let config = load_config_from_str("").expect("empty config should load");
        assert_eq!(config.gateway.port, 8000);
    }
}
