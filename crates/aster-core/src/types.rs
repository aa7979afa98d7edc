// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the classifier, registry, and gateway.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Coarse intent category assigned to free-text input.
///
/// The wire representation is the snake_case label (`music_control`, ...),
/// which is also the string matched against plugin capability lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    MusicControl,
    CalendarManagement,
    NoteTaking,
    WeatherQuery,
    NewsQuery,
    GeneralQuery,
}

impl Intent {
    /// The snake_case label, as matched against capability strings.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Semantic type of an extracted entity span.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    MediaType,
    EventType,
}

/// A single-token span of input text tagged with a semantic type.
///
/// `start` and `end` are whitespace-token indices with `end = start + 1`;
/// `value` preserves the original (non-lowercased) token text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// Lifecycle status of a registered plugin.
///
/// Registration forces `Active` regardless of what the caller submitted,
/// so no other state can currently exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PluginStatus {
    Active,
}

/// Stored metadata for a registered plugin.
///
/// Capability order is preserved exactly as declared at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier (registry key).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Declared version string. Not parsed or validated.
    pub version: String,
    /// Free-text description.
    pub description: String,
    /// Intent labels this plugin declares it can handle.
    pub capabilities: Vec<String>,
    /// Lifecycle status, forced to `active` on registration.
    pub status: PluginStatus,
}

/// Wire payload for a plugin registration request.
///
/// `endpoint` is required on the wire but discarded: no invocation protocol
/// exists, so nothing ever dials it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRegistration {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub endpoint: String,
}

impl From<PluginRegistration> for PluginInfo {
    fn from(registration: PluginRegistration) -> Self {
        PluginInfo {
            id: registration.id,
            name: registration.name,
            version: registration.version,
            description: registration.description,
            capabilities: registration.capabilities,
            status: PluginStatus::Active,
        }
    }
}
