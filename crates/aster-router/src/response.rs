// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Templated response generation.

use aster_core::{Entity, Intent};

/// Generate the human-readable response for a processed intent.
///
/// Async so that a real dispatch call to the routed plugin can slot in
/// here later; today it only formats a template. Entities are accepted
/// but currently unused (reserved for entity-aware templating).
pub async fn generate_response(
    intent: Intent,
    _entities: &[Entity],
    plugin_id: Option<&str>,
) -> String {
    match plugin_id {
        Some(id) => format!("Processing {intent} using plugin {id}"),
        None => format!("I understand you want to {intent}. Let me help you with that."),
    }
}
