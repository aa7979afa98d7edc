// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent-to-plugin routing.

use aster_core::{AsterError, Entity, Intent, PluginStore};
use tracing::debug;

/// Route an intent to the first registered plugin declaring it as a
/// capability.
///
/// Returns `None` when no registered plugin can handle the intent.
/// Entities are accepted but currently unused (reserved for
/// entity-sensitive routing).
pub async fn route(
    intent: Intent,
    _entities: &[Entity],
    store: &dyn PluginStore,
) -> Result<Option<String>, AsterError> {
    let plugin_id = store.find_by_capability(intent.as_str()).await?;

    match &plugin_id {
        Some(id) => debug!(intent = %intent, plugin_id = %id, "routed intent to plugin"),
        None => debug!(intent = %intent, "no plugin registered for intent"),
    }

    Ok(plugin_id)
}
