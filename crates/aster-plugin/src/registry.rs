// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory plugin registry.
//!
//! `MemoryRegistry` stores `PluginInfo` records keyed by plugin id behind
//! a single `RwLock`, so registrations and lookups are each atomic with
//! respect to one another: readers see either the pre- or
//! post-registration state, never a partially written entry.

use std::collections::HashMap;

use async_trait::async_trait;
use aster_core::{AsterError, PluginInfo, PluginStatus, PluginStore};
use tokio::sync::RwLock;
use tracing::debug;

/// Lock-protected registry contents.
///
/// `order` holds each id once, at its first-registration position, giving
/// `list` and `find_by_capability` a stable iteration order for the
/// process lifetime. Re-registration overwrites the map entry without
/// touching `order`.
#[derive(Debug, Default)]
struct RegistryInner {
    entries: HashMap<String, PluginInfo>,
    order: Vec<String>,
}

/// In-memory `PluginStore` implementation.
///
/// Starts empty, grows monotonically (there is no deregistration), and
/// lives for the process lifetime. Swap in a persistent `PluginStore`
/// implementation to outlive restarts.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    inner: RwLock<RegistryInner>,
}

impl MemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered plugins.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

#[async_trait]
impl PluginStore for MemoryRegistry {
    async fn register(&self, mut info: PluginInfo) -> Result<PluginInfo, AsterError> {
        info.status = PluginStatus::Active;

        let mut inner = self.inner.write().await;
        if !inner.entries.contains_key(&info.id) {
            inner.order.push(info.id.clone());
        }
        inner.entries.insert(info.id.clone(), info.clone());

        debug!(plugin_id = %info.id, "stored plugin entry");
        Ok(info)
    }

    async fn list(&self) -> Result<Vec<PluginInfo>, AsterError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.entries.get(id).cloned())
            .collect())
    }

    async fn find_by_capability(&self, capability: &str) -> Result<Option<String>, AsterError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.entries.get(id))
            .find(|info| info.capabilities.iter().any(|c| c == capability))
            .map(|info| info.id.clone()))
    }
}
