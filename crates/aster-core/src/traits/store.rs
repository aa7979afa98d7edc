// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin storage trait.

use async_trait::async_trait;

use crate::error::AsterError;
use crate::types::PluginInfo;

/// Storage backend for registered plugin metadata.
///
/// The gateway depends on this trait rather than a concrete store, so the
/// in-memory registry can be replaced by a persistent backend without
/// changing the registration or routing contracts.
///
/// Implementations must keep each operation atomic with respect to the
/// others: a reader sees either the pre- or post-registration state, never
/// a partially written entry. Iteration order must be deterministic within
/// a single process run.
#[async_trait]
pub trait PluginStore: Send + Sync + 'static {
    /// Inserts or overwrites the entry keyed by `info.id`.
    ///
    /// Re-registration under an existing id replaces the record (last write
    /// wins, no merge). The stored record is returned with its status
    /// forced to `active` regardless of input.
    async fn register(&self, info: PluginInfo) -> Result<PluginInfo, AsterError>;

    /// Returns all entries, each exactly once, in the store's stable
    /// iteration order.
    async fn list(&self) -> Result<Vec<PluginInfo>, AsterError>;

    /// Returns the id of the first entry (in the same stable order) whose
    /// capability list contains `capability`, or `None` when no plugin
    /// declares it.
    ///
    /// Matching is case-sensitive exact element equality.
    async fn find_by_capability(&self, capability: &str) -> Result<Option<String>, AsterError>;
}
