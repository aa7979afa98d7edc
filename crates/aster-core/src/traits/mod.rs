// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage trait seams for the Aster kernel.
//!
//! Traits here use `#[async_trait]` for dynamic dispatch compatibility.

pub mod store;

pub use store::PluginStore;
