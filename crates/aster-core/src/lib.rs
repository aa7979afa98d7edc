// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Aster intent kernel.
//!
//! This crate provides the error taxonomy, the shared wire and domain
//! types, and the `PluginStore` storage trait used throughout the Aster
//! workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AsterError;
pub use traits::PluginStore;
pub use types::{Entity, EntityKind, Intent, PluginInfo, PluginRegistration, PluginStatus};
