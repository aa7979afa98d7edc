// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory plugin registry for the Aster intent kernel.
//!
//! Provides [`MemoryRegistry`], the process-lifetime implementation of
//! [`aster_core::PluginStore`] used by the gateway. Registration records
//! plugin metadata only; no invocation protocol is implemented.

pub mod registry;

pub use registry::MemoryRegistry;
