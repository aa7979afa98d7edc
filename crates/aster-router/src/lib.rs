// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification, entity extraction, and plugin routing for the
//! Aster intent kernel.
//!
//! This crate provides the pure request pipeline:
//! - [`classify`]: keyword-based intent classification (zero-cost, zero-latency)
//! - [`extract`]: vocabulary-based entity extraction with token spans
//! - [`route`]: intent-to-plugin lookup via a [`aster_core::PluginStore`]
//! - [`generate_response`]: templated response generation
//!
//! The gateway runs these stages in order for every `POST /intent` request.

pub mod classifier;
pub mod extractor;
pub mod response;
pub mod router;

pub use classifier::{INTENT_CONFIDENCE, classify};
pub use extractor::extract;
pub use response::generate_response;
pub use router::route;
