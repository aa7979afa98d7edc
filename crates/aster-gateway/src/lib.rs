// SPDX-FileCopyrightText: 2026 Aster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Aster intent-routing pipeline.
//!
//! The gateway is stateless per request: the only shared state is the
//! plugin store and the process start time held in [`GatewayState`].
//! Request handling orders the pipeline as classify, extract, route,
//! respond; plugin registration writes directly to the store.

pub mod handlers;
pub mod server;

pub use server::{GatewayState, ServerConfig, build_router, start_server};
