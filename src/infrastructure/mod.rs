// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory`]: In-memory store and recording page (headless runs, tests)
//! - [`headless`]: Effect executor with a virtual clock over the memory adapters
//! - `web`: The browser binding over `web-sys` (only on `wasm32`)
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Missing DOM elements are resolved to `None` and skipped

pub mod headless;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export main types for convenience
pub use headless::{HeadlessRuntime, ScrollRequest};
pub use memory::{MemoryStore, RecordingPage};
