// SPDX-License-Identifier: MPL-2.0
//! `vida_showcase` drives the interactive parts of the ViDA-UGC project page.
//!
//! It provides notification toasts, an English/Chinese language toggle with
//! Fluent translations, before/after comparison sliders, a version carousel
//! and page navigation. The page logic is a set of platform-independent
//! state machines; on `wasm32` the `infrastructure::web` module binds them
//! to the document.

#![doc(html_root_url = "https://docs.rs/vida_showcase/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
