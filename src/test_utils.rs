// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and page fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot,
//! and builds booted headless pages shaped like the real showcase.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::app::{App, PageInventory};
use crate::application::port::CardGroup;
use crate::config;
use crate::domain::ui::{Bounds, SliderId, VersionId};
use crate::domain::Locale;
use crate::infrastructure::{HeadlessRuntime, MemoryStore, RecordingPage};

/// Bounds reported for every fixture slider: 400px wide starting at x = 100.
pub const SLIDER_BOUNDS: Bounds = Bounds {
    left: 100.0,
    width: 400.0,
};

/// Two sliders per carousel page, four result cards, three of the others.
pub fn showcase_inventory() -> PageInventory {
    let sliders = ["v1", "v1", "v2", "v2", "pro", "pro"]
        .into_iter()
        .map(|page| Some(VersionId::from(page)))
        .collect();
    PageInventory {
        sliders,
        cards: vec![
            (CardGroup::Abstract, 3),
            (CardGroup::Result, 4),
            (CardGroup::Resource, 3),
        ],
    }
}

/// A page with a few translatable nodes.
pub fn showcase_page() -> RecordingPage {
    let mut page = RecordingPage::default();
    page.add_localized_node(&[(Locale::En, "Abstract"), (Locale::Zh, "摘要")]);
    page.add_localized_node(&[
        (Locale::En, "<strong>ViDA</strong> dataset"),
        (Locale::Zh, "<strong>ViDA</strong> 数据集"),
    ]);
    page.add_localized_node(&[(Locale::En, "Results"), (Locale::Zh, "结果")]);
    page
}

/// Boots the showcase with `store` as the persisted state.
pub fn boot_with(store: MemoryStore) -> HeadlessRuntime<MemoryStore> {
    let app = App::new(config::load_embedded(), store);
    let mut runtime = HeadlessRuntime::new(app, showcase_page());
    for i in 0..showcase_inventory().sliders.len() {
        runtime.set_slider_bounds(SliderId(i), SLIDER_BOUNDS);
    }
    runtime.boot(showcase_inventory());
    runtime
}

/// Boots the showcase for a first-time visitor.
pub fn boot() -> HeadlessRuntime<MemoryStore> {
    boot_with(MemoryStore::default())
}
