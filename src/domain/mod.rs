// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core page types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by every state machine.
//! It has no dependencies on external crates (except `std`) so the page logic
//! can be exercised without a browser.
//!
//! # Modules
//!
//! - [`locale`]: Supported display languages ([`Locale`](locale::Locale))
//! - [`ui`]: UI value objects ([`RevealPercent`](ui::RevealPercent),
//!   [`Bounds`](ui::Bounds), [`SliderId`](ui::SliderId), [`VersionId`](ui::VersionId))

pub mod locale;
pub mod ui;

pub use locale::Locale;
