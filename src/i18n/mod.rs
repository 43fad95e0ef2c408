// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the page.
//!
//! Two layers of localized text exist on the page:
//!
//! - Static markup carries both variants in `data-en` / `data-zh` attributes;
//!   the language toggle swaps them in place.
//! - Messages generated at runtime (notifications, button feedback) come from
//!   Fluent `.ftl` files embedded in the module.
//!
//! # Features
//!
//! - Embedded translation bundles, one per [`Locale`](crate::domain::Locale)
//! - Runtime language switching
//! - Argument interpolation (`{ $label }`)
//! - Fallback to the primary locale when a message is missing

pub mod fluent;

pub use fluent::I18n;
