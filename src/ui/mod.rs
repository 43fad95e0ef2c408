// SPDX-License-Identifier: MPL-2.0
//! Interactive page components and their state machines.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, consumes messages and reports events. None of them touch
//! the document; visible changes are expressed as [`patch::Patch`] values.
//!
//! # Components
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`language`] - Language toggle between the two page locales
//! - [`slider`] - Before/after comparison slider with drag handling
//! - [`carousel`] - Version carousel with its transition lock
//! - [`navigation`] - Sticky navbar, scroll spy and section jumps
//! - [`links`] - Outbound buttons, resource cards and result cards
//! - [`citation`] - Copy-citation button feedback
//!
//! # Shared Infrastructure
//!
//! - [`patch`] - Declarative page changes applied through the page port

pub mod carousel;
pub mod citation;
pub mod language;
pub mod links;
pub mod navigation;
pub mod notifications;
pub mod patch;
pub mod slider;
