// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_REVEAL_PERCENT, LEFT_LABEL_HIDE_AT_PERCENT, MAX_REVEAL_PERCENT, MIN_REVEAL_PERCENT,
    RIGHT_LABEL_HIDE_AT_PERCENT,
};
use std::fmt;

// =============================================================================
// RevealPercent
// =============================================================================

/// Horizontal position of a comparison slider's divider, guaranteed to be
/// within 0%–100%.
///
/// # Example
///
/// ```
/// use vida_showcase::domain::ui::{Bounds, RevealPercent};
///
/// let bounds = Bounds::new(100.0, 200.0);
/// assert_eq!(RevealPercent::at_pointer(150.0, bounds).unwrap().value(), 25.0);
///
/// // Pointers outside the widget are clamped
/// assert_eq!(RevealPercent::at_pointer(20.0, bounds).unwrap().value(), 0.0);
/// assert_eq!(RevealPercent::at_pointer(900.0, bounds).unwrap().value(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RevealPercent(f64);

impl RevealPercent {
    /// Creates a reveal percentage, clamping the value to the valid range.
    /// Non-finite input collapses to the minimum.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self(MIN_REVEAL_PERCENT);
        }
        Self(percent.clamp(MIN_REVEAL_PERCENT, MAX_REVEAL_PERCENT))
    }

    /// Computes the percentage for a pointer at `x` over a widget.
    ///
    /// Returns `None` when the widget has no measurable width.
    #[must_use]
    pub fn at_pointer(x: f64, bounds: Bounds) -> Option<Self> {
        if !bounds.is_measurable() {
            return None;
        }
        Some(Self::new((x - bounds.left) / bounds.width * 100.0))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the left label stays clear of the divider.
    #[must_use]
    pub fn left_label_visible(self) -> bool {
        self.0 > LEFT_LABEL_HIDE_AT_PERCENT
    }

    /// Whether the right label stays clear of the divider.
    #[must_use]
    pub fn right_label_visible(self) -> bool {
        self.0 < RIGHT_LABEL_HIDE_AT_PERCENT
    }

    /// Clip path revealing the "after" image right of the divider.
    #[must_use]
    pub fn clip_path(self) -> String {
        let p = self.0;
        format!("polygon({p}% 0, 100% 0, 100% 100%, {p}% 100%)")
    }

    /// CSS `left` offset of the divider handle.
    #[must_use]
    pub fn handle_left(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for RevealPercent {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_PERCENT)
    }
}

// =============================================================================
// Bounds
// =============================================================================

/// Horizontal layout box of a widget, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Whether the box can map a pointer to a percentage.
    #[must_use]
    pub fn is_measurable(self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.left.is_finite()
    }
}

// =============================================================================
// SliderId
// =============================================================================

/// Index of a comparison slider in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(pub usize);

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slider#{}", self.0)
    }
}

// =============================================================================
// VersionId
// =============================================================================

/// Identifier of a carousel version (`data-version` / `data-page`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionId(String);

impl VersionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// =============================================================================
// DeferredSource
// =============================================================================

/// Image URL held back in `data-src` until the image is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredSource(String);

impl DeferredSource {
    /// Reads a `data-src` value. Blank values defer nothing.
    #[must_use]
    pub fn from_attribute(value: Option<String>) -> Option<Self> {
        let value = value?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
