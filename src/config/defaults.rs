// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the page. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: toast lifetime and animation timings
//! - **Slider**: reveal bounds, label thresholds and first-use hint
//! - **Carousel**: transition duration, swipe threshold, preloading
//! - **Navigation**: scroll offsets used by the navbar and scroll spy
//! - **Storage**: keys of the persisted preferences

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Time a toast stays on screen before it dismisses itself (in milliseconds).
pub const DEFAULT_NOTIFICATION_AUTO_DISMISS_MS: u64 = 5000;

/// Delay between mounting a toast and sliding it in (in milliseconds).
pub const DEFAULT_NOTIFICATION_ENTER_DELAY_MS: u64 = 100;

/// Duration of the slide-out animation before the node is removed (in milliseconds).
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Reveal percentage of a freshly initialized slider.
pub const DEFAULT_REVEAL_PERCENT: f64 = 50.0;

/// Lowest reveal percentage.
pub const MIN_REVEAL_PERCENT: f64 = 0.0;

/// Highest reveal percentage.
pub const MAX_REVEAL_PERCENT: f64 = 100.0;

/// The left label hides at or below this percentage.
pub const LEFT_LABEL_HIDE_AT_PERCENT: f64 = 15.0;

/// The right label hides at or above this percentage.
pub const RIGHT_LABEL_HIDE_AT_PERCENT: f64 = 85.0;

/// How long the first-use hint stays on the sliders (in milliseconds).
pub const DEFAULT_SLIDER_HINT_MS: u64 = 4000;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Duration of the page strip animation (in milliseconds).
pub const DEFAULT_CAROUSEL_TRANSITION_MS: u64 = 600;

/// Horizontal travel (in pixels) a swipe must exceed to change version.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Spacing between background preloads of inactive pages (in milliseconds).
pub const DEFAULT_PRELOAD_INTERVAL_MS: u64 = 2000;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Height compensation for the fixed navbar when jumping to a section.
pub const NAVBAR_SCROLL_OFFSET_PX: f64 = 80.0;

/// A section becomes active once scrolled within this distance of its top.
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;

/// The scroll indicator fades out past this scroll position.
pub const SCROLL_INDICATOR_HIDE_AFTER_PX: f64 = 100.0;

/// Resting opacity of the scroll indicator.
pub const SCROLL_INDICATOR_OPACITY: f64 = 0.7;

/// The back-to-top button appears past this scroll position.
pub const BACK_TO_TOP_SHOW_AFTER_PX: f64 = 300.0;

/// Sections visited in order by the space bar.
pub const SPACE_SCROLL_SECTIONS: [&str; 3] = ["abstract", "results", "code"];

// ==========================================================================
// Link and Feedback Defaults
// ==========================================================================

/// Delay before a resource card opens its link (in milliseconds).
pub const DEFAULT_RESOURCE_OPEN_DELAY_MS: u64 = 1000;

/// How long the copy button shows its confirmation (in milliseconds).
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;

/// Duration of the press animation on result cards (in milliseconds).
pub const DEFAULT_CARD_PRESS_MS: u64 = 150;

// ==========================================================================
// Storage Keys
// ==========================================================================

/// Local storage key holding the preferred locale.
pub const LOCALE_STORAGE_KEY: &str = "preferred-language";

/// Local storage key recording that the slider hint was shown.
pub const HINT_STORAGE_KEY: &str = "sliderHintShown";

/// Value written under [`HINT_STORAGE_KEY`] once the hint has been shown.
pub const HINT_SHOWN_VALUE: &str = "true";
