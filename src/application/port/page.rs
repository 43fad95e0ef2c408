// SPDX-License-Identifier: MPL-2.0
//! Rendered page port definition.
//!
//! This module defines the [`Page`] trait through which patches reach the
//! document, and the [`Target`] vocabulary naming the elements the page
//! logic cares about.

use crate::domain::ui::{SliderId, VersionId};
use crate::domain::Locale;
use crate::ui::notifications::{NotificationId, ToastView};

// =============================================================================
// Content
// =============================================================================

/// Content inserted into an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Inserted as markup.
    Markup(String),
    /// Inserted as plain text; any `<` is displayed literally.
    Text(String),
}

impl Content {
    /// Classifies a localized variant: anything containing a tag opener is
    /// treated as markup, everything else as plain text.
    #[must_use]
    pub fn detect(raw: &str) -> Self {
        if raw.contains('<') {
            Content::Markup(raw.to_string())
        } else {
            Content::Text(raw.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Content::Markup(s) | Content::Text(s) => s,
        }
    }
}

// =============================================================================
// Target
// =============================================================================

/// Side of a comparison slider label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSide {
    Left,
    Right,
}

/// Groups of cards animated with a staggered delay on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardGroup {
    Abstract,
    Result,
    Resource,
}

impl CardGroup {
    pub const ALL: [CardGroup; 3] = [CardGroup::Abstract, CardGroup::Result, CardGroup::Resource];

    /// Animation delay of the first card in the group, in seconds.
    #[must_use]
    pub fn base_delay_secs(self) -> f64 {
        match self {
            CardGroup::Abstract | CardGroup::Resource => 0.2,
            CardGroup::Result => 0.1,
        }
    }

    /// CSS selector matching the group's cards.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            CardGroup::Abstract => ".abstract-card",
            CardGroup::Result => ".result-card",
            CardGroup::Resource => ".resource-card",
        }
    }
}

/// An element (or group of elements) of the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Body,
    Navbar,
    /// Every `.nav-link`.
    NavLinks,
    /// The `.nav-link` whose `href` is this value.
    NavLink(String),
    ScrollIndicator,
    BackToTop,
    LanguageButton(Locale),
    Slider(SliderId),
    SliderAfterImage(SliderId),
    SliderHandle(SliderId),
    SliderLabel(SliderId, LabelSide),
    Carousel,
    CarouselStrip,
    VersionTab(VersionId),
    VersionIndicator(VersionId),
    CarouselPage(VersionId),
    Toast(NotificationId),
    CopyButton,
    Card(CardGroup, usize),
}

// =============================================================================
// Page Trait
// =============================================================================

/// The rendered document.
///
/// Every operation on an element that does not exist is a silent no-op.
pub trait Page {
    /// Number of nodes carrying per-locale content.
    fn localized_node_count(&self) -> usize;

    /// The content variant of a localized node for `locale`, if present.
    fn localized_variant(&self, node: usize, locale: Locale) -> Option<String>;

    /// Replaces the displayed content of a localized node.
    fn set_localized_content(&mut self, node: usize, content: &Content);

    /// Sets the document's declared language.
    fn set_document_language(&mut self, tag: &str);

    /// Adds (`enabled`) or removes a class.
    fn set_class(&mut self, target: &Target, class: &str, enabled: bool);

    /// Sets an inline style property; an empty value clears it.
    fn set_style(&mut self, target: &Target, property: &str, value: &str);

    /// Replaces the label of a control, or restores the original label when
    /// `label` is `None`.
    fn set_label(&mut self, target: &Target, label: Option<&Content>);

    /// Inserts a toast into the document.
    fn mount_toast(&mut self, toast: &ToastView);

    /// Removes a toast. Returns `false` when it was already detached.
    fn unmount_toast(&mut self, id: NotificationId) -> bool;

    /// Starts loading the not-yet-loaded images of a carousel page.
    fn load_images(&mut self, version: &VersionId);
}
