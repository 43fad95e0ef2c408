// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the page runtime.

use crate::domain::ui::{SliderId, VersionId};
use crate::domain::Locale;
use crate::ui::carousel;
use crate::ui::citation::Round;
use crate::ui::navigation::ScrollSnapshot;
use crate::ui::notifications::{self, Severity};
use crate::ui::slider;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    /// Show a toast with verbatim text (exported page API).
    ShowNotification { text: String, severity: Severity },
    SwitchLanguage(Locale),
    Slider(SliderId, slider::Message),
    /// Mouse button released anywhere in the document.
    PointerReleased,
    /// The viewport was resized.
    Resized,
    /// The first-use hint has been on screen long enough.
    HintExpired,
    Carousel(carousel::Message),
    /// Deferred image preload of a carousel page.
    Preload(VersionId),
    Scrolled(ScrollSnapshot),
    /// A nav link was clicked; `target_top` is the offset of the section it
    /// points at, when that section exists.
    NavLinkClicked {
        href: String,
        target_top: Option<f64>,
    },
    /// Space pressed anywhere on the page.
    NextSection(ScrollSnapshot),
    ScrollToAbstract,
    ScrollToTop,
    VisibilityChanged { hidden: bool },
    /// One of the fixed outbound buttons, by element id.
    LinkClicked(String),
    ResourceClicked {
        title: String,
        anchor: Option<String>,
    },
    /// Open `url` in a new browsing context.
    OpenUrl(String),
    ResultCardClicked {
        index: usize,
        result: Option<String>,
    },
    ResultCardReleased(usize),
    /// Copy the citation text to the clipboard.
    CopyCitation(String),
    /// Outcome of the clipboard write.
    CitationCopied(Result<(), String>),
    CopyFeedbackExpired(Round),
}
