// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by `App::update`.

use super::Message;
use crate::domain::ui::SliderId;
use crate::ui::patch::Patch;
use std::time::Duration;

/// Work the runtime performs on behalf of the page logic.
///
/// Deferred variants re-enter `App::update` with their message; none of them
/// can be cancelled.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Change the document.
    Patch(Patch),
    /// Deliver `message` after `delay`.
    After { delay: Duration, message: Message },
    /// Deliver `message` on the next animation frame.
    NextFrame(Message),
    /// Navigate to `url`, in a new browsing context when `new_context` is set.
    Open { url: String, new_context: bool },
    /// Smooth-scroll the window to a vertical offset.
    ScrollTo { top: f64 },
    /// Smooth-scroll the element with this id to the top of the viewport.
    ScrollIntoView { element_id: String },
    /// Write text to the clipboard; the outcome comes back as
    /// `Message::CitationCopied`.
    WriteClipboard(String),
    /// Re-typeset formulas. Failures are ignored.
    Typeset,
    /// Measure these sliders and deliver each as `slider::Message::Measured`.
    MeasureSliders(Vec<SliderId>),
}

impl Effect {
    #[must_use]
    pub fn after(delay: Duration, message: Message) -> Self {
        Effect::After { delay, message }
    }

    /// Wraps a batch of patches.
    pub fn patches(patches: impl IntoIterator<Item = Patch>) -> impl Iterator<Item = Effect> {
        patches.into_iter().map(Effect::Patch)
    }
}
