// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison slider.
//!
//! A slider is either idle or dragging. While dragging, pointer moves only
//! record the latest x coordinate; at most one animation frame is pending at
//! a time, and the frame turns the latest coordinate into a reveal
//! percentage.
//!
//! ```text
//! Idle ──(pointer down / touch start)──► Dragging ──(up / leave / touch end)──► Idle
//! ```

use crate::domain::ui::{Bounds, RevealPercent, SliderId};

/// Messages for a single slider.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Mouse button pressed inside the widget, with its bounds at that moment.
    PointerDown { bounds: Bounds },
    PointerEnter,
    PointerMove { x: f64 },
    PointerLeave,
    /// Finger down inside the widget, with its bounds at that moment.
    TouchStart { bounds: Bounds },
    TouchMove { x: f64 },
    TouchEnd,
    /// Pointer released anywhere in the document.
    Released,
    /// The animation frame requested by an earlier move has arrived.
    Frame,
    /// Fresh bounds after a resize or a carousel page change.
    Measured(Bounds),
}

/// What the owner has to do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Request one animation frame and deliver [`Message::Frame`] from it.
    RequestFrame,
    /// Render the divider at this percentage.
    Render(RevealPercent),
    /// Remove the first-use hint from this slider.
    HideHint,
}

/// State of one comparison slider.
#[derive(Debug, Clone)]
pub struct Slider {
    id: SliderId,
    percent: RevealPercent,
    dragging: bool,
    bounds: Option<Bounds>,
    pending_x: Option<f64>,
    frame_requested: bool,
    hint_visible: bool,
}

impl Slider {
    #[must_use]
    pub fn new(id: SliderId) -> Self {
        Self {
            id,
            percent: RevealPercent::default(),
            dragging: false,
            bounds: None,
            pending_x: None,
            frame_requested: false,
            hint_visible: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> SliderId {
        self.id
    }

    #[must_use]
    pub fn percent(&self) -> RevealPercent {
        self.percent
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Marks the first-use hint as displayed.
    pub fn show_hint(&mut self) {
        self.hint_visible = true;
    }

    /// Clears the first-use hint without emitting an event.
    pub fn hide_hint(&mut self) {
        self.hint_visible = false;
    }

    /// Ends any drag and drops a pending move. Used when the slider's page
    /// becomes active again.
    pub fn reset(&mut self) {
        self.dragging = false;
        self.pending_x = None;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PointerDown { bounds } => {
                self.dragging = true;
                self.bounds = Some(bounds);
                Event::None
            }
            Message::TouchStart { bounds } => {
                self.dragging = true;
                self.bounds = Some(bounds);
                self.take_hint()
            }
            Message::PointerEnter => self.take_hint(),
            Message::PointerMove { x } | Message::TouchMove { x } => {
                if !self.dragging {
                    return Event::None;
                }
                self.pending_x = Some(x);
                if self.frame_requested {
                    Event::None
                } else {
                    self.frame_requested = true;
                    Event::RequestFrame
                }
            }
            Message::PointerLeave | Message::TouchEnd | Message::Released => {
                self.dragging = false;
                Event::None
            }
            Message::Frame => {
                self.frame_requested = false;
                let Some(x) = self.pending_x.take() else {
                    return Event::None;
                };
                let Some(percent) = self.bounds.and_then(|b| RevealPercent::at_pointer(x, b))
                else {
                    return Event::None;
                };
                self.percent = percent;
                Event::Render(percent)
            }
            Message::Measured(bounds) => {
                self.bounds = Some(bounds);
                Event::Render(self.percent)
            }
        }
    }

    fn take_hint(&mut self) -> Event {
        if self.hint_visible {
            self.hint_visible = false;
            Event::HideHint
        } else {
            Event::None
        }
    }
}
