// SPDX-License-Identifier: MPL-2.0
//! Headless runtime with a virtual clock.
//!
//! [`HeadlessRuntime`] executes the effects of an [`App`] the way the
//! browser runtime does, but against a [`RecordingPage`] and with time that
//! only moves when [`HeadlessRuntime::advance`] is called. Animation frames
//! are delivered by [`HeadlessRuntime::run_frame`]. Outbound calls (window
//! navigation, scrolling, clipboard, typesetting) are recorded.

use super::memory::RecordingPage;
use crate::app::{App, Effect, Message, PageInventory};
use crate::application::port::KeyValueStore;
use crate::domain::ui::{Bounds, SliderId};
use crate::ui::slider;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

#[derive(Debug)]
struct Timer {
    due: Duration,
    seq: u64,
    message: Message,
}

/// A scroll request issued by the page logic.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollRequest {
    To(f64),
    IntoView(String),
}

/// Drives an [`App`] without a browser.
#[derive(Debug)]
pub struct HeadlessRuntime<S> {
    app: App<S>,
    page: RecordingPage,
    now: Duration,
    timers: Vec<Timer>,
    next_seq: u64,
    frames: Vec<Message>,
    slider_bounds: HashMap<SliderId, Bounds>,
    clipboard_failure: Option<String>,
    clipboard: Vec<String>,
    opened: Vec<(String, bool)>,
    scrolls: Vec<ScrollRequest>,
    typesets: usize,
}

impl<S: KeyValueStore> HeadlessRuntime<S> {
    pub fn new(app: App<S>, page: RecordingPage) -> Self {
        Self {
            app,
            page,
            now: Duration::ZERO,
            timers: Vec::new(),
            next_seq: 0,
            frames: Vec::new(),
            slider_bounds: HashMap::new(),
            clipboard_failure: None,
            clipboard: Vec::new(),
            opened: Vec::new(),
            scrolls: Vec::new(),
            typesets: 0,
        }
    }

    /// Sets the layout box reported when a slider is measured. Unset
    /// sliders measure as zero-width.
    pub fn set_slider_bounds(&mut self, id: SliderId, bounds: Bounds) {
        self.slider_bounds.insert(id, bounds);
    }

    /// Makes every following clipboard write fail with `reason`.
    pub fn fail_clipboard(&mut self, reason: impl Into<String>) {
        self.clipboard_failure = Some(reason.into());
    }

    pub fn boot(&mut self, inventory: PageInventory) {
        let effects = self.app.boot(inventory);
        self.run(effects);
    }

    /// Delivers a message now.
    pub fn dispatch(&mut self, message: Message) {
        let effects = self.app.update(message);
        self.run(effects);
    }

    /// Delivers the animation frame requested so far. Frames requested while
    /// it runs wait for the next call.
    pub fn run_frame(&mut self) {
        for message in std::mem::take(&mut self.frames) {
            self.dispatch(message);
        }
    }

    /// Moves the clock forward, firing due timers in order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        while let Some(pos) = self.next_due(target) {
            let timer = self.timers.remove(pos);
            self.now = timer.due;
            self.dispatch(timer.message);
        }
        self.now = target;
    }

    #[must_use]
    pub fn app(&self) -> &App<S> {
        &self.app
    }

    #[must_use]
    pub fn page(&self) -> &RecordingPage {
        &self.page
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Timers not fired yet.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether an animation frame is pending.
    #[must_use]
    pub fn frame_requested(&self) -> bool {
        !self.frames.is_empty()
    }

    /// URLs opened so far, with their new-context flag.
    #[must_use]
    pub fn opened(&self) -> &[(String, bool)] {
        &self.opened
    }

    #[must_use]
    pub fn scrolls(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    /// Text written to the clipboard by successful copies.
    #[must_use]
    pub fn clipboard(&self) -> &[String] {
        &self.clipboard
    }

    #[must_use]
    pub fn typeset_requests(&self) -> usize {
        self.typesets
    }

    fn next_due(&self, target: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)
    }

    fn run(&mut self, effects: Vec<Effect>) {
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Patch(patch) => patch.apply(&mut self.page),
                Effect::After { delay, message } => {
                    self.timers.push(Timer {
                        due: self.now + delay,
                        seq: self.next_seq,
                        message,
                    });
                    self.next_seq += 1;
                }
                Effect::NextFrame(message) => self.frames.push(message),
                Effect::Open { url, new_context } => self.opened.push((url, new_context)),
                Effect::ScrollTo { top } => self.scrolls.push(ScrollRequest::To(top)),
                Effect::ScrollIntoView { element_id } => {
                    self.scrolls.push(ScrollRequest::IntoView(element_id));
                }
                Effect::WriteClipboard(text) => {
                    let result = match &self.clipboard_failure {
                        Some(reason) => Err(reason.clone()),
                        None => {
                            self.clipboard.push(text);
                            Ok(())
                        }
                    };
                    queue.extend(self.app.update(Message::CitationCopied(result)));
                }
                Effect::Typeset => self.typesets += 1,
                Effect::MeasureSliders(ids) => {
                    for id in ids {
                        let bounds = self.slider_bounds.get(&id).copied().unwrap_or_default();
                        queue.extend(
                            self.app
                                .update(Message::Slider(id, slider::Message::Measured(bounds))),
                        );
                    }
                }
            }
        }
    }
}
