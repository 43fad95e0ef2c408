// SPDX-License-Identifier: MPL-2.0
//! Version carousel.
//!
//! Exactly one version is active. Switching starts a transition that holds
//! a [`TransitionLock`] until the owner reports the transition finished;
//! requests arriving meanwhile are dropped, not queued.

use crate::config::{VersionConfig, SWIPE_THRESHOLD_PX};
use crate::domain::ui::VersionId;

// =============================================================================
// Transition lock
// =============================================================================

/// Proof of holding the transition lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Mutual exclusion for carousel transitions.
///
/// Each acquisition hands out a fresh [`Ticket`]; only the current ticket
/// releases the lock.
#[derive(Debug, Default)]
pub struct TransitionLock {
    held: Option<Ticket>,
    issued: u64,
}

impl TransitionLock {
    /// Takes the lock, or returns `None` while a transition holds it.
    pub fn try_acquire(&mut self) -> Option<Ticket> {
        if self.held.is_some() {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.held = Some(ticket);
        Some(ticket)
    }

    /// Releases the lock if `ticket` is the one holding it.
    pub fn release(&mut self, ticket: Ticket) -> bool {
        if self.held == Some(ticket) {
            self.held = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }
}

// =============================================================================
// Input classification
// =============================================================================

/// Direction of an adjacent-version step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    /// Maps `ArrowLeft` / `ArrowRight` to a step.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Step::Previous),
            "ArrowRight" => Some(Step::Next),
            _ => None,
        }
    }

    /// Classifies a horizontal swipe. Swiping left (start right of end)
    /// moves to the next version.
    #[must_use]
    pub fn from_swipe(start_x: f64, end_x: f64) -> Option<Self> {
        let diff = start_x - end_x;
        if diff > SWIPE_THRESHOLD_PX {
            Some(Step::Next)
        } else if diff < -SWIPE_THRESHOLD_PX {
            Some(Step::Previous)
        } else {
            None
        }
    }
}

// =============================================================================
// Carousel
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Tab or dot clicked.
    Select(VersionId),
    /// Arrow key pressed inside the preview section.
    Step(Step),
    SwipeStart { x: f64 },
    SwipeEnd { x: f64 },
    /// The transition animation finished.
    TransitionEnded(Ticket),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A transition began. The owner renders it and reports
    /// [`Message::TransitionEnded`] with `ticket` once it is over.
    Started {
        version: VersionId,
        label: String,
        offset: f64,
        ticket: Ticket,
    },
    /// The transition finished; `version`'s page is now settled.
    Settled { version: VersionId },
}

#[derive(Debug, Clone)]
struct Version {
    id: VersionId,
    label: String,
}

/// Carousel state.
#[derive(Debug)]
pub struct Carousel {
    versions: Vec<Version>,
    active: usize,
    lock: TransitionLock,
    swipe_start: Option<f64>,
}

impl Carousel {
    /// Builds the carousel over `versions` with `active` selected.
    /// An out-of-range index selects the first version.
    #[must_use]
    pub fn new(versions: &[VersionConfig], active: usize) -> Self {
        let versions: Vec<Version> = versions
            .iter()
            .map(|v| Version {
                id: VersionId::new(v.id.as_str()),
                label: v.label.clone(),
            })
            .collect();
        let active = if active < versions.len() { active } else { 0 };
        Self {
            versions,
            active,
            lock: TransitionLock::default(),
            swipe_start: None,
        }
    }

    /// The active version; `None` only for an empty carousel.
    #[must_use]
    pub fn active(&self) -> Option<&VersionId> {
        self.versions.get(self.active).map(|v| &v.id)
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Version ids in display order.
    #[must_use]
    pub fn version_ids(&self) -> Vec<VersionId> {
        self.versions.iter().map(|v| v.id.clone()).collect()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.lock.is_held()
    }

    /// Strip offset showing the active page.
    #[must_use]
    pub fn offset(&self) -> f64 {
        offset_for(self.active, self.versions.len())
    }

    /// Pages to preload after the active one, with their rank (1, 2, ...)
    /// in the preload schedule.
    #[must_use]
    pub fn preload_order(&self) -> Vec<(VersionId, u32)> {
        self.versions
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.active)
            .zip(1u32..)
            .map(|((_, v), rank)| (v.id.clone(), rank))
            .collect()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Select(version) => self.switch_to(&version),
            Message::Step(step) => self.step(step),
            Message::SwipeStart { x } => {
                self.swipe_start = Some(x);
                Event::None
            }
            Message::SwipeEnd { x } => {
                let Some(start) = self.swipe_start.take() else {
                    return Event::None;
                };
                match Step::from_swipe(start, x) {
                    Some(step) => self.step(step),
                    None => Event::None,
                }
            }
            Message::TransitionEnded(ticket) => {
                if !self.lock.release(ticket) {
                    log::debug!("Ignoring stale carousel transition {ticket:?}");
                    return Event::None;
                }
                match self.active() {
                    Some(version) => Event::Settled {
                        version: version.clone(),
                    },
                    None => Event::None,
                }
            }
        }
    }

    /// Switches to `target`. Ignored while transitioning, when `target` is
    /// already active, or when it is not a known version.
    fn switch_to(&mut self, target: &VersionId) -> Event {
        if self.lock.is_held() {
            return Event::None;
        }
        let Some(index) = self.versions.iter().position(|v| &v.id == target) else {
            log::debug!("Unknown carousel version `{target}`");
            return Event::None;
        };
        if index == self.active {
            return Event::None;
        }
        let Some(ticket) = self.lock.try_acquire() else {
            return Event::None;
        };

        self.active = index;
        let version = &self.versions[index];
        Event::Started {
            version: version.id.clone(),
            label: version.label.clone(),
            offset: self.offset(),
            ticket,
        }
    }

    fn step(&mut self, step: Step) -> Event {
        let target = match step {
            Step::Previous => self.active.checked_sub(1),
            Step::Next => Some(self.active + 1).filter(|i| *i < self.versions.len()),
        };
        match target.and_then(|i| self.versions.get(i)) {
            Some(version) => {
                let id = version.id.clone();
                self.switch_to(&id)
            }
            None => Event::None,
        }
    }
}

/// `-(index × 100 / count)`, rounded to hundredths.
fn offset_for(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let shift = index as f64 * 100.0 / count as f64;
    0.0 - (shift * 100.0).round() / 100.0
}
