// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` tracks every attached toast and the phase it is in. Each
//! phase change is scheduled as a deferred message; stale messages (for a
//! toast already leaving or gone) are ignored.

use super::notification::{Notification, NotificationId};
use super::toast::ToastView;
use crate::app::{Effect, Message as AppMessage};
use crate::config::Timing;
use crate::i18n::I18n;
use crate::ui::patch::Patch;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The slide-in delay elapsed.
    Entered(NotificationId),
    /// Close button pressed or auto-dismiss timer fired.
    Dismiss(NotificationId),
    /// The slide-out animation finished.
    Remove(NotificationId),
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted off-screen, waiting to slide in.
    Entering,
    /// On screen.
    Shown,
    /// Sliding out; removed when the animation ends.
    Leaving,
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    phase: Phase,
}

/// Manages attached notifications.
#[derive(Debug)]
pub struct Manager {
    /// Attached toasts, oldest first.
    entries: Vec<Entry>,
    enter_delay: Duration,
    auto_dismiss: Duration,
    exit: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(&Timing::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(timing: &Timing) -> Self {
        Self {
            entries: Vec::new(),
            enter_delay: timing.notification_enter_delay(),
            auto_dismiss: timing.notification_auto_dismiss(),
            exit: timing.notification_exit(),
        }
    }

    /// Attaches a notification and schedules its slide-in and auto-dismiss.
    ///
    /// Identical messages are not deduplicated.
    pub fn push(&mut self, notification: Notification, i18n: &I18n) -> Vec<Effect> {
        let id = notification.id();
        let view = ToastView::new(&notification, i18n);
        self.entries.push(Entry {
            notification,
            phase: Phase::Entering,
        });

        vec![
            Effect::Patch(Patch::MountToast(view)),
            Effect::after(self.enter_delay, notify(Message::Entered(id))),
            Effect::after(self.auto_dismiss, notify(Message::Dismiss(id))),
        ]
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) -> Vec<Effect> {
        match message {
            Message::Entered(id) => match self.entry_mut(*id) {
                Some(entry) if entry.phase == Phase::Entering => {
                    entry.phase = Phase::Shown;
                    vec![Effect::Patch(Patch::ToastSlide { id: *id, shown: true })]
                }
                _ => Vec::new(),
            },
            Message::Dismiss(id) => match self.entry_mut(*id) {
                Some(entry) if entry.phase != Phase::Leaving => {
                    entry.phase = Phase::Leaving;
                    vec![
                        Effect::Patch(Patch::ToastSlide { id: *id, shown: false }),
                        Effect::after(self.exit, notify(Message::Remove(*id))),
                    ]
                }
                _ => Vec::new(),
            },
            Message::Remove(id) => {
                let Some(pos) = self.entries.iter().position(|e| e.notification.id() == *id)
                else {
                    return Vec::new();
                };
                self.entries.remove(pos);
                vec![Effect::Patch(Patch::UnmountToast(*id))]
            }
        }
    }

    /// Phase of an attached toast.
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        self.entries
            .iter()
            .find(|e| e.notification.id() == id)
            .map(|e| e.phase)
    }

    /// Attached notifications, oldest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: NotificationId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.notification.id() == id)
    }
}

fn notify(message: Message) -> AppMessage {
    AppMessage::Notification(message)
}
