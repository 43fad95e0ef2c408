// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::i18n::I18n;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value, used as the DOM id suffix.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
}

impl Severity {
    /// Class suffix, as in `notification-success`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Background color of the toast.
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "rgba(76, 175, 80, 0.95)",
            Severity::Info => "rgba(33, 150, 243, 0.95)",
            Severity::Error => "rgba(244, 67, 54, 0.95)",
        }
    }
}

impl FromStr for Severity {
    type Err = ();

    /// Unknown names fall back to [`Severity::Info`] at the call site.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a notification says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationText {
    /// An i18n key with interpolation arguments, resolved when shown.
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
    /// Text supplied verbatim (for example through the exported page API).
    Literal(String),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: NotificationText,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            text: NotificationText::Key {
                key: message_key.into(),
                args: Vec::new(),
            },
        }
    }

    /// Creates a notification showing `text` as-is.
    pub fn literal(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            text: NotificationText::Literal(text.into()),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation. Ignored on literal text.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let NotificationText::Key { args, .. } = &mut self.text {
            args.push((key.into(), value.into()));
        }
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &NotificationText {
        &self.text
    }

    /// Resolves the displayed message in the current locale.
    pub fn resolve(&self, i18n: &I18n) -> String {
        match &self.text {
            NotificationText::Literal(text) => text.clone(),
            NotificationText::Key { key, args } => {
                let args: Vec<(&str, &str)> =
                    args.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
                i18n.tr_with_args(key, &args)
            }
        }
    }
}
