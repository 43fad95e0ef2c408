// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the top-right corner to confirm
//! actions (language switched, citation copied, version changed) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` driving each toast through its lifecycle
//! - [`toast`] - `ToastView`, the render model handed to the page
//!
//! # Lifecycle
//!
//! ```text
//! push ──► Entering ──(100ms)──► Shown ──(5s or close)──► Leaving ──(300ms)──► removed
//! ```
//!
//! Deferred steps are scheduled as effects and never cancelled. Each step
//! checks that the toast is still in the expected phase, so a timer firing
//! after a manual dismissal does nothing.
//!
//! # Usage
//!
//! ```
//! use vida_showcase::config::Timing;
//! use vida_showcase::i18n::I18n;
//! use vida_showcase::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new(&Timing::default());
//! let effects = manager.push(Notification::success("citation-copied"), &I18n::default());
//! assert_eq!(manager.len(), 1);
//! assert!(!effects.is_empty());
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Phase};
pub use notification::{Notification, NotificationId, NotificationText, Severity};
pub use toast::{ToastView, CLOSE_BUTTON_STYLE, CONTAINER_STYLE, CONTENT_STYLE};
