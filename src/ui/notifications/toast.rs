// SPDX-License-Identifier: MPL-2.0
//! Render model for individual notifications.
//!
//! Toasts are the visual representation of notifications: small cards in the
//! top-right corner with a severity-colored background and a close button.
//! The page adapter turns a [`ToastView`] into DOM nodes; the message is
//! always inserted as text.

use super::notification::{Notification, NotificationId, Severity};
use crate::i18n::I18n;

/// Inline style of the toast container. The horizontal offset is driven
/// separately through [`ToastView::transform`].
pub const CONTAINER_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    backdrop-filter: blur(20px); border: 1px solid rgba(255, 255, 255, 0.2); \
    border-radius: 15px; padding: 1rem 1.5rem; z-index: 10000; color: white; \
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1); max-width: 400px; \
    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);";

/// Inline style of the row holding message and close button.
pub const CONTENT_STYLE: &str =
    "display: flex; align-items: center; justify-content: space-between; gap: 1rem;";

/// Inline style of the close button.
pub const CLOSE_BUTTON_STYLE: &str = "background: none; border: none; \
    color: rgba(255, 255, 255, 0.8); font-size: 1.1rem; cursor: pointer; \
    padding: 0.3rem; border-radius: 50%; width: 30px; height: 30px; display: flex; \
    align-items: center; justify-content: center; transition: all 0.2s ease; flex-shrink: 0;";

/// Resolved, ready-to-render toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: NotificationId,
    pub severity: Severity,
    pub message: String,
    /// Accessible name of the close button.
    pub close_label: String,
}

impl ToastView {
    pub fn new(notification: &Notification, i18n: &I18n) -> Self {
        Self {
            id: notification.id(),
            severity: notification.severity(),
            message: notification.resolve(i18n),
            close_label: i18n.tr("notification-close"),
        }
    }

    /// Class list of the container.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.severity.as_str())
    }

    /// DOM id of the container.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("notification-{}", self.id.value())
    }

    /// Horizontal offset: on screen when `shown`, parked right of it otherwise.
    #[must_use]
    pub fn transform(shown: bool) -> &'static str {
        if shown {
            "translateX(0)"
        } else {
            "translateX(400px)"
        }
    }

    #[cfg(test)]
    pub(crate) fn for_test(id: NotificationId) -> Self {
        Self {
            id,
            severity: Severity::Info,
            message: "test".to_string(),
            close_label: "Close".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Locale;

    #[test]
    fn view_resolves_message_and_close_label() {
        let i18n = I18n::new(Locale::Zh);
        let view = ToastView::new(&Notification::error("citation-copy-failed"), &i18n);
        assert_eq!(view.message, "❌ 复制引用失败。");
        assert_eq!(view.close_label, "关闭");
        assert_eq!(view.class_name(), "notification notification-error");
    }

    #[test]
    fn transform_parks_hidden_toasts_off_screen() {
        assert_eq!(ToastView::transform(false), "translateX(400px)");
        assert_eq!(ToastView::transform(true), "translateX(0)");
    }
}
