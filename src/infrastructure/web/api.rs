// SPDX-License-Identifier: MPL-2.0
//! Script-facing API of the page.
//!
//! ```js
//! import init, { PageInteractions } from "./pkg/vida_showcase.js";
//! await init();
//! PageInteractions.showNotification("Hello", "success");
//! PageInteractions.switchLanguage("zh");
//! ```

use super::page::DomPage;
use super::{dispatch, with_app, with_page};
use crate::app::Message;
use crate::domain::Locale;
use crate::ui::notifications::Severity;
use wasm_bindgen::prelude::*;

/// Page operations callable from other scripts.
#[wasm_bindgen]
pub struct PageInteractions {
    _private: (),
}

#[wasm_bindgen]
impl PageInteractions {
    /// Shows `message` verbatim. `severity` is `info`, `success` or `error`;
    /// anything else is shown as `info`.
    #[wasm_bindgen(js_name = showNotification)]
    pub fn show_notification(message: String, severity: Option<String>) {
        let severity = severity
            .and_then(|name| name.parse::<Severity>().ok())
            .unwrap_or_default();
        dispatch(Message::ShowNotification {
            text: message,
            severity,
        });
    }

    /// Switches to `en` or `zh`. Unknown codes are ignored.
    #[wasm_bindgen(js_name = switchLanguage)]
    pub fn switch_language(lang: String) {
        match lang.parse::<Locale>() {
            Ok(locale) => dispatch(Message::SwitchLanguage(locale)),
            Err(err) => log::warn!("Ignoring language switch: {err}"),
        }
    }

    #[wasm_bindgen(js_name = getCurrentLanguage)]
    pub fn current_language() -> String {
        with_app(|app| app.locale())
            .unwrap_or_default()
            .code()
            .to_string()
    }

    #[wasm_bindgen(js_name = scrollToTop)]
    pub fn scroll_to_top() {
        dispatch(Message::ScrollToTop);
    }

    #[wasm_bindgen(js_name = scrollToAbstract)]
    pub fn scroll_to_abstract() {
        dispatch(Message::ScrollToAbstract);
    }

    /// Copies the BibTeX entry of the page to the clipboard.
    #[wasm_bindgen(js_name = copyBibtex)]
    pub fn copy_bibtex() {
        match with_page(DomPage::citation_text).flatten() {
            Some(text) => dispatch(Message::CopyCitation(text)),
            None => log::warn!("Citation text not found"),
        }
    }
}
