// SPDX-License-Identifier: MPL-2.0
//! Persisted page preferences.
//!
//! Two values survive across visits: the preferred locale and whether the
//! first-use slider hint was already shown. Both live in a [`KeyValueStore`]
//! under fixed keys. Storage failures are logged and otherwise ignored; the
//! page keeps working with in-memory state.

use super::port::KeyValueStore;
use crate::config::{HINT_SHOWN_VALUE, HINT_STORAGE_KEY, LOCALE_STORAGE_KEY};
use crate::domain::Locale;

/// Typed view over the preference store.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored locale; `None` when unset or not a supported locale.
    pub fn locale(&self) -> Option<Locale> {
        let raw = self.store.get(LOCALE_STORAGE_KEY)?;
        match raw.parse() {
            Ok(locale) => Some(locale),
            Err(err) => {
                log::warn!("Ignoring stored locale: {err}");
                None
            }
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if let Err(err) = self.store.set(LOCALE_STORAGE_KEY, locale.code()) {
            log::warn!("Failed to persist locale: {err}");
        }
    }

    /// Whether the slider hint has been shown on an earlier visit.
    pub fn hint_shown(&self) -> bool {
        self.store
            .get(HINT_STORAGE_KEY)
            .is_some_and(|value| !value.is_empty())
    }

    /// Records that the hint was shown. The flag is never cleared.
    pub fn mark_hint_shown(&mut self) {
        if let Err(err) = self.store.set(HINT_STORAGE_KEY, HINT_SHOWN_VALUE) {
            log::warn!("Failed to persist slider hint flag: {err}");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
