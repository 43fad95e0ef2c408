// SPDX-License-Identifier: MPL-2.0
//! `localStorage` adapter.
//!
//! Values are stored as raw strings, not JSON, so they stay readable by
//! earlier versions of the page that wrote `"zh"` or `"true"` directly.

use crate::application::port::KeyValueStore;
use crate::error::{Error, Result};
use web_sys::Storage;

/// The browser's local storage. Missing or blocked storage reads as empty
/// and fails every write.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| Error::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| Error::Storage(format!("{err:?}")))
    }
}
