// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence port.
//!
//! The page persists two independent string values (preferred locale and the
//! slider hint flag). Writes are last-write-wins with no transactional
//! guarantees.

use crate::error::Result;

/// A string-to-string store surviving page reloads.
pub trait KeyValueStore {
    /// Reads a value; unreadable storage behaves like a missing key.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
