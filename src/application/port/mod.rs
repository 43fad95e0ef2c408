// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! The page state machines talk to the browser only through these traits, so
//! they run unchanged against the DOM or against in-memory doubles.
//!
//! # Available Ports
//!
//! - [`page`]: The rendered document (classes, styles, localized content, toasts)
//! - [`storage`]: Browser-local key-value persistence
//!
//! # Design Notes
//!
//! - Traits use domain types only (no `web_sys` handles)
//! - Absent elements are the adapter's concern: operations on them are no-ops
//! - No `async fn` - deferred work is expressed as `Effect`s by the callers
//!
//! # Example
//!
//! ```
//! use vida_showcase::application::port::{KeyValueStore, Target};
//! use vida_showcase::infrastructure::memory::{MemoryStore, RecordingPage};
//! use vida_showcase::application::port::Page;
//!
//! let mut store = MemoryStore::default();
//! store.set("preferred-language", "zh").unwrap();
//! assert_eq!(store.get("preferred-language").as_deref(), Some("zh"));
//!
//! let mut page = RecordingPage::default();
//! page.set_class(&Target::Navbar, "sticky", true);
//! assert!(page.has_class(&Target::Navbar, "sticky"));
//! ```

pub mod page;
pub mod storage;

// Re-export main types for convenience
pub use page::{CardGroup, Content, LabelSide, Page, Target};
pub use storage::KeyValueStore;
