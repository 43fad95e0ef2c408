// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters.
//!
//! [`MemoryStore`] and [`RecordingPage`] implement the ports without a
//! browser. They back headless runs of the page logic: the state machines
//! drive them exactly as they drive the DOM, and the recorded state can be
//! inspected afterwards.

use crate::application::port::{Content, KeyValueStore, Page, Target};
use crate::domain::ui::VersionId;
use crate::domain::Locale;
use crate::error::Result;
use crate::ui::notifications::{NotificationId, ToastView};
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// MemoryStore
// =============================================================================

/// A [`KeyValueStore`] backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates a store pre-filled with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// RecordingPage
// =============================================================================

#[derive(Debug, Clone)]
struct LocalizedNode {
    variants: HashMap<Locale, String>,
    content: Content,
}

/// A [`Page`] that keeps the rendered state in memory.
///
/// Every call that changes the page bumps [`RecordingPage::mutation_count`].
#[derive(Debug, Clone, Default)]
pub struct RecordingPage {
    localized: Vec<LocalizedNode>,
    document_language: Option<String>,
    classes: HashMap<Target, BTreeSet<String>>,
    styles: HashMap<Target, HashMap<String, String>>,
    labels: HashMap<Target, Content>,
    toasts: Vec<ToastView>,
    loaded_pages: Vec<VersionId>,
    mutations: usize,
}

impl RecordingPage {
    /// Adds a node tagged with one content variant per locale. The node
    /// initially displays its primary variant. Returns its index.
    pub fn add_localized_node(&mut self, variants: &[(Locale, &str)]) -> usize {
        let variants: HashMap<Locale, String> = variants
            .iter()
            .map(|(locale, text)| (*locale, (*text).to_string()))
            .collect();
        let content = variants
            .get(&Locale::default())
            .map(|raw| Content::detect(raw))
            .unwrap_or(Content::Text(String::new()));
        self.localized.push(LocalizedNode { variants, content });
        self.localized.len() - 1
    }

    /// The content currently displayed by a localized node.
    #[must_use]
    pub fn localized_content(&self, node: usize) -> Option<&Content> {
        self.localized.get(node).map(|n| &n.content)
    }

    #[must_use]
    pub fn document_language(&self) -> Option<&str> {
        self.document_language.as_deref()
    }

    #[must_use]
    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes
            .get(target)
            .is_some_and(|classes| classes.contains(class))
    }

    #[must_use]
    pub fn style(&self, target: &Target, property: &str) -> Option<&str> {
        self.styles
            .get(target)
            .and_then(|styles| styles.get(property))
            .map(String::as_str)
    }

    #[must_use]
    pub fn label(&self, target: &Target) -> Option<&Content> {
        self.labels.get(target)
    }

    /// Toasts currently attached, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[ToastView] {
        &self.toasts
    }

    /// Carousel pages whose images were requested, in request order.
    #[must_use]
    pub fn loaded_pages(&self) -> &[VersionId] {
        &self.loaded_pages
    }

    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    fn apply_class(&mut self, target: &Target, class: &str, enabled: bool) {
        let classes = self.classes.entry(target.clone()).or_default();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

impl Page for RecordingPage {
    fn localized_node_count(&self) -> usize {
        self.localized.len()
    }

    fn localized_variant(&self, node: usize, locale: Locale) -> Option<String> {
        self.localized.get(node)?.variants.get(&locale).cloned()
    }

    fn set_localized_content(&mut self, node: usize, content: &Content) {
        if let Some(n) = self.localized.get_mut(node) {
            n.content = content.clone();
            self.mutations += 1;
        }
    }

    fn set_document_language(&mut self, tag: &str) {
        self.document_language = Some(tag.to_string());
        self.mutations += 1;
    }

    fn set_class(&mut self, target: &Target, class: &str, enabled: bool) {
        self.mutations += 1;
        if *target == Target::NavLinks {
            let links: Vec<Target> = self
                .classes
                .keys()
                .filter(|t| matches!(t, Target::NavLink(_)))
                .cloned()
                .collect();
            for link in links {
                self.apply_class(&link, class, enabled);
            }
        }
        self.apply_class(target, class, enabled);
    }

    fn set_style(&mut self, target: &Target, property: &str, value: &str) {
        self.mutations += 1;
        let styles = self.styles.entry(target.clone()).or_default();
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_label(&mut self, target: &Target, label: Option<&Content>) {
        self.mutations += 1;
        match label {
            Some(content) => {
                self.labels.insert(target.clone(), content.clone());
            }
            None => {
                self.labels.remove(target);
            }
        }
    }

    fn mount_toast(&mut self, toast: &ToastView) {
        self.mutations += 1;
        self.toasts.push(toast.clone());
    }

    fn unmount_toast(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.toasts.iter().position(|t| t.id == id) else {
            return false;
        };
        self.toasts.remove(pos);
        self.mutations += 1;
        true
    }

    fn load_images(&mut self, version: &VersionId) {
        self.mutations += 1;
        self.loaded_pages.push(version.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryStore::with_entries([("k", "a")]);
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("b"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn localized_node_starts_with_primary_variant() {
        let mut page = RecordingPage::default();
        let node = page.add_localized_node(&[(Locale::En, "Results"), (Locale::Zh, "结果")]);
        assert_eq!(page.localized_content(node), Some(&Content::Text("Results".into())));
        assert_eq!(page.localized_variant(node, Locale::Zh).as_deref(), Some("结果"));
        assert_eq!(page.mutation_count(), 0);
    }

    #[test]
    fn nav_links_group_clears_every_link() {
        let mut page = RecordingPage::default();
        page.set_class(&Target::NavLink("#abstract".into()), "active", true);
        page.set_class(&Target::NavLink("#results".into()), "active", true);
        page.set_class(&Target::NavLinks, "active", false);
        assert!(!page.has_class(&Target::NavLink("#abstract".into()), "active"));
        assert!(!page.has_class(&Target::NavLink("#results".into()), "active"));
    }

    #[test]
    fn empty_style_value_clears_property() {
        let mut page = RecordingPage::default();
        page.set_style(&Target::Body, "animation-play-state", "paused");
        page.set_style(&Target::Body, "animation-play-state", "");
        assert_eq!(page.style(&Target::Body, "animation-play-state"), None);
    }

    #[test]
    fn unmounting_twice_reports_detached() {
        let mut page = RecordingPage::default();
        let toast = ToastView::for_test(NotificationId::new());
        let id = toast.id;
        page.mount_toast(&toast);
        assert!(page.unmount_toast(id));
        assert!(!page.unmount_toast(id));
    }
}
