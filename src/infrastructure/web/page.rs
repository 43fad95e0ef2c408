// SPDX-License-Identifier: MPL-2.0
//! [`Page`] over the live document.
//!
//! Targets are resolved on every patch, so elements added or removed after
//! boot are picked up. Only the localized nodes and the sliders are indexed
//! once, because their ids are positions in document order.

use super::dispatch;
use crate::app::{Message, PageInventory};
use crate::application::port::{CardGroup, Content, LabelSide, Page, Target};
use crate::domain::ui::{Bounds, DeferredSource, SliderId, VersionId};
use crate::domain::Locale;
use crate::ui::navigation::{ScrollSnapshot, SectionTop};
use crate::ui::notifications::{
    NotificationId, NotificationMessage, ToastView, CLOSE_BUTTON_STYLE, CONTAINER_STYLE,
    CONTENT_STYLE,
};
use gloo::events::EventListener;
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, NodeList};

const CLOSE_ICON: &str = r#"<i class="fas fa-times"></i>"#;
const CLOSE_HOVER_BACKGROUND: &str = "rgba(255, 255, 255, 0.2)";

struct MountedToast {
    element: Element,
    _listeners: Vec<EventListener>,
}

/// The showcase document.
pub struct DomPage {
    document: Document,
    localized: Vec<Element>,
    sliders: Vec<Element>,
    original_labels: HashMap<Target, String>,
    toasts: HashMap<NotificationId, MountedToast>,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        let localized = elements(document.query_selector_all("[data-en][data-zh]"));
        let sliders = elements(document.query_selector_all(".comparison-slider"));
        log::debug!(
            "Indexed {} localized nodes and {} sliders",
            localized.len(),
            sliders.len()
        );
        Self {
            document,
            localized,
            sliders,
            original_labels: HashMap::new(),
            toasts: HashMap::new(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Sliders with their carousel page, and the size of each card group.
    #[must_use]
    pub fn inventory(&self) -> PageInventory {
        let sliders = self
            .sliders
            .iter()
            .map(|slider| {
                slider
                    .closest(".carousel-page")
                    .ok()
                    .flatten()
                    .and_then(|page| page.get_attribute("data-page"))
                    .map(VersionId::new)
            })
            .collect();
        let cards = CardGroup::ALL
            .into_iter()
            .map(|group| (group, self.select_all(group.selector()).len()))
            .filter(|&(_, count)| count > 0)
            .collect();
        PageInventory { sliders, cards }
    }

    pub fn slider_element(&self, id: SliderId) -> Option<&Element> {
        self.sliders.get(id.0)
    }

    /// Current layout box of a slider.
    #[must_use]
    pub fn slider_bounds(&self, id: SliderId) -> Bounds {
        self.slider_element(id)
            .map(|slider| {
                let rect = slider.get_bounding_client_rect();
                Bounds::new(rect.left(), rect.width())
            })
            .unwrap_or_default()
    }

    pub fn slider_elements(&self) -> impl Iterator<Item = (SliderId, &Element)> {
        self.sliders
            .iter()
            .enumerate()
            .map(|(i, slider)| (SliderId(i), slider))
    }

    /// Reads the scroll position and the layout the scroll spy needs.
    #[must_use]
    pub fn scroll_snapshot(&self) -> ScrollSnapshot {
        let scroll_y = web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default();
        let navbar_top = self
            .select(".navbar")
            .map(|navbar| offset_top(&navbar))
            .unwrap_or_default();
        let sections = self
            .select_all("section[id]")
            .into_iter()
            .map(|section| SectionTop::new(section.id(), offset_top(&section)))
            .collect();
        ScrollSnapshot {
            scroll_y,
            navbar_top,
            sections,
        }
    }

    /// Document offset of the element a nav link points at.
    #[must_use]
    pub fn anchor_top(&self, href: &str) -> Option<f64> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            return None;
        }
        self.document
            .get_element_by_id(id)
            .map(|target| offset_top(&target))
    }

    /// Text of the BibTeX entry offered by the copy button.
    #[must_use]
    pub fn citation_text(&self) -> Option<String> {
        self.document
            .get_element_by_id("bibtex-text")
            .and_then(|entry| entry.text_content())
    }

    pub fn select(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    pub fn select_all(&self, selector: &str) -> Vec<Element> {
        elements(self.document.query_selector_all(selector))
    }

    fn with_attribute(&self, selector: &str, attribute: &str, value: &str) -> Vec<Element> {
        self.select_all(selector)
            .into_iter()
            .filter(|el| el.get_attribute(attribute).as_deref() == Some(value))
            .collect()
    }

    fn in_slider(&self, id: SliderId, selector: &str) -> Vec<Element> {
        self.slider_element(id)
            .and_then(|slider| slider.query_selector(selector).ok().flatten())
            .into_iter()
            .collect()
    }

    fn resolve(&self, target: &Target) -> Vec<Element> {
        match target {
            Target::Body => self
                .document
                .body()
                .map(Element::from)
                .into_iter()
                .collect(),
            Target::Navbar => self.select(".navbar").into_iter().collect(),
            Target::NavLinks => self.select_all(".nav-link"),
            Target::NavLink(href) => self.with_attribute(".nav-link", "href", href),
            Target::ScrollIndicator => self.select(".scroll-indicator").into_iter().collect(),
            Target::BackToTop => self
                .document
                .get_element_by_id("back-to-top")
                .into_iter()
                .collect(),
            Target::LanguageButton(locale) => {
                self.with_attribute(".lang-btn", "data-lang", locale.code())
            }
            Target::Slider(id) => self.slider_element(*id).cloned().into_iter().collect(),
            Target::SliderAfterImage(id) => self.in_slider(*id, ".after-image"),
            Target::SliderHandle(id) => self.in_slider(*id, ".slider-handle"),
            Target::SliderLabel(id, LabelSide::Left) => self.in_slider(*id, ".label-left"),
            Target::SliderLabel(id, LabelSide::Right) => self.in_slider(*id, ".label-right"),
            Target::Carousel => self.select(".preview-carousel").into_iter().collect(),
            Target::CarouselStrip => self.select(".carousel-inner").into_iter().collect(),
            Target::VersionTab(version) => {
                self.with_attribute(".version-tab", "data-version", version.as_str())
            }
            Target::VersionIndicator(version) => {
                self.with_attribute(".indicator", "data-version", version.as_str())
            }
            Target::CarouselPage(version) => {
                self.with_attribute(".carousel-page", "data-page", version.as_str())
            }
            Target::Toast(id) => self
                .toasts
                .get(id)
                .map(|toast| toast.element.clone())
                .into_iter()
                .collect(),
            Target::CopyButton => self
                .document
                .get_element_by_id("copy-bibtex")
                .into_iter()
                .collect(),
            Target::Card(group, index) => self
                .select_all(group.selector())
                .into_iter()
                .nth(*index)
                .into_iter()
                .collect(),
        }
    }

    fn build_toast(&self, toast: &ToastView) -> Result<(Element, Element), JsValue> {
        let container = self.document.create_element("div")?;
        container.set_class_name(&toast.class_name());
        container.set_id(&toast.element_id());
        container.set_attribute(
            "style",
            &format!(
                "{CONTAINER_STYLE} background: {}; transform: {};",
                toast.severity.background(),
                ToastView::transform(false)
            ),
        )?;

        let content = self.document.create_element("div")?;
        content.set_class_name("notification-content");
        content.set_attribute("style", CONTENT_STYLE)?;

        let message = self.document.create_element("span")?;
        message.set_class_name("notification-message");
        message.set_text_content(Some(&toast.message));

        let close = self.document.create_element("button")?;
        close.set_class_name("notification-close");
        close.set_attribute("type", "button")?;
        close.set_attribute("aria-label", &toast.close_label)?;
        close.set_attribute("style", CLOSE_BUTTON_STYLE)?;
        close.set_inner_html(CLOSE_ICON);

        content.append_child(&message)?;
        content.append_child(&close)?;
        container.append_child(&content)?;
        Ok((container, close))
    }
}

impl Page for DomPage {
    fn localized_node_count(&self) -> usize {
        self.localized.len()
    }

    fn localized_variant(&self, node: usize, locale: Locale) -> Option<String> {
        self.localized
            .get(node)?
            .get_attribute(locale.content_attribute())
    }

    fn set_localized_content(&mut self, node: usize, content: &Content) {
        let Some(element) = self.localized.get(node) else {
            return;
        };
        match content {
            Content::Markup(markup) => element.set_inner_html(markup),
            Content::Text(text) => element.set_text_content(Some(text)),
        }
    }

    fn set_document_language(&mut self, tag: &str) {
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.set_attribute("lang", tag) {
                log::warn!("Failed to set document language: {err:?}");
            }
        }
    }

    fn set_class(&mut self, target: &Target, class: &str, enabled: bool) {
        for element in self.resolve(target) {
            let classes = element.class_list();
            let result = if enabled {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
            if let Err(err) = result {
                log::warn!("Failed to toggle class {class}: {err:?}");
            }
        }
    }

    fn set_style(&mut self, target: &Target, property: &str, value: &str) {
        for element in self.resolve(target) {
            let Some(element) = element.dyn_ref::<HtmlElement>() else {
                continue;
            };
            let style = element.style();
            let result = if value.is_empty() {
                style.remove_property(property).map(|_| ())
            } else {
                style.set_property(property, value)
            };
            if let Err(err) = result {
                log::warn!("Failed to set {property}: {err:?}");
            }
        }
    }

    fn set_label(&mut self, target: &Target, label: Option<&Content>) {
        let Some(element) = self.resolve(target).into_iter().next() else {
            return;
        };
        match label {
            Some(content) => {
                self.original_labels
                    .entry(target.clone())
                    .or_insert_with(|| element.inner_html());
                match content {
                    Content::Markup(markup) => element.set_inner_html(markup),
                    Content::Text(text) => element.set_text_content(Some(text)),
                }
            }
            None => {
                if let Some(original) = self.original_labels.remove(target) {
                    element.set_inner_html(&original);
                }
            }
        }
    }

    fn mount_toast(&mut self, toast: &ToastView) {
        let Some(body) = self.document.body() else {
            return;
        };
        let (container, close) = match self.build_toast(toast) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::error!("Failed to build toast: {err:?}");
                return;
            }
        };
        if let Err(err) = body.append_child(&container) {
            log::error!("Failed to mount toast: {err:?}");
            return;
        }

        let id = toast.id;
        let mut listeners = vec![EventListener::new(&close, "click", move |_| {
            dispatch(Message::Notification(NotificationMessage::Dismiss(id)));
        })];
        for (event, background) in [("mouseenter", CLOSE_HOVER_BACKGROUND), ("mouseleave", "none")] {
            let button = close.clone();
            listeners.push(EventListener::new(&close, event, move |_| {
                if let Some(button) = button.dyn_ref::<HtmlElement>() {
                    let _ = button.style().set_property("background", background);
                }
            }));
        }

        self.toasts.insert(
            id,
            MountedToast {
                element: container,
                _listeners: listeners,
            },
        );
    }

    fn unmount_toast(&mut self, id: NotificationId) -> bool {
        let Some(toast) = self.toasts.remove(&id) else {
            return false;
        };
        let attached = toast.element.parent_node().is_some();
        toast.element.remove();
        attached
    }

    fn load_images(&mut self, version: &VersionId) {
        for page in self.resolve(&Target::CarouselPage(version.clone())) {
            let pending = elements(page.query_selector_all(".lazy-load:not(.loaded)"));
            for image in pending {
                load_image(image);
            }
        }
    }
}

/// Starts loading a lazy image and marks it loaded once it is.
pub(super) fn load_image(image: Element) {
    let Ok(image) = image.dyn_into::<HtmlImageElement>() else {
        return;
    };
    if let Some(source) = DeferredSource::from_attribute(image.get_attribute("data-src")) {
        if image.get_attribute("src").is_none_or(|src| src.is_empty()) {
            image.set_src(source.as_str());
        }
    }
    if image.complete() {
        mark_loaded(&image);
    } else {
        let target = image.clone();
        EventListener::once(&image, "load", move |_| mark_loaded(&target)).forget();
    }
}

/// Moves a deferred `data-src` into `src` and drops the attribute.
pub(super) fn swap_deferred_source(image: &Element) {
    let Some(source) = DeferredSource::from_attribute(image.get_attribute("data-src")) else {
        return;
    };
    if let Some(image) = image.dyn_ref::<HtmlImageElement>() {
        image.set_src(source.as_str());
        let _ = image.remove_attribute("data-src");
    }
}

/// Adds `loaded` and hides the placeholder that follows the image.
pub(super) fn mark_loaded(image: &Element) {
    let _ = image.class_list().add_1("loaded");
    let placeholder = image
        .next_element_sibling()
        .filter(|sibling| sibling.class_list().contains("image-placeholder"));
    if let Some(placeholder) = placeholder.and_then(|p| p.dyn_into::<HtmlElement>().ok()) {
        let _ = placeholder.style().set_property("display", "none");
    }
}

pub(super) fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_top()))
        .unwrap_or_default()
}

pub(super) fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
