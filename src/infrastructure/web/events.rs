// SPDX-License-Identifier: MPL-2.0
//! DOM event wiring.
//!
//! Listeners translate browser events into [`Message`]s. They read only
//! what the message needs (a coordinate, an attribute, a layout box) and
//! leave every decision to the page logic.

use super::api::PageInteractions;
use super::page::DomPage;
use super::{dispatch, with_page};
use crate::app::Message;
use crate::config::Config;
use crate::domain::ui::{Bounds, VersionId};
use crate::domain::Locale;
use crate::ui::carousel::{self, Step};
use crate::ui::slider;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, HtmlAnchorElement, HtmlElement, KeyboardEvent, MouseEvent,
    TouchEvent,
};

/// Bubble-phase listener that may call `preventDefault`.
fn active(
    target: &EventTarget,
    event: &'static str,
    callback: impl FnMut(&Event) + 'static,
) -> EventListener {
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        callback,
    )
}

/// Passive bubble-phase listener.
fn passive(
    target: &EventTarget,
    event: &'static str,
    callback: impl FnMut(&Event) + 'static,
) -> EventListener {
    EventListener::new_with_options(target, event, EventListenerOptions::default(), callback)
}

/// Installs every page listener. Dropping the returned list detaches them.
pub(super) fn install(page: &DomPage, config: &Config) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    install_sliders(page, &mut listeners);
    install_carousel(page, &mut listeners);
    install_navigation(page, &mut listeners);
    install_buttons(page, config, &mut listeners);
    install_cards(page, &mut listeners);
    listeners
}

fn client_x(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|event| f64::from(event.client_x()))
}

fn first_touch_x(event: &Event, changed: bool) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.get(0).map(|touch| f64::from(touch.client_x()))
}

fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.width())
}

fn install_sliders(page: &DomPage, listeners: &mut Vec<EventListener>) {
    for (id, element) in page.slider_elements() {
        let el = element.clone();
        listeners.push(active(element, "mousedown", move |event| {
            event.prevent_default();
            dispatch(Message::Slider(
                id,
                slider::Message::PointerDown {
                    bounds: bounds_of(&el),
                },
            ));
        }));
        listeners.push(passive(element, "mouseenter", move |_| {
            dispatch(Message::Slider(id, slider::Message::PointerEnter));
        }));
        listeners.push(passive(element, "mousemove", move |event| {
            if let Some(x) = client_x(event) {
                dispatch(Message::Slider(id, slider::Message::PointerMove { x }));
            }
        }));
        listeners.push(passive(element, "mouseleave", move |_| {
            dispatch(Message::Slider(id, slider::Message::PointerLeave));
        }));

        let el = element.clone();
        listeners.push(passive(element, "touchstart", move |_| {
            dispatch(Message::Slider(
                id,
                slider::Message::TouchStart {
                    bounds: bounds_of(&el),
                },
            ));
        }));
        listeners.push(passive(element, "touchmove", move |event| {
            if let Some(x) = first_touch_x(event, false) {
                dispatch(Message::Slider(id, slider::Message::TouchMove { x }));
            }
        }));
        listeners.push(passive(element, "touchend", move |_| {
            dispatch(Message::Slider(id, slider::Message::TouchEnd));
        }));
    }

    listeners.push(passive(page.document(), "mouseup", |_| {
        dispatch(Message::PointerReleased);
    }));
    if let Some(window) = web_sys::window() {
        listeners.push(passive(&window, "resize", |_| dispatch(Message::Resized)));
    }
}

fn install_carousel(page: &DomPage, listeners: &mut Vec<EventListener>) {
    for (selector, attribute) in [(".version-tab", "data-version"), (".indicator", "data-version")] {
        for element in page.select_all(selector) {
            let Some(version) = element.get_attribute(attribute) else {
                continue;
            };
            listeners.push(passive(&element, "click", move |_| {
                let version = VersionId::new(version.as_str());
                dispatch(Message::Carousel(carousel::Message::Select(version)));
            }));
        }
    }

    if let Some(strip) = page.select(".preview-carousel") {
        listeners.push(passive(&strip, "touchstart", |event| {
            if let Some(x) = first_touch_x(event, false) {
                dispatch(Message::Carousel(carousel::Message::SwipeStart { x }));
            }
        }));
        listeners.push(passive(&strip, "touchend", |event| {
            if let Some(x) = first_touch_x(event, true) {
                dispatch(Message::Carousel(carousel::Message::SwipeEnd { x }));
            }
        }));
    }

    listeners.push(active(page.document(), "keydown", |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        if key == " " {
            event.prevent_default();
            if let Some(snapshot) = with_page(DomPage::scroll_snapshot) {
                dispatch(Message::NextSection(snapshot));
            }
            return;
        }
        let Some(step) = Step::from_key(&key) else {
            return;
        };
        let in_preview = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(".preview-section").ok().flatten())
            .is_some();
        if in_preview {
            event.prevent_default();
            dispatch(Message::Carousel(carousel::Message::Step(step)));
        }
    }));
}

fn install_navigation(page: &DomPage, listeners: &mut Vec<EventListener>) {
    for link in page.select_all(".nav-link") {
        let target = link.clone();
        listeners.push(active(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = target.get_attribute("href") else {
                return;
            };
            let target_top = with_page(|page| page.anchor_top(&href)).flatten();
            dispatch(Message::NavLinkClicked { href, target_top });
        }));
    }

    if let Some(window) = web_sys::window() {
        listeners.push(passive(&window, "scroll", |_| {
            if let Some(snapshot) = with_page(DomPage::scroll_snapshot) {
                dispatch(Message::Scrolled(snapshot));
            }
        }));
    }

    let document = page.document().clone();
    listeners.push(passive(page.document(), "visibilitychange", move |_| {
        dispatch(Message::VisibilityChanged {
            hidden: document.hidden(),
        });
    }));

    if let Some(indicator) = page.select(".scroll-indicator") {
        listeners.push(passive(&indicator, "click", |_| {
            dispatch(Message::ScrollToAbstract);
        }));
    }
    if let Some(button) = page.document().get_element_by_id("back-to-top") {
        listeners.push(passive(&button, "click", |_| dispatch(Message::ScrollToTop)));
    }
}

fn install_buttons(page: &DomPage, config: &Config, listeners: &mut Vec<EventListener>) {
    for link in &config.links {
        let Some(button) = page.document().get_element_by_id(&link.element_id) else {
            log::debug!("No element for link button #{}", link.element_id);
            continue;
        };
        let element_id = link.element_id.clone();
        listeners.push(passive(&button, "click", move |_| {
            dispatch(Message::LinkClicked(element_id.clone()));
        }));
    }

    for button in page.select_all(".lang-btn") {
        let Some(locale) = button
            .get_attribute("data-lang")
            .and_then(|code| code.parse::<Locale>().ok())
        else {
            continue;
        };
        listeners.push(passive(&button, "click", move |_| {
            dispatch(Message::SwitchLanguage(locale));
        }));
    }

    if let Some(button) = page.document().get_element_by_id("copy-bibtex") {
        listeners.push(passive(&button, "click", |_| PageInteractions::copy_bibtex()));
    }
}

fn install_cards(page: &DomPage, listeners: &mut Vec<EventListener>) {
    for button in page.select_all(".resource-btn") {
        let target = button.clone();
        listeners.push(active(&button, "click", move |event| {
            event.prevent_default();
            let Some(card) = target.closest(".resource-card").ok().flatten() else {
                return;
            };
            let title = card
                .query_selector("h3")
                .ok()
                .flatten()
                .and_then(|heading| heading.text_content())
                .unwrap_or_default();
            let anchor = card
                .query_selector("a")
                .ok()
                .flatten()
                .and_then(|a| a.dyn_into::<HtmlAnchorElement>().ok())
                .map(|a| a.href());
            dispatch(Message::ResourceClicked { title, anchor });
        }));
    }

    for (index, card) in page.select_all(".result-card").into_iter().enumerate() {
        let target = card.clone();
        listeners.push(passive(&card, "click", move |_| {
            dispatch(Message::ResultCardClicked {
                index,
                result: target.get_attribute("data-result"),
            });
        }));
    }

    for link in page.select_all(".author-link") {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = link.clone();
            listeners.push(passive(&link, event, move |_| {
                let Some(target) = target.dyn_ref::<HtmlElement>() else {
                    return;
                };
                let style = target.style();
                if hovered {
                    let _ = style.set_property("transform", "scale(1.05)");
                    let _ = style.set_property("transition", "all 0.3s ease");
                } else {
                    let _ = style.remove_property("transform");
                }
            }));
        }
    }
}
