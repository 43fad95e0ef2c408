// SPDX-License-Identifier: MPL-2.0
//! Viewport observers: entrance animations, lazy images and deferred sources.

use super::page::{mark_loaded, swap_deferred_source, DomPage};
use js_sys::{Array, Reflect};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = dyn FnMut(Array, IntersectionObserver);

/// Starts the observers. They live as long as the page.
pub(super) fn install(page: &DomPage) {
    let supported = web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")))
        .and_then(Result::ok)
        .unwrap_or(false);

    let lazy_images = page.select_all(".lazy-load");
    let deferred = page.select_all("img[data-src]");
    if !supported {
        log::info!("IntersectionObserver unavailable, showing all images");
        deferred.iter().for_each(swap_deferred_source);
        lazy_images.iter().for_each(mark_loaded);
        for target in page.select_all(".scroll-target") {
            let _ = target.class_list().add_1("animated");
        }
        return;
    }

    observe_once(
        &page.select_all(".scroll-target"),
        Some(0.1),
        "0px 0px -50px 0px",
        |target| {
            let _ = target.class_list().add_1("animated");
        },
    );
    observe_once(&lazy_images, None, "0px 0px 100px 0px", reveal_image);
    observe_once(&deferred, None, "", swap_deferred_source);
}

/// Shows an image once it has loaded.
fn reveal_image(image: &Element) {
    let complete = image
        .dyn_ref::<web_sys::HtmlImageElement>()
        .is_none_or(web_sys::HtmlImageElement::complete);
    if complete {
        mark_loaded(image);
    } else {
        let target = image.clone();
        gloo::events::EventListener::once(image, "load", move |_| mark_loaded(&target)).forget();
    }
}

/// Calls `on_visible` the first time each target intersects the viewport.
fn observe_once(
    targets: &[Element],
    threshold: Option<f64>,
    root_margin: &str,
    on_visible: impl Fn(&Element) + 'static,
) {
    if targets.is_empty() {
        return;
    }
    let on_visible = Rc::new(on_visible);
    let reveal = Rc::clone(&on_visible);
    let callback = Closure::<ObserverCallback>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        options.set_threshold(&JsValue::from_f64(threshold));
    }
    if !root_margin.is_empty() {
        options.set_root_margin(root_margin);
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in targets {
                observer.observe(target);
            }
            callback.forget();
        }
        Err(err) => {
            log::warn!("Failed to create IntersectionObserver: {err:?}");
            targets.iter().for_each(|target| on_visible(target));
        }
    }
}
