// SPDX-License-Identifier: MPL-2.0
//! Browser binding.
//!
//! The runtime owns the [`App`] and the [`DomPage`] for the lifetime of the
//! document. Every DOM listener turns its event into a [`Message`] and hands
//! it to [`dispatch`]; the resulting effects are executed right away, except
//! the deferred ones which go through `setTimeout`, `requestAnimationFrame`
//! or a promise.

mod api;
mod events;
mod observers;
mod page;
mod storage;

pub use api::PageInteractions;
pub use page::DomPage;
pub use storage::LocalStore;

use crate::app::{App, Effect, Message};
use crate::config;
use crate::ui::slider;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

thread_local! {
    static RUNTIME: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
}

struct Runtime {
    app: RefCell<App<LocalStore>>,
    page: RefCell<DomPage>,
    frame: RefCell<Option<AnimationFrame>>,
    frame_queue: RefCell<Vec<Message>>,
    _listeners: Vec<EventListener>,
}

impl Runtime {
    fn dispatch(&self, message: Message) {
        let effects = match self.app.try_borrow_mut() {
            Ok(mut app) => app.update(message),
            Err(_) => {
                log::error!("Dropped re-entrant message {message:?}");
                return;
            }
        };
        self.execute(effects);
    }

    fn execute(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Patch(patch) => patch.apply(&mut *self.page.borrow_mut()),
                Effect::After { delay, message } => {
                    Timeout::new(millis(delay), move || dispatch(message)).forget();
                }
                Effect::NextFrame(message) => self.queue_frame(message),
                Effect::Open { url, new_context } => open(&url, new_context),
                Effect::ScrollTo { top } => scroll_to(top),
                Effect::ScrollIntoView { element_id } => {
                    scroll_into_view(&self.page.borrow(), &element_id);
                }
                Effect::WriteClipboard(text) => write_clipboard(text),
                Effect::Typeset => typeset(),
                Effect::MeasureSliders(ids) => {
                    let measured: Vec<_> = {
                        let page = self.page.borrow();
                        ids.into_iter()
                            .map(|id| (id, page.slider_bounds(id)))
                            .collect()
                    };
                    for (id, bounds) in measured {
                        self.dispatch(Message::Slider(id, slider::Message::Measured(bounds)));
                    }
                }
            }
        }
    }

    /// Messages queued for the next frame share one `requestAnimationFrame`.
    fn queue_frame(&self, message: Message) {
        self.frame_queue.borrow_mut().push(message);
        if self.frame.borrow().is_some() {
            return;
        }
        let handle = request_animation_frame(|_| {
            let Some(runtime) = runtime() else {
                return;
            };
            runtime.frame.borrow_mut().take();
            let queued = std::mem::take(&mut *runtime.frame_queue.borrow_mut());
            for message in queued {
                runtime.dispatch(message);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

fn runtime() -> Option<Rc<Runtime>> {
    RUNTIME.with(|slot| slot.borrow().clone())
}

/// Delivers a message to the page runtime. Messages sent before boot are
/// dropped.
pub(crate) fn dispatch(message: Message) {
    match runtime() {
        Some(runtime) => runtime.dispatch(message),
        None => log::warn!("Page runtime not booted, dropping {message:?}"),
    }
}

/// Runs `f` against the app, if booted.
fn with_app<R>(f: impl FnOnce(&App<LocalStore>) -> R) -> Option<R> {
    let runtime = runtime()?;
    let app = runtime.app.try_borrow().ok()?;
    Some(f(&app))
}

/// Runs `f` against the page, if booted.
fn with_page<R>(f: impl FnOnce(&DomPage) -> R) -> Option<R> {
    let runtime = runtime()?;
    let page = runtime.page.try_borrow().ok()?;
    Some(f(&page))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialised");
    }

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let page = DomPage::new(document);
    let inventory = page.inventory();
    let app = App::new(config::load_embedded(), LocalStore::new());
    let listeners = events::install(&page, app.config());
    observers::install(&page);

    let runtime = Rc::new(Runtime {
        app: RefCell::new(app),
        page: RefCell::new(page),
        frame: RefCell::new(None),
        frame_queue: RefCell::new(Vec::new()),
        _listeners: listeners,
    });
    RUNTIME.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&runtime)));

    let effects = runtime.app.borrow_mut().boot(inventory);
    runtime.execute(effects);

    let snapshot = runtime.page.borrow().scroll_snapshot();
    runtime.dispatch(Message::Scrolled(snapshot));
    log::info!("Showcase page ready");
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

fn open(url: &str, new_context: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = if new_context { "_blank" } else { "_self" };
    if let Err(err) = window.open_with_url_and_target(url, target) {
        log::warn!("Failed to open {url}: {err:?}");
    }
}

fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn scroll_into_view(page: &DomPage, element_id: &str) {
    let Some(element) = page.document().get_element_by_id(element_id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Looks up `object[name]` as a callable.
fn method(object: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(object, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn write_clipboard(text: String) {
    let promise = web_sys::window()
        .map(|window| JsValue::from(window.navigator()))
        .and_then(|navigator| Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok())
        .filter(|clipboard| clipboard.is_object())
        .ok_or_else(|| "clipboard API unavailable".to_string())
        .and_then(|clipboard| {
            let write_text = method(&clipboard, "writeText")
                .ok_or_else(|| "clipboard.writeText unavailable".to_string())?;
            write_text
                .call1(&clipboard, &JsValue::from_str(&text))
                .map_err(|err| format!("{err:?}"))?
                .dyn_into::<Promise>()
                .map_err(|_| "clipboard.writeText returned no promise".to_string())
        });

    match promise {
        Ok(promise) => spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| format!("{err:?}"));
            dispatch(Message::CitationCopied(result));
        }),
        Err(reason) => dispatch(Message::CitationCopied(Err(reason))),
    }
}

/// Asks MathJax to re-typeset the document, when MathJax is loaded.
fn typeset() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(mathjax) = Reflect::get(&window, &JsValue::from_str("MathJax")) else {
        return;
    };
    let Some(typeset_promise) = method(&mathjax, "typesetPromise") else {
        return;
    };
    let Ok(promise) = typeset_promise
        .call0(&mathjax)
        .and_then(|value| value.dyn_into::<Promise>())
    else {
        return;
    };
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            log::debug!("MathJax typesetting failed: {err:?}");
        }
    });
}
