// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the page.
//!
//! Each handler translates a component's events into effects. Handlers that
//! need state reach into `App` directly; the rest are pure.

use super::{App, Effect, Message};
use crate::application::port::KeyValueStore;
use crate::domain::ui::SliderId;
use crate::domain::Locale;
use crate::ui::carousel::{self, Event as CarouselEvent};
use crate::ui::language::{self, Event as LanguageEvent};
use crate::ui::links::{self, ResourceKind, ResourceTarget, ResultKind};
use crate::ui::navigation::{self, ScrollSnapshot};
use crate::ui::notifications::Notification;
use crate::ui::patch::Patch;
use crate::ui::slider::{self, Event as SliderEvent};

pub(super) fn handle_switch_language<S: KeyValueStore>(
    app: &mut App<S>,
    locale: Locale,
) -> Vec<Effect> {
    match language::switch_to(&mut app.i18n, locale) {
        LanguageEvent::Unchanged => Vec::new(),
        LanguageEvent::Switched(locale) => {
            app.preferences.set_locale(locale);
            let mut effects: Vec<Effect> = Effect::patches(language::render(locale)).collect();
            effects.push(Effect::Typeset);
            effects.extend(app.notify(Notification::success("language-switched")));
            effects
        }
    }
}

pub(super) fn handle_slider_message<S: KeyValueStore>(
    app: &mut App<S>,
    id: SliderId,
    message: slider::Message,
) -> Vec<Effect> {
    let Some(slider) = app.sliders.get_mut(id.0) else {
        log::debug!("Message for unknown slider {id}");
        return Vec::new();
    };
    match slider.update(message) {
        SliderEvent::None => Vec::new(),
        SliderEvent::RequestFrame => {
            vec![Effect::NextFrame(Message::Slider(id, slider::Message::Frame))]
        }
        SliderEvent::Render(percent) => vec![Effect::Patch(Patch::SliderReveal {
            slider: id,
            percent,
        })],
        SliderEvent::HideHint => vec![Effect::Patch(Patch::SliderHint {
            slider: id,
            shown: false,
        })],
    }
}

/// Persists the hint flag and clears the hint from every slider.
pub(super) fn handle_hint_expired<S: KeyValueStore>(app: &mut App<S>) -> Vec<Effect> {
    app.preferences.mark_hint_shown();
    app.sliders
        .iter_mut()
        .map(|slider| {
            slider.hide_hint();
            Effect::Patch(Patch::SliderHint {
                slider: slider.id(),
                shown: false,
            })
        })
        .collect()
}

pub(super) fn handle_carousel_message<S: KeyValueStore>(
    app: &mut App<S>,
    message: carousel::Message,
) -> Vec<Effect> {
    match app.carousel.update(message) {
        CarouselEvent::None => Vec::new(),
        CarouselEvent::Started {
            version,
            label,
            offset,
            ticket,
        } => {
            let mut effects = vec![
                Effect::Patch(Patch::ActiveVersion {
                    versions: app.carousel.version_ids(),
                    active: version,
                }),
                Effect::Patch(Patch::CarouselOffset(offset)),
                Effect::Patch(Patch::CarouselSwitching(true)),
                Effect::after(
                    app.config.timing.carousel_transition(),
                    Message::Carousel(carousel::Message::TransitionEnded(ticket)),
                ),
            ];
            effects.extend(app.notify(
                Notification::success("carousel-switched").with_arg("label", label),
            ));
            effects
        }
        CarouselEvent::Settled { version } => {
            let on_page: Vec<SliderId> = app
                .slider_pages
                .iter()
                .enumerate()
                .filter(|(_, page)| page.as_ref() == Some(&version))
                .map(|(i, _)| SliderId(i))
                .collect();
            for id in &on_page {
                if let Some(slider) = app.sliders.get_mut(id.0) {
                    slider.reset();
                }
            }

            let mut effects = vec![Effect::Patch(Patch::CarouselSwitching(false))];
            if !on_page.is_empty() {
                effects.push(Effect::MeasureSliders(on_page));
            }
            effects.push(Effect::Patch(Patch::LoadImages(version)));
            effects
        }
    }
}

pub(super) fn handle_nav_link<S: KeyValueStore>(
    app: &mut App<S>,
    href: &str,
    target_top: Option<f64>,
) -> Vec<Effect> {
    let Some(top) = target_top else {
        return Vec::new();
    };
    vec![
        Effect::ScrollTo {
            top: navigation::nav_target_top(top),
        },
        Effect::Patch(app.scroll.activate_link(href)),
    ]
}

pub(super) fn handle_next_section(snapshot: &ScrollSnapshot) -> Vec<Effect> {
    navigation::next_section(snapshot.scroll_y, &snapshot.sections)
        .map(|id| Effect::ScrollIntoView {
            element_id: id.to_string(),
        })
        .into_iter()
        .collect()
}

pub(super) fn handle_scroll_to_top<S: KeyValueStore>(app: &mut App<S>) -> Vec<Effect> {
    let mut effects = vec![Effect::ScrollTo { top: 0.0 }];
    effects.extend(app.notify(Notification::success("scrolled-to-top")));
    effects
}

pub(super) fn handle_link<S: KeyValueStore>(app: &mut App<S>, element_id: &str) -> Vec<Effect> {
    match app.config.link(element_id) {
        Some(link) => vec![Effect::Open {
            url: link.url.clone(),
            new_context: link.new_context,
        }],
        None => {
            log::warn!("No link configured for #{element_id}");
            Vec::new()
        }
    }
}

pub(super) fn handle_resource<S: KeyValueStore>(
    app: &mut App<S>,
    title: &str,
    anchor: Option<&str>,
) -> Vec<Effect> {
    let kind = ResourceKind::from_title(title);
    let mut effects = app.notify(Notification::info(ResourceKind::message_key(kind)));

    match links::resolve_resource(kind, anchor, &app.config.resources) {
        ResourceTarget::Open(url) => effects.push(Effect::after(
            app.config.timing.resource_open_delay(),
            Message::OpenUrl(url),
        )),
        ResourceTarget::Unavailable => {
            effects.extend(app.notify(Notification::error("resource-unavailable")));
        }
    }
    effects
}

pub(super) fn handle_result_card<S: KeyValueStore>(
    app: &mut App<S>,
    index: usize,
    result: Option<&str>,
) -> Vec<Effect> {
    let kind = result.and_then(|r| r.parse::<ResultKind>().ok());
    let mut effects = app.notify(Notification::success(ResultKind::message_key(kind)));
    effects.push(Effect::Patch(Patch::ResultCardPressed {
        index,
        pressed: true,
    }));
    effects.push(Effect::after(
        app.config.timing.card_press(),
        Message::ResultCardReleased(index),
    ));
    effects
}

pub(super) fn handle_citation_copied<S: KeyValueStore>(
    app: &mut App<S>,
    result: Result<(), String>,
) -> Vec<Effect> {
    match result {
        Ok(()) => {
            let round = app.copy_button.begin_feedback();
            let label = app.i18n.tr("citation-copied-label");
            let mut effects = vec![
                Effect::Patch(Patch::CopyFeedback(Some(label))),
                Effect::after(
                    app.config.timing.copy_feedback(),
                    Message::CopyFeedbackExpired(round),
                ),
            ];
            effects.extend(app.notify(Notification::success("citation-copied")));
            effects
        }
        Err(err) => {
            log::error!("Failed to copy BibTeX: {err}");
            app.notify(Notification::error("citation-copy-failed"))
        }
    }
}
