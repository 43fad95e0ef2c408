// SPDX-License-Identifier: MPL-2.0
//! Page root state and orchestration between the interactive components.
//!
//! The `App` struct wires together the components (notifications, language,
//! sliders, carousel, navigation) and translates messages into effects: DOM
//! patches, timers, animation frames and calls into the browser. It owns
//! every piece of transient state for the lifetime of the page; the runtime
//! owns nothing but the `App` and the page it patches.

mod effect;
mod message;
mod update;

#[cfg(test)]
mod tests;

pub use effect::Effect;
pub use message::Message;

use crate::application::port::{CardGroup, KeyValueStore};
use crate::application::Preferences;
use crate::config::Config;
use crate::domain::ui::{SliderId, VersionId};
use crate::domain::Locale;
use crate::i18n::I18n;
use crate::ui::carousel::Carousel;
use crate::ui::citation::CopyButton;
use crate::ui::navigation::ScrollSpy;
use crate::ui::notifications;
use crate::ui::patch::Patch;
use crate::ui::slider::Slider;
use crate::ui::{language, slider};
use std::fmt;

/// What the page contains, as discovered by the runtime on load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageInventory {
    /// One entry per `.comparison-slider` in document order: the carousel
    /// page holding it, if any. Slider ids are indices into this list.
    pub sliders: Vec<Option<VersionId>>,
    /// Number of cards per staggered group.
    pub cards: Vec<(CardGroup, usize)>,
}

/// Root page state.
pub struct App<S> {
    config: Config,
    i18n: I18n,
    preferences: Preferences<S>,
    notifications: notifications::Manager,
    sliders: Vec<Slider>,
    slider_pages: Vec<Option<VersionId>>,
    carousel: Carousel,
    scroll: ScrollSpy,
    copy_button: CopyButton,
}

impl<S> fmt::Debug for App<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale())
            .field("sliders", &self.sliders.len())
            .field("carousel", &self.carousel)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

impl<S: KeyValueStore> App<S> {
    /// Creates the page state. The stored locale, when valid, becomes
    /// current right away.
    pub fn new(config: Config, store: S) -> Self {
        let preferences = Preferences::new(store);
        let locale = preferences.locale().unwrap_or_default();
        let carousel = Carousel::new(&config.versions, config.initial_index());
        Self {
            notifications: notifications::Manager::new(&config.timing),
            i18n: I18n::new(locale),
            preferences,
            sliders: Vec::new(),
            slider_pages: Vec::new(),
            carousel,
            scroll: ScrollSpy::default(),
            copy_button: CopyButton::default(),
            config,
        }
    }

    /// One-time initialisation once the document is ready.
    pub fn boot(&mut self, inventory: PageInventory) -> Vec<Effect> {
        let mut effects = Vec::new();

        effects.push(Effect::Patch(Patch::PageLoaded));
        effects.extend(Effect::patches(
            inventory
                .cards
                .iter()
                .map(|&(group, count)| Patch::StaggerCards { group, count }),
        ));

        effects.extend(Effect::patches(language::initial_render(self.locale())));

        self.slider_pages = inventory.sliders;
        self.sliders = (0..self.slider_pages.len())
            .map(|i| Slider::new(SliderId(i)))
            .collect();
        if !self.sliders.is_empty() {
            effects.push(Effect::MeasureSliders(self.slider_ids()));
        }
        if !self.preferences.hint_shown() {
            for slider in &mut self.sliders {
                slider.show_hint();
                effects.push(Effect::Patch(Patch::SliderHint {
                    slider: slider.id(),
                    shown: true,
                }));
            }
            effects.push(Effect::after(
                self.config.timing.slider_hint(),
                Message::HintExpired,
            ));
        }

        if let Some(active) = self.carousel.active().cloned() {
            effects.push(Effect::Patch(Patch::ActiveVersion {
                versions: self.carousel.version_ids(),
                active: active.clone(),
            }));
            effects.push(Effect::Patch(Patch::CarouselOffset(self.carousel.offset())));
            effects.push(Effect::Patch(Patch::LoadImages(active)));
        }
        for (version, rank) in self.carousel.preload_order() {
            effects.push(Effect::after(
                self.config.timing.preload_delay(rank),
                Message::Preload(version),
            ));
        }

        log::debug!(
            "Booted page with {} sliders, locale {}",
            self.sliders.len(),
            self.locale()
        );
        effects
    }

    /// Consumes a message and returns the effects to perform.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Notification(msg) => self.notifications.handle_message(&msg),
            Message::ShowNotification { text, severity } => self.notify(
                notifications::Notification::literal(severity, text),
            ),
            Message::SwitchLanguage(locale) => update::handle_switch_language(self, locale),
            Message::Slider(id, msg) => update::handle_slider_message(self, id, msg),
            Message::PointerReleased => self
                .slider_ids()
                .into_iter()
                .flat_map(|id| update::handle_slider_message(self, id, slider::Message::Released))
                .collect(),
            Message::Resized => {
                if self.sliders.is_empty() {
                    Vec::new()
                } else {
                    vec![Effect::MeasureSliders(self.slider_ids())]
                }
            }
            Message::HintExpired => update::handle_hint_expired(self),
            Message::Carousel(msg) => update::handle_carousel_message(self, msg),
            Message::Preload(version) => vec![Effect::Patch(Patch::LoadImages(version))],
            Message::Scrolled(snapshot) => {
                Effect::patches(self.scroll.on_scroll(&snapshot)).collect()
            }
            Message::NavLinkClicked { href, target_top } => {
                update::handle_nav_link(self, &href, target_top)
            }
            Message::NextSection(snapshot) => update::handle_next_section(&snapshot),
            Message::ScrollToAbstract => vec![Effect::ScrollIntoView {
                element_id: "abstract".to_string(),
            }],
            Message::ScrollToTop => update::handle_scroll_to_top(self),
            Message::VisibilityChanged { hidden } => {
                vec![Effect::Patch(Patch::AnimationsPaused(hidden))]
            }
            Message::LinkClicked(element_id) => update::handle_link(self, &element_id),
            Message::ResourceClicked { title, anchor } => {
                update::handle_resource(self, &title, anchor.as_deref())
            }
            Message::OpenUrl(url) => vec![Effect::Open {
                url,
                new_context: true,
            }],
            Message::ResultCardClicked { index, result } => {
                update::handle_result_card(self, index, result.as_deref())
            }
            Message::ResultCardReleased(index) => vec![Effect::Patch(Patch::ResultCardPressed {
                index,
                pressed: false,
            })],
            Message::CopyCitation(text) => vec![Effect::WriteClipboard(text)],
            Message::CitationCopied(result) => update::handle_citation_copied(self, result),
            Message::CopyFeedbackExpired(round) => {
                if self.copy_button.end_feedback(round) {
                    vec![Effect::Patch(Patch::CopyFeedback(None))]
                } else {
                    Vec::new()
                }
            }
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.i18n.current_locale()
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn slider(&self, id: SliderId) -> Option<&Slider> {
        self.sliders.get(id.0)
    }

    fn slider_ids(&self) -> Vec<SliderId> {
        self.sliders.iter().map(Slider::id).collect()
    }

    fn notify(&mut self, notification: notifications::Notification) -> Vec<Effect> {
        self.notifications.push(notification, &self.i18n)
    }
}
