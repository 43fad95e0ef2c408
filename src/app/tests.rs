// SPDX-License-Identifier: MPL-2.0
//! Page-level behaviour, exercised through the headless runtime.

use super::Message;
use crate::application::port::{CardGroup, Content, KeyValueStore, LabelSide, Target};
use crate::config::{HINT_STORAGE_KEY, LOCALE_STORAGE_KEY};
use crate::domain::ui::{Bounds, SliderId, VersionId};
use crate::domain::Locale;
use crate::infrastructure::{MemoryStore, ScrollRequest};
use crate::test_utils::{boot, boot_with, SLIDER_BOUNDS};
use crate::ui::carousel::{self, Step};
use crate::ui::navigation::{ScrollSnapshot, SectionTop};
use crate::ui::notifications::Severity;
use crate::ui::slider;
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn drag(id: SliderId, x: f64) -> Vec<Message> {
    vec![
        Message::Slider(id, slider::Message::PointerDown { bounds: SLIDER_BOUNDS }),
        Message::Slider(id, slider::Message::PointerMove { x }),
    ]
}

fn select(version: &str) -> Message {
    Message::Carousel(carousel::Message::Select(VersionId::from(version)))
}

// =============================================================================
// Boot
// =============================================================================

#[test]
fn boot_marks_page_loaded_and_staggers_cards() {
    let runtime = boot();
    let page = runtime.page();
    assert!(page.has_class(&Target::Body, "loaded"));
    assert_eq!(
        page.style(&Target::Card(CardGroup::Abstract, 1), "animation-delay"),
        Some("0.4s")
    );
    assert_eq!(
        page.style(&Target::Card(CardGroup::Resource, 2), "animation-delay"),
        Some("0.6s")
    );
}

#[test]
fn boot_renders_sliders_at_midpoint_with_both_labels() {
    let runtime = boot();
    let page = runtime.page();
    let id = SliderId(0);
    assert_eq!(page.style(&Target::SliderHandle(id), "left"), Some("50%"));
    assert_eq!(page.style(&Target::SliderLabel(id, LabelSide::Left), "opacity"), Some("1"));
    assert_eq!(page.style(&Target::SliderLabel(id, LabelSide::Right), "opacity"), Some("1"));
}

#[test]
fn boot_activates_initial_version() {
    let runtime = boot();
    let page = runtime.page();
    assert!(page.has_class(&Target::VersionTab("v1".into()), "active"));
    assert!(!page.has_class(&Target::VersionTab("v2".into()), "active"));
    assert_eq!(page.style(&Target::CarouselStrip, "transform"), Some("translateX(0%)"));
}

// =============================================================================
// Language
// =============================================================================

#[test]
fn switching_language_localizes_and_persists() {
    let mut runtime = boot();
    runtime.dispatch(Message::SwitchLanguage(Locale::Zh));

    let page = runtime.page();
    assert_eq!(page.localized_content(0), Some(&Content::Text("摘要".into())));
    assert_eq!(
        page.localized_content(1),
        Some(&Content::Markup("<strong>ViDA</strong> 数据集".into()))
    );
    assert_eq!(page.document_language(), Some("zh-CN"));
    assert!(page.has_class(&Target::LanguageButton(Locale::Zh), "active"));
    assert!(!page.has_class(&Target::LanguageButton(Locale::En), "active"));
    assert_eq!(
        runtime.app().preferences().store().get(LOCALE_STORAGE_KEY).as_deref(),
        Some("zh")
    );
    assert_eq!(runtime.typeset_requests(), 1);
    assert_eq!(page.toasts().len(), 1);
    assert_eq!(page.toasts()[0].message, "🌍 语言已切换为中文");
    assert_eq!(page.toasts()[0].severity, Severity::Success);
}

#[test]
fn switching_to_current_language_changes_nothing() {
    let mut runtime = boot();
    runtime.dispatch(Message::SwitchLanguage(Locale::Zh));
    let mutations = runtime.page().mutation_count();
    let toasts = runtime.page().toasts().len();

    runtime.dispatch(Message::SwitchLanguage(Locale::Zh));

    assert_eq!(runtime.page().mutation_count(), mutations);
    assert_eq!(runtime.page().toasts().len(), toasts);
    assert_eq!(runtime.typeset_requests(), 1);
}

#[test]
fn stored_secondary_locale_is_rendered_on_load() {
    let runtime = boot_with(MemoryStore::with_entries([(LOCALE_STORAGE_KEY, "zh")]));
    assert_eq!(runtime.app().locale(), Locale::Zh);
    assert_eq!(runtime.page().localized_content(2), Some(&Content::Text("结果".into())));
    assert!(runtime.page().has_class(&Target::LanguageButton(Locale::Zh), "active"));
}

#[test]
fn stored_primary_locale_leaves_content_alone() {
    let runtime = boot_with(MemoryStore::with_entries([(LOCALE_STORAGE_KEY, "en")]));
    assert_eq!(runtime.page().document_language(), None);
    assert!(runtime.page().has_class(&Target::LanguageButton(Locale::En), "active"));
}

#[test]
fn unknown_stored_locale_is_ignored() {
    let runtime = boot_with(MemoryStore::with_entries([(LOCALE_STORAGE_KEY, "fr")]));
    assert_eq!(runtime.app().locale(), Locale::En);
}

// =============================================================================
// Sliders
// =============================================================================

#[test]
fn pointer_left_of_widget_reveals_nothing() {
    let mut runtime = boot();
    let id = SliderId(0);
    for message in drag(id, 20.0) {
        runtime.dispatch(message);
    }
    runtime.run_frame();

    assert_eq!(
        runtime.page().style(&Target::SliderAfterImage(id), "clip-path"),
        Some("polygon(0% 0, 100% 0, 100% 100%, 0% 100%)")
    );
}

#[test]
fn pointer_right_of_widget_reveals_everything() {
    let mut runtime = boot();
    let id = SliderId(1);
    for message in drag(id, 2000.0) {
        runtime.dispatch(message);
    }
    runtime.run_frame();

    assert_eq!(runtime.page().style(&Target::SliderHandle(id), "left"), Some("100%"));
}

#[test]
fn labels_hide_near_their_edge() {
    let mut runtime = boot();
    let id = SliderId(0);
    let left = Target::SliderLabel(id, LabelSide::Left);
    let right = Target::SliderLabel(id, LabelSide::Right);

    for message in drag(id, 140.0) {
        runtime.dispatch(message);
    }
    runtime.run_frame();
    assert_eq!(runtime.page().style(&left, "opacity"), Some("0"));
    assert_eq!(runtime.page().style(&right, "opacity"), Some("1"));

    runtime.dispatch(Message::Slider(id, slider::Message::PointerMove { x: 460.0 }));
    runtime.run_frame();
    assert_eq!(runtime.page().style(&left, "opacity"), Some("1"));
    assert_eq!(runtime.page().style(&right, "opacity"), Some("0"));
}

#[test]
fn moves_within_one_frame_render_once() {
    let mut runtime = boot();
    let id = SliderId(0);
    for message in drag(id, 150.0) {
        runtime.dispatch(message);
    }
    runtime.dispatch(Message::Slider(id, slider::Message::PointerMove { x: 300.0 }));
    runtime.dispatch(Message::Slider(id, slider::Message::PointerMove { x: 400.0 }));
    assert!(runtime.frame_requested());

    let before = runtime.page().mutation_count();
    runtime.run_frame();
    // clip, handle and two labels
    assert_eq!(runtime.page().mutation_count(), before + 4);
    assert_eq!(runtime.page().style(&Target::SliderHandle(id), "left"), Some("75%"));
    assert!(!runtime.frame_requested());
}

#[test]
fn document_pointer_up_stops_every_drag() {
    let mut runtime = boot();
    let id = SliderId(2);
    for message in drag(id, 300.0) {
        runtime.dispatch(message);
    }
    runtime.run_frame();
    runtime.dispatch(Message::PointerReleased);
    assert!(!runtime.app().slider(id).is_some_and(|s| s.is_dragging()));

    runtime.dispatch(Message::Slider(id, slider::Message::PointerMove { x: 100.0 }));
    assert!(!runtime.frame_requested());
}

#[test]
fn resize_reapplies_stored_percentage() {
    let mut runtime = boot();
    let id = SliderId(0);
    for message in drag(id, 200.0) {
        runtime.dispatch(message);
    }
    runtime.run_frame();
    runtime.dispatch(Message::PointerReleased);

    runtime.set_slider_bounds(id, Bounds::new(0.0, 1200.0));
    runtime.dispatch(Message::Resized);

    assert_eq!(runtime.page().style(&Target::SliderHandle(id), "left"), Some("25%"));
    assert_eq!(
        runtime.page().style(&Target::SliderAfterImage(id), "clip-path"),
        Some("polygon(25% 0, 100% 0, 100% 100%, 25% 100%)")
    );
}

#[test]
fn hint_shows_on_first_visit_then_persists() {
    let mut runtime = boot();
    let hinted = Target::Slider(SliderId(3));
    assert!(runtime.page().has_class(&hinted, "show-hint"));

    runtime.advance(ms(3999));
    assert!(runtime.page().has_class(&hinted, "show-hint"));

    runtime.advance(ms(1));
    assert!(!runtime.page().has_class(&hinted, "show-hint"));
    assert_eq!(
        runtime.app().preferences().store().get(HINT_STORAGE_KEY).as_deref(),
        Some("true")
    );
}

#[test]
fn expired_hint_is_cleared_from_slider_state() {
    let mut runtime = boot();
    runtime.advance(ms(4000));
    for i in 0..6 {
        let slider = runtime.app().slider(SliderId(i)).expect("slider exists");
        assert!(!slider.hint_visible());
    }

    let before = runtime.page().mutation_count();
    runtime.dispatch(Message::Slider(SliderId(3), slider::Message::PointerEnter));
    assert_eq!(runtime.page().mutation_count(), before);
}

#[test]
fn hint_never_shows_on_later_visits() {
    let runtime = boot_with(MemoryStore::with_entries([(HINT_STORAGE_KEY, "true")]));
    for i in 0..6 {
        assert!(!runtime.page().has_class(&Target::Slider(SliderId(i)), "show-hint"));
    }
}

#[test]
fn touching_a_slider_clears_its_hint_only() {
    let mut runtime = boot();
    runtime.dispatch(Message::Slider(
        SliderId(0),
        slider::Message::TouchStart { bounds: SLIDER_BOUNDS },
    ));
    assert!(!runtime.page().has_class(&Target::Slider(SliderId(0)), "show-hint"));
    assert!(runtime.page().has_class(&Target::Slider(SliderId(1)), "show-hint"));
}

// =============================================================================
// Carousel
// =============================================================================

#[test]
fn overlapping_version_switches_run_only_the_first() {
    let mut runtime = boot();
    runtime.dispatch(select("v2"));
    runtime.dispatch(select("pro"));

    assert_eq!(runtime.app().carousel().active(), Some(&VersionId::from("v2")));
    assert!(runtime.page().has_class(&Target::Carousel, "switching"));
    assert_eq!(
        runtime.page().style(&Target::CarouselStrip, "transform"),
        Some("translateX(-33.33%)")
    );
    assert_eq!(runtime.page().toasts().len(), 1);
    assert_eq!(runtime.page().toasts()[0].message, "🔄 Switched to DepthAnything V2 comparison");

    runtime.advance(ms(600));
    assert!(!runtime.page().has_class(&Target::Carousel, "switching"));

    runtime.dispatch(select("pro"));
    assert_eq!(runtime.app().carousel().active(), Some(&VersionId::from("pro")));
    assert_eq!(
        runtime.page().style(&Target::CarouselStrip, "transform"),
        Some("translateX(-66.67%)")
    );
}

#[test]
fn arrow_keys_and_swipes_do_not_wrap() {
    let mut runtime = boot();
    runtime.dispatch(Message::Carousel(carousel::Message::Step(Step::Previous)));
    assert_eq!(runtime.app().carousel().active_index(), 0);
    assert!(!runtime.app().carousel().is_transitioning());

    runtime.dispatch(select("pro"));
    runtime.advance(ms(600));
    runtime.dispatch(Message::Carousel(carousel::Message::SwipeStart { x: 300.0 }));
    runtime.dispatch(Message::Carousel(carousel::Message::SwipeEnd { x: 100.0 }));
    assert_eq!(runtime.app().carousel().active_index(), 2);
    assert!(!runtime.app().carousel().is_transitioning());
}

#[test]
fn settled_page_reloads_images_and_resets_its_sliders() {
    let mut runtime = boot();
    runtime.dispatch(select("v2"));
    assert_eq!(runtime.page().loaded_pages(), [VersionId::from("v1")]);

    runtime.advance(ms(600));
    assert_eq!(
        runtime.page().loaded_pages(),
        [VersionId::from("v1"), VersionId::from("v2")]
    );
    assert_eq!(
        runtime.page().style(&Target::SliderHandle(SliderId(2)), "left"),
        Some("50%")
    );
}

#[test]
fn remaining_pages_preload_on_schedule() {
    let mut runtime = boot();
    assert_eq!(runtime.page().loaded_pages(), [VersionId::from("v1")]);

    runtime.advance(ms(2000));
    assert_eq!(
        runtime.page().loaded_pages(),
        [VersionId::from("v1"), VersionId::from("v2")]
    );

    runtime.advance(ms(2000));
    assert_eq!(
        runtime.page().loaded_pages(),
        [VersionId::from("v1"), VersionId::from("v2"), VersionId::from("pro")]
    );
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn notification_leaves_after_timeout_without_interaction() {
    let mut runtime = boot_with(MemoryStore::with_entries([(HINT_STORAGE_KEY, "true")]));
    runtime.dispatch(Message::ShowNotification {
        text: "hello".into(),
        severity: Severity::Info,
    });
    let id = runtime.page().toasts()[0].id;
    let toast = Target::Toast(id);

    runtime.advance(ms(100));
    assert_eq!(runtime.page().style(&toast, "transform"), Some("translateX(0)"));

    runtime.advance(ms(4900));
    assert_eq!(runtime.page().style(&toast, "transform"), Some("translateX(400px)"));
    assert_eq!(runtime.page().toasts().len(), 1);

    runtime.advance(ms(300));
    assert!(runtime.page().toasts().is_empty());
    assert!(runtime.app().notifications().is_empty());
}

#[test]
fn closing_early_makes_pending_timers_harmless() {
    let mut runtime = boot_with(MemoryStore::with_entries([(HINT_STORAGE_KEY, "true")]));
    runtime.dispatch(Message::ShowNotification {
        text: "bye".into(),
        severity: Severity::Error,
    });
    let id = runtime.page().toasts()[0].id;

    runtime.dispatch(Message::Notification(
        crate::ui::notifications::NotificationMessage::Dismiss(id),
    ));
    runtime.advance(ms(300));
    assert!(runtime.page().toasts().is_empty());

    let mutations = runtime.page().mutation_count();
    let loads = runtime.page().loaded_pages().len();
    runtime.advance(ms(5000));
    // Only the scheduled preloads touch the page in that window.
    let preloads = runtime.page().loaded_pages().len() - loads;
    assert_eq!(runtime.page().mutation_count() - mutations, preloads);
    assert!(runtime.page().toasts().is_empty());
    assert_eq!(runtime.pending_timers(), 0);
}

#[test]
fn toasts_are_not_deduplicated() {
    let mut runtime = boot();
    runtime.dispatch(Message::ScrollToTop);
    runtime.dispatch(Message::ScrollToTop);
    assert_eq!(runtime.page().toasts().len(), 2);
    assert_eq!(runtime.page().toasts()[0].message, "⬆️ Scrolled to top");
    assert_eq!(
        runtime.scrolls(),
        [ScrollRequest::To(0.0), ScrollRequest::To(0.0)]
    );
}

// =============================================================================
// Navigation
// =============================================================================

fn sections() -> Vec<SectionTop> {
    vec![
        SectionTop::new("home", 0.0),
        SectionTop::new("abstract", 900.0),
        SectionTop::new("results", 1800.0),
        SectionTop::new("code", 2700.0),
    ]
}

#[test]
fn scrolling_updates_navbar_indicator_and_back_to_top() {
    let mut runtime = boot();
    runtime.dispatch(Message::Scrolled(ScrollSnapshot {
        scroll_y: 1750.0,
        navbar_top: 700.0,
        sections: sections(),
    }));

    let page = runtime.page();
    assert!(page.has_class(&Target::Navbar, "sticky"));
    assert!(page.has_class(&Target::NavLink("#results".into()), "active"));
    assert_eq!(page.style(&Target::ScrollIndicator, "opacity"), Some("0"));
    assert!(page.has_class(&Target::BackToTop, "show"));
}

#[test]
fn nav_link_scrolls_below_navbar() {
    let mut runtime = boot();
    runtime.dispatch(Message::NavLinkClicked {
        href: "#code".into(),
        target_top: Some(2700.0),
    });
    runtime.dispatch(Message::NavLinkClicked {
        href: "#missing".into(),
        target_top: None,
    });

    assert_eq!(runtime.scrolls(), [ScrollRequest::To(2620.0)]);
    assert!(runtime.page().has_class(&Target::NavLink("#code".into()), "active"));
}

#[test]
fn space_jumps_to_next_key_section() {
    let mut runtime = boot();
    runtime.dispatch(Message::NextSection(ScrollSnapshot {
        scroll_y: 850.0,
        navbar_top: 0.0,
        sections: sections(),
    }));
    assert_eq!(runtime.scrolls(), [ScrollRequest::IntoView("results".into())]);
}

#[test]
fn hidden_page_pauses_animations() {
    let mut runtime = boot();
    runtime.dispatch(Message::VisibilityChanged { hidden: true });
    assert_eq!(
        runtime.page().style(&Target::Body, "animation-play-state"),
        Some("paused")
    );
    runtime.dispatch(Message::VisibilityChanged { hidden: false });
    assert_eq!(
        runtime.page().style(&Target::Body, "animation-play-state"),
        Some("running")
    );
}

// =============================================================================
// Links, cards and citation
// =============================================================================

#[test]
fn fixed_buttons_open_configured_urls() {
    let mut runtime = boot();
    runtime.dispatch(Message::LinkClicked("arxiv-btn".into()));
    runtime.dispatch(Message::LinkClicked("unknown-btn".into()));
    assert_eq!(
        runtime.opened(),
        [("https://arxiv.org/abs/2407.12220".to_string(), true)]
    );
}

#[test]
fn resource_card_opens_default_link_after_delay() {
    let mut runtime = boot();
    runtime.dispatch(Message::ResourceClicked {
        title: "GitHub 代码库".into(),
        anchor: None,
    });
    assert_eq!(runtime.page().toasts()[0].message, "Redirecting to GitHub...");
    assert_eq!(runtime.page().toasts()[0].severity, Severity::Info);
    assert!(runtime.opened().is_empty());

    runtime.advance(ms(1000));
    assert_eq!(
        runtime.opened(),
        [("https://github.com/DYEvaLab/ViDA-MIPI-code".to_string(), true)]
    );
}

#[test]
fn resource_card_without_destination_reports_error() {
    let mut runtime = boot();
    runtime.dispatch(Message::ResourceClicked {
        title: "Datasets".into(),
        anchor: None,
    });
    let toasts = runtime.page().toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[1].message, "Link not available.");
    assert_eq!(toasts[1].severity, Severity::Error);

    runtime.advance(ms(1000));
    assert!(runtime.opened().is_empty());
}

#[test]
fn result_card_describes_and_presses() {
    let mut runtime = boot_with(MemoryStore::with_entries([(LOCALE_STORAGE_KEY, "zh")]));
    let card = Target::Card(CardGroup::Result, 2);
    runtime.dispatch(Message::ResultCardClicked {
        index: 2,
        result: Some("night".into()),
    });
    assert_eq!(
        runtime.page().toasts()[0].message,
        "🌙 夜间深度估计：在极低光照条件下保持稳定性能"
    );
    assert_eq!(runtime.page().style(&card, "transform"), Some("scale(0.95)"));

    runtime.advance(ms(150));
    assert_eq!(runtime.page().style(&card, "transform"), None);
}

#[test]
fn copying_citation_shows_transient_feedback() {
    let mut runtime = boot();
    runtime.dispatch(Message::CopyCitation("@article{vida}".into()));

    assert_eq!(runtime.clipboard(), ["@article{vida}".to_string()]);
    assert!(runtime.page().has_class(&Target::CopyButton, "copied"));
    assert!(runtime
        .page()
        .label(&Target::CopyButton)
        .is_some_and(|label| label.as_str().ends_with("Copied!")));
    assert_eq!(
        runtime.page().toasts()[0].message,
        "📋 BibTeX citation copied to clipboard."
    );

    runtime.advance(ms(2000));
    assert!(!runtime.page().has_class(&Target::CopyButton, "copied"));
    assert_eq!(runtime.page().label(&Target::CopyButton), None);
}

#[test]
fn failed_copy_reports_error_without_feedback() {
    let mut runtime = boot();
    runtime.fail_clipboard("permission denied");
    runtime.dispatch(Message::CopyCitation("@article{vida}".into()));

    assert!(runtime.clipboard().is_empty());
    assert!(!runtime.page().has_class(&Target::CopyButton, "copied"));
    assert_eq!(runtime.page().toasts()[0].severity, Severity::Error);
    assert_eq!(runtime.page().toasts()[0].message, "❌ Failed to copy citation.");
}
