// SPDX-License-Identifier: MPL-2.0
//! Declarative page changes.
//!
//! State machines never touch the document. They describe what must change
//! as [`Patch`] values, and the runtime applies them through a [`Page`].

use crate::application::port::{CardGroup, Content, LabelSide, Page, Target};
use crate::domain::ui::{RevealPercent, SliderId, VersionId};
use crate::domain::Locale;
use crate::ui::notifications::{NotificationId, ToastView};

/// Checkmark prepended to the "copied" label of the citation button.
const COPIED_ICON: &str = r#"<i class="fas fa-check"></i>"#;

/// Delay added per card in a staggered group, in seconds.
const CARD_STAGGER_SECS: f64 = 0.2;

/// One change to the rendered page.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Show every localized node in `locale`.
    LocalizeContent(Locale),
    DocumentLanguage(Locale),
    /// Mark the language button of `locale` active, and only that one.
    ActiveLanguage(Locale),
    SliderReveal {
        slider: SliderId,
        percent: RevealPercent,
    },
    SliderHint {
        slider: SliderId,
        shown: bool,
    },
    /// Toggle `active` on the tab, dot and page of every version.
    ActiveVersion {
        versions: Vec<VersionId>,
        active: VersionId,
    },
    /// Horizontal offset of the carousel strip, in percent.
    CarouselOffset(f64),
    CarouselSwitching(bool),
    LoadImages(VersionId),
    MountToast(ToastView),
    ToastSlide {
        id: NotificationId,
        shown: bool,
    },
    UnmountToast(NotificationId),
    NavbarSticky(bool),
    /// The nav link pointing at this `href` becomes the only active one.
    ActiveNavLink(Option<String>),
    ScrollIndicatorOpacity(f64),
    BackToTopVisible(bool),
    /// Temporary label of the copy button; `None` restores the original.
    CopyFeedback(Option<String>),
    ResultCardPressed {
        index: usize,
        pressed: bool,
    },
    PageLoaded,
    StaggerCards {
        group: CardGroup,
        count: usize,
    },
    AnimationsPaused(bool),
}

impl Patch {
    /// Applies the change. Elements missing from the page are skipped.
    pub fn apply<P: Page + ?Sized>(&self, page: &mut P) {
        match self {
            Patch::LocalizeContent(locale) => {
                for node in 0..page.localized_node_count() {
                    let Some(raw) = page.localized_variant(node, *locale) else {
                        continue;
                    };
                    if raw.is_empty() {
                        continue;
                    }
                    page.set_localized_content(node, &Content::detect(&raw));
                }
            }
            Patch::DocumentLanguage(locale) => page.set_document_language(locale.document_tag()),
            Patch::ActiveLanguage(active) => {
                for locale in Locale::ALL {
                    page.set_class(&Target::LanguageButton(locale), "active", locale == *active);
                }
            }
            Patch::SliderReveal { slider, percent } => {
                let id = *slider;
                page.set_style(&Target::SliderAfterImage(id), "clip-path", &percent.clip_path());
                page.set_style(&Target::SliderHandle(id), "left", &percent.handle_left());
                page.set_style(
                    &Target::SliderLabel(id, LabelSide::Left),
                    "opacity",
                    opacity(percent.left_label_visible()),
                );
                page.set_style(
                    &Target::SliderLabel(id, LabelSide::Right),
                    "opacity",
                    opacity(percent.right_label_visible()),
                );
            }
            Patch::SliderHint { slider, shown } => {
                page.set_class(&Target::Slider(*slider), "show-hint", *shown);
            }
            Patch::ActiveVersion { versions, active } => {
                for version in versions {
                    let on = version == active;
                    page.set_class(&Target::VersionTab(version.clone()), "active", on);
                    page.set_class(&Target::VersionIndicator(version.clone()), "active", on);
                    page.set_class(&Target::CarouselPage(version.clone()), "active", on);
                }
            }
            Patch::CarouselOffset(offset) => {
                page.set_style(&Target::CarouselStrip, "transform", &format!("translateX({offset}%)"));
            }
            Patch::CarouselSwitching(on) => page.set_class(&Target::Carousel, "switching", *on),
            Patch::LoadImages(version) => page.load_images(version),
            Patch::MountToast(view) => page.mount_toast(view),
            Patch::ToastSlide { id, shown } => {
                page.set_style(&Target::Toast(*id), "transform", ToastView::transform(*shown));
            }
            Patch::UnmountToast(id) => {
                if !page.unmount_toast(*id) {
                    log::debug!("Toast {} was already detached", id.value());
                }
            }
            Patch::NavbarSticky(on) => page.set_class(&Target::Navbar, "sticky", *on),
            Patch::ActiveNavLink(href) => {
                page.set_class(&Target::NavLinks, "active", false);
                if let Some(href) = href {
                    page.set_class(&Target::NavLink(href.clone()), "active", true);
                }
            }
            Patch::ScrollIndicatorOpacity(value) => {
                page.set_style(&Target::ScrollIndicator, "opacity", &value.to_string());
            }
            Patch::BackToTopVisible(on) => page.set_class(&Target::BackToTop, "show", *on),
            Patch::CopyFeedback(label) => {
                let content = label
                    .as_ref()
                    .map(|text| Content::Markup(format!("{COPIED_ICON} {text}")));
                page.set_label(&Target::CopyButton, content.as_ref());
                page.set_class(&Target::CopyButton, "copied", content.is_some());
            }
            Patch::ResultCardPressed { index, pressed } => {
                let value = if *pressed { "scale(0.95)" } else { "" };
                page.set_style(&Target::Card(CardGroup::Result, *index), "transform", value);
            }
            Patch::PageLoaded => page.set_class(&Target::Body, "loaded", true),
            Patch::StaggerCards { group, count } => {
                for index in 0..*count {
                    let delay = group.base_delay_secs() + index as f64 * CARD_STAGGER_SECS;
                    page.set_style(
                        &Target::Card(*group, index),
                        "animation-delay",
                        &format!("{delay:.1}s"),
                    );
                }
            }
            Patch::AnimationsPaused(paused) => {
                let state = if *paused { "paused" } else { "running" };
                page.set_style(&Target::Body, "animation-play-state", state);
            }
        }
    }
}

fn opacity(visible: bool) -> &'static str {
    if visible {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::RecordingPage;

    #[test]
    fn localize_skips_missing_and_empty_variants() {
        let mut page = RecordingPage::default();
        let full = page.add_localized_node(&[(Locale::En, "Results"), (Locale::Zh, "结果")]);
        let empty = page.add_localized_node(&[(Locale::En, "Code"), (Locale::Zh, "")]);
        let missing = page.add_localized_node(&[(Locale::En, "Paper")]);

        Patch::LocalizeContent(Locale::Zh).apply(&mut page);

        assert_eq!(page.localized_content(full), Some(&Content::Text("结果".into())));
        assert_eq!(page.localized_content(empty), Some(&Content::Text("Code".into())));
        assert_eq!(page.localized_content(missing), Some(&Content::Text("Paper".into())));
    }

    #[test]
    fn localize_inserts_tagged_variants_as_markup() {
        let mut page = RecordingPage::default();
        let node = page.add_localized_node(&[
            (Locale::En, "plain"),
            (Locale::Zh, "<strong>加粗</strong>"),
        ]);
        Patch::LocalizeContent(Locale::Zh).apply(&mut page);
        assert_eq!(
            page.localized_content(node),
            Some(&Content::Markup("<strong>加粗</strong>".into()))
        );
    }

    #[test]
    fn slider_reveal_hides_left_label_near_left_edge() {
        let mut page = RecordingPage::default();
        let slider = SliderId(0);
        Patch::SliderReveal {
            slider,
            percent: RevealPercent::new(10.0),
        }
        .apply(&mut page);

        assert_eq!(
            page.style(&Target::SliderAfterImage(slider), "clip-path"),
            Some("polygon(10% 0, 100% 0, 100% 100%, 10% 100%)")
        );
        assert_eq!(page.style(&Target::SliderHandle(slider), "left"), Some("10%"));
        assert_eq!(
            page.style(&Target::SliderLabel(slider, LabelSide::Left), "opacity"),
            Some("0")
        );
        assert_eq!(
            page.style(&Target::SliderLabel(slider, LabelSide::Right), "opacity"),
            Some("1")
        );
    }

    #[test]
    fn active_version_marks_exactly_one() {
        let mut page = RecordingPage::default();
        let versions: Vec<VersionId> = ["v1", "v2", "pro"].into_iter().map(VersionId::from).collect();
        Patch::ActiveVersion {
            versions: versions.clone(),
            active: VersionId::from("v2"),
        }
        .apply(&mut page);

        let active: Vec<_> = versions
            .iter()
            .filter(|v| page.has_class(&Target::VersionTab((*v).clone()), "active"))
            .collect();
        assert_eq!(active, [&VersionId::from("v2")]);
        assert!(page.has_class(&Target::CarouselPage("v2".into()), "active"));
        assert!(!page.has_class(&Target::VersionIndicator("v1".into()), "active"));
    }

    #[test]
    fn stagger_rounds_delays() {
        let mut page = RecordingPage::default();
        Patch::StaggerCards {
            group: CardGroup::Result,
            count: 3,
        }
        .apply(&mut page);

        assert_eq!(page.style(&Target::Card(CardGroup::Result, 0), "animation-delay"), Some("0.1s"));
        assert_eq!(page.style(&Target::Card(CardGroup::Result, 2), "animation-delay"), Some("0.5s"));
    }

    #[test]
    fn copy_feedback_round_trips_label() {
        let mut page = RecordingPage::default();
        Patch::CopyFeedback(Some("Copied!".into())).apply(&mut page);
        assert_eq!(
            page.label(&Target::CopyButton),
            Some(&Content::Markup(r#"<i class="fas fa-check"></i> Copied!"#.into()))
        );
        assert!(page.has_class(&Target::CopyButton, "copied"));

        Patch::CopyFeedback(None).apply(&mut page);
        assert_eq!(page.label(&Target::CopyButton), None);
        assert!(!page.has_class(&Target::CopyButton, "copied"));
    }

    #[test]
    fn pressed_card_scales_down_and_back() {
        let mut page = RecordingPage::default();
        let card = Target::Card(CardGroup::Result, 1);
        Patch::ResultCardPressed { index: 1, pressed: true }.apply(&mut page);
        assert_eq!(page.style(&card, "transform"), Some("scale(0.95)"));
        Patch::ResultCardPressed { index: 1, pressed: false }.apply(&mut page);
        assert_eq!(page.style(&card, "transform"), None);
    }
}
