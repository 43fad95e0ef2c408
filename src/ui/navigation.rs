// SPDX-License-Identifier: MPL-2.0
//! Page navigation: sticky navbar, scroll spy and section jumps.
//!
//! The browser reports scroll positions as [`ScrollSnapshot`]s; the
//! [`ScrollSpy`] turns them into patches, emitting only what changed since
//! the previous snapshot.

use crate::config::{
    BACK_TO_TOP_SHOW_AFTER_PX, NAVBAR_SCROLL_OFFSET_PX, SCROLL_INDICATOR_HIDE_AFTER_PX,
    SCROLL_INDICATOR_OPACITY, SECTION_ACTIVATION_OFFSET_PX, SPACE_SCROLL_SECTIONS,
};
use crate::ui::patch::Patch;

/// Top offset of a `section[id]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTop {
    pub id: String,
    pub top: f64,
}

impl SectionTop {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Layout read at one scroll event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    /// Offset of the navbar in the document flow.
    pub navbar_top: f64,
    /// Sections in document order.
    pub sections: Vec<SectionTop>,
}

/// Derived navigation state, remembered to diff successive snapshots.
#[derive(Debug, Default)]
pub struct ScrollSpy {
    sticky: Option<bool>,
    sticky_point: f64,
    active_section: Option<Option<String>>,
    indicator_opacity: Option<f64>,
    back_to_top: Option<bool>,
}

impl ScrollSpy {
    /// Recomputes navigation state and returns the patches for what changed.
    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> Vec<Patch> {
        let mut patches = Vec::new();
        let y = snapshot.scroll_y;

        // A stuck navbar is out of flow, so its offset is meaningless.
        if self.sticky != Some(true) {
            self.sticky_point = snapshot.navbar_top;
        }
        let sticky = y >= self.sticky_point;
        if self.sticky != Some(sticky) {
            self.sticky = Some(sticky);
            patches.push(Patch::NavbarSticky(sticky));
        }

        let active = active_section(y, &snapshot.sections).map(str::to_string);
        if self.active_section.as_ref() != Some(&active) {
            patches.push(Patch::ActiveNavLink(active.as_ref().map(|id| format!("#{id}"))));
            self.active_section = Some(active);
        }

        let opacity = if y > SCROLL_INDICATOR_HIDE_AFTER_PX {
            0.0
        } else {
            SCROLL_INDICATOR_OPACITY
        };
        if self.indicator_opacity != Some(opacity) {
            self.indicator_opacity = Some(opacity);
            patches.push(Patch::ScrollIndicatorOpacity(opacity));
        }

        let show = y > BACK_TO_TOP_SHOW_AFTER_PX;
        if self.back_to_top != Some(show) {
            self.back_to_top = Some(show);
            patches.push(Patch::BackToTopVisible(show));
        }

        patches
    }

    /// Records a nav link activated by a click, so the next snapshot only
    /// patches the link again if the section actually differs.
    pub fn activate_link(&mut self, href: &str) -> Patch {
        self.active_section = Some(href.strip_prefix('#').map(str::to_string));
        Patch::ActiveNavLink(Some(href.to_string()))
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky == Some(true)
    }
}

/// The last section whose activation line has been scrolled past.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionTop]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SECTION_ACTIVATION_OFFSET_PX)
        .last()
        .map(|s| s.id.as_str())
}

/// Scroll position that shows a nav link's target below the navbar.
#[must_use]
pub fn nav_target_top(offset_top: f64) -> f64 {
    offset_top - NAVBAR_SCROLL_OFFSET_PX
}

/// The section the space key jumps to: the first of the key sections that
/// starts more than the activation offset below the current position.
#[must_use]
pub fn next_section(scroll_y: f64, sections: &[SectionTop]) -> Option<&'static str> {
    SPACE_SCROLL_SECTIONS.into_iter().find(|id| {
        sections
            .iter()
            .find(|s| s.id == *id)
            .is_some_and(|s| s.top > scroll_y + SECTION_ACTIVATION_OFFSET_PX)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionTop> {
        vec![
            SectionTop::new("home", 0.0),
            SectionTop::new("abstract", 800.0),
            SectionTop::new("results", 1600.0),
            SectionTop::new("code", 2400.0),
        ]
    }

    fn snapshot(scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            navbar_top: 60.0,
            sections: sections(),
        }
    }

    #[test]
    fn first_snapshot_emits_everything() {
        let mut spy = ScrollSpy::default();
        let patches = spy.on_scroll(&snapshot(0.0));
        assert_eq!(
            patches,
            vec![
                Patch::NavbarSticky(false),
                Patch::ActiveNavLink(Some("#home".into())),
                Patch::ScrollIndicatorOpacity(0.7),
                Patch::BackToTopVisible(false),
            ]
        );
    }

    #[test]
    fn unchanged_state_emits_nothing() {
        let mut spy = ScrollSpy::default();
        spy.on_scroll(&snapshot(10.0));
        assert!(spy.on_scroll(&snapshot(20.0)).is_empty());
    }

    #[test]
    fn deep_scroll_sticks_navbar_and_shows_back_to_top() {
        let mut spy = ScrollSpy::default();
        spy.on_scroll(&snapshot(0.0));
        let patches = spy.on_scroll(&snapshot(750.0));
        assert!(patches.contains(&Patch::NavbarSticky(true)));
        assert!(patches.contains(&Patch::ActiveNavLink(Some("#abstract".into()))));
        assert!(patches.contains(&Patch::ScrollIndicatorOpacity(0.0)));
        assert!(patches.contains(&Patch::BackToTopVisible(true)));
        assert!(spy.is_sticky());
    }

    #[test]
    fn sticky_point_is_frozen_while_stuck() {
        let mut spy = ScrollSpy::default();
        spy.on_scroll(&snapshot(100.0));
        // Once stuck, the navbar reports its fixed position.
        let moved = ScrollSnapshot {
            scroll_y: 80.0,
            navbar_top: 500.0,
            sections: sections(),
        };
        assert!(!spy.on_scroll(&moved).contains(&Patch::NavbarSticky(false)));
    }

    #[test]
    fn active_section_uses_offset() {
        assert_eq!(active_section(699.0, &sections()), Some("home"));
        assert_eq!(active_section(700.0, &sections()), Some("abstract"));
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn space_targets_next_key_section() {
        assert_eq!(next_section(0.0, &sections()), Some("abstract"));
        assert_eq!(next_section(700.0, &sections()), Some("results"));
        assert_eq!(next_section(2300.0, &sections()), None);
    }

    #[test]
    fn nav_target_leaves_room_for_navbar() {
        assert_eq!(nav_target_top(800.0), 720.0);
    }

    #[test]
    fn clicked_link_is_not_repatched_on_matching_scroll() {
        let mut spy = ScrollSpy::default();
        spy.on_scroll(&snapshot(0.0));
        spy.activate_link("#results");
        let patches = spy.on_scroll(&snapshot(1550.0));
        assert!(!patches.iter().any(|p| matches!(p, Patch::ActiveNavLink(_))));
    }
}
