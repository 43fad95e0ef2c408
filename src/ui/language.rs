// SPDX-License-Identifier: MPL-2.0
//! Language toggle between the two page locales.

use crate::domain::Locale;
use crate::i18n::I18n;
use crate::ui::patch::Patch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The requested locale was already current.
    Unchanged,
    Switched(Locale),
}

/// Makes `locale` current. Switching to the current locale changes nothing.
pub fn switch_to(i18n: &mut I18n, locale: Locale) -> Event {
    if i18n.current_locale() == locale {
        return Event::Unchanged;
    }
    i18n.set_locale(locale);
    Event::Switched(locale)
}

/// Patches rendering the whole page in `locale`.
#[must_use]
pub fn render(locale: Locale) -> Vec<Patch> {
    vec![
        Patch::LocalizeContent(locale),
        Patch::DocumentLanguage(locale),
        Patch::ActiveLanguage(locale),
    ]
}

/// Patches for page load. The markup is authored in the primary locale,
/// so content is only re-rendered for another stored locale; the language
/// buttons are always synchronised.
#[must_use]
pub fn initial_render(locale: Locale) -> Vec<Patch> {
    if locale.is_primary() {
        vec![Patch::ActiveLanguage(locale)]
    } else {
        render(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_to_current_locale_is_unchanged() {
        let mut i18n = I18n::new(Locale::En);
        assert_eq!(switch_to(&mut i18n, Locale::En), Event::Unchanged);
    }

    #[test]
    fn switching_updates_translator() {
        let mut i18n = I18n::new(Locale::En);
        assert_eq!(switch_to(&mut i18n, Locale::Zh), Event::Switched(Locale::Zh));
        assert_eq!(i18n.current_locale(), Locale::Zh);
    }

    #[test]
    fn primary_locale_only_syncs_buttons_on_load() {
        assert_eq!(initial_render(Locale::En), vec![Patch::ActiveLanguage(Locale::En)]);
        assert_eq!(initial_render(Locale::Zh).len(), 3);
    }
}
