// SPDX-License-Identifier: MPL-2.0
//! Display languages of the page.

use std::fmt;
use std::str::FromStr;

/// A display language. The page ships with English (primary) and
/// Simplified Chinese (secondary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Primary locale, already rendered in the static markup.
    #[default]
    En,
    /// Secondary locale.
    Zh,
}

impl Locale {
    /// All supported locales, primary first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Short code used in storage, in `data-lang` and as the suffix of the
    /// `data-*` content attributes.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Name of the attribute carrying this locale's content variant.
    #[must_use]
    pub fn content_attribute(self) -> &'static str {
        match self {
            Locale::En => "data-en",
            Locale::Zh => "data-zh",
        }
    }

    /// Value written to the document's `lang` attribute.
    #[must_use]
    pub fn document_tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh-CN",
        }
    }

    /// BCP-47 identifier of the matching translation bundle.
    #[must_use]
    pub fn bundle_id(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Zh => "zh-CN",
        }
    }

    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Locale::En
    }
}

/// Error returned when a string names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale `{}`", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" | "en-US" => Ok(Locale::En),
            "zh" | "zh-CN" => Ok(Locale::Zh),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_primary() {
        assert_eq!(Locale::default(), Locale::En);
        assert!(Locale::default().is_primary());
        assert!(!Locale::Zh.is_primary());
    }

    #[test]
    fn parses_codes_and_bundle_ids() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::Zh));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn code_round_trips_through_display() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn document_tags_match_page_expectations() {
        assert_eq!(Locale::En.document_tag(), "en");
        assert_eq!(Locale::Zh.document_tag(), "zh-CN");
        assert_eq!(Locale::Zh.content_attribute(), "data-zh");
    }
}
