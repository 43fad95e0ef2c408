// SPDX-License-Identifier: MPL-2.0
use crate::domain::Locale;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    current_locale: Locale,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locales", &self.available_locales())
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    /// Loads every embedded bundle and selects `locale`.
    ///
    /// Bundles that fail to parse are logged and skipped; lookups against them
    /// fall back to the primary locale.
    pub fn new(locale: Locale) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            match load_bundle(filename, source) {
                Ok((locale, bundle)) => {
                    bundles.insert(locale, bundle);
                }
                Err(err) => log::warn!("Skipping translation file {filename}: {err}"),
            }
        }

        Self {
            bundles,
            current_locale: locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.current_locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.current_locale = locale;
    }

    /// Locales with a loaded bundle, primary first.
    #[must_use]
    pub fn available_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|l| self.bundles.contains_key(l))
            .collect()
    }

    pub fn tr(&self, key: &str) -> String {
        self.tr_with_args(key, &[])
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.tr_in(self.current_locale, key, args)
    }

    /// Resolves a message in an explicit locale, falling back to the primary
    /// locale and finally to a visible `MISSING:` marker.
    pub fn tr_in(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        self.format(locale, key, args)
            .or_else(|| self.format(Locale::default(), key, args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn format(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let pattern = bundle.get_message(key)?.value()?;

        let fluent_args = if args.is_empty() {
            None
        } else {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(name.to_string(), value.to_string());
            }
            Some(fluent_args)
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            log::warn!("Failed to format `{key}` in {locale}: {errors:?}");
            None
        }
    }
}

fn load_bundle(filename: &str, source: String) -> Result<(Locale, FluentBundle<FluentResource>)> {
    let stem = filename
        .strip_suffix(".ftl")
        .ok_or_else(|| Error::I18n(format!("not a Fluent file: {filename}")))?;
    let langid: LanguageIdentifier = stem
        .parse()
        .map_err(|_| Error::I18n(format!("invalid language identifier `{stem}`")))?;
    let locale: Locale = stem.parse().map_err(|e| Error::I18n(format!("{e}")))?;

    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| Error::I18n(format!("parse errors: {errors:?}")))?;
    let mut bundle = FluentBundle::new(vec![langid]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::I18n(format!("conflicting messages: {errors:?}")))?;

    Ok((locale, bundle))
}
