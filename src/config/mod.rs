// SPDX-License-Identifier: MPL-2.0
//! This module handles the page configuration: the carousel versions, the
//! outbound links and the timings of every deferred effect.
//!
//! The configuration ships embedded in the module as `assets/showcase.toml`.
//! Every field has a default so a partial file is valid.
//!
//! # Examples
//!
//! ```
//! use vida_showcase::config;
//!
//! let config = config::load_from_str(
//!     r#"
//!     [[versions]]
//!     id = "v1"
//!     label = "DepthAnything V1"
//!     "#,
//! )
//! .expect("valid config");
//! assert_eq!(config.versions.len(), 1);
//! assert_eq!(config.timing.carousel_transition().as_millis(), 600);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const EMBEDDED_CONFIG: &str = include_str!("../../assets/showcase.toml");

/// One named comparison dataset shown by the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Identifier matching `data-version` / `data-page` in the markup.
    pub id: String,
    /// Human-readable name used in notifications.
    pub label: String,
}

/// A button that opens a fixed URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// DOM id of the button.
    pub element_id: String,
    /// Destination, absolute or relative to the page.
    pub url: String,
    /// Whether to open the destination in a new browsing context.
    #[serde(default = "default_true")]
    pub new_context: bool,
}

/// Fallback destinations for resource cards without an anchor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefaults {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub datasets: Option<String>,
    #[serde(default)]
    pub models: Option<String>,
}

/// Durations of every deferred effect, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub notification_auto_dismiss_ms: u64,
    pub notification_enter_delay_ms: u64,
    pub notification_exit_ms: u64,
    pub carousel_transition_ms: u64,
    pub slider_hint_ms: u64,
    pub preload_interval_ms: u64,
    pub resource_open_delay_ms: u64,
    pub copy_feedback_ms: u64,
    pub card_press_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            notification_auto_dismiss_ms: DEFAULT_NOTIFICATION_AUTO_DISMISS_MS,
            notification_enter_delay_ms: DEFAULT_NOTIFICATION_ENTER_DELAY_MS,
            notification_exit_ms: DEFAULT_NOTIFICATION_EXIT_MS,
            carousel_transition_ms: DEFAULT_CAROUSEL_TRANSITION_MS,
            slider_hint_ms: DEFAULT_SLIDER_HINT_MS,
            preload_interval_ms: DEFAULT_PRELOAD_INTERVAL_MS,
            resource_open_delay_ms: DEFAULT_RESOURCE_OPEN_DELAY_MS,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            card_press_ms: DEFAULT_CARD_PRESS_MS,
        }
    }
}

impl Timing {
    #[must_use]
    pub fn notification_auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.notification_auto_dismiss_ms)
    }

    #[must_use]
    pub fn notification_enter_delay(&self) -> Duration {
        Duration::from_millis(self.notification_enter_delay_ms)
    }

    #[must_use]
    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    #[must_use]
    pub fn carousel_transition(&self) -> Duration {
        Duration::from_millis(self.carousel_transition_ms)
    }

    #[must_use]
    pub fn slider_hint(&self) -> Duration {
        Duration::from_millis(self.slider_hint_ms)
    }

    /// Delay before the `rank`-th inactive page is preloaded (1-based).
    #[must_use]
    pub fn preload_delay(&self, rank: u32) -> Duration {
        Duration::from_millis(self.preload_interval_ms.saturating_mul(u64::from(rank)))
    }

    #[must_use]
    pub fn resource_open_delay(&self) -> Duration {
        Duration::from_millis(self.resource_open_delay_ms)
    }

    #[must_use]
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    #[must_use]
    pub fn card_press(&self) -> Duration {
        Duration::from_millis(self.card_press_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_versions")]
    pub versions: Vec<VersionConfig>,
    /// Version active on load; the first listed version when absent.
    #[serde(default)]
    pub initial_version: Option<String>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
    #[serde(default)]
    pub resources: ResourceDefaults,
    #[serde(default)]
    pub timing: Timing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            versions: default_versions(),
            initial_version: None,
            links: Vec::new(),
            resources: ResourceDefaults::default(),
            timing: Timing::default(),
        }
    }
}

impl Config {
    /// Index of the version active on load.
    #[must_use]
    pub fn initial_index(&self) -> usize {
        self.initial_version
            .as_deref()
            .and_then(|id| self.versions.iter().position(|v| v.id == id))
            .unwrap_or(0)
    }

    /// Looks up the link bound to a button id.
    #[must_use]
    pub fn link(&self, element_id: &str) -> Option<&LinkConfig> {
        self.links.iter().find(|l| l.element_id == element_id)
    }

    fn validate(self) -> Result<Self> {
        if self.versions.is_empty() {
            return Err(Error::Config("at least one version is required".into()));
        }
        for (i, version) in self.versions.iter().enumerate() {
            if self.versions[..i].iter().any(|v| v.id == version.id) {
                return Err(Error::Config(format!("duplicate version id `{}`", version.id)));
            }
        }
        if let Some(initial) = &self.initial_version {
            if !self.versions.iter().any(|v| &v.id == initial) {
                return Err(Error::Config(format!("unknown initial version `{initial}`")));
            }
        }
        Ok(self)
    }
}

fn default_true() -> bool {
    true
}

fn default_versions() -> Vec<VersionConfig> {
    [("v1", "DepthAnything V1"), ("v2", "DepthAnything V2"), ("pro", "DepthPro")]
        .into_iter()
        .map(|(id, label)| VersionConfig {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// Parses and validates a TOML configuration.
pub fn load_from_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()
}

/// Loads the configuration compiled into the module.
///
/// A broken embedded file is logged and replaced by the defaults so the page
/// stays interactive.
#[must_use]
pub fn load_embedded() -> Config {
    match load_from_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Falling back to default page config: {err}");
            Config::default()
        }
    }
}

/// Loads a configuration file, falling back to defaults when it does not parse.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(load_from_str(&content).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn embedded_config_lists_three_versions() {
        let config = load_embedded();
        let ids: Vec<_> = config.versions.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["v1", "v2", "pro"]);
        assert_eq!(config.initial_index(), 0);
    }

    #[test]
    fn embedded_config_binds_all_buttons() {
        let config = load_embedded();
        for id in ["paper-btn", "arxiv-btn", "code-btn", "hf-btn", "model-btn"] {
            assert!(config.link(id).is_some(), "missing link for {id}");
        }
        assert!(config.link("paper-btn").unwrap().new_context);
    }

    #[test]
    fn partial_timing_keeps_other_defaults() {
        let config = load_from_str("[timing]\ncarousel_transition_ms = 250\n").unwrap();
        assert_eq!(config.timing.carousel_transition(), Duration::from_millis(250));
        assert_eq!(
            config.timing.notification_auto_dismiss_ms,
            DEFAULT_NOTIFICATION_AUTO_DISMISS_MS
        );
    }

    #[test]
    fn preload_delay_scales_with_rank() {
        let timing = Timing::default();
        assert_eq!(timing.preload_delay(1), Duration::from_secs(2));
        assert_eq!(timing.preload_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn empty_version_list_is_rejected() {
        let err = load_from_str("versions = []").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn duplicate_version_ids_are_rejected() {
        let content = r#"
            [[versions]]
            id = "v1"
            label = "a"
            [[versions]]
            id = "v1"
            label = "b"
        "#;
        assert!(load_from_str(content).is_err());
    }

    #[test]
    fn unknown_initial_version_is_rejected() {
        assert!(load_from_str("initial_version = \"v9\"").is_err());
    }

    #[test]
    fn initial_version_selects_index() {
        let config = load_from_str("initial_version = \"v2\"").unwrap();
        assert_eq!(config.initial_index(), 1);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("showcase.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_reads_links() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("showcase.toml");
        fs::write(
            &config_path,
            "[[links]]\nelement_id = \"code-btn\"\nurl = \"https://example.org\"\nnew_context = false\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        let link = loaded.link("code-btn").expect("link present");
        assert_eq!(link.url, "https://example.org");
        assert!(!link.new_context);
    }
}
