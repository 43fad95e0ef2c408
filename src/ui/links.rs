// SPDX-License-Identifier: MPL-2.0
//! Outbound links: fixed buttons, resource cards and result cards.

use crate::config::ResourceDefaults;
use std::str::FromStr;

// =============================================================================
// Resource cards
// =============================================================================

/// Kind of resource a card advertises, recognised by its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Github,
    Datasets,
    Models,
}

impl ResourceKind {
    /// Recognises a card title in either page language.
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        match title.trim() {
            "GitHub Repository" | "GitHub 代码库" => Some(ResourceKind::Github),
            "Datasets" | "数据集" => Some(ResourceKind::Datasets),
            "Pre-trained Models" | "预训练模型" => Some(ResourceKind::Models),
            _ => None,
        }
    }

    /// Message shown while the link opens.
    #[must_use]
    pub fn message_key(kind: Option<Self>) -> &'static str {
        match kind {
            Some(ResourceKind::Github) => "resource-github",
            Some(ResourceKind::Datasets) => "resource-dataset",
            Some(ResourceKind::Models) => "resource-model",
            None => "resource-fallback",
        }
    }

    fn default_link(self, defaults: &ResourceDefaults) -> Option<&str> {
        match self {
            ResourceKind::Github => defaults.github.as_deref(),
            ResourceKind::Datasets => defaults.datasets.as_deref(),
            ResourceKind::Models => defaults.models.as_deref(),
        }
    }
}

/// Where a clicked resource card leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceTarget {
    Open(String),
    Unavailable,
}

/// Resolves a resource card click: the card's own anchor wins, then the
/// configured default for its kind.
#[must_use]
pub fn resolve_resource(
    kind: Option<ResourceKind>,
    anchor: Option<&str>,
    defaults: &ResourceDefaults,
) -> ResourceTarget {
    let url = anchor
        .filter(|href| !href.is_empty())
        .or_else(|| kind.and_then(|k| k.default_link(defaults)))
        .filter(|href| *href != "#");
    match url {
        Some(url) => ResourceTarget::Open(url.to_string()),
        None => ResourceTarget::Unavailable,
    }
}

// =============================================================================
// Result cards
// =============================================================================

/// Experimental setting shown by a result card (`data-result`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Indoor,
    Outdoor,
    Night,
    Weather,
}

impl ResultKind {
    #[must_use]
    pub fn message_key(kind: Option<Self>) -> &'static str {
        match kind {
            Some(ResultKind::Indoor) => "result-indoor",
            Some(ResultKind::Outdoor) => "result-outdoor",
            Some(ResultKind::Night) => "result-night",
            Some(ResultKind::Weather) => "result-weather",
            None => "result-fallback",
        }
    }
}

impl FromStr for ResultKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indoor" => Ok(ResultKind::Indoor),
            "outdoor" => Ok(ResultKind::Outdoor),
            "night" => Ok(ResultKind::Night),
            "weather" => Ok(ResultKind::Weather),
            _ => Err(()),
        }
    }
}
