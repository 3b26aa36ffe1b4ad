// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site layout and timing knobs.
//!
//! Every field has a default matching the stock site build, so an empty JSON
//! object (or no config at all) is a valid configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Where the site build puts its artifacts, and how the client behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Search index artifact, relative to a top-level page.
    pub index_path: String,
    /// Directory holding one HTML fragment per page.
    pub fragments_dir: String,
    /// Random-candidate artifact.
    pub random_path: String,
    /// Prefix joined with an article filename to form its link.
    pub page_prefix: String,
    /// Suffix a link must end with to get a hover preview.
    pub page_suffix: String,
    /// Directories whose pages sit one level below the artifacts.
    pub subdirectories: Vec<String>,
    pub max_results: usize,
    pub timing: Timing,
    pub placement: PlacementRules,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            index_path: "search-index.json".to_string(),
            fragments_dir: "fragments/".to_string(),
            random_path: "random.json".to_string(),
            page_prefix: "pages/".to_string(),
            page_suffix: ".html".to_string(),
            subdirectories: vec!["pages".to_string()],
            max_results: crate::search::MAX_RESULTS,
            timing: Timing::default(),
            placement: PlacementRules::default(),
        }
    }
}

/// Delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    /// Quiet period after the last keystroke before searching.
    pub search_debounce_ms: u64,
    /// How long the pointer must rest on a link before its preview shows.
    pub hover_delay_ms: u64,
    /// Grace period after leaving a link before the preview hides.
    pub hide_grace_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            search_debounce_ms: 200,
            hover_delay_ms: 300,
            hide_grace_ms: 100,
        }
    }
}

impl Timing {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }

    pub fn hide_grace(&self) -> Duration {
        Duration::from_millis(self.hide_grace_ms)
    }
}

/// Popover placement distances, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementRules {
    /// Vertical gap between the link and the popover.
    pub gap: f64,
    /// Space kept free at the viewport's right edge.
    pub edge_margin: f64,
    /// Minimum distance from the viewport's top and left edges.
    pub min_offset: f64,
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            gap: 8.0,
            edge_margin: 20.0,
            min_offset: 10.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Artifact paths as seen from the page at `page_path`.
    ///
    /// Pages inside one of `subdirectories` resolve everything one level up.
    pub fn resolve(&self, page_path: &str) -> ArtifactPaths {
        let base = if self.is_nested(page_path) { "../" } else { "" };
        ArtifactPaths {
            index: format!("{base}{}", self.index_path),
            fragments_dir: format!("{base}{}", self.fragments_dir),
            random: format!("{base}{}", self.random_path),
            page_prefix: format!("{base}{}", self.page_prefix),
            page_suffix: self.page_suffix.clone(),
        }
    }

    fn is_nested(&self, page_path: &str) -> bool {
        let path = strip_query(page_path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        // A trailing slash means the last segment is itself a directory.
        let parent = if path.ends_with('/') {
            segments.last().copied()
        } else {
            segments.len().checked_sub(2).and_then(|i| segments.get(i).copied())
        };
        parent.is_some_and(|parent| self.subdirectories.iter().any(|dir| dir == parent))
    }
}

/// Strip `?query` and `#fragment` from a URL path.
pub(crate) fn strip_query(href: &str) -> &str {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    &href[..end]
}

/// Concrete artifact locations for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub index: String,
    pub fragments_dir: String,
    pub random: String,
    pub page_prefix: String,
    pub page_suffix: String,
}

impl ArtifactPaths {
    /// Fragment artifact for a page filename.
    pub fn fragment(&self, filename: &str) -> String {
        format!("{}{}", self.fragments_dir, filename)
    }

    /// Link target for a page filename.
    pub fn page(&self, filename: &str) -> String {
        format!("{}{}", self.page_prefix, filename)
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        SiteConfig::default().resolve("index.html")
    }
}
