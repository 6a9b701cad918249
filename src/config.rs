// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for every controller.
//!
//! All structs deserialize with `#[serde(default)]`, so the JavaScript side can
//! hand over a partial object (`{ navigator: { headerOffsetPx: 64 } }`) and get
//! defaults for the rest.

use crate::util::fold_char;
use serde::Deserialize;
use std::time::Duration;

/// Maximum number of results any search path returns.
pub const MAX_RESULTS: usize = 10;

/// Relevance multiplier for title hits.
pub const TITLE_BOOST: f64 = 10.0;

/// Relevance multiplier for content hits.
pub const CONTENT_BOOST: f64 = 1.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub search: SearchConfig,
    pub snippet: SnippetConfig,
    pub navigator: NavigatorConfig,
    pub readiness: GateConfig,
    /// One-letter shortcuts to the site's top-level sections.
    pub sections: Vec<SectionShortcut>,
}

/// A letter that jumps to a section index page when pressed outside the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionShortcut {
    pub key: char,
    pub url: String,
}

impl SectionShortcut {
    pub fn new(key: char, url: impl Into<String>) -> Self {
        Self {
            key: fold_char(key),
            url: url.into(),
        }
    }

    /// Shortcut for a section directory: the first letter of its display name.
    ///
    /// Returns `None` for names that don't start with a letter; digits belong to
    /// the page-list navigator.
    pub fn from_section(dir: &str, url: impl Into<String>) -> Option<Self> {
        let key = section_display_name(dir).chars().next()?;
        key.is_alphabetic().then(|| Self::new(key, url))
    }

    pub fn matches(&self, c: char) -> bool {
        fold_char(c) == fold_char(self.key)
    }
}

/// Display name of a section directory. A trailing single-character `-x` suffix
/// is a disambiguation tag and is dropped: `blog-b` displays as `blog`.
pub fn section_display_name(dir: &str) -> &str {
    match dir.rsplit_once('-') {
        Some((name, tag)) if tag.chars().count() == 1 => name,
        _ => dir,
    }
}

/// Query engine and index scoring options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub max_results: usize,
    pub title_boost: f64,
    pub content_boost: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            title_boost: TITLE_BOOST,
            content_boost: CONTENT_BOOST,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnippetConfig {
    /// Characters kept on each side of the first match.
    pub radius: usize,
    /// Characters shown when nothing matches.
    pub preview_len: usize,
    /// Terms this short or shorter are never highlighted.
    pub min_highlight_len: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            radius: 75,
            preview_len: 150,
            min_highlight_len: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigatorConfig {
    pub settle_ms: u64,
    /// Height of the sticky header the scroll target must clear.
    pub header_offset_px: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            settle_ms: 400,
            header_offset_px: 80,
        }
    }
}

/// Readiness wait for the indexing backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GateConfig {
    pub poll_interval_ms: u64,
    pub timeout_ms: u64,
}

impl GateConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            timeout_ms: 5_000,
        }
    }
}
