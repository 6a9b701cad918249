// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML for the results container.
//!
//! Always a full replacement. With at most ten results there is nothing to gain
//! from diffing.

use super::SearchState;
use crate::config::SnippetConfig;
use crate::snippet::snippet_with;
use crate::util::escape_html;
use std::fmt::Write;

pub const NO_RESULTS_HTML: &str = r#"<div class="search-no-results">No results found</div>"#;

pub fn render_results(state: &SearchState, config: &SnippetConfig) -> String {
    if state.query.trim().is_empty() {
        return String::new();
    }
    if state.results.is_empty() {
        return NO_RESULTS_HTML.to_string();
    }

    let mut html = String::new();
    for (i, doc) in state.results.iter().enumerate() {
        let class = if state.selected == Some(i) {
            "search-result selected"
        } else {
            "search-result"
        };
        // Writing into a String cannot fail
        let _ = write!(
            html,
            r#"<a class="{}" href="{}" data-index="{}"><div class="search-result-title">{}</div><div class="search-result-snippet">{}</div></a>"#,
            class,
            escape_html(&doc.url),
            i,
            escape_html(&doc.title),
            snippet_with(&doc.content, &state.query, config),
        );
    }
    html
}
