// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result excerpts with highlighted query terms.
//!
//! A snippet is a window of the document body around the first place any query
//! term occurs, with every occurrence of every (long enough) term inside the
//! window wrapped in `<mark>`. All offsets are in characters.
//!
//! The output is HTML-safe: document text is escaped and the only markup we emit
//! is `<mark>`/`</mark>`. Occurrences are collected into a per-character mask
//! before any markup is written, so overlapping terms ("cache" and "che") produce
//! one marked range instead of nested or broken tags.

use crate::config::SnippetConfig;
use crate::util::{find_all, fold, push_escaped};

pub const ELLIPSIS: &str = "...";
pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Snippet with the default window sizes (75 each side, 150 preview).
pub fn snippet(content: &str, query: &str) -> String {
    snippet_with(content, query, &SnippetConfig::default())
}

pub fn snippet_with(content: &str, query: &str, config: &SnippetConfig) -> String {
    if content.is_empty() || query.is_empty() {
        return String::new();
    }

    let terms: Vec<Vec<char>> = query
        .split_whitespace()
        .map(fold)
        .filter(|t| !t.is_empty())
        .collect();
    let chars: Vec<char> = content.chars().collect();
    let folded = fold(content);

    // Earliest match; on a tie prefer the longer term so the window covers it
    let first = terms
        .iter()
        .filter_map(|term| {
            folded
                .windows(term.len())
                .position(|w| w == term.as_slice())
                .map(|pos| (pos, term.len()))
        })
        .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let Some((pos, len)) = first else {
        return preview(&chars, config.preview_len);
    };

    let start = pos.saturating_sub(config.radius);
    let end = (pos + len + config.radius).min(chars.len());

    let mut marked = vec![false; end - start];
    for term in terms.iter().filter(|t| t.len() > config.min_highlight_len) {
        for at in find_all(&folded[start..end], term) {
            marked[at..at + term.len()].iter_mut().for_each(|m| *m = true);
        }
    }

    let mut out = String::with_capacity((end - start) + 32);
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    let mut i = 0;
    while i < marked.len() {
        let run_end = (i..marked.len())
            .find(|&j| marked[j] != marked[i])
            .unwrap_or(marked.len());
        let run = chars[start + i..start + run_end].iter().copied();
        if marked[i] {
            out.push_str(MARK_OPEN);
            push_escaped(&mut out, run);
            out.push_str(MARK_CLOSE);
        } else {
            push_escaped(&mut out, run);
        }
        i = run_end;
    }
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

fn preview(chars: &[char], limit: usize) -> String {
    let mut out = String::new();
    push_escaped(&mut out, chars.iter().take(limit).copied());
    if chars.len() > limit {
        out.push_str(ELLIPSIS);
    }
    out
}
