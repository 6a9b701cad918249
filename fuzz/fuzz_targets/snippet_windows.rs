// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.
//!
//! Char-offset windows over arbitrary Unicode must never split a code point, and
//! the output must stay well-formed: balanced `<mark>` tags and no raw markup
//! from the document.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitelens::{snippet_with, SnippetConfig};

#[derive(Debug, Arbitrary)]
struct Input {
    content: String,
    query: String,
    radius: u8,
    preview_len: u8,
}

fuzz_target!(|input: Input| {
    let config = SnippetConfig {
        radius: usize::from(input.radius),
        preview_len: usize::from(input.preview_len),
        ..SnippetConfig::default()
    };
    let out = snippet_with(&input.content, &input.query, &config);

    assert_eq!(out.matches("<mark>").count(), out.matches("</mark>").count());
    let stripped = out.replace("<mark>", "").replace("</mark>", "");
    assert!(!stripped.contains('<'));
    assert!(!stripped.contains('>'));
});
