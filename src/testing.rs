// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::corpus::Corpus;
use crate::effect::{Focus, Key, KeyInput, Modifiers};
use crate::types::{Document, PageLink};

/// Create a test document whose url is derived from its id.
pub fn make_doc(id: &str, title: &str, content: &str) -> Document {
    Document::new(id, title, content, format!("/{}", id))
}

/// The two-document corpus used throughout the docs:
/// an intro page and a page about caches.
pub fn cache_corpus() -> Corpus {
    Corpus::new(vec![
        Document::new("a", "Intro", "Getting started guide", "/a"),
        Document::new("b", "Cache Design", "A cache stores results", "/b"),
    ])
}

/// A corpus of `n` documents that all mention "page".
pub fn numbered_corpus(n: usize) -> Corpus {
    Corpus::new(
        (0..n)
            .map(|i| make_doc(&i.to_string(), &format!("Page {}", i), "page body text"))
            .collect(),
    )
}

/// A page list numbered 1..=n, the way the build pipeline renders it.
pub fn numbered_links(n: u32) -> Vec<PageLink> {
    (1..=n)
        .map(|i| PageLink::new(i, format!("/section/page-{}.html", i)))
        .collect()
}

/// A plain key press with focus outside any text field.
pub fn press(key: Key) -> KeyInput {
    KeyInput {
        key,
        modifiers: Modifiers::default(),
        focus: Focus::Page,
    }
}

/// A key press while a text input has focus.
pub fn press_in_field(key: Key) -> KeyInput {
    KeyInput {
        key,
        modifiers: Modifiers::default(),
        focus: Focus::TextField,
    }
}
