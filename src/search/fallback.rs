// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring search used while no index is available.
//!
//! No tokenization and no ranking: a document matches when its title or content
//! contains the whole (trimmed) query, ignoring case. Results keep corpus order.

use crate::corpus::Corpus;
use crate::types::Document;
use crate::util::{contains_folded, fold};
use std::sync::Arc;

pub fn fallback_search(corpus: &Corpus, text: &str, limit: usize) -> Vec<Arc<Document>> {
    let needle = fold(text.trim());
    if needle.is_empty() {
        return Vec::new();
    }
    corpus
        .iter()
        .filter(|doc| contains_folded(&doc.title, &needle) || contains_folded(&doc.content, &needle))
        .take(limit)
        .cloned()
        .collect()
}
