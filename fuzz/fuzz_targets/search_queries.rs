// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling on both search paths.
//!
//! Whatever the reader types, search returns at most ten documents, never
//! panics, and a malformed query is just an empty result list.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sitelens::testing::make_doc;
use sitelens::{Corpus, QueryEngine, SearchConfig, MAX_RESULTS};
use std::sync::OnceLock;

fn engines() -> &'static (QueryEngine, QueryEngine) {
    static ENGINES: OnceLock<(QueryEngine, QueryEngine)> = OnceLock::new();
    ENGINES.get_or_init(|| {
        let corpus = Corpus::new(vec![
            make_doc("a", "Intro", "Getting started guide"),
            make_doc("b", "Cache Design", "A cache stores results"),
            make_doc("c", "Größe & <Maße>", "Ünïcödé content: café, naïve, İstanbul"),
            make_doc("d", "", ""),
        ]);
        let indexed = QueryEngine::with_corpus(corpus.clone(), SearchConfig::default());
        indexed.rebuild_index().expect("corpus is not empty");
        (indexed, QueryEngine::with_corpus(corpus, SearchConfig::default()))
    })
}

fuzz_target!(|query: &[u8]| {
    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();
    let (indexed, fallback) = engines();

    for engine in [indexed, fallback] {
        let results = engine.search(&query);
        assert!(results.len() <= MAX_RESULTS);
        if query.trim().is_empty() {
            assert!(results.is_empty());
        }
    }
});
