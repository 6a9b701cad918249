// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: one entry point, two search paths.
//!
//! ```text
//!   search(text)
//!       │
//!       ├── blank? ──────────────────────────────▶ []
//!       │
//!       ├── index installed? ── parse(text + "*") ──▶ ranked hits
//!       │                            │
//!       │                            └── parse error ──▶ [] (this keystroke only)
//!       │
//!       └── no index ──▶ substring scan (fallback.rs) ──▶ corpus order
//! ```
//!
//! Every path truncates to `max_results`. Nothing here returns an error: the
//! overlay shows "No results found" at worst.

mod fallback;

pub use fallback::fallback_search;

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::index::SearchIndex;
use crate::query::Query;
use crate::types::Document;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// Which path produced a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    /// Blank query, nothing searched.
    Empty,
    Indexed,
    Fallback,
    /// The index rejected the query; reported as zero results.
    Fault,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Vec<Arc<Document>>,
    pub source: SearchSource,
}

#[derive(Debug, Default)]
pub struct QueryEngine {
    corpus: Corpus,
    index: RwLock<Option<Arc<SearchIndex>>>,
    config: SearchConfig,
}

impl QueryEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            corpus: Corpus::default(),
            index: RwLock::new(None),
            config,
        }
    }

    pub fn with_corpus(corpus: Corpus, config: SearchConfig) -> Self {
        Self {
            corpus,
            ..Self::new(config)
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the corpus. Any installed index belongs to the old corpus and is
    /// dropped, so searches fall back until a new one is installed.
    pub fn set_corpus(&mut self, corpus: Corpus) {
        self.corpus = corpus;
        *self.index.get_mut() = None;
    }

    /// Swap in a freshly built index. Last build wins.
    pub fn install_index(&self, index: SearchIndex) {
        *self.index.write() = Some(Arc::new(index));
    }

    pub fn clear_index(&self) {
        *self.index.write() = None;
    }

    pub fn has_index(&self) -> bool {
        self.index.read().is_some()
    }

    /// Build an index over the current corpus and install it.
    pub fn rebuild_index(&self) -> Result<(), crate::error::IndexError> {
        let index = SearchIndex::build_with(&self.corpus, &self.config)?;
        self.install_index(index);
        Ok(())
    }

    pub fn search(&self, text: &str) -> Vec<Arc<Document>> {
        self.search_with_source(text).results
    }

    pub fn search_with_source(&self, text: &str) -> SearchOutcome {
        if text.trim().is_empty() {
            return SearchOutcome {
                results: Vec::new(),
                source: SearchSource::Empty,
            };
        }

        // Clone the Arc so a concurrent install doesn't hold up this query
        let index = self.index.read().clone();
        let Some(index) = index else {
            return SearchOutcome {
                results: fallback_search(&self.corpus, text, self.config.max_results),
                source: SearchSource::Fallback,
            };
        };

        match Query::with_trailing_wildcard(text) {
            Ok(query) => {
                let results = index
                    .search(&query)
                    .into_iter()
                    .filter_map(|hit| index.corpus().get(hit.doc).cloned())
                    .take(self.config.max_results)
                    .collect();
                SearchOutcome {
                    results,
                    source: SearchSource::Indexed,
                }
            }
            Err(err) => {
                tracing::debug!(query = text, error = %err, "indexed query failed");
                SearchOutcome {
                    results: Vec::new(),
                    source: SearchSource::Fault,
                }
            }
        }
    }
}
