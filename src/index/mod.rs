// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and lookup.
//!
//! One posting per (term, document, field) with the term frequency in that field.
//! The vocabulary is a `BTreeMap`, so a prefix query is a range scan starting at
//! the prefix and stopping at the first key that no longer starts with it.
//!
//! # INVARIANTS
//!
//! 1. **POSTINGS_SORTED**: each posting list is sorted by (doc, field)
//! 2. **NON_EMPTY**: every vocabulary term has at least one posting
//! 3. **DOC_IN_BOUNDS**: every posting's `doc` is a valid corpus position
//! 4. **DETERMINISTIC**: the same corpus always yields the same index

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::IndexError;
use crate::query::{Clause, Presence, Query};
use crate::scoring::term_score;
use crate::types::Field;
use crate::util::tokenize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::Bound;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    /// Corpus position of the document.
    pub doc: usize,
    pub field: Field,
    pub tf: u32,
}

/// A ranked match: corpus position plus relevance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub doc: usize,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct SearchIndex {
    corpus: Corpus,
    terms: BTreeMap<String, Vec<Posting>>,
    config: SearchConfig,
}

impl SearchIndex {
    pub fn build(corpus: &Corpus) -> Result<Self, IndexError> {
        Self::build_with(corpus, &SearchConfig::default())
    }

    pub fn build_with(corpus: &Corpus, config: &SearchConfig) -> Result<Self, IndexError> {
        if corpus.is_empty() {
            return Err(IndexError::EmptyCorpus);
        }

        let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
        for (doc, document) in corpus.iter().enumerate() {
            for field in Field::ALL {
                let text = match field {
                    Field::Title => &document.title,
                    Field::Content => &document.content,
                };
                // BTreeMap keeps per-field term order stable across builds
                let mut counts: BTreeMap<String, u32> = BTreeMap::new();
                for word in tokenize(text) {
                    *counts.entry(word).or_insert(0) += 1;
                }
                for (term, tf) in counts {
                    terms.entry(term).or_default().push(Posting { doc, field, tf });
                }
            }
        }

        tracing::debug!(docs = corpus.len(), terms = terms.len(), "built search index");
        Ok(Self {
            corpus: corpus.clone(),
            terms,
            config: config.clone(),
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    pub fn postings(&self, term: &str) -> &[Posting] {
        self.terms.get(term).map_or(&[], Vec::as_slice)
    }

    /// Vocabulary entries a clause matches: the exact term, or every term that
    /// starts with it for prefix clauses.
    fn expand<'a>(&'a self, clause: &'a Clause) -> Box<dyn Iterator<Item = &'a [Posting]> + 'a> {
        if clause.prefix {
            let start = (Bound::Included(clause.term.as_str()), Bound::Unbounded);
            Box::new(
                self.terms
                    .range::<str, _>(start)
                    .take_while(move |(term, _)| term.starts_with(clause.term.as_str()))
                    .map(|(_, postings)| postings.as_slice()),
            )
        } else {
            Box::new(std::iter::once(self.postings(&clause.term)))
        }
    }

    /// Run a parsed query. Results are sorted by score, ties in corpus order.
    ///
    /// Optional clauses are OR-combined. `+` clauses must all match and `-`
    /// clauses must not. A query with only prohibited clauses returns nothing.
    pub fn search(&self, query: &Query) -> Vec<Hit> {
        if !query.has_positive_clause() {
            return Vec::new();
        }

        let mut scores: HashMap<usize, f64> = HashMap::new();
        let mut required: Vec<HashSet<usize>> = Vec::new();
        let mut prohibited: HashSet<usize> = HashSet::new();

        for clause in &query.clauses {
            let mut matched = HashSet::new();
            // A prefix clause counts once per (doc, field): its best expansion
            let mut best: HashMap<(usize, Field), f64> = HashMap::new();
            for postings in self.expand(clause) {
                for posting in postings.iter().filter(|p| clause.searches(p.field)) {
                    matched.insert(posting.doc);
                    let score = term_score(posting.field, posting.tf, &self.config);
                    let slot = best.entry((posting.doc, posting.field)).or_insert(0.0);
                    *slot = slot.max(score);
                }
            }
            if clause.presence != Presence::Prohibited {
                for ((doc, _), score) in best {
                    *scores.entry(doc).or_insert(0.0) += score;
                }
            }
            match clause.presence {
                Presence::Required => required.push(matched),
                Presence::Prohibited => prohibited.extend(matched),
                Presence::Optional => {}
            }
        }

        let mut hits: Vec<Hit> = scores
            .into_iter()
            .filter(|(doc, _)| !prohibited.contains(doc))
            .filter(|(doc, _)| required.iter().all(|set| set.contains(doc)))
            .map(|(doc, score)| Hit { doc, score })
            .collect();

        hits.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.doc.cmp(&b.doc)));
        hits
    }
}
