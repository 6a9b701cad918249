// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the fallible edges of the crate.
//!
//! None of these ever reach the user as a blocking error. Corpus and index
//! failures put the session into fallback mode; query faults turn into an empty
//! result list for that keystroke.

use thiserror::Error;

/// The corpus could not be read or parsed.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised by bindings when the host-side fetch fails.
    #[error("corpus fetch failed: {0}")]
    Fetch(String),
}

/// The index could not be built from the corpus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("cannot index an empty corpus")]
    EmptyCorpus,
}

/// The index rejected a query.
///
/// The engine catches these and reports zero results; the next query runs
/// normally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("query contains no searchable terms")]
    NoTerms,

    #[error("unknown field `{0}` in query")]
    UnknownField(String),

    #[error("field `{0}` is not followed by a term")]
    MissingTerm(String),
}
