// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Startup orchestration: corpus fetch, backend readiness, index build.
//!
//! Two things arrive asynchronously and in any order: the corpus (or a fetch
//! error) and the readiness gate's verdict. The index is built as soon as both a
//! corpus and a ready backend are present. Until then, and forever after a fetch
//! failure or gate timeout, the engine answers with fallback search. The overlay
//! never waits on any of this.

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::CorpusError;
use crate::readiness::GateState;
use crate::search::QueryEngine;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Waiting for the corpus or the backend; fallback search meanwhile.
    Pending,
    Indexed,
    /// Degraded for the rest of the session, or the index could not be built.
    Fallback,
}

#[derive(Debug)]
pub struct SearchSession {
    engine: QueryEngine,
    corpus_loaded: bool,
    backend_ready: bool,
    degraded: bool,
    mode: SessionMode,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchSession {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            engine: QueryEngine::new(config),
            corpus_loaded: false,
            backend_ready: false,
            degraded: false,
            mode: SessionMode::Pending,
        }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// The corpus fetch finished, successfully or not.
    pub fn corpus_loaded(&mut self, result: Result<Corpus, CorpusError>) -> SessionMode {
        match result {
            Ok(corpus) => {
                tracing::info!(docs = corpus.len(), "search corpus loaded");
                self.engine.set_corpus(corpus);
                self.corpus_loaded = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "search corpus unavailable, using fallback search");
                self.degraded = true;
            }
        }
        self.refresh()
    }

    /// The readiness gate resolved. `Waiting` is not a verdict and is ignored.
    pub fn backend_resolved(&mut self, state: GateState) -> SessionMode {
        match state {
            GateState::Waiting { .. } => return self.mode,
            GateState::Ready => self.backend_ready = true,
            GateState::TimedOut => {
                tracing::warn!("search backend did not become ready, using fallback search");
                self.degraded = true;
            }
        }
        self.refresh()
    }

    fn refresh(&mut self) -> SessionMode {
        self.mode = if self.degraded {
            self.engine.clear_index();
            SessionMode::Fallback
        } else if self.corpus_loaded && self.backend_ready {
            match self.engine.rebuild_index() {
                Ok(()) => SessionMode::Indexed,
                Err(err) => {
                    tracing::warn!(error = %err, "search index build failed, using fallback search");
                    SessionMode::Fallback
                }
            }
        } else {
            SessionMode::Pending
        };
        self.mode
    }
}
