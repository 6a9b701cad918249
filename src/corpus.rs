// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the document corpus.
//!
//! The build pipeline writes a JSON array of `{ id, title, content, url }` objects
//! to a static path. We parse it once and hand out cheap clones: documents live
//! behind `Arc` so the index, the engine and the overlay's result list all point at
//! the same allocation.

use crate::error::CorpusError;
use crate::types::Document;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Static path the build pipeline writes the corpus to, relative to the site root.
pub const CORPUS_PATH: &str = "/static/search-index.json";

/// The immutable set of searchable documents for one session.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Arc<[Arc<Document>]>,
}

impl Corpus {
    /// Build a corpus from documents, keeping the first document for each id.
    pub fn new(docs: Vec<Document>) -> Self {
        let mut seen = HashSet::with_capacity(docs.len());
        let mut kept = Vec::with_capacity(docs.len());
        for doc in docs {
            if seen.insert(doc.id.clone()) {
                kept.push(Arc::new(doc));
            } else {
                tracing::warn!(id = %doc.id, url = %doc.url, "dropping document with duplicate id");
            }
        }
        Self { docs: kept.into() }
    }

    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let docs: Vec<Document> = serde_json::from_str(json)?;
        Ok(Self::new(docs))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, CorpusError> {
        let docs: Vec<Document> = serde_json::from_slice(bytes)?;
        Ok(Self::new(docs))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let corpus = Self::from_slice(&bytes)?;
        tracing::info!(path = %path.display(), docs = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Document at corpus position `pos`.
    pub fn get(&self, pos: usize) -> Option<&Arc<Document>> {
        self.docs.get(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Document>> {
        self.docs.iter()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.docs.iter().position(|doc| doc.id == id)
    }
}

impl From<Vec<Document>> for Corpus {
    fn from(docs: Vec<Document>) -> Self {
        Self::new(docs)
    }
}
