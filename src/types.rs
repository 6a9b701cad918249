// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by the search and navigation controllers.
//!
//! A [`Document`] is what the site build pipeline writes into the corpus file and
//! what the overlay eventually shows. Everything else in here is small value types
//! that flow between controllers and the binding layer.
//!
//! # Invariants
//!
//! - **Document**: `id` is unique within a corpus. The loader enforces this by
//!   dropping later duplicates, so downstream code can key on it.
//! - **PageLink**: `number` is the 1-based display number the page list declares.
//!   The navigator resolves typed numbers by position, so lists rendered by the
//!   build pipeline (numbered 1..=n in order) agree with it.

use serde::{Deserialize, Serialize};

fn default_kind() -> String {
    "page".to_string()
}

/// One searchable page of the site.
///
/// Field names match the JSON the build pipeline emits. `content` is plain text
/// with markup stripped, already truncated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub url: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            url: url.into(),
            kind: default_kind(),
        }
    }
}

/// Which part of a document a term was found in.
///
/// Title hits outrank content hits; see [`crate::index::field_boost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
        }
    }

    /// Parse a field name as written in a `field:term` query clause.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "content" => Some(Field::Content),
            _ => None,
        }
    }
}

/// An entry of a numbered page list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub number: u32,
    pub href: String,
}

impl PageLink {
    pub fn new(number: u32, href: impl Into<String>) -> Self {
        Self {
            number,
            href: href.into(),
        }
    }
}
