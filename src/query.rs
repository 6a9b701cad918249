// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing for the indexed search path.
//!
//! Raw query text is split on whitespace into clauses. Each clause may carry:
//!
//! ```text
//!   +term        required: documents without it are dropped
//!   -term        prohibited: documents with it are dropped
//!   title:term   only look in one field (title | content)
//!   term*        prefix wildcard
//! ```
//!
//! Clause bodies go through the same tokenizer as the index, so `cache-design`
//! becomes two terms. Only the last term of a body keeps a trailing wildcard.
//!
//! Malformed input is an error rather than a silent best effort. The engine turns
//! those errors into "zero results for this keystroke"; the user simply keeps
//! typing.

use crate::error::QueryError;
use crate::types::Field;
use crate::util::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Optional,
    Required,
    Prohibited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub term: String,
    pub presence: Presence,
    /// `None` searches every field.
    pub field: Option<Field>,
    pub prefix: bool,
}

impl Clause {
    pub fn searches(&self, field: Field) -> bool {
        self.field.map_or(true, |f| f == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub clauses: Vec<Clause>,
}

impl Query {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let mut clauses = Vec::new();

        for chunk in raw.split_whitespace() {
            let (presence, rest) = match chunk.chars().next() {
                Some('+') => (Presence::Required, &chunk[1..]),
                Some('-') => (Presence::Prohibited, &chunk[1..]),
                _ => (Presence::Optional, chunk),
            };

            let (field, body) = match rest.split_once(':') {
                Some((name, body)) => {
                    let field = Field::parse(&name.to_lowercase())
                        .ok_or_else(|| QueryError::UnknownField(name.to_string()))?;
                    if tokenize(body).is_empty() {
                        return Err(QueryError::MissingTerm(name.to_string()));
                    }
                    (Some(field), body)
                }
                None => (None, rest),
            };

            let wildcard = body.ends_with('*');
            let words = tokenize(body);
            let last = words.len().saturating_sub(1);
            for (i, term) in words.into_iter().enumerate() {
                clauses.push(Clause {
                    term,
                    presence,
                    field,
                    prefix: wildcard && i == last,
                });
            }
        }

        if clauses.is_empty() {
            return Err(QueryError::NoTerms);
        }
        Ok(Self { clauses })
    }

    /// Parse user input the way the search box does: trailing wildcard appended.
    pub fn with_trailing_wildcard(input: &str) -> Result<Self, QueryError> {
        Self::parse(&format!("{}*", input.trim_end()))
    }

    /// True when at least one clause can contribute matches.
    pub fn has_positive_clause(&self) -> bool {
        self.clauses
            .iter()
            .any(|c| c.presence != Presence::Prohibited)
    }
}
