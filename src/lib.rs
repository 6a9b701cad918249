// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search overlay and keyboard navigation for generated static sites.
//!
//! The site build writes a JSON corpus of pages and renders section pages as
//! numbered lists. This crate is everything that happens in the browser after
//! that: indexing the corpus, answering queries as the reader types, cutting
//! highlighted snippets, and the two small keyboard state machines that drive the
//! search overlay and the page lists.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//! │ corpus.rs  │──▶│  index/     │◀──│  search/     │◀──│  overlay/   │──▶ snippet.rs
//! │ (Corpus)   │   │ (weighted   │   │ (QueryEngine,│   │ (SearchState│
//! └────────────┘   │  postings)  │   │  fallback)   │   │  + render)  │
//!       ▲          └─────────────┘   └──────────────┘   └─────────────┘
//!       │                 ▲                                    ▲
//! ┌────────────┐   ┌─────────────┐                      ┌─────────────┐
//! │ session.rs │──▶│readiness.rs │                      │   site.rs   │──▶ navigator.rs
//! └────────────┘   └─────────────┘                      │ (dispatch)  │
//!                                                       └─────────────┘
//! ```
//!
//! Controllers are pure: inputs are typed values ([`KeyInput`], query text,
//! timer tokens) and outputs are [`Effect`]s. The `wasm` feature exposes the
//! whole thing to page scripts as `SiteLens`.
//!
//! # Usage
//!
//! ```
//! use sitelens::{Corpus, Document, GateState, Site, SiteConfig};
//!
//! let mut site = Site::new(SiteConfig::default());
//! site.corpus_loaded(Ok(Corpus::new(vec![Document::new(
//!     "b", "Cache Design", "A cache stores results", "/b",
//! )])));
//! site.backend_resolved(GateState::Ready);
//!
//! site.open_requested();
//! site.query_changed("cac");
//! assert_eq!(site.overlay().state().results[0].url, "/b");
//! ```

pub mod config;
pub mod corpus;
pub mod effect;
pub mod error;
pub mod index;
pub mod navigator;
pub mod overlay;
pub mod query;
pub mod readiness;
pub mod scoring;
pub mod search;
pub mod session;
pub mod site;
pub mod snippet;
pub mod testing;
mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{
    section_display_name, GateConfig, NavigatorConfig, SearchConfig, SectionShortcut, SiteConfig,
    SnippetConfig, MAX_RESULTS,
};
pub use corpus::{Corpus, CORPUS_PATH};
pub use effect::{Dispatch, Effect, Focus, Key, KeyInput, Modifiers, TimerToken};
pub use error::{CorpusError, IndexError, QueryError};
pub use index::{Hit, Posting, SearchIndex};
pub use navigator::{ListNavigator, NumberBuffer};
pub use overlay::{SearchOverlay, SearchState};
pub use query::{Clause, Presence, Query};
pub use readiness::{wait_ready, GateState, ReadinessGate};
pub use search::{fallback_search, QueryEngine, SearchOutcome, SearchSource};
pub use session::{SearchSession, SessionMode};
pub use site::Site;
pub use snippet::{snippet, snippet_with};
pub use types::{Document, Field, PageLink};

#[cfg(feature = "wasm")]
pub use wasm::SiteLens;
