// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search overlay state machine.
//!
//! ```text
//!            open()                      query_changed / arrows
//!   Closed ─────────▶ Open ◀───────────────────────┐
//!     ▲                 │ └─────────────────────────┘
//!     └─────────────────┘
//!      close(): Escape, backdrop click
//! ```
//!
//! Both transitions leave query, results and selection empty. While Open, every
//! state change re-renders the whole result list.
//!
//! Selection is `Option<usize>`: `None` means nothing is selected. ArrowDown from
//! `None` selects the first result and stops at the last. ArrowUp from the first
//! result goes back to `None`, never around to the bottom.

mod render;

pub use render::{render_results, NO_RESULTS_HTML};

use crate::config::SnippetConfig;
use crate::effect::{Dispatch, Effect, Key, KeyInput};
use crate::search::QueryEngine;
use crate::types::Document;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub is_open: bool,
    pub query: String,
    pub results: Vec<Arc<Document>>,
    pub selected: Option<usize>,
}

impl SearchState {
    fn reset(&mut self, is_open: bool) {
        *self = SearchState {
            is_open,
            ..SearchState::default()
        };
    }

    /// The selected document, if the selection is still in range.
    pub fn selected_document(&self) -> Option<&Arc<Document>> {
        self.selected.and_then(|i| self.results.get(i))
    }
}

#[derive(Debug, Default)]
pub struct SearchOverlay {
    state: SearchState,
    snippet: SnippetConfig,
}

impl SearchOverlay {
    pub fn new(snippet: SnippetConfig) -> Self {
        Self {
            state: SearchState::default(),
            snippet,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn open(&mut self) -> Vec<Effect> {
        self.state.reset(true);
        vec![
            Effect::ShowOverlay,
            Effect::SetQueryInput {
                value: String::new(),
            },
            self.render(),
            Effect::FocusQueryInput,
        ]
    }

    pub fn close(&mut self) -> Vec<Effect> {
        if !self.state.is_open {
            return Vec::new();
        }
        self.state.reset(false);
        vec![
            Effect::HideOverlay,
            Effect::SetQueryInput {
                value: String::new(),
            },
            self.render(),
        ]
    }

    /// Re-run the search for the new input text and reset the selection.
    pub fn query_changed(&mut self, engine: &QueryEngine, text: &str) -> Vec<Effect> {
        if !self.state.is_open {
            return Vec::new();
        }
        self.state.query = text.to_string();
        self.state.results = engine.search(text);
        self.state.selected = None;
        vec![self.render()]
    }

    pub fn arrow_down(&mut self) -> Vec<Effect> {
        let Some(last) = self.state.results.len().checked_sub(1) else {
            return Vec::new();
        };
        let next = match self.state.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.select(Some(next))
    }

    pub fn arrow_up(&mut self) -> Vec<Effect> {
        let next = match self.state.selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.select(next)
    }

    pub fn enter(&self) -> Vec<Effect> {
        self.state
            .selected_document()
            .map(|doc| vec![Effect::Navigate { url: doc.url.clone() }])
            .unwrap_or_default()
    }

    pub fn result_click(&self, index: usize) -> Vec<Effect> {
        self.state
            .results
            .get(index)
            .map(|doc| vec![Effect::Navigate { url: doc.url.clone() }])
            .unwrap_or_default()
    }

    /// A click on the dimmed area around the search box.
    pub fn backdrop_click(&mut self) -> Vec<Effect> {
        self.close()
    }

    /// Keys the overlay consumes while open. Everything else passes through.
    pub fn key_down(&mut self, input: &KeyInput) -> Dispatch {
        if !self.state.is_open {
            return Dispatch::ignored();
        }
        match input.key {
            Key::Escape => Dispatch::handled(self.close()),
            Key::ArrowDown => Dispatch::handled(self.arrow_down()),
            Key::ArrowUp => Dispatch::handled(self.arrow_up()),
            Key::Enter => Dispatch::handled(self.enter()),
            _ => Dispatch::ignored(),
        }
    }

    fn select(&mut self, next: Option<usize>) -> Vec<Effect> {
        if next == self.state.selected {
            return Vec::new();
        }
        self.state.selected = next;
        let mut effects = vec![self.render()];
        if let Some(index) = next {
            effects.push(Effect::ScrollResultIntoView { index });
        }
        effects
    }

    fn render(&self) -> Effect {
        Effect::RenderResults {
            html: render_results(&self.state, &self.snippet),
        }
    }
}
