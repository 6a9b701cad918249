// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dispatch table between page events and the controllers.
//!
//! Every keydown goes through [`Site::key_down`]:
//!
//! ```text
//!   overlay open?  ── yes ──▶ overlay (Escape, arrows, Enter); nothing else fires
//!        │ no
//!   text field / Ctrl / Alt / Meta? ── yes ──▶ ignored
//!        │ no
//!   "/" ──▶ open overlay      "h" ──▶ home      "u" ──▶ history back
//!        │ otherwise
//!   section letter? ── yes ──▶ section index page
//!        │ no
//!   list navigator (arrows, digits, Enter)
//! ```
//!
//! Shortcuts are dead while the overlay is open so that typing "home" into the
//! search box never leaves the page. `h` and `u` win over a section that starts
//! with the same letter; between two sections the first configured one wins.
//! Opening the overlay drops a half-typed page number along with its timer.

use crate::config::{SectionShortcut, SiteConfig};
use crate::corpus::Corpus;
use crate::effect::{Dispatch, Effect, Key, KeyInput, TimerToken};
use crate::error::CorpusError;
use crate::navigator::ListNavigator;
use crate::overlay::SearchOverlay;
use crate::readiness::GateState;
use crate::session::{SearchSession, SessionMode};
use crate::types::PageLink;

#[derive(Debug, Default)]
pub struct Site {
    session: SearchSession,
    overlay: SearchOverlay,
    navigator: ListNavigator,
    sections: Vec<SectionShortcut>,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            session: SearchSession::new(config.search),
            overlay: SearchOverlay::new(config.snippet),
            navigator: ListNavigator::new(Vec::new(), config.navigator),
            sections: config.sections,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn overlay(&self) -> &SearchOverlay {
        &self.overlay
    }

    pub fn navigator(&self) -> &ListNavigator {
        &self.navigator
    }

    pub fn corpus_loaded(&mut self, result: Result<Corpus, CorpusError>) -> SessionMode {
        self.session.corpus_loaded(result)
    }

    pub fn backend_resolved(&mut self, state: GateState) -> SessionMode {
        self.session.backend_resolved(state)
    }

    pub fn set_page_list(&mut self, links: Vec<PageLink>) -> Vec<Effect> {
        self.navigator.set_links(links)
    }

    pub fn key_down(&mut self, input: KeyInput) -> Dispatch {
        if self.overlay.is_open() {
            return self.overlay.key_down(&input);
        }
        if input.in_text_field() || input.modifiers.held() {
            return Dispatch::ignored();
        }
        match input.key {
            Key::Char('/') => Dispatch::handled(self.open_overlay()),
            key if key.is_letter('h') => Dispatch::handled(vec![Effect::NavigateHome]),
            key if key.is_letter('u') => Dispatch::handled(vec![Effect::HistoryBack]),
            key => match self.section_for(key) {
                Some(section) => Dispatch::handled(vec![Effect::Navigate {
                    url: section.url.clone(),
                }]),
                None => self.navigator.key_down(&input),
            },
        }
    }

    /// Search button, or focus/click on the hero search box.
    pub fn open_requested(&mut self) -> Vec<Effect> {
        if self.overlay.is_open() {
            return vec![Effect::FocusQueryInput];
        }
        self.open_overlay()
    }

    pub fn sections(&self) -> &[SectionShortcut] {
        &self.sections
    }

    fn section_for(&self, key: Key) -> Option<&SectionShortcut> {
        match key {
            Key::Char(c) if c.is_alphabetic() => self.sections.iter().find(|s| s.matches(c)),
            _ => None,
        }
    }

    fn open_overlay(&mut self) -> Vec<Effect> {
        let mut effects = self.navigator.cancel_pending();
        effects.extend(self.overlay.open());
        effects
    }

    pub fn close_requested(&mut self) -> Vec<Effect> {
        self.overlay.close()
    }

    pub fn query_changed(&mut self, text: &str) -> Vec<Effect> {
        self.overlay.query_changed(self.session.engine(), text)
    }

    pub fn backdrop_click(&mut self) -> Vec<Effect> {
        self.overlay.backdrop_click()
    }

    pub fn result_click(&self, index: usize) -> Vec<Effect> {
        self.overlay.result_click(index)
    }

    pub fn mouse_moved(&mut self) -> Vec<Effect> {
        self.navigator.mouse_moved()
    }

    pub fn timer_fired(&mut self, token: TimerToken) -> Vec<Effect> {
        self.navigator.timer_fired(token)
    }
}
