// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard navigation for numbered page lists.
//!
//! Section and home pages render their entries as a numbered list. Readers can
//! walk it with the arrow keys, or type the entry's number: digits collect in a
//! buffer and are interpreted together once no digit has arrived for the settle
//! window, so typing `1` `2` jumps to entry 12 instead of 1 and then 2.
//!
//! The settle timer is single-slot. Every digit cancels the pending token and arms
//! a fresh one; a fired token that isn't the pending one is ignored.

use crate::config::NavigatorConfig;
use crate::effect::{Dispatch, Effect, Key, KeyInput, TimerToken};
use crate::types::PageLink;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberBuffer {
    pub digits: String,
    pub pending: Option<TimerToken>,
}

#[derive(Debug, Default)]
pub struct ListNavigator {
    links: Vec<PageLink>,
    current: Option<usize>,
    buffer: NumberBuffer,
    next_token: u64,
    config: NavigatorConfig,
}

impl ListNavigator {
    pub fn new(links: Vec<PageLink>, config: NavigatorConfig) -> Self {
        Self {
            links,
            config,
            ..Self::default()
        }
    }

    /// Point the navigator at a different list (a new page was rendered).
    pub fn set_links(&mut self, links: Vec<PageLink>) -> Vec<Effect> {
        let mut effects = self.clear_buffer();
        if self.current.take().is_some() {
            effects.push(Effect::HighlightLink { index: None });
        }
        self.links = links;
        effects
    }

    pub fn links(&self) -> &[PageLink] {
        &self.links
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn buffer(&self) -> &NumberBuffer {
        &self.buffer
    }

    pub fn key_down(&mut self, input: &KeyInput) -> Dispatch {
        if self.links.is_empty() || input.in_text_field() || input.modifiers.held() {
            return Dispatch::ignored();
        }
        match input.key {
            Key::ArrowDown => self.step(true),
            Key::ArrowUp => self.step(false),
            Key::Enter => self.enter(),
            key => match key.digit() {
                Some(digit) => self.push_digit(digit),
                None => Dispatch::ignored(),
            },
        }
    }

    /// The settle timer fired: interpret the buffered digits as a 1-based entry.
    pub fn timer_fired(&mut self, token: TimerToken) -> Vec<Effect> {
        if self.buffer.pending != Some(token) {
            return Vec::new();
        }
        let digits = std::mem::take(&mut self.buffer.digits);
        self.buffer.pending = None;

        match digits.parse::<usize>() {
            Ok(number) if (1..=self.links.len()).contains(&number) => self.highlight(number - 1),
            _ => {
                tracing::debug!(digits = %digits, links = self.links.len(), "discarding numeric jump");
                Vec::new()
            }
        }
    }

    /// Drop any half-typed number and its settle timer.
    pub fn cancel_pending(&mut self) -> Vec<Effect> {
        self.clear_buffer()
    }

    /// The mouse moved over the list: hand control back to hover and click.
    pub fn mouse_moved(&mut self) -> Vec<Effect> {
        if self.current.take().is_some() {
            vec![Effect::HighlightLink { index: None }]
        } else {
            Vec::new()
        }
    }

    fn step(&mut self, down: bool) -> Dispatch {
        let mut effects = self.clear_buffer();
        let last = self.links.len() - 1;
        let target = match (self.current, down) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
        };
        if self.current != Some(target) {
            effects.extend(self.highlight(target));
        }
        Dispatch::handled(effects)
    }

    fn enter(&self) -> Dispatch {
        match self.current.and_then(|i| self.links.get(i)) {
            Some(link) => Dispatch::handled(vec![Effect::Navigate {
                url: link.href.clone(),
            }]),
            None => Dispatch::ignored(),
        }
    }

    fn push_digit(&mut self, digit: char) -> Dispatch {
        self.buffer.digits.push(digit);
        let mut effects = Vec::with_capacity(2);
        if let Some(old) = self.buffer.pending.take() {
            effects.push(Effect::CancelTimer { token: old });
        }
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.buffer.pending = Some(token);
        effects.push(Effect::ArmTimer {
            token,
            delay_ms: self.config.settle_ms,
        });
        Dispatch::handled(effects)
    }

    fn clear_buffer(&mut self) -> Vec<Effect> {
        self.buffer.digits.clear();
        self.buffer
            .pending
            .take()
            .map(|token| vec![Effect::CancelTimer { token }])
            .unwrap_or_default()
    }

    fn highlight(&mut self, index: usize) -> Vec<Effect> {
        self.current = Some(index);
        vec![
            Effect::HighlightLink { index: Some(index) },
            Effect::ScrollToLink {
                index,
                header_offset_px: self.config.header_offset_px,
            },
        ]
    }
}
