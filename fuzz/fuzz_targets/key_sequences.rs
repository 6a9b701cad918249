// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the keyboard state machines.
//!
//! Random interleavings of keys, clicks, query edits and timer callbacks.
//! Selections must stay in range and every navigation must target a real URL.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitelens::testing::{cache_corpus, numbered_links};
use sitelens::{Effect, Focus, GateState, Key, KeyInput, Modifiers, Site, SiteConfig, TimerToken};

#[derive(Debug, Arbitrary)]
enum Event {
    Key { key: char, ctrl: bool, in_field: bool },
    Arrow { down: bool },
    Enter,
    Escape,
    Open,
    Query(String),
    ResultClick(u8),
    Backdrop,
    Mouse,
    Timer(u8),
}

fn press(key: Key) -> KeyInput {
    KeyInput {
        key,
        modifiers: Modifiers::default(),
        focus: Focus::Page,
    }
}

fuzz_target!(|events: Vec<Event>| {
    let mut site = Site::new(SiteConfig::default());
    site.corpus_loaded(Ok(cache_corpus()));
    site.backend_resolved(GateState::Ready);
    site.set_page_list(numbered_links(12));

    for event in events.into_iter().take(256) {
        let effects = match event {
            Event::Key { key, ctrl, in_field } => site
                .key_down(KeyInput {
                    key: Key::Char(key),
                    modifiers: Modifiers {
                        ctrl,
                        ..Modifiers::default()
                    },
                    focus: if in_field { Focus::TextField } else { Focus::Page },
                })
                .effects,
            Event::Arrow { down: true } => site.key_down(press(Key::ArrowDown)).effects,
            Event::Arrow { down: false } => site.key_down(press(Key::ArrowUp)).effects,
            Event::Enter => site.key_down(press(Key::Enter)).effects,
            Event::Escape => site.key_down(press(Key::Escape)).effects,
            Event::Open => site.open_requested(),
            Event::Query(text) => site.query_changed(&text),
            Event::ResultClick(i) => site.result_click(usize::from(i)),
            Event::Backdrop => site.backdrop_click(),
            Event::Mouse => site.mouse_moved(),
            Event::Timer(t) => site.timer_fired(TimerToken(u64::from(t))),
        };

        let state = site.overlay().state();
        if let Some(i) = state.selected {
            assert!(i < state.results.len());
        }
        if let Some(i) = site.navigator().current() {
            assert!(i < site.navigator().links().len());
        }
        for effect in effects {
            if let Effect::Navigate { url } = effect {
                let known = site.navigator().links().iter().any(|l| l.href == url)
                    || cache_corpus().iter().any(|d| d.url == url);
                assert!(known, "navigated to {}", url);
            }
        }
    }
});
