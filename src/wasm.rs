// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! `SiteLens` wraps a [`Site`] for the page script. The script owns the DOM:
//! it forwards events here and applies the returned effects, e.g.
//!
//! ```js
//! const lens = new SiteLens({ navigator: { headerOffsetPx: 64 } });
//! fetch("/static/search-index.json").then(r => r.text())
//!   .then(json => lens.loadCorpus(json), err => lens.corpusFailed(String(err)));
//! document.addEventListener("keydown", e => {
//!   const d = lens.keyDown(e.key, e.ctrlKey, e.altKey, e.metaKey, e.shiftKey, isTextField(e.target));
//!   if (d.handled) e.preventDefault();
//!   d.effects.forEach(apply);
//! });
//! ```
//!
//! The backend readiness wait is driven from the script's timer: call
//! `pollBackend(elapsedMs, available)` and schedule the next check after
//! `nextPollMs` until the returned state is `ready` or `timedOut`.

use crate::config::SiteConfig;
use crate::corpus::Corpus;
use crate::effect::{Dispatch, Effect, Focus, Key, KeyInput, Modifiers, TimerToken};
use crate::error::CorpusError;
use crate::readiness::ReadinessGate;
use crate::site::Site;
use crate::snippet::snippet_with;
use crate::types::{Document, PageLink};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::time::Duration;
use wasm_bindgen::prelude::*;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(js_error)
}

fn effects(effects: Vec<Effect>) -> Result<JsValue, JsValue> {
    to_js(&effects)
}

#[wasm_bindgen]
pub struct SiteLens {
    site: Site,
    gate: ReadinessGate,
    config: SiteConfig,
}

#[wasm_bindgen]
impl SiteLens {
    /// Create the controller. `config` may be `undefined` or a partial object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SiteLens, JsValue> {
        let config: SiteConfig = if config.is_undefined() || config.is_null() {
            SiteConfig::default()
        } else {
            from_value(config).map_err(js_error)?
        };
        Ok(SiteLens {
            site: Site::new(config.clone()),
            gate: ReadinessGate::new(config.readiness.clone()),
            config,
        })
    }

    /// Hand over the fetched corpus JSON. Returns the session mode.
    #[wasm_bindgen(js_name = loadCorpus)]
    pub fn load_corpus(&mut self, json: &str) -> Result<JsValue, JsValue> {
        let mode = self.site.corpus_loaded(Corpus::from_json(json));
        to_js(&mode)
    }

    #[wasm_bindgen(js_name = corpusFailed)]
    pub fn corpus_failed(&mut self, message: &str) -> Result<JsValue, JsValue> {
        let mode = self
            .site
            .corpus_loaded(Err(CorpusError::Fetch(message.to_string())));
        to_js(&mode)
    }

    /// Feed one readiness check. Resolution is forwarded to the session once.
    #[wasm_bindgen(js_name = pollBackend)]
    pub fn poll_backend(&mut self, elapsed_ms: u32, available: bool) -> Result<JsValue, JsValue> {
        let already = self.gate.outcome().is_some();
        let state = self
            .gate
            .poll(Duration::from_millis(u64::from(elapsed_ms)), available);
        if state.is_resolved() && !already {
            self.site.backend_resolved(state);
        }
        to_js(&state)
    }

    pub fn mode(&self) -> Result<JsValue, JsValue> {
        to_js(&self.site.session().mode())
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(
        &mut self,
        key: &str,
        ctrl: bool,
        alt: bool,
        meta: bool,
        shift: bool,
        in_text_field: bool,
    ) -> Result<JsValue, JsValue> {
        let input = KeyInput {
            key: Key::from_dom(key),
            modifiers: Modifiers {
                ctrl,
                alt,
                meta,
                shift,
            },
            focus: if in_text_field {
                Focus::TextField
            } else {
                Focus::Page
            },
        };
        let dispatch: Dispatch = self.site.key_down(input);
        to_js(&dispatch)
    }

    #[wasm_bindgen(js_name = openRequested)]
    pub fn open_requested(&mut self) -> Result<JsValue, JsValue> {
        effects(self.site.open_requested())
    }

    #[wasm_bindgen(js_name = closeRequested)]
    pub fn close_requested(&mut self) -> Result<JsValue, JsValue> {
        effects(self.site.close_requested())
    }

    #[wasm_bindgen(js_name = queryChanged)]
    pub fn query_changed(&mut self, text: &str) -> Result<JsValue, JsValue> {
        effects(self.site.query_changed(text))
    }

    #[wasm_bindgen(js_name = backdropClick)]
    pub fn backdrop_click(&mut self) -> Result<JsValue, JsValue> {
        effects(self.site.backdrop_click())
    }

    #[wasm_bindgen(js_name = resultClick)]
    pub fn result_click(&self, index: usize) -> Result<JsValue, JsValue> {
        effects(self.site.result_click(index))
    }

    /// Replace the page list: an array of `{ number, href }`.
    #[wasm_bindgen(js_name = setPageList)]
    pub fn set_page_list(&mut self, links: JsValue) -> Result<JsValue, JsValue> {
        let links: Vec<PageLink> = from_value(links).map_err(js_error)?;
        effects(self.site.set_page_list(links))
    }

    #[wasm_bindgen(js_name = mouseMoved)]
    pub fn mouse_moved(&mut self) -> Result<JsValue, JsValue> {
        effects(self.site.mouse_moved())
    }

    #[wasm_bindgen(js_name = timerFired)]
    pub fn timer_fired(&mut self, token: u32) -> Result<JsValue, JsValue> {
        effects(self.site.timer_fired(TimerToken(u64::from(token))))
    }

    /// Run a query without touching the overlay, for custom result UIs.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let results = self.site.session().engine().search(query);
        let docs: Vec<&Document> = results.iter().map(AsRef::as_ref).collect();
        to_js(&docs)
    }

    pub fn snippet(&self, content: &str, query: &str) -> String {
        snippet_with(content, query, &self.config.snippet)
    }
}
