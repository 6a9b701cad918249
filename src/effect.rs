// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typed inputs and outputs of the interaction controllers.
//!
//! Controllers never touch the page. A DOM event is translated into a
//! [`KeyInput`] (or a dedicated method call), the controller updates its state,
//! and hands back [`Effect`]s for the binding layer to apply in order.

use serde::{Deserialize, Serialize};

/// Identifies one armed timer. A fired token that no longer matches the
/// controller's pending slot is stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Translate a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    pub fn digit(self) -> Option<char> {
        match self {
            Key::Char(c) if c.is_ascii_digit() => Some(c),
            _ => None,
        }
    }

    /// Case-insensitive letter comparison (`h` and `H` are the same shortcut).
    pub fn is_letter(self, letter: char) -> bool {
        matches!(self, Key::Char(c) if c.eq_ignore_ascii_case(&letter))
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Ctrl, Alt or Meta is down. Shift does not count: it is part of typing
    /// `H` or `?` and never turns a key into a browser command.
    pub fn held(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Where keyboard focus was when the key was pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Page,
    /// An `<input>` or `<textarea>`.
    TextField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
    pub focus: Focus,
}

impl KeyInput {
    pub fn in_text_field(&self) -> bool {
        self.focus == Focus::TextField
    }
}

/// Something the binding layer must do to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Effect {
    ShowOverlay,
    HideOverlay,
    FocusQueryInput,
    /// Replace the query input's value (used on open/close).
    SetQueryInput { value: String },
    /// Replace the whole results container.
    RenderResults { html: String },
    ScrollResultIntoView { index: usize },
    Navigate { url: String },
    NavigateHome,
    HistoryBack,
    /// Highlight a page-list entry, or clear the highlight with `None`.
    HighlightLink { index: Option<usize> },
    ScrollToLink { index: usize, header_offset_px: u32 },
    ArmTimer { token: TimerToken, delay_ms: u64 },
    CancelTimer { token: TimerToken },
}

/// Result of feeding one input to a controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    /// The input was consumed; the binding should suppress the browser default.
    pub handled: bool,
    pub effects: Vec<Effect>,
}

impl Dispatch {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled(effects: Vec<Effect>) -> Self {
        Self {
            handled: true,
            effects,
        }
    }

    pub fn is_ignored(&self) -> bool {
        !self.handled && self.effects.is_empty()
    }
}
