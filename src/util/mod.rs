// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the index, the snippet extractor and the renderer.
//!
//! Everything here works in Unicode scalar values, not bytes. Snippet windows are
//! specified in characters, and slicing a `&str` at a byte offset in the middle of
//! "café" panics.

/// Word boundary detection: anything that is not a letter or digit separates words.
#[inline]
pub fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Lowercase a single character for case-insensitive comparison.
///
/// Characters whose lowercase form expands to several scalars (`İ`) fold to their
/// first scalar. That keeps a one-to-one mapping between input and folded
/// positions, which the snippet windows rely on.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Fold a whole string with [`fold_char`], preserving its character count.
pub fn fold(value: &str) -> Vec<char> {
    value.chars().map(fold_char).collect()
}

/// Split text into lowercase words at word boundaries.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_word_boundary)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    push_escaped(&mut out, value.chars());
    out
}

pub(crate) fn push_escaped(out: &mut String, chars: impl IntoIterator<Item = char>) {
    for c in chars {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Find every start position where `needle` occurs in `haystack` (both folded).
pub(crate) fn find_all(haystack: &[char], needle: &[char]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(pos, _)| pos)
        .collect()
}

/// Case-insensitive substring test.
pub fn contains_folded(haystack: &str, needle: &[char]) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = fold(haystack);
    haystack.windows(needle.len()).any(|window| window == needle)
}
