//! Snippets on real document bodies.

use crate::common::site_corpus;
use sitelens::{snippet, snippet_with, SnippetConfig};

fn content_of(id: &str) -> String {
    let corpus = site_corpus();
    let pos = corpus.position(id).expect("fixture document");
    corpus.get(pos).unwrap().content.clone()
}

#[test]
fn highlights_every_term_in_window() {
    let out = snippet(&content_of("write-ahead-log"), "log cache");
    assert_eq!(out.matches("<mark>log</mark>").count(), 2);
    assert_eq!(out.matches("<mark>cache</mark>").count(), 1);
}

#[test]
fn short_terms_are_not_highlighted() {
    let out = snippet(&content_of("keyboard"), "to");
    assert!(!out.contains("<mark>"));
    assert!(out.starts_with("Press / to search"));
}

#[test]
fn window_starts_before_late_match() {
    let config = SnippetConfig {
        radius: 10,
        ..SnippetConfig::default()
    };
    let out = snippet_with(&content_of("cache-design"), "invalidation", &config);
    assert!(out.starts_with("..."));
    assert!(out.contains("<mark>invalidation</mark>"));
    assert!(!out.ends_with("..."));
}

#[test]
fn document_markup_is_escaped() {
    let out = snippet("Use <script> & <mark> tags carefully", "script");
    assert_eq!(
        out,
        "Use &lt;<mark>script</mark>&gt; &amp; &lt;mark&gt; tags carefully"
    );
}

#[test]
fn non_ascii_content_keeps_char_boundaries() {
    let content = format!("{}Größe der Caché{}", "ü".repeat(90), "é".repeat(90));
    let out = snippet(&content, "caché");
    assert!(out.contains("<mark>Caché</mark>"));
    assert!(out.starts_with("..."));
    assert!(out.ends_with("..."));
}
