//! Search overlay: open, type, select, navigate, close.

use crate::common::{ids, indexed_site, press_in_field, rendered, site_corpus};
use sitelens::testing::cache_corpus;
use sitelens::overlay::NO_RESULTS_HTML;
use sitelens::{Effect, Key, SearchState};

#[test]
fn escape_resets_to_closed_state() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    site.query_changed("cache");
    site.key_down(press_in_field(Key::ArrowDown));
    site.key_down(press_in_field(Key::ArrowDown));
    assert_eq!(site.overlay().state().selected, Some(1));

    let dispatch = site.key_down(press_in_field(Key::Escape));
    assert!(dispatch.handled);
    assert!(dispatch.effects.contains(&Effect::HideOverlay));
    assert_eq!(site.overlay().state(), &SearchState::default());
}

#[test]
fn prefix_query_from_two_document_corpus() {
    let mut site = indexed_site(cache_corpus());
    site.open_requested();
    site.query_changed("cac");
    assert_eq!(ids(&site.overlay().state().results), vec!["b"]);
}

#[test]
fn typing_rerenders_and_clears_selection() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    site.query_changed("cache");
    site.key_down(press_in_field(Key::ArrowDown));

    let effects = site.query_changed("cache d");
    assert_eq!(site.overlay().state().selected, None);
    let html = rendered(&effects).expect("results rendered");
    assert!(html.contains(r#"href="/posts/cache-design.html""#));
    assert!(!html.contains("selected"));
}

#[test]
fn arrows_clamp_at_bottom_and_drop_to_none_at_top() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    site.query_changed("cache");
    let len = site.overlay().state().results.len();
    assert_eq!(len, 3);

    for _ in 0..5 {
        site.key_down(press_in_field(Key::ArrowDown));
    }
    assert_eq!(site.overlay().state().selected, Some(len - 1));

    for _ in 0..len {
        site.key_down(press_in_field(Key::ArrowUp));
    }
    assert_eq!(site.overlay().state().selected, None);
    // Up from nothing stays at nothing instead of wrapping to the last result
    site.key_down(press_in_field(Key::ArrowUp));
    assert_eq!(site.overlay().state().selected, None);
}

#[test]
fn selection_scrolls_into_view() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    site.query_changed("cache");
    let dispatch = site.key_down(press_in_field(Key::ArrowDown));
    assert!(dispatch
        .effects
        .contains(&Effect::ScrollResultIntoView { index: 0 }));
    assert!(rendered(&dispatch.effects)
        .unwrap()
        .contains(r#"class="search-result selected""#));
}

#[test]
fn enter_follows_selection_only() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    site.query_changed("cache");
    assert!(site.key_down(press_in_field(Key::Enter)).effects.is_empty());

    site.key_down(press_in_field(Key::ArrowDown));
    assert_eq!(
        site.key_down(press_in_field(Key::Enter)).effects,
        vec![Effect::Navigate {
            url: "/posts/cache-design.html".into()
        }]
    );
}

#[test]
fn result_click_ignores_selection() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    site.query_changed("cache");
    site.key_down(press_in_field(Key::ArrowDown));
    assert_eq!(
        site.result_click(2),
        vec![Effect::Navigate {
            url: "/posts/write-ahead-log.html".into()
        }]
    );
    assert!(site.result_click(7).is_empty());
}

#[test]
fn no_results_message_for_unmatched_query() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    let effects = site.query_changed("zebra");
    assert_eq!(rendered(&effects), Some(NO_RESULTS_HTML));
    // Malformed syntax looks the same to the reader
    let effects = site.query_changed("nosuchfield:zebra");
    assert_eq!(rendered(&effects), Some(NO_RESULTS_HTML));
}

#[test]
fn rendered_titles_are_escaped() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    let effects = site.query_changed("ideas");
    let html = rendered(&effects).unwrap();
    assert!(html.contains("Draft &lt;b&gt;Notes&lt;/b&gt; &amp; Ideas"));
    assert!(!html.contains("<b>"));
}

#[test]
fn backdrop_click_closes() {
    let mut site = indexed_site(site_corpus());
    site.open_requested();
    site.query_changed("cache");
    let effects = site.backdrop_click();
    assert_eq!(effects[0], Effect::HideOverlay);
    assert!(!site.overlay().is_open());
    // Closing twice is a no-op
    assert!(site.close_requested().is_empty());
}

#[test]
fn typing_while_closed_does_nothing() {
    let mut site = indexed_site(site_corpus());
    assert!(site.query_changed("cache").is_empty());
    assert!(site.overlay().state().results.is_empty());
}
