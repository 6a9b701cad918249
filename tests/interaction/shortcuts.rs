//! Global shortcuts and input suppression.

use crate::common::{indexed_site, numbered_links, press, press_in_field, site_corpus};
use sitelens::{Effect, Focus, Key, KeyInput, Modifiers, SectionShortcut, Site, SiteConfig};

fn site() -> Site {
    let mut site = indexed_site(site_corpus());
    site.set_page_list(numbered_links(20));
    site
}

fn site_with_sections() -> Site {
    let mut site = Site::new(SiteConfig {
        sections: vec![
            SectionShortcut::new('p', "/posts/index.html"),
            SectionShortcut::new('H', "/howto/index.html"),
            SectionShortcut::new('d', "/deep-dives/index.html"),
            SectionShortcut::new('D', "/drafts/index.html"),
        ],
        ..SiteConfig::default()
    });
    site.corpus_loaded(Ok(site_corpus()));
    site.set_page_list(numbered_links(5));
    site
}

fn navigate(url: &str) -> Vec<Effect> {
    vec![Effect::Navigate { url: url.into() }]
}

fn with_modifiers(key: Key, modifiers: Modifiers) -> KeyInput {
    KeyInput {
        key,
        modifiers,
        focus: Focus::Page,
    }
}

#[test]
fn slash_opens_and_focuses() {
    let mut site = site();
    let dispatch = site.key_down(press(Key::Char('/')));
    assert!(dispatch.handled);
    assert_eq!(dispatch.effects.first(), Some(&Effect::ShowOverlay));
    assert_eq!(dispatch.effects.last(), Some(&Effect::FocusQueryInput));
}

#[test]
fn slash_in_text_field_is_typed_text() {
    let mut site = site();
    assert!(site.key_down(press_in_field(Key::Char('/'))).is_ignored());
    assert!(!site.overlay().is_open());
}

#[test]
fn home_and_back() {
    let mut site = site();
    assert_eq!(
        site.key_down(press(Key::Char('h'))).effects,
        vec![Effect::NavigateHome]
    );
    assert_eq!(
        site.key_down(press(Key::Char('U'))).effects,
        vec![Effect::HistoryBack]
    );
}

#[test]
fn h_is_search_text_while_overlay_is_open() {
    let mut site = site();
    site.open_requested();
    assert!(site.key_down(press_in_field(Key::Char('h'))).is_ignored());
    assert!(site.key_down(press(Key::Char('h'))).is_ignored());
    site.query_changed("h");
    assert!(site.overlay().is_open());
}

#[test]
fn digits_are_search_text_while_overlay_is_open() {
    let mut site = site();
    site.open_requested();
    assert!(site.key_down(press_in_field(Key::Char('1'))).is_ignored());
    assert!(site.navigator().buffer().pending.is_none());
}

#[test]
fn modifiers_suppress_shortcuts() {
    let mut site = site();
    for modifiers in [
        Modifiers {
            ctrl: true,
            ..Modifiers::default()
        },
        Modifiers {
            alt: true,
            ..Modifiers::default()
        },
        Modifiers {
            meta: true,
            ..Modifiers::default()
        },
    ] {
        assert!(site
            .key_down(with_modifiers(Key::Char('h'), modifiers))
            .is_ignored());
        assert!(site
            .key_down(with_modifiers(Key::ArrowDown, modifiers))
            .is_ignored());
        assert!(site
            .key_down(with_modifiers(Key::Char('/'), modifiers))
            .is_ignored());
    }
    assert_eq!(site.navigator().current(), None);
}

#[test]
fn shift_alone_does_not_suppress() {
    let mut site = site();
    let shifted = Modifiers {
        shift: true,
        ..Modifiers::default()
    };
    assert_eq!(
        site.key_down(with_modifiers(Key::Char('H'), shifted)).effects,
        vec![Effect::NavigateHome]
    );
}

#[test]
fn text_fields_suppress_list_keys() {
    let mut site = site();
    assert!(site.key_down(press_in_field(Key::ArrowDown)).is_ignored());
    assert!(site.key_down(press_in_field(Key::Char('3'))).is_ignored());
    assert!(site.key_down(press_in_field(Key::Char('u'))).is_ignored());
    assert_eq!(site.navigator().current(), None);
}

#[test]
fn escape_while_closed_is_ignored() {
    let mut site = site();
    assert!(site.key_down(press(Key::Escape)).is_ignored());
}

#[test]
fn unknown_keys_pass_through() {
    let mut site = site();
    assert!(site.key_down(press(Key::from_dom("F5"))).is_ignored());
    assert!(site.key_down(press(Key::Char('x'))).is_ignored());
}

// ============================================================================
// OVERLAY VS PENDING NUMBER
// ============================================================================

#[test]
fn slash_cancels_half_typed_number() {
    let mut site = site_with_sections();
    site.key_down(press(Key::Char('3')));
    let token = site.navigator().buffer().pending.expect("timer armed");

    let dispatch = site.key_down(press(Key::Char('/')));
    assert!(dispatch.effects.contains(&Effect::CancelTimer { token }));
    assert!(site.overlay().is_open());

    // The page script may still deliver the stale timer
    assert!(site.timer_fired(token).is_empty());
    assert_eq!(site.navigator().current(), None);
}

#[test]
fn open_request_cancels_half_typed_number() {
    let mut site = site_with_sections();
    site.key_down(press(Key::Char('4')));
    let token = site.navigator().buffer().pending.expect("timer armed");

    let effects = site.open_requested();
    assert_eq!(effects.first(), Some(&Effect::CancelTimer { token }));
    assert!(site.timer_fired(token).is_empty());
    assert!(site.navigator().buffer().digits.is_empty());

    site.key_down(press_in_field(Key::Escape));
    assert!(!site.overlay().is_open());
    assert_eq!(site.navigator().current(), None);
}

#[test]
fn opening_without_pending_number_has_no_cancel() {
    let mut site = site_with_sections();
    let dispatch = site.key_down(press(Key::Char('/')));
    assert!(!dispatch
        .effects
        .iter()
        .any(|effect| matches!(effect, Effect::CancelTimer { .. })));
}

// ============================================================================
// SECTION SHORTCUTS
// ============================================================================

#[test]
fn section_letters_navigate_case_insensitively() {
    let mut site = site_with_sections();
    assert_eq!(
        site.key_down(press(Key::Char('p'))).effects,
        navigate("/posts/index.html")
    );
    assert_eq!(
        site.key_down(press(Key::Char('P'))).effects,
        navigate("/posts/index.html")
    );
}

#[test]
fn home_and_back_win_over_sections() {
    let mut site = site_with_sections();
    assert_eq!(
        site.key_down(press(Key::Char('h'))).effects,
        vec![Effect::NavigateHome]
    );
    assert_eq!(
        site.key_down(press(Key::Char('u'))).effects,
        vec![Effect::HistoryBack]
    );
}

#[test]
fn first_section_wins_a_shared_letter() {
    let mut site = site_with_sections();
    assert_eq!(
        site.key_down(press(Key::Char('d'))).effects,
        navigate("/deep-dives/index.html")
    );
}

#[test]
fn sections_are_suppressed_like_other_shortcuts() {
    let mut site = site_with_sections();
    assert!(site.key_down(press_in_field(Key::Char('p'))).is_ignored());
    for modifiers in [
        Modifiers {
            ctrl: true,
            ..Modifiers::default()
        },
        Modifiers {
            alt: true,
            ..Modifiers::default()
        },
        Modifiers {
            meta: true,
            ..Modifiers::default()
        },
    ] {
        assert!(site
            .key_down(with_modifiers(Key::Char('p'), modifiers))
            .is_ignored());
    }

    site.open_requested();
    assert!(site.key_down(press_in_field(Key::Char('p'))).is_ignored());
    assert!(site.key_down(press(Key::Char('p'))).is_ignored());
    assert!(site.overlay().is_open());
}

#[test]
fn unmapped_letters_and_digits_skip_sections() {
    let mut site = site_with_sections();
    assert!(site.key_down(press(Key::Char('z'))).is_ignored());
    let dispatch = site.key_down(press(Key::Char('2')));
    assert!(dispatch
        .effects
        .iter()
        .any(|effect| matches!(effect, Effect::ArmTimer { .. })));
}

#[test]
fn sections_from_page_config() {
    let config: SiteConfig = serde_json::from_str(
        r#"{ "sections": [{ "key": "b", "url": "/blog/index.html" }] }"#,
    )
    .unwrap();
    let mut site = Site::new(config);
    assert_eq!(
        site.key_down(press(Key::Char('B'))).effects,
        navigate("/blog/index.html")
    );
}
