//! List navigator invariants over random key sequences.

use crate::common::numbered_links;
use proptest::prelude::*;
use sitelens::testing::press;
use sitelens::{Effect, Key, ListNavigator, NavigatorConfig};

#[derive(Debug, Clone)]
enum Input {
    Key(Key),
    Settle,
    Mouse,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => Just(Input::Key(Key::ArrowDown)),
        3 => Just(Input::Key(Key::ArrowUp)),
        1 => Just(Input::Key(Key::Enter)),
        3 => (0u8..10).prop_map(|d| Input::Key(Key::Char(char::from(b'0' + d)))),
        2 => Just(Input::Settle),
        1 => Just(Input::Mouse),
    ]
}

proptest! {
    #[test]
    fn selection_stays_in_bounds(
        links in 1u32..30,
        inputs in prop::collection::vec(input(), 0..60),
    ) {
        let mut nav = ListNavigator::new(numbered_links(links), NavigatorConfig::default());
        for input in inputs {
            let effects = match input {
                Input::Key(key) => nav.key_down(&press(key)).effects,
                Input::Settle => match nav.buffer().pending {
                    Some(token) => nav.timer_fired(token),
                    None => Vec::new(),
                },
                Input::Mouse => nav.mouse_moved(),
            };
            if let Some(i) = nav.current() {
                prop_assert!(i < links as usize);
            }
            for effect in effects {
                match effect {
                    Effect::HighlightLink { index: Some(i) } | Effect::ScrollToLink { index: i, .. } => {
                        prop_assert!(i < links as usize);
                    }
                    Effect::Navigate { url } => {
                        prop_assert!(nav.links().iter().any(|l| l.href == url));
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn at_most_one_timer_pending(digits in "[0-9]{1,8}") {
        let mut nav = ListNavigator::new(numbered_links(50), NavigatorConfig::default());
        let mut armed = 0i32;
        for c in digits.chars() {
            for effect in nav.key_down(&press(Key::Char(c))).effects {
                match effect {
                    Effect::ArmTimer { .. } => armed += 1,
                    Effect::CancelTimer { .. } => armed -= 1,
                    _ => {}
                }
            }
            prop_assert_eq!(armed, 1);
        }
        prop_assert_eq!(nav.buffer().digits.as_str(), digits.as_str());
    }

    #[test]
    fn settled_number_matches_position(number in 1u32..=40) {
        let mut nav = ListNavigator::new(numbered_links(40), NavigatorConfig::default());
        for c in number.to_string().chars() {
            nav.key_down(&press(Key::Char(c)));
        }
        let token = nav.buffer().pending.unwrap();
        nav.timer_fired(token);
        prop_assert_eq!(nav.current(), Some(number as usize - 1));
    }
}
