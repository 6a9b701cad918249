//! Snippet invariants.

use proptest::prelude::*;
use sitelens::snippet;

/// Remove every `<mark>`/`</mark>` and undo the escaping.
fn strip(html: &str) -> String {
    html.replace("<mark>", "")
        .replace("</mark>", "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn short_terms_are_never_marked(
        content in "[a-z ]{0,200}",
        query in "[a-z]{1,2}( [a-z]{1,2}){0,3}",
    ) {
        prop_assert!(!snippet(&content, &query).contains("<mark>"));
    }

    #[test]
    fn short_content_without_match_is_unchanged(content in "[a-m ]{1,149}") {
        prop_assert_eq!(snippet(&content, "zzz"), content);
    }

    #[test]
    fn output_is_a_window_of_the_content(
        content in "[a-zA-Z<>& ]{1,400}",
        query in "[a-z]{3,6}",
    ) {
        let out = snippet(&content, &query);
        let text = strip(&out);
        let inner = text.trim_start_matches("...").trim_end_matches("...");
        prop_assert!(content.contains(inner));
    }

    #[test]
    fn no_raw_markup_leaks(content in "[a-z<>/ ]{1,200}", query in "[a-z]{3,5}") {
        let out = snippet(&content, &query)
            .replace("<mark>", "")
            .replace("</mark>", "");
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
    }

    #[test]
    fn marks_are_balanced(content in "[a-c ]{0,300}", query in "[a-c]{3} [a-c]{4}") {
        let out = snippet(&content, &query);
        prop_assert_eq!(out.matches("<mark>").count(), out.matches("</mark>").count());
        prop_assert!(!out.contains("<mark><mark>"));
    }
}
