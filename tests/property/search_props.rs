//! Query engine invariants on both search paths.

use proptest::prelude::*;
use sitelens::{Corpus, Document, QueryEngine, SearchConfig, MAX_RESULTS};

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "cache", "Cache", "index", "search", "page", "log", "notes", "rust", "café", "x",
    ])
    .prop_map(str::to_string)
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..12).prop_map(|words| words.join(" "))
}

fn corpus() -> impl Strategy<Value = Corpus> {
    prop::collection::vec((text(), text()), 1..30).prop_map(|docs| {
        Corpus::new(
            docs.into_iter()
                .enumerate()
                .map(|(i, (title, content))| {
                    Document::new(i.to_string(), title, content, format!("/{}", i))
                })
                .collect(),
        )
    })
}

fn engines(corpus: Corpus) -> (QueryEngine, QueryEngine) {
    let indexed = QueryEngine::with_corpus(corpus.clone(), SearchConfig::default());
    indexed.rebuild_index().expect("non-empty corpus indexes");
    let fallback = QueryEngine::with_corpus(corpus, SearchConfig::default());
    (indexed, fallback)
}

proptest! {
    #[test]
    fn never_more_than_ten_results(corpus in corpus(), query in "[a-zA-Z:+* -]{0,16}") {
        let (indexed, fallback) = engines(corpus);
        prop_assert!(indexed.search(&query).len() <= MAX_RESULTS);
        prop_assert!(fallback.search(&query).len() <= MAX_RESULTS);
    }

    #[test]
    fn blank_queries_are_empty(corpus in corpus(), blank in "[ \t\n]{0,6}") {
        let (indexed, fallback) = engines(corpus);
        prop_assert!(indexed.search(&blank).is_empty());
        prop_assert!(fallback.search(&blank).is_empty());
    }

    #[test]
    fn fallback_ignores_case(corpus in corpus(), query in word()) {
        let (_, fallback) = engines(corpus);
        prop_assert_eq!(
            fallback.search(&query.to_uppercase()),
            fallback.search(&query.to_lowercase())
        );
    }

    #[test]
    fn fallback_keeps_corpus_order(corpus in corpus(), query in word()) {
        let (_, fallback) = engines(corpus.clone());
        let positions: Vec<usize> = fallback
            .search(&query)
            .iter()
            .map(|doc| corpus.position(&doc.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn indexed_results_are_unique(corpus in corpus(), query in text()) {
        let (indexed, _) = engines(corpus);
        let results = indexed.search(&query);
        let mut ids: Vec<&str> = results.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), results.len());
    }

    #[test]
    fn title_hit_outranks_content_only_hits(
        corpus in corpus(),
        suffixes in prop::collection::vec("[a-z]{0,6}", 1..12),
        repeats in 1usize..8,
        typed in 1usize..=7,
    ) {
        // One document whose body holds many words sharing the typed prefix, each
        // repeated, and one whose title has the full word once
        let mut docs: Vec<Document> = corpus.iter().map(|d| (**d).clone()).collect();
        let body = suffixes
            .iter()
            .map(|suffix| format!("zyzzyva{} ", suffix).repeat(repeats))
            .collect::<String>();
        docs.push(Document::new("body", "", body, "/body"));
        docs.push(Document::new("title", "zyzzyva", "", "/title"));
        let (indexed, _) = engines(Corpus::new(docs));
        let results = indexed.search(&"zyzzyva"[..typed]);
        prop_assert_eq!(results[0].id.as_str(), "title");
        prop_assert_eq!(results[1].id.as_str(), "body");
    }
}
