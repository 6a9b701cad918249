//! Fallback substring search, used while no index is installed.

use crate::common::{ids, numbered_corpus, site_corpus};
use sitelens::{fallback_search, QueryEngine, SearchConfig, SearchSource, MAX_RESULTS};

#[test]
fn engine_without_index_falls_back() {
    let engine = QueryEngine::with_corpus(site_corpus(), SearchConfig::default());
    let outcome = engine.search_with_source("cache");
    assert_eq!(outcome.source, SearchSource::Fallback);
    // Corpus order, not relevance
    assert_eq!(
        ids(&outcome.results),
        vec!["home", "cache-design", "write-ahead-log"]
    );
}

#[test]
fn whole_query_is_one_substring() {
    let corpus = site_corpus();
    assert_eq!(
        ids(&fallback_search(&corpus, "CACHE design", MAX_RESULTS)),
        vec!["cache-design"]
    );
    assert!(fallback_search(&corpus, "design cache", MAX_RESULTS).is_empty());
}

#[test]
fn matches_inside_words_and_punctuation() {
    let corpus = site_corpus();
    assert_eq!(
        ids(&fallback_search(&corpus, "write-ahead", MAX_RESULTS)),
        vec!["write-ahead-log"]
    );
    assert_eq!(
        ids(&fallback_search(&corpus, "<b>", MAX_RESULTS)),
        vec!["untitled-draft"]
    );
}

#[test]
fn query_is_trimmed() {
    let corpus = site_corpus();
    assert_eq!(
        fallback_search(&corpus, "  eviction  ", MAX_RESULTS),
        fallback_search(&corpus, "eviction", MAX_RESULTS)
    );
    assert!(fallback_search(&corpus, "   ", MAX_RESULTS).is_empty());
}

#[test]
fn capped_at_limit() {
    let corpus = numbered_corpus(30);
    assert_eq!(fallback_search(&corpus, "body", MAX_RESULTS).len(), MAX_RESULTS);
    assert_eq!(fallback_search(&corpus, "body", 4).len(), 4);
}

#[test]
fn query_syntax_is_plain_text() {
    let corpus = site_corpus();
    assert!(fallback_search(&corpus, "title:cache", MAX_RESULTS).is_empty());
}
