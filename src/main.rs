// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use sitelens::{
    snippet, Corpus, Effect, Focus, GateState, Key, KeyInput, ListNavigator, Modifiers,
    NavigatorConfig, PageLink, SearchConfig, SearchIndex, SearchSession, SearchSource,
};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{paint, render_snippet, row, section_bot, section_top, truncate, Color};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SITELENS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            fallback,
            json,
        } => run_search(&file, &query, limit, fallback, json),
        Commands::Inspect { file, top } => run_inspect(&file, top),
        Commands::Nav {
            links,
            header_offset,
            keys,
        } => run_nav(links, header_offset, &keys),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load(file: &Path) -> Result<Corpus> {
    Corpus::load(file).with_context(|| format!("cannot load corpus {}", file.display()))
}

fn run_search(file: &Path, query: &str, limit: usize, fallback: bool, json: bool) -> Result<()> {
    let config = SearchConfig {
        max_results: limit,
        ..SearchConfig::default()
    };
    let mut session = SearchSession::new(config);
    session.corpus_loaded(Ok(load(file)?));
    let gate = if fallback {
        GateState::TimedOut
    } else {
        GateState::Ready
    };
    session.backend_resolved(gate);

    let start = Instant::now();
    let outcome = session.engine().search_with_source(query);
    let elapsed = start.elapsed();

    if json {
        let results: Vec<_> = outcome
            .results
            .iter()
            .map(|doc| {
                serde_json::json!({
                    "id": doc.id,
                    "title": doc.title,
                    "url": doc.url,
                    "snippet": snippet(&doc.content, query),
                })
            })
            .collect();
        let out = serde_json::json!({ "source": outcome.source, "results": results });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let source = match outcome.source {
        SearchSource::Indexed => paint(Color::Green, false, "indexed"),
        SearchSource::Fallback => paint(Color::Yellow, false, "fallback"),
        SearchSource::Fault => paint(Color::Yellow, true, "query rejected"),
        SearchSource::Empty => paint(Color::Gray, false, "empty query"),
    };
    section_top(&format!("\"{}\"", query));
    row(&format!(
        " {} results · {} · {:.3} ms",
        outcome.results.len(),
        source,
        elapsed.as_secs_f64() * 1000.0
    ));
    for (i, doc) in outcome.results.iter().enumerate() {
        row("");
        row(&format!(
            " {} {}",
            paint(Color::Cyan, true, &format!("{:>2}.", i + 1)),
            paint(Color::Blue, true, &truncate(&doc.title, 60))
        ));
        row(&format!("     {}", paint(Color::Gray, false, &truncate(&doc.url, 70))));
        let text = render_snippet(&snippet(&doc.content, query));
        if !text.is_empty() {
            row(&format!("     {}", text));
        }
    }
    if outcome.results.is_empty() && outcome.source != SearchSource::Empty {
        row(" No results found");
    }
    section_bot();
    Ok(())
}

fn run_inspect(file: &Path, top: usize) -> Result<()> {
    let corpus = load(file)?;
    let start = Instant::now();
    let index = SearchIndex::build(&corpus).context("cannot index corpus")?;
    let build = start.elapsed();

    let mut kinds: HashMap<&str, usize> = HashMap::new();
    for doc in corpus.iter() {
        *kinds.entry(doc.kind.as_str()).or_insert(0) += 1;
    }
    let empty = corpus.iter().filter(|d| d.content.is_empty()).count();

    section_top("CORPUS");
    row(&format!(" documents      {}", corpus.len()));
    row(&format!(" empty content  {}", empty));
    let mut kinds: Vec<_> = kinds.into_iter().collect();
    kinds.sort();
    for (kind, count) in kinds {
        row(&format!(" type {:<10}{}", kind, count));
    }
    section_bot();

    section_top("INDEX");
    row(&format!(" terms          {}", index.vocabulary_len()));
    row(&format!(" build time     {:.3} ms", build.as_secs_f64() * 1000.0));
    let mut by_df: Vec<(&str, usize)> = index
        .vocabulary()
        .map(|term| (term, index.postings(term).len()))
        .collect();
    by_df.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    for (term, postings) in by_df.into_iter().take(top) {
        row(&format!(
            "   {:<24}{}",
            paint(Color::Cyan, false, term),
            paint(Color::Gray, false, &format!("{} postings", postings))
        ));
    }
    section_bot();
    Ok(())
}

fn run_nav(links: u32, header_offset: u32, keys: &[String]) -> Result<()> {
    let list: Vec<PageLink> = (1..=links)
        .map(|i| PageLink::new(i, format!("/page-{}.html", i)))
        .collect();
    let config = NavigatorConfig {
        header_offset_px: header_offset,
        ..NavigatorConfig::default()
    };
    let mut nav = ListNavigator::new(list, config);

    for key in keys {
        let effects: Vec<Effect> = match key.as_str() {
            "wait" => match nav.buffer().pending {
                Some(token) => nav.timer_fired(token),
                None => Vec::new(),
            },
            "mouse" => nav.mouse_moved(),
            other => {
                let key = match other {
                    "up" => Key::ArrowUp,
                    "down" => Key::ArrowDown,
                    "enter" => Key::Enter,
                    digits if digits.len() == 1 && digits.chars().all(|c| c.is_ascii_digit()) => {
                        Key::from_dom(digits)
                    }
                    _ => bail!("unknown key `{}`", other),
                };
                nav.key_down(&KeyInput {
                    key,
                    modifiers: Modifiers::default(),
                    focus: Focus::Page,
                })
                .effects
            }
        };
        println!(
            "{:<6} current={:<5} {}",
            key,
            nav.current().map_or("-".to_string(), |i| i.to_string()),
            serde_json::to_string(&effects)?
        );
    }
    Ok(())
}
