// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitelens command-line interface.
//!
//! Three subcommands: `search` runs a query against a corpus file exactly as the
//! overlay would, `inspect` summarizes a corpus and its index, and `nav` replays a
//! key sequence against a numbered list to show what the navigator does.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitelens",
    about = "Static site search and page-list navigation, from the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked results with snippets
    Search {
        /// Path to the corpus JSON (e.g. site/static/search-index.json)
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Skip the index and use substring fallback search
        #[arg(long)]
        fallback: bool,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show corpus and index statistics
    Inspect {
        /// Path to the corpus JSON
        file: PathBuf,

        /// Number of most frequent terms to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Replay keys against a numbered page list and print the effects
    ///
    /// Keys are space-separated: digits, `up`, `down`, `enter`, `mouse` (mouse
    /// move) and `wait` (the settle timer fires).
    Nav {
        /// Number of entries in the list
        #[arg(long, default_value = "20")]
        links: u32,

        /// Sticky header height used for scroll targets
        #[arg(long, default_value = "80")]
        header_offset: u32,

        /// Key sequence
        #[arg(required = true)]
        keys: Vec<String>,
    },
}
