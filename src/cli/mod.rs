// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! Two subcommands: `screen` ranks a directory of candidate documents against
//! a query, and `normalize` prints the tokens a text turns into, which is the
//! quickest way to see why two documents do or don't match.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sift",
    about = "Rank candidate documents against a query by TF-IDF cosine similarity",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every document under a directory against a query
    Screen(ScreenArgs),

    /// Print the normalized tokens for a text
    Normalize {
        /// Text to normalize, or a path to a file containing it
        input: String,

        /// JSON configuration file (normalizer settings)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct ScreenArgs {
    /// Query text, or a path to a file containing it
    #[arg(short, long)]
    pub jd: String,

    /// Directory to search for candidate documents
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Number of results to display
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// File extensions to pick up (repeatable)
    ///
    /// Defaults to pdf, docx and txt. Files that cannot be read
    /// (scanned PDFs, unsupported formats) are reported as skipped.
    #[arg(short, long = "ext")]
    pub extensions: Vec<String>,

    /// Write all ranked results as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write all ranked results as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// JSON configuration file (normalizer and weighting settings)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Replace the built-in stop-word list with one word per line from FILE
    #[arg(long)]
    pub stop_words: Option<PathBuf>,

    /// Punctuation characters kept inside tokens (default "+#.")
    #[arg(long)]
    pub whitelist: Option<String>,

    /// Hide the ingestion progress bar
    #[arg(long)]
    pub no_progress: bool,
}
