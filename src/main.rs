// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use sift::{
    export_rows, write_csv, write_json, DirectoryDiscovery, FileExtractor, Normalizer, Outcome,
    Screener, ScreeningConfig, ScreeningReport, StopWords,
};

mod cli;
use cli::display::{
    pad_left, pad_right, row, score_value, section_bot, section_top, themed, title,
    truncate_chars, warning_label, DIM, GRAY, IDENTIFIER_WIDTH,
};
use cli::{Cli, Commands, ScreenArgs};

/// Characters of preview shown under each result row.
const PREVIEW_WIDTH: usize = 68;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Screen(args) => run_screen(args),
        Commands::Normalize { input, config } => run_normalize(&input, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr, filtered by `SIFT_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SIFT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("sift=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_screen(args: ScreenArgs) -> Result<()> {
    let query = read_query(&args.jd)?;
    let mut config = load_config(args.config.as_deref())?;

    if let Some(whitelist) = args.whitelist {
        config.normalizer.punctuation_whitelist = whitelist;
    }
    if let Some(path) = &args.stop_words {
        let words = StopWords::from_file(path)
            .with_context(|| format!("failed to read stop words from {}", path.display()))?;
        config.normalizer.stop_words = Some(words.iter().map(str::to_string).collect());
    }

    let discovery = if args.extensions.is_empty() {
        DirectoryDiscovery::default()
    } else {
        DirectoryDiscovery::new(&args.extensions)
    };

    #[allow(unused_mut)]
    let mut screener = Screener::new(config);
    #[cfg(feature = "parallel")]
    if !args.no_progress && atty::is(atty::Stream::Stderr) {
        screener = screener.with_progress(ingest_progress_bar());
    }

    let report = screener
        .run(&query, &args.dir, &discovery, &FileExtractor)
        .with_context(|| format!("screening {} failed", args.dir.display()))?;

    print_report(&report, args.limit, &args.dir);

    let rows = export_rows(&report.results);
    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_csv(&rows, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Wrote {} rows to {}", rows.len(), path.display());
    }
    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_json(&rows, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("Wrote {} rows to {}", rows.len(), path.display());
    }

    Ok(())
}

fn run_normalize(input: &str, config: Option<&Path>) -> Result<()> {
    let text = read_text_arg(input)?;
    let config = load_config(config)?;
    let normalizer = Normalizer::new(&config.normalizer);
    println!("{}", normalizer.normalize(&text).join(" "));
    Ok(())
}

/// The query text, refusing one that is empty or only whitespace.
fn read_query(value: &str) -> Result<String> {
    let query = read_text_arg(value)?;
    if query.trim().is_empty() {
        bail!("the query description is empty; pass text or a file with --jd");
    }
    Ok(query)
}

/// An argument that names an existing file is read; anything else is literal text.
fn read_text_arg(value: &str) -> Result<String> {
    let path = Path::new(value);
    if path.is_file() {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        Ok(value.to_string())
    }
}

fn load_config(path: Option<&Path>) -> Result<ScreeningConfig> {
    match path {
        Some(path) => Ok(ScreeningConfig::from_json_file(path)?),
        None => Ok(ScreeningConfig::default()),
    }
}

#[cfg(feature = "parallel")]
fn ingest_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        )
        .expect("valid progress template literal")
        .progress_chars("━━╸"),
    );
    pb.set_prefix("Ingesting");
    pb
}

fn print_report(report: &ScreeningReport, limit: usize, dir: &Path) {
    match report.outcome {
        Outcome::NoCandidates => {
            println!("No matches found: no candidate documents under {}", dir.display());
        }
        Outcome::NoValidCandidates => {
            println!(
                "No matches found: none of the {} documents had usable text",
                report.candidates_found
            );
        }
        Outcome::Ranked => print_results_table(report, limit),
    }

    if !report.diagnostics.is_empty() {
        eprintln!(
            "{} skipped {} of {} documents",
            warning_label("warning:"),
            report.diagnostics.len(),
            report.candidates_found
        );
        for diagnostic in &report.diagnostics {
            eprintln!("  {}: {}", diagnostic.identifier, diagnostic.reason);
        }
    }
}

fn print_results_table(report: &ScreeningReport, limit: usize) {
    let shown = report.results.top(limit);

    title("SCREENING RESULTS");
    section_top(&format!("TOP {} OF {}", shown.len(), report.results.len()));
    row(&format!(
        " {}  {}  {}",
        pad_left("RANK", 4),
        pad_right("SCORE", 6),
        "IDENTIFIER"
    ));

    for (i, entry) in shown.iter().enumerate() {
        let identifier = truncate_chars(entry.identifier(), IDENTIFIER_WIDTH);
        row(&format!(
            " {}  {}  {}",
            pad_left(&(i + 1).to_string(), 4),
            score_value(entry.score()),
            identifier
        ));

        let preview = entry.metadata().preview.trim();
        if !preview.is_empty() {
            let preview = truncate_chars(preview, PREVIEW_WIDTH);
            row(&format!("       {}", themed(GRAY, &[DIM], &preview)));
        }
    }

    section_bot();
}
