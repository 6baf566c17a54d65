// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lexical candidate screening: rank documents against a query by TF-IDF
//! cosine similarity.
//!
//! Given a query text (a job description, say) and a pile of candidate
//! documents, every text goes through one normalization pipeline, the corpus
//! `[query] ++ candidates` is turned into TF-IDF vectors over a shared
//! vocabulary, and candidates come back sorted by cosine similarity to the
//! query.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  ingest/    │────▶│    text/     │────▶│   vector/    │────▶│  scoring/   │
//! │ (Discover,  │     │ (Normalizer, │     │ (VectorSpace │     │  (cosine,   │
//! │  Extract)   │     │  StopWords)  │     │  TF-IDF)     │     │   rank)     │
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │                    │
//!        ▼                   ▼                    ▼                    ▼
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │                              workflow/                                   │
//! │   Idle → Discovery → IngestionAndProcessing → Scoring → Completed        │
//! └──────────────────────────────────────────────────────────────────────────┘
//!                                      │
//!                                      ▼
//!                          export.rs (CSV / JSON rows)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use sift::{DirectoryDiscovery, FileExtractor, Screener, ScreeningConfig};
//!
//! let mut screener = Screener::new(ScreeningConfig::default());
//! let report = screener.run(jd, "resumes/".as_ref(), &DirectoryDiscovery::default(), &FileExtractor)?;
//! for entry in report.results.top(10) {
//!     println!("{:.4}  {}", entry.score(), entry.identifier());
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod scoring;
pub mod testing;
pub mod text;
mod types;
pub mod vector;
pub mod workflow;

pub use config::{LemmatizerKind, NormalizerConfig, ScreeningConfig};
pub use error::{ConfigError, IngestError, ScreeningError, SkipReason};
pub use export::{export_rows, write_csv, write_json, ExportRow};
pub use ingest::{DirectoryDiscovery, Discover, Extract, FileExtractor, Source};
pub use scoring::{compare_scores, cosine, rank, score};
pub use text::{Lemmatize, Normalizer, StopWords};
pub use types::{
    Candidate, CandidateMeta, Diagnostic, NormalizedDocument, RankedResult, RawDocument,
    ScoredCandidate,
};
pub use vector::{
    IdfVariant, SparseVector, TermId, TfVariant, VectorSpace, VectorSpaceBuilder, WeightingParams,
};
pub use workflow::{Outcome, Screener, ScreeningReport, ScreeningState};

/// Normalize `text` with the default configuration.
pub fn normalize(text: &str) -> Vec<String> {
    Normalizer::default().normalize(text)
}
