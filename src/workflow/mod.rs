// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The screening run, as an explicit state machine.
//!
//! ```text
//! Idle ──▶ Discovery ──▶ IngestionAndProcessing ──▶ Scoring ──▶ Completed
//!              │                   │
//!              ▼                   ▼
//!        NoCandidates       NoValidCandidates
//! ```
//!
//! A run that finds nothing, or nothing usable, stops in the state where it
//! found out and returns an empty report. It never reaches `Scoring`.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **One document never fails the run**: extraction and normalization
//!    problems become [`Diagnostic`]s, logged and returned in the report.
//! 2. **Discovery order is the tie-break**: ingestion keeps input order even
//!    when parallel, and ranking is stable on top of that.
//! 3. **Query and candidates share one vocabulary**: the vector space is
//!    built over `[query] ++ candidates` in a single pass.

mod parallel;

pub use parallel::preview;

use std::fmt;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::config::ScreeningConfig;
use crate::error::{ScreeningError, SkipReason};
use crate::ingest::{Discover, Extract, Source};
use crate::scoring::{rank, score};
use crate::text::Normalizer;
use crate::types::{CandidateMeta, Diagnostic, RankedResult, RawDocument};
use crate::vector::{SparseVector, VectorSpaceBuilder};
use parallel::{ingest_all, ingest_text, Ingested};

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreeningState {
    Idle,
    Discovery,
    IngestionAndProcessing,
    Scoring,
    Completed,
}

impl fmt::Display for ScreeningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreeningState::Idle => "IDLE",
            ScreeningState::Discovery => "DISCOVERY",
            ScreeningState::IngestionAndProcessing => "INGESTION_AND_PROCESSING",
            ScreeningState::Scoring => "SCORING",
            ScreeningState::Completed => "COMPLETED",
        };
        f.write_str(name)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Discovery found no sources.
    NoCandidates,
    /// Sources were found but none survived extraction and normalization.
    NoValidCandidates,
    /// Candidates were scored and ranked.
    Ranked,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct ScreeningReport {
    pub outcome: Outcome,
    /// Ranked candidates, best first. Empty unless `outcome` is `Ranked`.
    pub results: RankedResult<CandidateMeta>,
    /// Documents left out of the corpus, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
    /// Sources discovery returned, usable or not.
    pub candidates_found: usize,
}

impl ScreeningReport {
    fn early(outcome: Outcome, diagnostics: Vec<Diagnostic>, candidates_found: usize) -> Self {
        Self {
            outcome,
            results: RankedResult::empty(),
            diagnostics,
            candidates_found,
        }
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

type Observer = Box<dyn FnMut(ScreeningState) + Send>;

/// Runs query-vs-candidates screening.
///
/// ```ignore
/// let mut screener = Screener::new(ScreeningConfig::default());
/// let report = screener.run(jd, dir, &DirectoryDiscovery::default(), &FileExtractor)?;
/// for entry in &report.results {
///     println!("{:.4} {}", entry.score(), entry.identifier());
/// }
/// ```
pub struct Screener {
    config: ScreeningConfig,
    normalizer: Normalizer,
    state: ScreeningState,
    observer: Option<Observer>,
    #[cfg(feature = "parallel")]
    progress: Option<ProgressBar>,
}

impl Screener {
    pub fn new(config: ScreeningConfig) -> Self {
        let normalizer = Normalizer::new(&config.normalizer);
        Self::with_normalizer(config, normalizer)
    }

    /// Use a prepared normalizer (e.g. with a custom lemmatizer).
    pub fn with_normalizer(config: ScreeningConfig, normalizer: Normalizer) -> Self {
        Self {
            config,
            normalizer,
            state: ScreeningState::Idle,
            observer: None,
            #[cfg(feature = "parallel")]
            progress: None,
        }
    }

    /// Call `observer` on every state transition.
    pub fn on_state_change(mut self, observer: impl FnMut(ScreeningState) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Report ingestion progress on `progress`.
    #[cfg(feature = "parallel")]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn state(&self) -> ScreeningState {
        self.state
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Discover sources under `root`, extract and normalize them, then rank
    /// them against `query`.
    ///
    /// Only a failed discovery is an error. Everything after it degrades to
    /// diagnostics or an empty report.
    pub fn run<D, E>(
        &mut self,
        query: &str,
        root: &Path,
        discover: &D,
        extract: &E,
    ) -> Result<ScreeningReport, ScreeningError>
    where
        D: Discover + ?Sized,
        E: Extract + ?Sized,
    {
        self.transition(ScreeningState::Idle);
        self.transition(ScreeningState::Discovery);

        let sources = discover.discover(root).map_err(ScreeningError::Discovery)?;
        if sources.is_empty() {
            tracing::info!(root = %root.display(), "no candidate sources found");
            return Ok(ScreeningReport::early(Outcome::NoCandidates, Vec::new(), 0));
        }

        self.transition(ScreeningState::IngestionAndProcessing);
        let normalizer = &self.normalizer;
        let preview_chars = self.config.preview_chars;
        let ingest = |source: &Source| -> Result<Ingested, Diagnostic> {
            let text = extract.extract(source).map_err(|err| Diagnostic {
                identifier: source.identifier.clone(),
                reason: SkipReason::Extraction(err),
            })?;
            ingest_text(
                normalizer,
                &source.identifier,
                Some(source.path.clone()),
                &text,
                preview_chars,
            )
        };

        #[cfg(feature = "parallel")]
        let results = ingest_all(&sources, ingest, self.progress.as_ref());
        #[cfg(not(feature = "parallel"))]
        let results = ingest_all(&sources, ingest);

        Ok(self.finish(query, results, sources.len()))
    }

    /// Rank in-memory documents against `query`.
    ///
    /// Same pipeline as [`Screener::run`] with discovery replaced by the given
    /// list, so it cannot fail.
    pub fn run_documents(&mut self, query: &str, documents: Vec<RawDocument>) -> ScreeningReport {
        self.transition(ScreeningState::Idle);
        self.transition(ScreeningState::Discovery);

        if documents.is_empty() {
            tracing::info!("no candidate documents supplied");
            return ScreeningReport::early(Outcome::NoCandidates, Vec::new(), 0);
        }

        self.transition(ScreeningState::IngestionAndProcessing);
        let normalizer = &self.normalizer;
        let preview_chars = self.config.preview_chars;
        let ingest = |doc: &RawDocument| {
            ingest_text(normalizer, &doc.identifier, None, &doc.text, preview_chars)
        };

        #[cfg(feature = "parallel")]
        let results = ingest_all(&documents, ingest, self.progress.as_ref());
        #[cfg(not(feature = "parallel"))]
        let results = ingest_all(&documents, ingest);

        self.finish(query, results, documents.len())
    }

    /// Split ingestion results, then score and rank whatever survived.
    fn finish(
        &mut self,
        query: &str,
        results: Vec<Result<Ingested, Diagnostic>>,
        candidates_found: usize,
    ) -> ScreeningReport {
        let mut ingested = Vec::with_capacity(results.len());
        let mut diagnostics = Vec::new();
        for result in results {
            match result {
                Ok(doc) => ingested.push(doc),
                Err(diagnostic) => {
                    tracing::warn!(
                        identifier = %diagnostic.identifier,
                        reason = %diagnostic.reason,
                        "skipping candidate"
                    );
                    diagnostics.push(diagnostic);
                }
            }
        }

        if ingested.is_empty() {
            tracing::info!(
                candidates_found,
                skipped = diagnostics.len(),
                "no usable candidates"
            );
            return ScreeningReport::early(Outcome::NoValidCandidates, diagnostics, candidates_found);
        }

        self.transition(ScreeningState::Scoring);
        let results = self.score_and_rank(query, ingested);

        self.transition(ScreeningState::Completed);
        tracing::info!(
            ranked = results.len(),
            skipped = diagnostics.len(),
            "screening complete"
        );

        ScreeningReport {
            outcome: Outcome::Ranked,
            results,
            diagnostics,
            candidates_found,
        }
    }

    fn score_and_rank(&self, query: &str, ingested: Vec<Ingested>) -> RankedResult<CandidateMeta> {
        let query_tokens = self.normalizer.normalize(query);
        if query_tokens.is_empty() {
            tracing::warn!("query has no tokens after normalization; every score will be 0");
        }

        let (candidates, candidate_tokens): (Vec<_>, Vec<_>) = ingested
            .into_iter()
            .map(|doc| (doc.candidate, doc.document.tokens))
            .unzip();

        let mut corpus = Vec::with_capacity(candidate_tokens.len() + 1);
        corpus.push(query_tokens);
        corpus.extend(candidate_tokens);

        let mut builder = VectorSpaceBuilder::new(self.config.weighting);
        if self.config.vector_stop_words {
            builder = builder.with_stop_words(self.normalizer.stop_words().clone());
        }
        let space = builder.build(&corpus);

        let zero = SparseVector::zero();
        let query_vector = space.query().unwrap_or(&zero);
        let scores = score(query_vector, space.candidates());

        rank(candidates, &scores)
    }

    fn transition(&mut self, next: ScreeningState) {
        tracing::info!(from = %self.state, to = %next, "state transition");
        self.state = next;
        if let Some(observer) = self.observer.as_mut() {
            observer(next);
        }
    }
}

impl fmt::Debug for Screener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screener")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("normalizer", &self.normalizer)
            .finish_non_exhaustive()
    }
}
