// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow between pipeline stages.
//!
//! Each stage consumes its input and hands a fresh value to the next one:
//!
//! ```text
//! RawDocument ──normalize──▶ NormalizedDocument ──vectorize──▶ SparseVector
//!                                                                   │
//!                       RankedResult ◀──rank── ScoredCandidate ◀──score
//! ```
//!
//! # Invariants
//!
//! - **NormalizedDocument**: a document with zero tokens never reaches the
//!   vector space. The workflow turns it into a `SkipReason::NoTokens`
//!   diagnostic instead of scoring it as a zero vector.
//!
//! - **ScoredCandidate**: `0.0 <= score <= 1.0` and never NaN. Fields are private
//!   so a candidate cannot be re-scored after ranking.
//!
//! - **RankedResult**: scores are non-increasing; equal scores keep the order
//!   in which candidates were discovered.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::path::PathBuf;

use crate::error::SkipReason;

/// A document as handed over by extraction: identifier plus text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Stable per input, e.g. the source file name.
    pub identifier: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}

/// Token sequence produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    pub identifier: String,
    pub tokens: Vec<String>,
}

impl NormalizedDocument {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

/// A candidate before scoring: identifier plus whatever the caller wants carried through.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<M> {
    pub identifier: String,
    pub metadata: M,
}

impl<M> Candidate<M> {
    pub fn new(identifier: impl Into<String>, metadata: M) -> Self {
        Self {
            identifier: identifier.into(),
            metadata,
        }
    }
}

/// Metadata the workflow attaches to every candidate it ingests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMeta {
    pub identifier: String,
    /// Where the candidate came from, if it came from disk.
    pub path: Option<PathBuf>,
    /// First characters of the raw text, newlines flattened.
    pub preview: String,
    /// Normalized tokens joined by spaces. Kept in memory, never exported.
    #[serde(skip)]
    pub normalized_text: String,
}

/// A candidate with its similarity score attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<M> {
    identifier: String,
    score: f64,
    metadata: M,
}

impl<M> ScoredCandidate<M> {
    pub(crate) fn new(candidate: Candidate<M>, score: f64) -> Self {
        Self {
            identifier: candidate.identifier,
            score,
            metadata: candidate.metadata,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub fn into_metadata(self) -> M {
        self.metadata
    }
}

/// Candidates sorted by score, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult<M> {
    entries: Vec<ScoredCandidate<M>>,
}

impl<M> RankedResult<M> {
    /// Wrap entries that are already in ranked order.
    pub(crate) fn from_sorted(entries: Vec<ScoredCandidate<M>>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate<M>> {
        self.entries.iter()
    }

    /// The best `n` entries (fewer if the result is shorter).
    pub fn top(&self, n: usize) -> &[ScoredCandidate<M>] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(ScoredCandidate::score).collect()
    }

    pub fn into_vec(self) -> Vec<ScoredCandidate<M>> {
        self.entries
    }
}

impl<M> Default for RankedResult<M> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<M> Index<usize> for RankedResult<M> {
    type Output = ScoredCandidate<M>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a, M> IntoIterator for &'a RankedResult<M> {
    type Item = &'a ScoredCandidate<M>;
    type IntoIter = std::slice::Iter<'a, ScoredCandidate<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A document that was discovered but left out of the corpus.
#[derive(Debug)]
pub struct Diagnostic {
    pub identifier: String,
    pub reason: SkipReason,
}
