// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Sort order is score descending, nothing else. Candidates with equal scores
//! keep the order they were discovered in because the sort is stable. No
//! secondary key (name, path, length) is invented: discovery order is the
//! deterministic tiebreak.

use std::cmp::Ordering;

use crate::types::{Candidate, RankedResult, ScoredCandidate};

/// Compare two scored candidates for ranking: higher score first.
///
/// Returns `Equal` for equal scores so a stable sort preserves input order.
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Attach `scores` to `candidates` and sort descending.
///
/// # Panics
///
/// When `candidates.len() != scores.len()`. That is a bug in the caller, not a
/// runtime condition, so it is not coerced into a partial result.
pub fn rank<M>(candidates: Vec<Candidate<M>>, scores: &[f64]) -> RankedResult<M> {
    assert_eq!(
        candidates.len(),
        scores.len(),
        "rank: {} candidates but {} scores",
        candidates.len(),
        scores.len()
    );

    let mut entries: Vec<ScoredCandidate<M>> = candidates
        .into_iter()
        .zip(scores.iter().copied())
        .map(|(candidate, score)| ScoredCandidate::new(candidate, sanitize(score)))
        .collect();

    // `sort_by` is stable; `sort_unstable_by` would break the tiebreak.
    entries.sort_by(|a, b| compare_scores(a.score(), b.score()));

    RankedResult::from_sorted(entries)
}

/// Keep scores inside `[0, 1]`. NaN and negative zero become `0.0`, so
/// `total_cmp` never splits a tie between `0.0` and `-0.0`.
fn sanitize(score: f64) -> f64 {
    if score.is_nan() || score <= 0.0 {
        0.0
    } else {
        score.min(1.0)
    }
}
