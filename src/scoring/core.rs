// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cosine similarity between the query and each candidate.
//!
//! # Key Invariant: Bounded Scores
//!
//! Every score is a finite number in `[0, 1]`:
//!
//! ```text
//! cosine(q, c) = dot(q, c) / (|q| * |c|)    clamped to [0, 1]
//! cosine(q, 0) = cosine(0, c) = 0.0          exactly, never NaN
//! ```
//!
//! Term weights are non-negative, so negative cosines cannot occur in practice.
//! The clamp still runs, as does the NaN check, so a bad weight can never leak
//! an out-of-range score into ranking.

use crate::vector::SparseVector;

/// Cosine similarity clamped to `[0, 1]`. Zero-norm vectors score exactly `0.0`.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let similarity = a.dot(b) / (norm_a * norm_b);
    if similarity.is_finite() {
        similarity.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Score every candidate against the query. Output order matches `candidates`.
pub fn score(query: &SparseVector, candidates: &[SparseVector]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| cosine(query, candidate))
        .collect()
}
