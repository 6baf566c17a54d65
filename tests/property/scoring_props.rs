// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cosine and ranking invariants.

use crate::common::make_candidate;
use proptest::prelude::*;
use sift::{cosine, rank, SparseVector, TermId};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sparse vectors with non-negative weights, possibly empty.
fn vector_strategy() -> impl Strategy<Value = SparseVector> {
    prop::collection::vec((0u32..32, 0.0f64..10.0), 0..12).prop_map(|pairs| {
        SparseVector::from_pairs(pairs.into_iter().map(|(t, w)| (TermId(t), w)).collect())
    })
}

/// Scores drawn from a small pool so ties are common, plus junk values.
fn score_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => prop::sample::select(vec![0.0, 0.1, 0.25, 0.5, 0.75, 1.0]),
        2 => 0.0f64..1.0,
        1 => Just(f64::NAN),
        1 => Just(1.5),
        1 => Just(-0.5),
    ]
}

// ============================================================================
// COSINE
// ============================================================================

proptest! {
    /// Property: cosine is always a finite number in [0, 1].
    #[test]
    fn prop_cosine_bounded(a in vector_strategy(), b in vector_strategy()) {
        let s = cosine(&a, &b);
        prop_assert!(s.is_finite());
        prop_assert!((0.0..=1.0).contains(&s));
    }

    /// Property: cosine is symmetric.
    #[test]
    fn prop_cosine_symmetric(a in vector_strategy(), b in vector_strategy()) {
        prop_assert!((cosine(&a, &b) - cosine(&b, &a)).abs() < 1e-12);
    }

    /// Property: a non-zero vector is maximally similar to itself.
    #[test]
    fn prop_cosine_self_is_one(a in vector_strategy()) {
        prop_assume!(!a.is_zero());
        prop_assert!((cosine(&a, &a) - 1.0).abs() < 1e-9);
    }

    /// Property: anything against the zero vector scores exactly 0.
    #[test]
    fn prop_cosine_zero_vector(a in vector_strategy()) {
        let zero = SparseVector::zero();
        prop_assert_eq!(cosine(&a, &zero), 0.0);
        prop_assert_eq!(cosine(&zero, &a), 0.0);
    }

    /// Property: scaling a vector does not change its cosine.
    #[test]
    fn prop_cosine_scale_invariant(a in vector_strategy(), b in vector_strategy(), k in 0.1f64..100.0) {
        let scaled = SparseVector::from_pairs(
            a.entries().iter().map(|&(t, w)| (t, w * k)).collect(),
        );
        prop_assert!((cosine(&a, &b) - cosine(&scaled, &b)).abs() < 1e-9);
    }
}

// ============================================================================
// RANKING
// ============================================================================

proptest! {
    /// Property: ranked scores are non-increasing and inside [0, 1].
    #[test]
    fn prop_rank_sorted_and_bounded(scores in prop::collection::vec(score_strategy(), 0..30)) {
        let candidates = (0..scores.len()).map(|i| make_candidate(&i.to_string())).collect();
        let result = rank(candidates, &scores);

        let ranked = result.scores();
        prop_assert_eq!(ranked.len(), scores.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
        for s in ranked {
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }

    /// Property: candidates with equal scores stay in input order.
    #[test]
    fn prop_rank_is_stable(scores in prop::collection::vec(score_strategy(), 0..30)) {
        let candidates = (0..scores.len()).map(|i| make_candidate(&i.to_string())).collect();
        let result = rank(candidates, &scores);

        for pair in result.into_vec().windows(2) {
            if pair[0].score() == pair[1].score() {
                let first: usize = pair[0].identifier().parse().unwrap();
                let second: usize = pair[1].identifier().parse().unwrap();
                prop_assert!(first < second, "tie broken out of order: {} before {}", first, second);
            }
        }
    }

    /// Property: ranking is a permutation of its input.
    #[test]
    fn prop_rank_is_permutation(scores in prop::collection::vec(score_strategy(), 0..30)) {
        let candidates = (0..scores.len()).map(|i| make_candidate(&i.to_string())).collect();
        let result = rank(candidates, &scores);

        let mut ids: Vec<usize> = result.iter().map(|r| r.identifier().parse().unwrap()).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..scores.len()).collect::<Vec<_>>());
    }
}
