// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Whatever floats come in (NaN, infinities, negative zero, subnormals), the
//! ranking must come out bounded, descending, complete, and stable on ties.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::{rank, Candidate};

fuzz_target!(|scores: Vec<f64>| {
    let scores = &scores[..scores.len().min(512)];
    let candidates = (0..scores.len()).map(|i| Candidate::new(i.to_string(), i)).collect();
    let result = rank(candidates, scores);

    // INVARIANT 1: nothing dropped or duplicated
    assert_eq!(result.len(), scores.len());

    let entries = result.into_vec();
    for entry in &entries {
        // INVARIANT 2: bounded
        assert!((0.0..=1.0).contains(&entry.score()), "score {} out of range", entry.score());
    }

    for pair in entries.windows(2) {
        // INVARIANT 3: descending
        assert!(pair[0].score() >= pair[1].score());

        // INVARIANT 4: ties keep input order
        if pair[0].score() == pair[1].score() {
            assert!(pair[0].metadata() < pair[1].metadata());
        }
    }
});
