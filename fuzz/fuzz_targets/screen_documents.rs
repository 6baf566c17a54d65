// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole screening runs.
//!
//! Arbitrary query and candidate texts must never fail a run. Every candidate
//! ends up either ranked or in the diagnostics, exactly once.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::{Outcome, RawDocument, Screener, ScreeningConfig};

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    candidates: Vec<String>,
}

fuzz_target!(|input: Input| {
    let documents: Vec<RawDocument> = input
        .candidates
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, text)| RawDocument::new(format!("doc{}", i), text.as_str()))
        .collect();
    let submitted = documents.len();

    let mut screener = Screener::new(ScreeningConfig::default());
    let report = screener.run_documents(&input.query, documents);

    // INVARIANT 1: every document is accounted for exactly once
    match report.outcome {
        Outcome::NoCandidates => assert_eq!(submitted, 0),
        Outcome::NoValidCandidates => assert_eq!(report.diagnostics.len(), submitted),
        Outcome::Ranked => {
            assert_eq!(report.results.len() + report.diagnostics.len(), submitted)
        }
    }

    // INVARIANT 2: scores bounded and descending
    let scores = report.results.scores();
    for s in &scores {
        assert!((0.0..=1.0).contains(s));
    }
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
});
