// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sift::{ScreeningReport, ScreeningState};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

// Re-export canonical test utilities from sift::testing
pub use sift::testing::{make_candidate, make_raw_doc, plain_config, plain_screener, MemoryCorpus};

/// Root handed to in-memory discovery. Never touched on disk.
pub const MEMORY_ROOT: &str = "/candidates";

// ============================================================================
// FIXTURES
// ============================================================================

/// Write `(relative path, contents)` pairs under `dir`, creating parents.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}

/// Shared log of state transitions, for `Screener::on_state_change`.
pub fn state_log() -> (Arc<Mutex<Vec<ScreeningState>>>, impl FnMut(ScreeningState) + Send + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |state| sink.lock().unwrap().push(state))
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Identifiers in rank order.
pub fn ranked_ids(report: &ScreeningReport) -> Vec<String> {
    report
        .results
        .iter()
        .map(|entry| entry.identifier().to_string())
        .collect()
}

/// Score of the candidate called `identifier`.
pub fn score_of(report: &ScreeningReport, identifier: &str) -> f64 {
    report
        .results
        .iter()
        .find(|entry| entry.identifier() == identifier)
        .unwrap_or_else(|| panic!("{} not in results", identifier))
        .score()
}

/// Check the ordering and bounds every ranked result must satisfy.
pub fn assert_well_ranked(report: &ScreeningReport) {
    let scores = report.results.scores();
    for (i, pair) in scores.windows(2).enumerate() {
        assert!(
            pair[0] >= pair[1],
            "scores not descending at {}: {} < {}",
            i,
            pair[0],
            pair[1]
        );
    }
    for s in scores {
        assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
    }
}
