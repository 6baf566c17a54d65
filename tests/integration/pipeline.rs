// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end screening scenarios over in-memory corpora.

use crate::common::{
    assert_well_ranked, make_candidate, make_raw_doc, plain_screener, ranked_ids, score_of,
    state_log, MemoryCorpus, MEMORY_ROOT,
};
use sift::{rank, Outcome, Screener, ScreeningConfig, ScreeningState, SkipReason};
use std::path::Path;

// ============================================================================
// RANKING SCENARIOS
// ============================================================================

#[test]
fn python_ml_candidate_ranks_first() {
    let query = "Looking for a Python developer with machine learning experience.";
    let corpus = MemoryCorpus::new()
        .with(
            "java.txt",
            "Java backend engineer. Spring Boot, Hibernate, Oracle.",
        )
        .with(
            "python_ml.txt",
            "Experienced Python developer; built machine learning pipelines in production.",
        )
        .with(
            "data.txt",
            "Data scientist: Python, statistics and deep learning research.",
        );

    let mut screener = Screener::new(ScreeningConfig::default());
    let report = screener
        .run(query, Path::new(MEMORY_ROOT), &corpus, &corpus)
        .unwrap();

    assert_eq!(report.outcome, Outcome::Ranked);
    assert_eq!(report.results.len(), 3);
    assert_well_ranked(&report);

    let ids = ranked_ids(&report);
    assert_eq!(ids[0], "python_ml.txt");
    assert_eq!(ids[2], "java.txt");
    assert!(score_of(&report, "python_ml.txt") > score_of(&report, "data.txt"));
    assert!(score_of(&report, "data.txt") > 0.0);
    assert_eq!(score_of(&report, "java.txt"), 0.0);
}

#[test]
fn python_ml_short_descriptions() {
    let mut screener = Screener::new(ScreeningConfig::default());
    let report = screener.run_documents(
        "python machine learning",
        vec![
            make_raw_doc("c1", "Experienced Python developer with ML background"),
            make_raw_doc("c2", "Java backend engineer"),
        ],
    );

    assert_eq!(report.outcome, Outcome::Ranked);
    assert_eq!(ranked_ids(&report), vec!["c1", "c2"]);
    let c1 = score_of(&report, "c1");
    assert!(c1 > 0.0 && c1 < 1.0, "c1 scored {c1}");
    assert_eq!(score_of(&report, "c2"), 0.0);
}

#[test]
fn zero_overlap_candidate_is_kept_with_zero_score() {
    let mut screener = plain_screener();
    let report = screener.run_documents(
        "rust tokio async",
        vec![
            make_raw_doc("chef", "french cuisine pastry"),
            make_raw_doc("rustacean", "rust async runtime"),
        ],
    );

    assert_eq!(ranked_ids(&report), vec!["rustacean", "chef"]);
    assert_eq!(score_of(&report, "chef"), 0.0);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn equal_scores_keep_discovery_order() {
    let candidates = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|id| make_candidate(id))
        .collect();
    let result = rank(candidates, &[0.5, 0.9, 0.5, 0.1, 0.0]);

    let ids: Vec<&str> = result.iter().map(|r| r.identifier()).collect();
    assert_eq!(ids, vec!["b", "a", "c", "d", "e"]);
    assert_eq!(result.scores(), vec![0.9, 0.5, 0.5, 0.1, 0.0]);
}

#[test]
fn identical_candidates_tie_in_discovery_order() {
    let mut screener = plain_screener();
    let report = screener.run_documents(
        "kotlin android",
        vec![
            make_raw_doc("second-copy", "kotlin android developer"),
            make_raw_doc("first-copy", "kotlin android developer"),
            make_raw_doc("other", "ios swift developer"),
        ],
    );

    assert_eq!(
        ranked_ids(&report),
        vec!["second-copy", "first-copy", "other"]
    );
    assert_eq!(
        score_of(&report, "second-copy"),
        score_of(&report, "first-copy")
    );
}

#[test]
fn punctuation_heavy_skills_still_match() {
    let mut screener = plain_screener();
    let report = screener.run_documents(
        "Skills: C++, C#, Node.js",
        vec![
            make_raw_doc("cpp", "Ten years of C++ and C# at scale."),
            make_raw_doc("c", "C programmer, embedded."),
        ],
    );

    assert_eq!(ranked_ids(&report)[0], "cpp");
    assert_eq!(score_of(&report, "c"), 0.0);
}

#[test]
fn links_do_not_contribute_to_similarity() {
    let mut screener = plain_screener();
    let report = screener.run_documents(
        "https://jobs.example.com/rust-role",
        vec![make_raw_doc("linked", "see https://jobs.example.com/rust-role today")],
    );

    // The query is nothing but a link, so it normalizes to no tokens.
    assert_eq!(report.outcome, Outcome::Ranked);
    assert_eq!(report.results.scores(), vec![0.0]);
}

// ============================================================================
// EARLY TERMINATION
// ============================================================================

#[test]
fn blank_candidates_end_before_scoring() {
    let corpus = MemoryCorpus::new()
        .with("empty.txt", "")
        .with("spaces.txt", "   \n\t  ")
        .with("stopwords.txt", "the and of to");

    let (log, observer) = state_log();
    let mut screener = plain_screener().on_state_change(observer);
    let report = screener
        .run("python developer", Path::new(MEMORY_ROOT), &corpus, &corpus)
        .unwrap();

    assert_eq!(report.outcome, Outcome::NoValidCandidates);
    assert!(report.is_empty());
    assert_eq!(report.candidates_found, 3);
    assert_eq!(screener.state(), ScreeningState::IngestionAndProcessing);
    assert!(!log.lock().unwrap().contains(&ScreeningState::Scoring));

    let reasons: Vec<&SkipReason> = report.diagnostics.iter().map(|d| &d.reason).collect();
    assert!(matches!(reasons[0], SkipReason::EmptyText));
    assert!(matches!(reasons[1], SkipReason::EmptyText));
    assert!(matches!(reasons[2], SkipReason::NoTokens));
}

#[test]
fn nothing_discovered_ends_in_discovery() {
    let corpus = MemoryCorpus::new();
    let (log, observer) = state_log();
    let mut screener = plain_screener().on_state_change(observer);

    let report = screener
        .run("python developer", Path::new(MEMORY_ROOT), &corpus, &corpus)
        .unwrap();

    assert_eq!(report.outcome, Outcome::NoCandidates);
    assert_eq!(report.candidates_found, 0);
    assert_eq!(
        *log.lock().unwrap(),
        vec![ScreeningState::Idle, ScreeningState::Discovery]
    );
}

#[test]
fn failing_extraction_is_reported_not_fatal() {
    let corpus = MemoryCorpus::new()
        .failing("scan.pdf")
        .with("cv.txt", "python developer");

    let mut screener = plain_screener();
    let report = screener
        .run("python", Path::new(MEMORY_ROOT), &corpus, &corpus)
        .unwrap();

    assert_eq!(ranked_ids(&report), vec!["cv.txt"]);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].identifier, "scan.pdf");
    assert!(matches!(
        report.diagnostics[0].reason,
        SkipReason::Extraction(_)
    ));
}
