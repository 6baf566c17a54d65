// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization invariants.

use proptest::prelude::*;
use sift::{Normalizer, NormalizerConfig, StopWords};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Token-ish fragments that exercise every normalization step.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[A-Za-z]{1,10}").unwrap(),
        prop::string::string_regex("[a-z0-9]{1,6}").unwrap(),
        prop::sample::select(vec![
            "C++".to_string(),
            "C#".to_string(),
            "Node.js.".to_string(),
            "https://example.com/jobs?id=7".to_string(),
            "www.example.org".to_string(),
            "don't".to_string(),
            "e-mail".to_string(),
            "R&D".to_string(),
            "3.5".to_string(),
            "...".to_string(),
            "résumé".to_string(),
            "naïve".to_string(),
            "Running".to_string(),
            "generously".to_string(),
            "THE".to_string(),
            "(parenthetical)".to_string(),
            "snake_case".to_string(),
        ]),
    ]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        " ".to_string(),
        "  ".to_string(),
        "\n".to_string(),
        "\t".to_string(),
        ", ".to_string(),
        "; ".to_string(),
        "/".to_string(),
    ])
}

/// Document-like text built from fragments and separators.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((fragment_strategy(), separator_strategy()), 0..20).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, sep)| format!("{}{}", fragment, sep))
            .collect()
    })
}

fn plain() -> Normalizer {
    Normalizer::new(&NormalizerConfig {
        lemmatizer: sift::LemmatizerKind::None,
        ..NormalizerConfig::default()
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: normalization accepts any string without panicking.
    #[test]
    fn prop_normalize_is_total(input in any::<String>()) {
        let tokens = Normalizer::default().normalize(&input);
        for token in tokens {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    /// Property: every surviving token has at least one letter or digit.
    #[test]
    fn prop_tokens_have_alphanumerics(input in text_strategy()) {
        for token in plain().normalize(&input) {
            prop_assert!(token.chars().any(char::is_alphanumeric), "token {:?}", token);
        }
    }

    /// Property: output is lowercase.
    #[test]
    fn prop_tokens_are_lowercase(input in text_strategy()) {
        for token in plain().normalize(&input) {
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }

    /// Property: the only ASCII punctuation left is whitelisted or `_`.
    #[test]
    fn prop_only_whitelisted_punctuation(input in text_strategy()) {
        for token in plain().normalize(&input) {
            for c in token.chars() {
                prop_assert!(
                    !c.is_ascii_punctuation() || "+#._".contains(c),
                    "unexpected {:?} in {:?}",
                    c,
                    token
                );
            }
            prop_assert!(!token.ends_with('.'));
        }
    }

    /// Property: no stop-word survives, before or after stemming.
    #[test]
    fn prop_no_stop_words(input in text_strategy()) {
        let stop = StopWords::english();
        for token in Normalizer::default().normalize(&input) {
            prop_assert!(!stop.contains(&token), "stop-word {:?} survived", token);
        }
    }

    /// Property: normalizing normalized text changes nothing.
    #[test]
    fn prop_normalize_is_idempotent(input in text_strategy()) {
        let normalizer = Normalizer::default();
        let once = normalizer.normalize(&input);
        let twice = normalizer.normalize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    /// Property: a custom whitelist keeps its own characters instead.
    #[test]
    fn prop_custom_whitelist(words in prop::collection::vec("[a-z]{2,6}", 2..5)) {
        let hyphenated = words.join("-");
        let normalizer = Normalizer::new(&NormalizerConfig {
            punctuation_whitelist: "-".to_string(),
            stop_words: Some(Vec::new()),
            lemmatizer: sift::LemmatizerKind::None,
            ..NormalizerConfig::default()
        });
        prop_assert_eq!(normalizer.normalize(&hyphenated), vec![hyphenated.clone()]);
    }
}
