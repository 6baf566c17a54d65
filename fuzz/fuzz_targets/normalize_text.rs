// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for text normalization invariants.
//!
//! Any byte soup, once decoded, must normalize without panicking into tokens
//! that are non-empty, lowercase-stable, stop-word free, and unchanged by a
//! second pass.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::{Normalizer, StopWords};
use std::sync::OnceLock;

fuzz_target!(|data: &[u8]| {
    static NORMALIZER: OnceLock<Normalizer> = OnceLock::new();
    static STOP_WORDS: OnceLock<StopWords> = OnceLock::new();
    let normalizer = NORMALIZER.get_or_init(Normalizer::default);
    let stop_words = STOP_WORDS.get_or_init(StopWords::english);

    let text = String::from_utf8_lossy(data);
    let tokens = normalizer.normalize(&text);

    for token in &tokens {
        // INVARIANT 1: no empty or whitespace-bearing tokens
        assert!(!token.is_empty());
        assert!(!token.chars().any(char::is_whitespace), "whitespace in {:?}", token);

        // INVARIANT 2: no trailing period, at least one alphanumeric
        assert!(!token.ends_with('.'), "trailing period in {:?}", token);
        assert!(token.chars().any(char::is_alphanumeric), "no alphanumerics in {:?}", token);

        // INVARIANT 3: stop-words never survive
        assert!(!stop_words.contains(token), "stop-word {:?} survived", token);
    }

    // INVARIANT 4: idempotence
    let again = normalizer.normalize(&tokens.join(" "));
    assert_eq!(tokens, again, "second pass changed the output for {:?}", text);
});
