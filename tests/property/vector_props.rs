// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vector space invariants.

use proptest::prelude::*;
use sift::{IdfVariant, TfVariant, VectorSpaceBuilder, WeightingParams};

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    let word = prop::sample::select(vec![
        "rust", "python", "go", "java", "kotlin", "sql", "aws", "docker", "linux", "react",
    ])
    .prop_map(str::to_string);
    prop::collection::vec(prop::collection::vec(word, 0..8), 1..6)
}

fn params_strategy() -> impl Strategy<Value = WeightingParams> {
    (
        prop::sample::select(vec![TfVariant::Raw, TfVariant::Sublinear]),
        prop::sample::select(vec![IdfVariant::Smooth, IdfVariant::Plain]),
    )
        .prop_map(|(tf, idf)| WeightingParams {
            tf,
            idf,
            normalize: true,
        })
}

proptest! {
    /// Property: one vector per document, in corpus order.
    #[test]
    fn prop_vector_per_document(corpus in corpus_strategy(), params in params_strategy()) {
        let space = VectorSpaceBuilder::new(params).build(&corpus);
        prop_assert_eq!(space.len(), corpus.len());
        prop_assert_eq!(space.candidates().len(), corpus.len() - 1);
    }

    /// Property: the vocabulary is sorted, unique, and covers every token.
    #[test]
    fn prop_vocabulary_sorted_and_complete(corpus in corpus_strategy()) {
        let space = VectorSpaceBuilder::default().build(&corpus);
        let vocab = space.vocabulary();
        for pair in vocab.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for token in corpus.iter().flatten() {
            prop_assert!(space.term_id(token).is_some(), "{} missing", token);
        }
    }

    /// Property: IDF weights are at least 1, rarer terms weigh no less.
    #[test]
    fn prop_idf_at_least_one(corpus in corpus_strategy(), params in params_strategy()) {
        let space = VectorSpaceBuilder::new(params).build(&corpus);
        for &w in space.idf() {
            prop_assert!(w >= 1.0 - 1e-12);
        }
    }

    /// Property: normalized vectors have unit length, or are zero.
    #[test]
    fn prop_vectors_unit_or_zero(corpus in corpus_strategy(), params in params_strategy()) {
        let space = VectorSpaceBuilder::new(params).build(&corpus);
        for (doc, vector) in corpus.iter().zip(space.vectors()) {
            if doc.is_empty() {
                prop_assert!(vector.is_zero());
            } else {
                prop_assert!((vector.norm() - 1.0).abs() < 1e-9);
            }
        }
    }
}
