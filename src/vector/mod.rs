// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vector space over one screening run.
//!
//! The corpus is the query followed by the candidates. A vocabulary is built
//! from that corpus alone, every run, and thrown away with the [`VectorSpace`]
//! afterwards. Nothing is cached between runs.
//!
//! # Weighting
//!
//! ```text
//! tf(t, d)  = count(t, d)                      TfVariant::Raw
//!           = 1 + ln(count(t, d))              TfVariant::Sublinear
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1    IdfVariant::Smooth
//!           = ln(n / df(t)) + 1                IdfVariant::Plain
//! w(t, d)   = tf(t, d) * idf(t), then L2-normalized per document
//! ```
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSITIONAL**: `vectors[i]` belongs to `corpus[i]`; `vectors[0]` is the query
//! 2. **ABSENT_IS_ZERO**: a term no document contains has no vocabulary entry
//! 3. **RARE_OUTWEIGHS_COMMON**: for `n >= 2`, a term in one document outweighs a
//!    term present in every document at the same raw frequency
//! 4. **EMPTY_VOCAB**: an empty vocabulary yields all-zero vectors, not an error

mod sparse;

pub use sparse::{SparseVector, TermId};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::text::StopWords;

/// Term-frequency transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TfVariant {
    /// `tf = count`
    #[default]
    Raw,
    /// `tf = 1 + ln(count)`
    Sublinear,
}

/// Inverse-document-frequency transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdfVariant {
    /// `idf = ln((1 + n) / (1 + df)) + 1`, as if one extra document held every term.
    #[default]
    Smooth,
    /// `idf = ln(n / df) + 1`
    Plain,
}

/// How term weights are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingParams {
    pub tf: TfVariant,
    pub idf: IdfVariant,
    /// L2-normalize each document vector.
    pub normalize: bool,
}

impl Default for WeightingParams {
    fn default() -> Self {
        Self {
            tf: TfVariant::Raw,
            idf: IdfVariant::Smooth,
            normalize: true,
        }
    }
}

fn compute_tf(count: u32, variant: TfVariant) -> f64 {
    if count == 0 {
        return 0.0;
    }
    match variant {
        TfVariant::Raw => f64::from(count),
        TfVariant::Sublinear => 1.0 + f64::from(count).ln(),
    }
}

fn compute_idf(num_docs: usize, doc_frequency: u32, variant: IdfVariant) -> f64 {
    if doc_frequency == 0 {
        return 0.0;
    }
    let n = num_docs as f64;
    let df = f64::from(doc_frequency);
    match variant {
        IdfVariant::Smooth => ((1.0 + n) / (1.0 + df)).ln() + 1.0,
        IdfVariant::Plain => (n / df).ln() + 1.0,
    }
}

/// Builds a [`VectorSpace`] from tokenized documents.
#[derive(Debug, Clone, Default)]
pub struct VectorSpaceBuilder {
    params: WeightingParams,
    stop_words: Option<StopWords>,
}

impl VectorSpaceBuilder {
    pub fn new(params: WeightingParams) -> Self {
        Self {
            params,
            stop_words: None,
        }
    }

    /// Drop these words while building the vocabulary.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Vectorize `corpus`. The first entry is the query, the rest are candidates.
    pub fn build<S: AsRef<str>>(&self, corpus: &[Vec<S>]) -> VectorSpace {
        let counts: Vec<HashMap<&str, u32>> = corpus
            .iter()
            .map(|tokens| self.count_terms(tokens))
            .collect();

        let terms: BTreeSet<&str> = counts
            .iter()
            .flat_map(|doc| doc.keys().copied())
            .collect();

        if terms.is_empty() {
            tracing::warn!(
                documents = corpus.len(),
                "empty vocabulary; every document vector is zero"
            );
            return VectorSpace {
                vocabulary: Vec::new(),
                idf: Vec::new(),
                vectors: vec![SparseVector::zero(); corpus.len()],
            };
        }

        let vocabulary: Vec<String> = terms.iter().map(|t| (*t).to_string()).collect();
        let term_ids: HashMap<&str, TermId> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (*t, TermId(i as u32)))
            .collect();

        let mut doc_frequency = vec![0u32; vocabulary.len()];
        for doc in &counts {
            for term in doc.keys() {
                doc_frequency[term_ids[term].as_usize()] += 1;
            }
        }

        let idf: Vec<f64> = doc_frequency
            .iter()
            .map(|&df| compute_idf(corpus.len(), df, self.params.idf))
            .collect();

        let vectors = counts
            .iter()
            .map(|doc| {
                let pairs = doc
                    .iter()
                    .map(|(term, &count)| {
                        let id = term_ids[term];
                        (id, compute_tf(count, self.params.tf) * idf[id.as_usize()])
                    })
                    .collect();
                let vector = SparseVector::from_pairs(pairs);
                if self.params.normalize {
                    vector.l2_normalized()
                } else {
                    vector
                }
            })
            .collect();

        tracing::debug!(
            documents = corpus.len(),
            terms = vocabulary.len(),
            "vector space built"
        );

        VectorSpace {
            vocabulary,
            idf,
            vectors,
        }
    }

    fn count_terms<'a, S: AsRef<str>>(&self, tokens: &'a [S]) -> HashMap<&'a str, u32> {
        let mut counts = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty()
                || self
                    .stop_words
                    .as_ref()
                    .is_some_and(|stop| stop.contains(token))
            {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }
}

/// Vocabulary, IDF table and one vector per corpus document.
#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl VectorSpace {
    /// Terms sorted lexicographically; a term's position is its [`TermId`].
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|i| TermId(i as u32))
    }

    /// All vectors, query first.
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn query(&self) -> Option<&SparseVector> {
        self.vectors.first()
    }

    pub fn candidates(&self) -> &[SparseVector] {
        self.vectors.get(1..).unwrap_or(&[])
    }

    /// Number of documents (query included).
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// True when no document carries any weight.
    pub fn has_no_signal(&self) -> bool {
        self.vectors.iter().all(SparseVector::is_zero)
    }
}
