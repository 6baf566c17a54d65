// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Base-form reduction as a pluggable capability.
//!
//! The normalizer only ever calls [`Lemmatize::lemmatize`] on purely alphabetic
//! tokens. Implementations must be pure: the same token always maps to the
//! same lemma, and `lemmatize(lemmatize(t)) == lemmatize(t)`.

#[cfg(feature = "stemming")]
use rust_stemmers::{Algorithm, Stemmer};

/// Reduce a token to its canonical base form.
pub trait Lemmatize: Send + Sync {
    fn lemmatize(&self, token: &str) -> String;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// True when no linguistic model backs this lemmatizer.
    fn is_degraded(&self) -> bool {
        false
    }
}

/// Fallback used when no model is available: every token is its own lemma.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatize for IdentityLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        token.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }

    fn is_degraded(&self) -> bool {
        true
    }
}

/// Upper bound on re-stemming rounds. Snowball converges in one or two.
#[cfg(feature = "stemming")]
const MAX_STEM_ROUNDS: usize = 8;

/// English Snowball stemmer.
///
/// Snowball is not idempotent on its own (`agreed → agre → agr`), so the
/// stemmer is re-applied until the form stops changing.
#[cfg(feature = "stemming")]
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

#[cfg(feature = "stemming")]
impl SnowballLemmatizer {
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

#[cfg(feature = "stemming")]
impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(feature = "stemming")]
impl Lemmatize for SnowballLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        let mut current = token.to_string();
        for _ in 0..MAX_STEM_ROUNDS {
            let next = self.stemmer.stem(&current);
            if next == current.as_str() || next.is_empty() {
                break;
            }
            current = next.into_owned();
        }
        current
    }

    fn name(&self) -> &'static str {
        "snowball-english"
    }
}
