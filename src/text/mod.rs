// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: raw extracted text in, comparable tokens out.
//!
//! # Algorithm
//!
//! 1. Lowercase
//! 2. Drop URL-like runs (`http://…`, `https://…`, `ftp://…`, `www.…`)
//! 3. Collapse whitespace
//! 4. Replace punctuation with spaces, except the whitelist (`+#.` by default)
//! 5. Cap the text at `max_chars` characters (always the same prefix)
//! 6. Split on whitespace, strip sentence-final dots (`node.js.` → `node.js`)
//! 7. Drop stop-words, tokens without a letter or digit, and leftover links
//! 8. Lemmatize purely alphabetic tokens; `c++`, `c#`, `node.js`, `python3`
//!    are kept verbatim
//!
//! Every step is total. `normalize` never panics and `normalize("")` is empty.
//! Re-normalizing the joined output yields the same tokens.
//!
//! Text past `max_chars` does not contribute to scoring. That bounds the cost
//! of pathological inputs; real resumes and job descriptions are far shorter.

mod lemma;
mod stopwords;

pub use lemma::{IdentityLemmatizer, Lemmatize};
#[cfg(feature = "stemming")]
pub use lemma::SnowballLemmatizer;
pub use stopwords::StopWords;

use regex::Regex;
use std::sync::LazyLock;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::char::is_combining_mark;

use crate::config::{LemmatizerKind, NormalizerConfig};
use crate::types::{NormalizedDocument, RawDocument};

/// Web-link shaped runs, matched after lowercasing.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:https?://|ftp://|www\.)\S+").expect("valid URL pattern literal")
});

/// Turns raw text into lemmatized, stop-word free tokens.
pub struct Normalizer {
    whitelist: Vec<char>,
    stop_words: StopWords,
    max_chars: usize,
    lemmatizer: Box<dyn Lemmatize>,
}

impl Normalizer {
    /// Build a normalizer with the lemmatizer named in the config.
    pub fn new(config: &NormalizerConfig) -> Self {
        Self::with_lemmatizer(config, lemmatizer_for(config.lemmatizer))
    }

    /// Build a normalizer around a caller-supplied lemmatizer.
    pub fn with_lemmatizer(config: &NormalizerConfig, lemmatizer: Box<dyn Lemmatize>) -> Self {
        if lemmatizer.is_degraded() {
            tracing::warn!(
                lemmatizer = lemmatizer.name(),
                "no linguistic model available; tokens keep their surface form"
            );
        } else {
            tracing::debug!(lemmatizer = lemmatizer.name(), "normalizer ready");
        }

        Self {
            whitelist: config.punctuation_whitelist.chars().collect(),
            stop_words: config.stop_word_set(),
            max_chars: config.max_chars,
            lemmatizer,
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// True when running with the identity fallback.
    pub fn is_degraded(&self) -> bool {
        self.lemmatizer.is_degraded()
    }

    /// Steps 1-4: lowercase, strip links, collapse whitespace, drop punctuation.
    pub fn clean(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let without_urls = URL_PATTERN.replace_all(&lowered, " ");
        let collapsed = collapse_whitespace(&without_urls);
        let cleaned: String = collapsed
            .chars()
            .map(|c| if self.keeps(c) { c } else { ' ' })
            .collect();
        cleaned.trim().to_string()
    }

    /// Full pipeline. Output order matches input order.
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        let cleaned = self.clean(raw);
        let capped = truncate_chars(&cleaned, self.max_chars);
        if capped.len() < cleaned.len() {
            tracing::debug!(
                max_chars = self.max_chars,
                dropped_bytes = cleaned.len() - capped.len(),
                "input truncated before tokenization"
            );
        }

        capped
            .split_whitespace()
            .filter_map(|token| self.finish_token(token))
            .collect()
    }

    /// Normalize a whole document, keeping its identifier.
    pub fn normalize_document(&self, document: &RawDocument) -> NormalizedDocument {
        NormalizedDocument {
            identifier: document.identifier.clone(),
            tokens: self.normalize(&document.text),
        }
    }

    /// Steps 6-8 for a single whitespace-delimited token.
    fn finish_token(&self, token: &str) -> Option<String> {
        let token = token.trim_end_matches('.');
        if token.is_empty()
            || !token.chars().any(char::is_alphanumeric)
            || self.stop_words.contains(token)
            || is_link_fragment(token)
        {
            return None;
        }

        if !token.chars().all(char::is_alphabetic) {
            return Some(token.to_string());
        }

        let lemma = self.lemmatizer.lemmatize(token);
        if lemma.is_empty() || self.stop_words.contains(&lemma) {
            None
        } else {
            Some(lemma)
        }
    }

    #[inline]
    fn keeps(&self, c: char) -> bool {
        c.is_alphanumeric()
            || c == '_'
            || c.is_whitespace()
            || self.whitelist.contains(&c)
            || is_mark(c)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("whitelist", &self.whitelist)
            .field("stop_words", &self.stop_words.len())
            .field("max_chars", &self.max_chars)
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

/// Pick the lemmatizer for a config value, falling back to identity.
fn lemmatizer_for(kind: LemmatizerKind) -> Box<dyn Lemmatize> {
    match kind {
        #[cfg(feature = "stemming")]
        LemmatizerKind::Snowball => Box::new(SnowballLemmatizer::english()),
        #[cfg(not(feature = "stemming"))]
        LemmatizerKind::Snowball => Box::new(IdentityLemmatizer),
        LemmatizerKind::None => Box::new(IdentityLemmatizer),
    }
}

/// A token that still starts like a link once surrounding punctuation is gone.
fn is_link_fragment(token: &str) -> bool {
    URL_PATTERN.find(token).is_some_and(|m| m.start() == 0)
}

/// Collapse every whitespace run into a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The first `max_chars` characters of `value`, cut on a char boundary.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &value[..byte_offset],
        None => value,
    }
}

#[cfg(feature = "unicode-normalization")]
#[inline]
fn is_mark(c: char) -> bool {
    is_combining_mark(c)
}

#[cfg(not(feature = "unicode-normalization"))]
#[inline]
fn is_mark(_c: char) -> bool {
    false
}
