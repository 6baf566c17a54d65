// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Screening configuration as plain data.
//!
//! The library never reads the environment or disk on its own; callers build a
//! [`ScreeningConfig`] (usually `Default`) or load one explicitly with
//! [`ScreeningConfig::from_json_file`]. Every field has a default, so a config
//! file only needs the keys it overrides:
//!
//! ```json
//! {
//!   "normalizer": { "punctuationWhitelist": "+#.", "lemmatizer": "none" },
//!   "weighting": { "tf": "sublinear" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::text::StopWords;
use crate::vector::WeightingParams;

/// Characters kept by default so `c++`, `c#` and `node.js` survive cleaning.
pub const DEFAULT_PUNCTUATION_WHITELIST: &str = "+#.";

/// Normalization input cap, in characters.
pub const DEFAULT_MAX_CHARS: usize = 1_000_000;

/// Raw-text preview length carried in candidate metadata.
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Which lemmatizer the normalizer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerKind {
    /// English Snowball stemmer (falls back to identity without the `stemming` feature).
    #[default]
    Snowball,
    /// Keep surface forms.
    None,
}

/// Text normalizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizerConfig {
    /// Punctuation characters that are not replaced by spaces.
    pub punctuation_whitelist: String,
    /// Replacement stop-word list. `None` means the built-in English list.
    pub stop_words: Option<Vec<String>>,
    /// Words added on top of `stop_words`.
    pub extra_stop_words: Vec<String>,
    /// Input beyond this many characters is ignored.
    pub max_chars: usize,
    pub lemmatizer: LemmatizerKind,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            punctuation_whitelist: DEFAULT_PUNCTUATION_WHITELIST.to_string(),
            stop_words: None,
            extra_stop_words: Vec::new(),
            max_chars: DEFAULT_MAX_CHARS,
            lemmatizer: LemmatizerKind::default(),
        }
    }
}

impl NormalizerConfig {
    /// Resolve the configured stop-word set.
    pub fn stop_word_set(&self) -> StopWords {
        let mut set = match &self.stop_words {
            Some(words) => StopWords::from_words(words),
            None => StopWords::english(),
        };
        set.extend(&self.extra_stop_words);
        set
    }
}

/// Everything one screening run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreeningConfig {
    pub normalizer: NormalizerConfig,
    pub weighting: WeightingParams,
    /// Apply the stop-word set again when building the vocabulary.
    pub vector_stop_words: bool,
    pub preview_chars: usize,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            weighting: WeightingParams::default(),
            vector_stop_words: true,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl ScreeningConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
