// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two layers. Per-document problems (`IngestError`, `SkipReason`) are absorbed
//! by the workflow and surface as diagnostics. Run-level problems
//! (`ScreeningError`, `ConfigError`) propagate to the caller.

use std::io;
use std::path::PathBuf;

/// Failure to discover or extract a source document.
#[derive(thiserror::Error, Debug)]
pub enum IngestError {
    /// Reading the source failed (missing file, permissions, invalid UTF-8).
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The container was read but its text could not be recovered.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    /// No extractor handles this container format.
    #[error("unsupported format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },
    /// Discovery root does not exist.
    #[error("directory not found: {0}")]
    RootNotFound(PathBuf),
    /// Directory traversal failed.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Why a candidate was left out of the corpus.
#[derive(thiserror::Error, Debug)]
pub enum SkipReason {
    #[error("extraction failed: {0}")]
    Extraction(#[from] IngestError),
    #[error("empty text")]
    EmptyText,
    #[error("no tokens left after normalization")]
    NoTokens,
}

/// Run-level failure. Only structural problems end up here.
#[derive(thiserror::Error, Debug)]
pub enum ScreeningError {
    #[error("discovery failed: {0}")]
    Discovery(#[source] IngestError),
}

/// Failure to load a configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
