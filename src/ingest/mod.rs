// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where candidate text comes from.
//!
//! The pipeline only needs two capabilities: find sources under a root
//! ([`Discover`]) and turn one source into text ([`Extract`]). How either is
//! done is up to the implementation. The built-in ones walk a directory tree
//! and read plain text, PDF (`pdf` feature) and Word `.docx` (`docx` feature).
//! Anything else needs an extractor supplied by the caller and otherwise shows
//! up as a skipped document.

mod discovery;
mod extract;

pub use discovery::{DirectoryDiscovery, DEFAULT_EXTENSIONS};
pub use extract::{FileExtractor, TEXT_EXTENSIONS};

use std::path::{Path, PathBuf};

use crate::error::IngestError;

/// One discovered candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
    /// Stable name used in results, e.g. the file name.
    pub identifier: String,
    pub path: PathBuf,
}

impl Source {
    pub fn new(identifier: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            path: path.into(),
        }
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
    }
}

/// Find candidate sources under a root.
pub trait Discover {
    fn discover(&self, root: &Path) -> Result<Vec<Source>, IngestError>;
}

/// Turn a source into UTF-8 text.
///
/// Implementations may return an empty string for a document with no text;
/// the workflow reports that as a skip, not a failure.
pub trait Extract: Sync {
    fn extract(&self, source: &Source) -> Result<String, IngestError>;
}

impl<F> Extract for F
where
    F: Fn(&Source) -> Result<String, IngestError> + Sync,
{
    fn extract(&self, source: &Source) -> Result<String, IngestError> {
        self(source)
    }
}
