// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recursive directory discovery.

use std::path::Path;
use walkdir::WalkDir;

use super::{Discover, Source};
use crate::error::IngestError;

/// Extensions picked up when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// Walks a directory tree and returns every file with a matching extension.
///
/// Entries are visited in file-name order at each level, so the same tree
/// always yields the same source order. Unreadable entries below the root are
/// logged and skipped.
#[derive(Debug, Clone)]
pub struct DirectoryDiscovery {
    extensions: Vec<String>,
    follow_links: bool,
}

impl DirectoryDiscovery {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
            follow_links: false,
        }
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|wanted| *wanted == ext)
            })
    }
}

impl Default for DirectoryDiscovery {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl Discover for DirectoryDiscovery {
    fn discover(&self, root: &Path) -> Result<Vec<Source>, IngestError> {
        if !root.is_dir() {
            return Err(IngestError::RootNotFound(root.to_path_buf()));
        }

        let mut sources = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(IngestError::Walk(err)),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.matches(entry.path()) {
                continue;
            }
            let identifier = entry.file_name().to_string_lossy().into_owned();
            sources.push(Source::new(identifier, entry.path()));
        }

        tracing::info!(root = %root.display(), found = sources.len(), "discovery finished");
        Ok(sources)
    }
}
