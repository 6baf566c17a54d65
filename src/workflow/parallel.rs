// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document ingestion, fanned out across threads.
//!
//! Extracting and normalizing one candidate touches nothing shared, so with the
//! `parallel` feature Rayon handles every document independently. `par_iter`
//! over a slice is indexed, and `collect` puts results back in input order:
//! the vector space sees candidates in discovery order no matter which thread
//! finished first.

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use std::path::PathBuf;

use crate::error::SkipReason;
use crate::text::Normalizer;
use crate::types::{Candidate, CandidateMeta, Diagnostic, NormalizedDocument};

/// A candidate that made it into the corpus.
#[derive(Debug)]
pub(crate) struct Ingested {
    pub candidate: Candidate<CandidateMeta>,
    pub document: NormalizedDocument,
}

/// Run `ingest` over every item, returning results in input order.
#[cfg(feature = "parallel")]
pub(crate) fn ingest_all<T, F>(
    items: &[T],
    ingest: F,
    progress: Option<&ProgressBar>,
) -> Vec<Result<Ingested, Diagnostic>>
where
    T: Sync,
    F: Fn(&T) -> Result<Ingested, Diagnostic> + Sync + Send,
{
    let counter = AtomicUsize::new(0);
    let total = items.len();
    if let Some(pb) = progress {
        pb.set_length(total as u64);
        pb.set_position(0);
    }

    let results: Vec<_> = items
        .par_iter()
        .map(|item| {
            let result = ingest(item);

            if let Some(pb) = progress {
                let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
                pb.set_position(count as u64);
                if count % 10 == 0 || count == total {
                    pb.set_message(format!("{}/{}", count, total));
                }
            }

            result
        })
        .collect();

    if let Some(pb) = progress {
        let kept = results.iter().filter(|r| r.is_ok()).count();
        pb.finish_with_message(format!("{} of {} usable", kept, total));
    }

    results
}

/// Run `ingest` over every item, returning results in input order.
/// Sequential fallback (no progress reporting).
#[cfg(not(feature = "parallel"))]
pub(crate) fn ingest_all<T, F>(items: &[T], ingest: F) -> Vec<Result<Ingested, Diagnostic>>
where
    F: Fn(&T) -> Result<Ingested, Diagnostic>,
{
    items.iter().map(ingest).collect()
}

/// Normalize one document's text, refusing blank input and empty output.
pub(crate) fn normalize_checked(
    normalizer: &Normalizer,
    identifier: &str,
    text: &str,
) -> Result<NormalizedDocument, SkipReason> {
    if text.trim().is_empty() {
        return Err(SkipReason::EmptyText);
    }

    let tokens = normalizer.normalize(text);
    if tokens.is_empty() {
        return Err(SkipReason::NoTokens);
    }

    Ok(NormalizedDocument {
        identifier: identifier.to_string(),
        tokens,
    })
}

/// Normalize extracted text and wrap it as a candidate, or say why not.
pub(crate) fn ingest_text(
    normalizer: &Normalizer,
    identifier: &str,
    path: Option<PathBuf>,
    text: &str,
    preview_chars: usize,
) -> Result<Ingested, Diagnostic> {
    let document = normalize_checked(normalizer, identifier, text).map_err(|reason| Diagnostic {
        identifier: identifier.to_string(),
        reason,
    })?;

    let metadata = CandidateMeta {
        identifier: identifier.to_string(),
        path,
        preview: preview(text, preview_chars),
        normalized_text: document.joined(),
    };

    Ok(Ingested {
        candidate: Candidate::new(identifier, metadata),
        document,
    })
}

/// First `max_chars` characters with line breaks flattened to spaces.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
