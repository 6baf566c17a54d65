// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::collections::HashMap;
use std::path::Path;

use crate::config::{LemmatizerKind, NormalizerConfig, ScreeningConfig};
use crate::error::IngestError;
use crate::ingest::{Discover, Extract, Source};
use crate::types::{Candidate, CandidateMeta, RawDocument};
use crate::workflow::Screener;

/// Create a raw document.
pub fn make_raw_doc(identifier: &str, text: &str) -> RawDocument {
    RawDocument::new(identifier, text)
}

/// Create a candidate with metadata that only carries its identifier.
pub fn make_candidate(identifier: &str) -> Candidate<CandidateMeta> {
    Candidate::new(
        identifier,
        CandidateMeta {
            identifier: identifier.to_string(),
            path: None,
            preview: String::new(),
            normalized_text: String::new(),
        },
    )
}

/// Config with the identity lemmatizer, so expected tokens are predictable.
pub fn plain_config() -> ScreeningConfig {
    ScreeningConfig {
        normalizer: NormalizerConfig {
            lemmatizer: LemmatizerKind::None,
            ..NormalizerConfig::default()
        },
        ..ScreeningConfig::default()
    }
}

/// Screener over [`plain_config`].
pub fn plain_screener() -> Screener {
    Screener::new(plain_config())
}

/// In-memory corpus that serves as both discovery and extraction.
///
/// Sources come back in insertion order. Entries added with
/// [`MemoryCorpus::failing`] fail extraction with an unsupported-format error.
#[derive(Debug, Default)]
pub struct MemoryCorpus {
    order: Vec<String>,
    texts: HashMap<String, Option<String>>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, identifier: &str, text: &str) -> Self {
        self.insert(identifier, Some(text.to_string()));
        self
    }

    pub fn failing(mut self, identifier: &str) -> Self {
        self.insert(identifier, None);
        self
    }

    fn insert(&mut self, identifier: &str, text: Option<String>) {
        if self.texts.insert(identifier.to_string(), text).is_none() {
            self.order.push(identifier.to_string());
        }
    }
}

impl Discover for MemoryCorpus {
    fn discover(&self, root: &Path) -> Result<Vec<Source>, IngestError> {
        Ok(self
            .order
            .iter()
            .map(|id| Source::new(id.as_str(), root.join(id)))
            .collect())
    }
}

impl Extract for MemoryCorpus {
    fn extract(&self, source: &Source) -> Result<String, IngestError> {
        match self.texts.get(&source.identifier) {
            Some(Some(text)) => Ok(text.clone()),
            _ => Err(IngestError::UnsupportedFormat {
                path: source.path.clone(),
                extension: source.extension().unwrap_or_default(),
            }),
        }
    }
}

/// A one-page PDF whose text layer is `text`, set in Helvetica.
///
/// Object offsets in the cross-reference table are computed, so the file
/// parses without repair.
pub fn pdf_bytes(text: &str) -> Vec<u8> {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)");
    let content = format!("BT /F1 12 Tf 72 720 Td ({escaped}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref
    ));
    pdf.into_bytes()
}

/// A minimal `.docx` container with one paragraph per entry.
#[cfg(feature = "docx")]
pub fn docx_bytes(paragraphs: &[&str]) -> zip::result::ZipResult<Vec<u8>> {
    use std::io::{Cursor, Write};

    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", xml_escape(p)))
        .collect();
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())?;
    zip.write_all(document.as_bytes())?;
    Ok(zip.finish()?.into_inner())
}

#[cfg(feature = "docx")]
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
