// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! File extraction: plain text, PDF text layers, and Word documents.

use std::fmt::Display;
use std::fs;
use std::io;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use super::{Extract, Source};
use crate::error::IngestError;

/// Extensions read as UTF-8 text.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Reads candidate files by extension and normalizes the text to NFC.
///
/// - `txt`, `text`, `md`: UTF-8. Invalid UTF-8 is an `Io` error rather than
///   lossy replacement, so encoding damage never reaches the normalizer.
/// - `pdf` (feature `pdf`): the text layer, page by page. Scanned images
///   without a text layer come back empty and are skipped downstream.
/// - `docx` (feature `docx`): paragraph text from `word/document.xml`.
///
/// Any other extension is an `UnsupportedFormat` error for that document.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExtractor;

impl Extract for FileExtractor {
    fn extract(&self, source: &Source) -> Result<String, IngestError> {
        let extension = source.extension().unwrap_or_default();
        let text = match extension.as_str() {
            ext if TEXT_EXTENSIONS.contains(&ext) => {
                fs::read_to_string(&source.path).map_err(|err| io_error(source, err))?
            }
            #[cfg(feature = "pdf")]
            "pdf" => pdf_text(source)?,
            #[cfg(feature = "docx")]
            "docx" => docx_text(source)?,
            _ => {
                return Err(IngestError::UnsupportedFormat {
                    path: source.path.clone(),
                    extension,
                })
            }
        };

        Ok(nfc(&text))
    }
}

fn io_error(source: &Source, err: io::Error) -> IngestError {
    IngestError::Io {
        path: source.path.clone(),
        source: err,
    }
}

fn parse_error(source: &Source, err: impl Display) -> IngestError {
    IngestError::Parse {
        path: source.path.clone(),
        message: err.to_string(),
    }
}

#[cfg(feature = "pdf")]
fn pdf_text(source: &Source) -> Result<String, IngestError> {
    let bytes = fs::read(&source.path).map_err(|err| io_error(source, err))?;
    // pdf-extract panics on some malformed files instead of returning an error.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(parse_error(source, err)),
        Err(_) => Err(parse_error(source, "malformed PDF")),
    }
}

#[cfg(feature = "docx")]
fn docx_text(source: &Source) -> Result<String, IngestError> {
    use std::io::Read;

    let file = fs::File::open(&source.path).map_err(|err| io_error(source, err))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|err| parse_error(source, err))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|err| parse_error(source, err))?
        .read_to_string(&mut xml)
        .map_err(|err| io_error(source, err))?;

    document_text(&xml).map_err(|err| parse_error(source, err))
}

/// Visible text of a WordprocessingML body: `w:t` runs, one line per paragraph.
#[cfg(feature = "docx")]
fn document_text(xml: &str) -> Result<String, quick_xml::Error> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_run_text => text.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(feature = "unicode-normalization")]
fn nfc(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn nfc(text: &str) -> String {
    text.to_string()
}
