// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tabular export of ranked results.
//!
//! One row per ranked candidate with columns `rank`, `score`, `identifier`,
//! `preview`. Rank is 1-based and scores are fixed at four decimals, so the
//! CSV and JSON forms carry exactly what the terminal table shows.

use serde::Serialize;
use std::io::{self, Write};

use crate::types::{CandidateMeta, RankedResult};

/// One exported result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub rank: usize,
    pub score: String,
    pub identifier: String,
    pub preview: String,
}

/// Rows in rank order.
pub fn export_rows(results: &RankedResult<CandidateMeta>) -> Vec<ExportRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, entry)| ExportRow {
            rank: i + 1,
            score: format!("{:.4}", entry.score()),
            identifier: entry.identifier().to_string(),
            preview: entry.metadata().preview.clone(),
        })
        .collect()
}

/// Write rows as CSV with a header line.
///
/// Fields containing a comma, quote, or line break are quoted, with inner
/// quotes doubled.
pub fn write_csv<W: Write>(rows: &[ExportRow], mut writer: W) -> io::Result<()> {
    writeln!(writer, "rank,score,identifier,preview")?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},{}",
            row.rank,
            row.score,
            csv_field(&row.identifier),
            csv_field(&row.preview)
        )?;
    }
    writer.flush()
}

/// Write rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(rows: &[ExportRow], mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    writer.flush()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
