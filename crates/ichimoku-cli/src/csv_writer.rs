//! Output module for writing Ichimoku results.
//!
//! Only bars that produced a record are written. Rows carry the date of the
//! input row they were computed on, so output stays in the input's order.
//!
//! # Output Format
//!
//! CSV: `date,conversion,base,span_a,span_b`, with the date column present
//! only when the input had one. Absent spans and NaN values are empty cells.
//!
//! JSON: an array of objects with the same fields; absent spans are `null`.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use ichimoku::{Ichimoku, IchimokuRecord};
use serde::Serialize;

use crate::error::{CliError, FileAccess, Result};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::FileError` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::FileError {
                    source: e,
                    path: path.clone(),
                    access: FileAccess::Write,
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudRow {
    /// Date of the input row the record was computed on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Conversion line.
    pub conversion: f64,
    /// Base line.
    pub base: f64,
    /// Leading span A.
    pub span_a: Option<f64>,
    /// Leading span B.
    pub span_b: Option<f64>,
}

/// Pairs records with the dates of the rows that produced them.
///
/// Oldest-first records start at the row after the lookback; newest-first
/// records start at row 0.
#[must_use]
pub fn cloud_rows(
    records: &[IchimokuRecord<f64>],
    dates: Option<&[String]>,
    config: &Ichimoku,
) -> Vec<CloudRow> {
    let offset = if config.get_input_order().is_reversed() {
        0
    } else {
        config.lookback()
    };

    records
        .iter()
        .enumerate()
        .map(|(i, record)| CloudRow {
            date: dates.and_then(|d| d.get(offset + i)).cloned(),
            conversion: record.conversion,
            base: record.base,
            span_a: record.span_a,
            span_b: record.span_b,
        })
        .collect()
}

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => v.to_string(),
        _ => String::new(),
    }
}

/// Write rows as CSV.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened or written.
pub fn write_csv(rows: &[CloudRow], with_dates: bool, dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;
    write_csv_to(&mut writer, rows, with_dates)?;
    writer.flush()?;
    Ok(())
}

/// Write rows as CSV to any writer.
///
/// # Errors
///
/// Returns `CliError::Io` if writing fails.
pub fn write_csv_to<W: Write>(writer: &mut W, rows: &[CloudRow], with_dates: bool) -> Result<()> {
    if with_dates {
        write!(writer, "date,")?;
    }
    writeln!(writer, "conversion,base,span_a,span_b")?;

    for row in rows {
        if with_dates {
            write!(writer, "{},", row.date.as_deref().unwrap_or(""))?;
        }
        writeln!(
            writer,
            "{},{},{},{}",
            cell(Some(row.conversion)),
            cell(Some(row.base)),
            cell(row.span_a),
            cell(row.span_b)
        )?;
    }
    Ok(())
}

/// Write rows as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened or written.
pub fn write_json(rows: &[CloudRow], dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
