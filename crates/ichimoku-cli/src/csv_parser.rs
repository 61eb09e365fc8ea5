//! CSV parsing module for reading high/low price data.
//!
//! # Column Detection
//!
//! Columns are matched by header name, case-insensitive and trimmed. The
//! high and low columns default to `high` and `low`. The first column named
//! `date`, `time`, `datetime`, `timestamp` or `dt` is kept as row labels for
//! output alignment and never parsed as a number.
//!
//! Other columns are carried along unparsed, so files with symbols, close
//! prices or volume work without changes.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{CliError, FileAccess, Result};

/// High/low columns ready for the calculator.
#[derive(Debug, Clone)]
pub struct HighLowData {
    /// Date/time labels (if present in CSV).
    pub dates: Option<Vec<String>>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
}

/// Parsed CSV data with column mapping.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column headers from the CSV.
    pub headers: Vec<String>,
    /// Mapping of normalized column name to column index.
    pub column_map: HashMap<String, usize>,
    /// Date column values (if found).
    pub dates: Option<Vec<String>>,
    rows: Vec<StringRecord>,
}

impl ParsedCsv {
    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Parses the column named `name` as numbers.
    ///
    /// Empty cells become NaN.
    ///
    /// # Errors
    ///
    /// Returns `CliError::MissingColumn` if no header matches `name`, or
    /// `CliError::CsvParseError` with the offending line if a cell is not a
    /// number.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = *self
            .column_map
            .get(&normalize_header(name))
            .ok_or_else(|| CliError::MissingColumn {
                column: name.to_string(),
                available: self.headers.clone(),
            })?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, record)| {
                // +2 for header and 0-indexing
                parse_value(record.get(idx).unwrap_or(""), row + 2)
            })
            .collect()
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents a date column.
fn is_date_column(header: &str) -> bool {
    matches!(
        normalize_header(header).as_str(),
        "date" | "time" | "datetime" | "timestamp" | "dt"
    )
}

/// Parse a string value to f64, treating empty as NaN.
fn parse_value(value: &str, line: usize) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed.parse::<f64>().map_err(|_| CliError::CsvParseError {
            message: format!("cannot parse '{trimmed}' as number"),
            line: Some(line),
        })
    }
}

/// Parse a CSV file into a structured format.
///
/// # Errors
///
/// Returns `CliError::FileError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedCsv> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::FileError {
        source: e,
        path: path.display().to_string(),
        access: FileAccess::Read,
    })?;
    parse_csv_from_reader(BufReader::new(file))
}

/// Parse CSV data from a reader.
///
/// # Errors
///
/// Returns `CliError::CsvParseError` if the CSV is malformed or has no headers.
pub fn parse_csv_from_reader<R: Read>(reader: R) -> Result<ParsedCsv> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut column_map = HashMap::new();
    let mut date_column_idx: Option<usize> = None;
    for (idx, header) in headers.iter().enumerate() {
        if is_date_column(header) {
            date_column_idx.get_or_insert(idx);
        } else {
            column_map.entry(normalize_header(header)).or_insert(idx);
        }
    }

    let rows = csv_reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let dates = date_column_idx.map(|idx| {
        rows.iter()
            .map(|record| record.get(idx).unwrap_or("").to_string())
            .collect()
    });

    Ok(ParsedCsv {
        headers,
        column_map,
        dates,
        rows,
    })
}

/// Extracts the high and low columns.
///
/// # Errors
///
/// Returns `CliError::MissingColumn` or `CliError::CsvParseError` as
/// described on [`ParsedCsv::numeric_column`].
pub fn high_low(parsed: &ParsedCsv, high_column: &str, low_column: &str) -> Result<HighLowData> {
    Ok(HighLowData {
        dates: parsed.dates.clone(),
        high: parsed.numeric_column(high_column)?,
        low: parsed.numeric_column(low_column)?,
    })
}

/// Parse a CSV file straight into high/low data.
///
/// # Errors
///
/// Returns any error from [`parse_csv`] or [`high_low`].
pub fn parse_high_low<P: AsRef<Path>>(
    path: P,
    high_column: &str,
    low_column: &str,
) -> Result<HighLowData> {
    let parsed = parse_csv(path)?;
    high_low(&parsed, high_column, low_column)
}
