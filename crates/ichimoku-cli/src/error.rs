//! CLI error types for handling file I/O, parsing, and indicator errors.
//!
//! Error messages say what went wrong and, where possible, how to fix it.

use std::fmt;
use std::io;

use thiserror::Error;

/// Whether a file was being read or written when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    /// Opening an input file.
    Read,
    /// Creating an output file.
    Write,
}

impl fmt::Display for FileAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// CLI error type encompassing all possible error conditions.
#[derive(Debug, Error)]
pub enum CliError {
    /// A named file could not be opened or created.
    #[error("cannot {access} file '{path}': {source}. Check that the path exists and you have {access} permissions.")]
    FileError {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
        /// Path that caused the error.
        path: String,
        /// What was being done with the file.
        access: FileAccess,
    },

    /// Reading or writing a stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV input is malformed.
    #[error(
        "CSV parse error{}: {message}. Ensure your CSV has valid format with numeric high and low columns.",
        .line.map(|l| format!(" on line {l}")).unwrap_or_default()
    )]
    CsvParseError {
        /// Description of the parse error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<usize>,
    },

    /// A required price column is absent.
    #[error("no '{column}' column found (available: {})", .available.join(", "))]
    MissingColumn {
        /// Column that was looked up.
        column: String,
        /// Headers present in the file.
        available: Vec<String>,
    },

    /// The calculator rejected its input or settings.
    #[error("Indicator computation error: {0}")]
    IndicatorError(#[from] ichimoku::Error),

    /// JSON output could not be written.
    #[error("JSON output error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An invalid argument was provided.
    #[error("Invalid argument '{argument}': {reason}{}", .suggestion.as_ref().map(|s| format!(". {s}")).unwrap_or_default())]
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .and_then(|p| usize::try_from(p.line()).ok());
        Self::CsvParseError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_file_error_display() {
        let err = CliError::FileError {
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
            path: "/path/to/prices.csv".to_string(),
            access: FileAccess::Read,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot read file '/path/to/prices.csv'"));
        assert!(msg.contains("file not found"));
        assert!(msg.contains("read permissions"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_file_error_names_write_access() {
        let err = CliError::FileError {
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            path: "out.csv".to_string(),
            access: FileAccess::Write,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot write file 'out.csv'"));
        assert!(msg.contains("write permissions"));
        assert!(!msg.contains("read"));
    }

    #[test]
    fn test_csv_parse_error_display() {
        let with_line = CliError::CsvParseError {
            message: "cannot parse 'abc' as number".to_string(),
            line: Some(5),
        };
        assert!(with_line.to_string().contains("on line 5"));

        let without_line = CliError::CsvParseError {
            message: "empty".to_string(),
            line: None,
        };
        assert!(!without_line.to_string().contains("on line"));
    }

    #[test]
    fn test_missing_column_lists_headers() {
        let err = CliError::MissingColumn {
            column: "high".to_string(),
            available: vec!["date".to_string(), "close".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "no 'high' column found (available: date, close)"
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: "expected 1 to 4 values, got 5".to_string(),
            suggestion: Some("Use format: conversion,base,span,displacement".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid argument 'params': expected 1 to 4 values, got 5. Use"));

        let bare = CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: "bad".to_string(),
            suggestion: None,
        };
        assert_eq!(bare.to_string(), "Invalid argument 'params': bad");
    }

    #[test]
    fn test_from_indicator_error() {
        let err: CliError = ichimoku::Error::EmptyWindow.into();
        assert!(matches!(err, CliError::IndicatorError(_)));
        assert!(err.to_string().contains("empty window"));
    }

    #[test]
    fn test_from_io_error() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
