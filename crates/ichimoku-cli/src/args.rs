//! CLI argument parsing module.
//!
//! The CLI follows the pattern: `ichimoku-cli <input.csv> [params] [-o output]`
//!
//! # Examples
//!
//! ```bash
//! # Conventional settings (9,26,52,26)
//! ichimoku-cli prices.csv
//!
//! # Custom settings, written to a file
//! ichimoku-cli prices.csv 7,22,44,22 -o cloud.csv
//!
//! # Newest-first feed, JSON output
//! ichimoku-cli prices.csv --newest-first --format json
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use ichimoku::indicators::ichimoku::{
    DEFAULT_BASE_PERIOD, DEFAULT_CONVERSION_PERIOD, DEFAULT_DISPLACEMENT, DEFAULT_SPAN_PERIOD,
};
use ichimoku::{Ichimoku, InputOrder};

use crate::csv_writer::OutputDest;
use crate::error::{CliError, Result};

/// ichimoku-cli: Ichimoku Cloud over CSV price data
#[derive(Parser, Debug)]
#[command(name = "ichimoku-cli")]
#[command(author, version, about = "Compute the Ichimoku Cloud from high/low price data")]
#[command(long_about = "Reads a CSV file with high and low columns (and an optional date \
    column), computes the Ichimoku conversion line, base line and leading spans, and \
    writes one row per bar after warm-up to a file or stdout.")]
pub struct Args {
    /// Input CSV file
    pub input: String,

    /// Parameters: conversion,base,span,displacement (omitted trailing values take defaults)
    #[arg(default_value = "9,26,52,26")]
    pub params: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Input rows are ordered newest first
    #[arg(long)]
    pub newest_first: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Column to use for high prices
    #[arg(long, default_value = "high")]
    pub high_column: String,

    /// Column to use for low prices
    #[arg(long, default_value = "low")]
    pub low_column: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output encodings.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl Args {
    /// Parse arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Ordering of the input rows.
    #[must_use]
    pub const fn input_order(&self) -> InputOrder {
        if self.newest_first {
            InputOrder::NewestFirst
        } else {
            InputOrder::OldestFirst
        }
    }

    /// Where results are written.
    #[must_use]
    pub fn output_dest(&self) -> OutputDest {
        self.output
            .as_ref()
            .map_or(OutputDest::Stdout, |path| OutputDest::File(path.clone()))
    }

    /// Builds the calculator settings from `params` and the ordering flag.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidArgument` if `params` is malformed.
    pub fn config(&self) -> Result<Ichimoku> {
        let (conversion, base, span, displacement) = parse_ichimoku_params(&self.params)?;
        Ok(Ichimoku::new()
            .conversion_period(conversion)
            .base_period(base)
            .span_period(span)
            .displacement(displacement)
            .input_order(self.input_order()))
    }
}

const PARAM_NAMES: [&str; 4] = ["conversion_period", "base_period", "span_period", "displacement"];

/// Parse Ichimoku parameters from string "conversion,base,span,displacement".
///
/// Trailing values may be omitted and take the conventional defaults, so
/// `"7"` means `7,26,52,26`. Window periods must be positive; the
/// displacement may be zero.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` on a wrong value count, a value that
/// is not a non-negative integer, or a zero window period.
pub fn parse_ichimoku_params(params: &str) -> Result<(usize, usize, usize, usize)> {
    let parts: Vec<&str> = params.split(',').collect();
    if parts.len() > 4 {
        return Err(CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: format!("expected 1 to 4 values, got {}", parts.len()),
            suggestion: Some(
                "Use format: conversion,base,span,displacement (e.g., 9,26,52,26)".to_string(),
            ),
        });
    }

    let mut values = [
        DEFAULT_CONVERSION_PERIOD,
        DEFAULT_BASE_PERIOD,
        DEFAULT_SPAN_PERIOD,
        DEFAULT_DISPLACEMENT,
    ];
    for (i, part) in parts.iter().enumerate() {
        let default = values[i];
        values[i] = part.trim().parse::<usize>().map_err(|_| CliError::InvalidArgument {
            argument: PARAM_NAMES[i].to_string(),
            reason: format!("cannot parse '{part}' as integer"),
            suggestion: Some(format!("Use a non-negative integer like {default}")),
        })?;
    }

    if let Some(i) = values[..3].iter().position(|&v| v == 0) {
        return Err(CliError::InvalidArgument {
            argument: PARAM_NAMES[i].to_string(),
            reason: "window periods must be positive".to_string(),
            suggestion: Some("Use positive integers like 9,26,52".to_string()),
        });
    }

    Ok((values[0], values[1], values[2], values[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("ichimoku-cli").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_input_only() {
        let args = parse(&["prices.csv"]).unwrap();
        assert_eq!(args.input, "prices.csv");
        assert_eq!(args.params, "9,26,52,26");
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.high_column, "high");
        assert_eq!(args.low_column, "low");
        assert_eq!(args.verbose, 0);
        assert!(!args.newest_first);
        assert!(matches!(args.output_dest(), OutputDest::Stdout));
    }

    #[test]
    fn test_parse_all_options() {
        let args = parse(&[
            "prices.csv",
            "7,22,44,22",
            "-o",
            "out.json",
            "--newest-first",
            "--format",
            "json",
            "--high-column",
            "High Price",
            "--low-column",
            "Low Price",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.params, "7,22,44,22");
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.high_column, "High Price");
        assert_eq!(args.verbose, 2);
        assert_eq!(args.input_order(), InputOrder::NewestFirst);
        assert!(matches!(args.output_dest(), OutputDest::File(ref p) if p == "out.json"));

        let config = args.config().unwrap();
        assert_eq!(config.get_conversion_period(), 7);
        assert_eq!(config.get_displacement(), 22);
        assert_eq!(config.get_input_order(), InputOrder::NewestFirst);
    }

    #[test]
    fn test_error_missing_input_file() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_error_unknown_format() {
        assert!(parse(&["prices.csv", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_parse_full_params() {
        assert_eq!(parse_ichimoku_params("9,26,52,26").unwrap(), (9, 26, 52, 26));
        assert_eq!(parse_ichimoku_params(" 10 , 30 , 60 , 30 ").unwrap(), (10, 30, 60, 30));
    }

    #[test]
    fn test_parse_partial_params_take_defaults() {
        assert_eq!(parse_ichimoku_params("7").unwrap(), (7, 26, 52, 26));
        assert_eq!(parse_ichimoku_params("7,22").unwrap(), (7, 22, 52, 26));
    }

    #[test]
    fn test_parse_zero_displacement() {
        assert_eq!(parse_ichimoku_params("9,26,52,0").unwrap(), (9, 26, 52, 0));
    }

    #[test]
    fn test_error_too_many_params() {
        let err = parse_ichimoku_params("1,2,3,4,5").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { ref argument, .. } if argument == "params"));
    }

    #[test]
    fn test_error_non_numeric_param() {
        let err = parse_ichimoku_params("9,abc,52,26").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { ref argument, .. } if argument == "base_period"));
    }

    #[test]
    fn test_error_negative_param() {
        assert!(parse_ichimoku_params("9,26,52,-1").is_err());
    }

    #[test]
    fn test_error_zero_period() {
        let err = parse_ichimoku_params("9,26,0,26").unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { ref argument, .. } if argument == "span_period"));
    }
}
