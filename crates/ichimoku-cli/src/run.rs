//! Command execution: CSV in, Ichimoku rows out.

use ::ichimoku::{bars_from_columns, ichimoku};
use tracing::{info, warn};

use crate::args::{Args, OutputFormat};
use crate::csv_parser::parse_high_low;
use crate::csv_writer::{cloud_rows, write_csv, write_json};
use crate::error::Result;

/// Runs the command described by `args`.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the input cannot be read
/// or parsed, or the output cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let config = args.config()?;
    info!(input = %args.input, ?config, "computing ichimoku cloud");

    let data = parse_high_low(&args.input, &args.high_column, &args.low_column)?;
    let bars = bars_from_columns(&data.high, &data.low)?;
    let records = ichimoku(&bars, &config)?;

    if records.is_empty() {
        warn!(
            bars = bars.len(),
            warmup = config.warmup(),
            "input shorter than warm-up, no records produced"
        );
    }

    let rows = cloud_rows(&records, data.dates.as_deref(), &config);
    info!(bars = bars.len(), rows = rows.len(), "ichimoku cloud computed");

    let dest = args.output_dest();
    match args.format {
        OutputFormat::Csv => write_csv(&rows, data.dates.is_some(), &dest),
        OutputFormat::Json => write_json(&rows, &dest),
    }
}
