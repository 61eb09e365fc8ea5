//! ichimoku command-line interface
//!
//! Computes the Ichimoku Cloud over a CSV file of high/low prices.

use std::process::ExitCode;

use ichimoku_cli::args::Args;
use ichimoku_cli::logger::init_logger;

fn main() -> ExitCode {
    let args = Args::parse_args();
    init_logger(args.verbose);

    match ichimoku_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
