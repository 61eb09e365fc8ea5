//! ichimoku CLI library
//!
//! This module exposes the CLI components for testing and reuse.

pub mod args;
pub mod csv_parser;
pub mod csv_writer;
pub mod error;
pub mod logger;
pub mod run;

pub use error::{CliError, FileAccess, Result};
pub use run::run;
