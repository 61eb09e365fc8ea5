//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use ::ichimoku::prelude::*;
//!
//! let high = vec![11.0_f64, 12.0, 13.0, 12.5, 14.0];
//! let low = vec![9.0_f64, 10.0, 11.5, 11.0, 12.0];
//! let config = Ichimoku::new().conversion_period(2).base_period(3).span_period(3).displacement(1);
//!
//! let records = ichimoku(&bars_from_columns(&high, &low).unwrap(), &config).unwrap();
//! let columns = ichimoku_columns(&high, &low, &config).unwrap();
//! assert_eq!(records.len(), 3);
//! assert_eq!(columns.conversion.len(), 5);
//! ```
//!
//! # Contents
//!
//! - Error handling: [`Error`], [`Result`]
//! - Input: [`Bar`], [`bars_from_columns`], [`InputOrder`]
//! - Calculator: [`Ichimoku`], [`IchimokuCloud`], [`IchimokuRecord`], [`Phase`]
//! - Batch: `ichimoku`, `ichimoku_columns`, `ichimoku_into`, [`IchimokuOutput`]
//! - Lookbacks: `ichimoku_lookback`, `ichimoku_span_lookback`, `ichimoku_min_len`

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Input
pub use crate::bar::{bars_from_columns, Bar};
pub use crate::order::InputOrder;

// Calculator and configuration
pub use crate::indicators::{Ichimoku, IchimokuCloud, IchimokuRecord, Phase};

// Batch functions and columnar output
pub use crate::indicators::{ichimoku, ichimoku_columns, ichimoku_into, IchimokuOutput};

// Lookback functions
pub use crate::indicators::{
    ichimoku_lookback, ichimoku_min_len, ichimoku_span_lookback, ichimoku_warmup,
};
