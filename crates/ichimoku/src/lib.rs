//! ichimoku: streaming Ichimoku Cloud calculator
//!
//! This crate computes the Ichimoku Kinko Hyo lines from a series of
//! high/low bars, either one bar at a time or over a complete history.
//!
//! # Features
//!
//! - **Streaming**: O(1) amortized work per bar using monotonic-deque windows
//! - **Batch**: record, columnar and zero-allocation `_into` entry points
//! - **Generics**: Works with both `f32` and `f64` data types
//! - **Ordering**: Accepts oldest-first or newest-first history
//!
//! # Quick Start
//!
//! ```
//! use ::ichimoku::prelude::*;
//!
//! let config = Ichimoku::default();
//! let mut cloud = IchimokuCloud::<f64>::new(&config).unwrap();
//!
//! let mut last = None;
//! for i in 0..100 {
//!     let price = 100.0 + f64::from(i);
//!     last = cloud.step(Bar::new(price, price)).or(last);
//! }
//!
//! let record = last.unwrap();
//! // Conversion line is the midpoint of the last 9 bars
//! assert!((record.conversion - (199.0 + 191.0) / 2.0).abs() < 1e-10);
//! assert!(record.span_a.is_some());
//! ```
//!
//! # Error Handling
//!
//! Configuration errors surface when a calculator is built:
//!
//! ```
//! use ::ichimoku::prelude::*;
//!
//! let result = IchimokuCloud::<f64>::new(&Ichimoku::new().base_period(0));
//! assert!(matches!(result, Err(Error::InvalidPeriod { .. })));
//!
//! // Too little history is not an error: it yields no records
//! let bars = vec![Bar::new(2.0_f64, 1.0); 10];
//! assert!(ichimoku(&bars, &Ichimoku::default()).unwrap().is_empty());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod bar;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod order;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use bar::{bars_from_columns, Bar};
pub use error::{Error, Result};
pub use indicators::{ichimoku, Ichimoku, IchimokuCloud, IchimokuOutput, IchimokuRecord, Phase};
pub use order::InputOrder;
pub use traits::SeriesElement;
pub use utils::{approx_eq, count_nan_prefix, EPSILON};
