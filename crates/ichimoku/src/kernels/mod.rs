//! Streaming kernels the Ichimoku calculator is built from.
//!
//! # Kernels
//!
//! - [`rolling_window`]: bounded window with O(1) amortized rolling max/min
//!   (monotonic deques), plus the high/low pair every Ichimoku line uses
//! - [`displacement`]: fixed-lag FIFO that shifts the leading spans forward
//!
//! Both are fed one value at a time and own all of their state, so they can
//! be tested in isolation from the calculator that composes them.

pub mod displacement;
pub mod rolling_window;

/// Upper bound on the capacity reserved when a kernel is created.
///
/// Larger windows and lags grow their buffers as values arrive.
pub(crate) const MAX_RESERVED: usize = 1024;

pub use displacement::DisplacementBuffer;
pub use rolling_window::{HighLowWindow, RollingWindow};
