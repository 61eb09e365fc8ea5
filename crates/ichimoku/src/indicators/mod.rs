//! Indicator implementations.
//!
//! # Trend
//! - [`ichimoku`]: Ichimoku Cloud (conversion, base, leading spans A and B)
//!
//! Every indicator comes in three shapes: a streaming calculator fed one bar
//! at a time, a batch function over a full history, and an `_into` variant
//! that writes NaN-padded columns into caller-owned buffers.

pub mod ichimoku;

pub use ichimoku::{
    ichimoku, ichimoku_columns, ichimoku_into, ichimoku_lookback, ichimoku_min_len,
    ichimoku_span_lookback, ichimoku_warmup, Ichimoku, IchimokuCloud, IchimokuOutput,
    IchimokuRecord, Phase, DEFAULT_BASE_PERIOD, DEFAULT_CONVERSION_PERIOD, DEFAULT_DISPLACEMENT,
    DEFAULT_SPAN_PERIOD,
};
