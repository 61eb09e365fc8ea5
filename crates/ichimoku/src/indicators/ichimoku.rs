//! Ichimoku Cloud (Ichimoku Kinko Hyo).
//!
//! The cloud is built from four lines, each the midpoint of a high/low range:
//!
//! # Formula
//!
//! ```text
//! Conversion (Tenkan-sen) = (Highest(high, conversion) + Lowest(low, conversion)) / 2
//! Base (Kijun-sen)        = (Highest(high, base) + Lowest(low, base)) / 2
//! Span A (Senkou A)       = (Conversion + Base) / 2, shifted `displacement` bars ahead
//! Span B (Senkou B)       = (Highest(high, span) + Lowest(low, span)) / 2, shifted likewise
//! ```
//!
//! The lagging span (Chikou) is the close plotted `displacement` bars back;
//! bars here carry no close, so it is left to the caller.
//!
//! # Warm-up
//!
//! No record is produced until `max(conversion, base, span, displacement)`
//! bars have been seen. From then on every bar yields exactly one record.
//! Span A and span B stay `None` for the first `displacement` records: the
//! value computed on record `n` is reported on record `n + displacement`.
//!
//! # Usage
//!
//! Streaming, one bar at a time:
//!
//! ```
//! use ichimoku::indicators::ichimoku::{Ichimoku, IchimokuCloud};
//! use ichimoku::Bar;
//!
//! let config = Ichimoku::new().conversion_period(2).base_period(3).span_period(4).displacement(2);
//! let mut cloud = IchimokuCloud::new(&config).unwrap();
//!
//! let mut records = Vec::new();
//! for i in 0..10 {
//!     let price = 100.0_f64 + f64::from(i);
//!     if let Some(record) = cloud.step(Bar::new(price + 1.0, price - 1.0)) {
//!         records.push(record);
//!     }
//! }
//! assert_eq!(records.len(), 10 - 4 + 1);
//! assert!(records[0].span_a.is_none());
//! assert!(records[2].span_a.is_some());
//! ```
//!
//! Batch, over a complete history:
//!
//! ```
//! use ichimoku::indicators::ichimoku::{ichimoku, Ichimoku};
//! use ichimoku::Bar;
//!
//! let bars: Vec<Bar<f64>> = (0..120)
//!     .map(|i| Bar::new(101.0 + f64::from(i), 99.0 + f64::from(i)))
//!     .collect();
//! let records = ichimoku(&bars, &Ichimoku::default()).unwrap();
//! assert_eq!(records.len(), 120 - 52 + 1);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bar::Bar;
use crate::error::{Error, Result};
use crate::kernels::{DisplacementBuffer, HighLowWindow};
use crate::order::{chronological, restore_order, InputOrder};
use crate::traits::{validate_period, SeriesElement};

/// Conventional conversion line period.
pub const DEFAULT_CONVERSION_PERIOD: usize = 9;
/// Conventional base line period.
pub const DEFAULT_BASE_PERIOD: usize = 26;
/// Conventional span B period.
pub const DEFAULT_SPAN_PERIOD: usize = 52;
/// Conventional forward shift of the leading spans.
pub const DEFAULT_DISPLACEMENT: usize = 26;

const fn max_usize(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

/// Number of bars needed before the first record.
#[inline]
#[must_use]
pub const fn ichimoku_warmup(
    conversion_period: usize,
    base_period: usize,
    span_period: usize,
    displacement: usize,
) -> usize {
    max_usize(
        max_usize(conversion_period, base_period),
        max_usize(span_period, displacement),
    )
}

/// Computes the lookback of the conversion and base line columns.
///
/// This is the number of leading NaN values in the columnar output, i.e.
/// the warm-up length minus one.
#[inline]
#[must_use]
pub const fn ichimoku_lookback(
    conversion_period: usize,
    base_period: usize,
    span_period: usize,
    displacement: usize,
) -> usize {
    ichimoku_warmup(conversion_period, base_period, span_period, displacement).saturating_sub(1)
}

/// Computes the lookback of the span A and span B columns.
///
/// The spans are released `displacement` bars after the lines start.
/// Saturates at `usize::MAX`.
#[inline]
#[must_use]
pub const fn ichimoku_span_lookback(
    conversion_period: usize,
    base_period: usize,
    span_period: usize,
    displacement: usize,
) -> usize {
    ichimoku_lookback(conversion_period, base_period, span_period, displacement)
        .saturating_add(displacement)
}

/// Returns the minimum input length that produces at least one record.
#[inline]
#[must_use]
pub const fn ichimoku_min_len(
    conversion_period: usize,
    base_period: usize,
    span_period: usize,
    displacement: usize,
) -> usize {
    max_usize(
        ichimoku_warmup(conversion_period, base_period, span_period, displacement),
        1,
    )
}

/// One Ichimoku output, produced for every bar after warm-up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IchimokuRecord<T> {
    /// Conversion line (Tenkan-sen).
    pub conversion: T,
    /// Base line (Kijun-sen).
    pub base: T,
    /// Leading span A (Senkou Span A), once the displacement has elapsed.
    pub span_a: Option<T>,
    /// Leading span B (Senkou Span B), once the displacement has elapsed.
    pub span_b: Option<T>,
}

/// Columnar Ichimoku output aligned one-to-one with the input rows.
///
/// Values not available yet for a row are NaN.
#[derive(Debug, Clone)]
pub struct IchimokuOutput<T> {
    /// Conversion line (Tenkan-sen) values.
    pub conversion: Vec<T>,
    /// Base line (Kijun-sen) values.
    pub base: Vec<T>,
    /// Leading span A (Senkou Span A) values.
    pub span_a: Vec<T>,
    /// Leading span B (Senkou Span B) values.
    pub span_b: Vec<T>,
}

impl<T: SeriesElement> IchimokuOutput<T> {
    /// Allocates four NaN-filled columns of length `len`.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            conversion: vec![T::nan(); len],
            base: vec![T::nan(); len],
            span_a: vec![T::nan(); len],
            span_b: vec![T::nan(); len],
        }
    }

    fn shortest_column(&self) -> usize {
        self.conversion
            .len()
            .min(self.base.len())
            .min(self.span_a.len())
            .min(self.span_b.len())
    }
}

/// Warm-up state of a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not enough bars seen yet; `remaining` more are needed.
    Warming {
        /// Bars still needed before the first record.
        remaining: usize,
    },
    /// Every further bar yields a record.
    Active,
}

// ==================== Configuration Type ====================

/// Ichimoku Cloud configuration with fluent builder API.
///
/// Defaults to the conventional 9/26/52/26 settings with oldest-first input.
/// With the `serde` feature, missing fields deserialize to their defaults.
///
/// # Example
///
/// ```
/// use ichimoku::indicators::ichimoku::Ichimoku;
/// use ichimoku::{Bar, InputOrder};
///
/// let bars: Vec<Bar<f64>> = (0..30)
///     .map(|i| Bar::new(11.0 + f64::from(i % 7), 9.0 + f64::from(i % 5)))
///     .collect();
///
/// // Use defaults (9, 26, 52, 26): 30 bars are not enough
/// assert!(Ichimoku::default().compute(&bars).unwrap().is_empty());
///
/// // Or customize with fluent API
/// let records = Ichimoku::new()
///     .conversion_period(3)
///     .base_period(5)
///     .span_period(10)
///     .displacement(5)
///     .input_order(InputOrder::OldestFirst)
///     .compute(&bars)
///     .unwrap();
/// assert_eq!(records.len(), 30 - 10 + 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ichimoku {
    conversion_period: usize,
    base_period: usize,
    span_period: usize,
    displacement: usize,
    input_order: InputOrder,
}

impl Default for Ichimoku {
    /// Creates an Ichimoku configuration with standard parameters (9, 26, 52, 26).
    fn default() -> Self {
        Self {
            conversion_period: DEFAULT_CONVERSION_PERIOD,
            base_period: DEFAULT_BASE_PERIOD,
            span_period: DEFAULT_SPAN_PERIOD,
            displacement: DEFAULT_DISPLACEMENT,
            input_order: InputOrder::OldestFirst,
        }
    }
}

impl Ichimoku {
    /// Creates a new configuration with standard parameters (9, 26, 52, 26).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversion line period.
    ///
    /// Default: 9
    #[must_use]
    pub const fn conversion_period(mut self, period: usize) -> Self {
        self.conversion_period = period;
        self
    }

    /// Sets the base line period.
    ///
    /// Default: 26
    #[must_use]
    pub const fn base_period(mut self, period: usize) -> Self {
        self.base_period = period;
        self
    }

    /// Sets the span B period.
    ///
    /// Default: 52
    #[must_use]
    pub const fn span_period(mut self, period: usize) -> Self {
        self.span_period = period;
        self
    }

    /// Sets how many bars the leading spans are shifted forward.
    ///
    /// Default: 26. Zero reports the spans on the bar they are computed on.
    #[must_use]
    pub const fn displacement(mut self, displacement: usize) -> Self {
        self.displacement = displacement;
        self
    }

    /// Sets the ordering of batch input (and of the returned records).
    ///
    /// Default: [`InputOrder::OldestFirst`]. Streaming calculators ignore it.
    #[must_use]
    pub const fn input_order(mut self, order: InputOrder) -> Self {
        self.input_order = order;
        self
    }

    /// Returns the conversion line period.
    #[must_use]
    pub const fn get_conversion_period(&self) -> usize {
        self.conversion_period
    }

    /// Returns the base line period.
    #[must_use]
    pub const fn get_base_period(&self) -> usize {
        self.base_period
    }

    /// Returns the span B period.
    #[must_use]
    pub const fn get_span_period(&self) -> usize {
        self.span_period
    }

    /// Returns the displacement.
    #[must_use]
    pub const fn get_displacement(&self) -> usize {
        self.displacement
    }

    /// Returns the batch input ordering.
    #[must_use]
    pub const fn get_input_order(&self) -> InputOrder {
        self.input_order
    }

    /// Checks every window period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` naming the first period that is zero.
    pub fn validate(&self) -> Result<()> {
        validate_period("conversion_period", self.conversion_period)?;
        validate_period("base_period", self.base_period)?;
        validate_period("span_period", self.span_period)
    }

    /// Returns the number of bars needed before the first record.
    #[must_use]
    pub const fn warmup(&self) -> usize {
        ichimoku_warmup(
            self.conversion_period,
            self.base_period,
            self.span_period,
            self.displacement,
        )
    }

    /// Returns the line lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        ichimoku_lookback(
            self.conversion_period,
            self.base_period,
            self.span_period,
            self.displacement,
        )
    }

    /// Returns the span lookback for this configuration.
    #[must_use]
    pub const fn span_lookback(&self) -> usize {
        ichimoku_span_lookback(
            self.conversion_period,
            self.base_period,
            self.span_period,
            self.displacement,
        )
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        ichimoku_min_len(
            self.conversion_period,
            self.base_period,
            self.span_period,
            self.displacement,
        )
    }

    /// Creates a streaming calculator with this configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a window period is zero.
    pub fn cloud<T: SeriesElement>(&self) -> Result<IchimokuCloud<T>> {
        IchimokuCloud::new(self)
    }

    /// Computes one record per bar after warm-up.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a window period is zero.
    pub fn compute<T: SeriesElement>(&self, bars: &[Bar<T>]) -> Result<Vec<IchimokuRecord<T>>> {
        ichimoku(bars, self)
    }

    /// Computes NaN-padded columns aligned with `high`/`low`.
    ///
    /// # Errors
    ///
    /// Returns an error if a window period is zero or the columns differ in length.
    pub fn compute_columns<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
    ) -> Result<IchimokuOutput<T>> {
        ichimoku_columns(high, low, self)
    }

    /// Computes columns into a pre-allocated output struct.
    ///
    /// Returns the number of rows that received a record.
    ///
    /// # Errors
    ///
    /// Returns an error if a window period is zero, the input columns differ
    /// in length, or an output column is shorter than the input.
    pub fn compute_into<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        output: &mut IchimokuOutput<T>,
    ) -> Result<usize> {
        ichimoku_into(high, low, self, output)
    }
}

// ==================== Streaming Calculator ====================

/// Incremental Ichimoku calculator.
///
/// Owns three high/low window pairs (conversion, base and span B periods)
/// and two displacement buffers (span A and span B). Feed bars oldest first
/// with [`step`](Self::step).
#[derive(Debug, Clone)]
pub struct IchimokuCloud<T> {
    config: Ichimoku,
    warmup: usize,
    /// Bars seen, saturating at `warmup`
    seen: usize,
    conversion: HighLowWindow<T>,
    base: HighLowWindow<T>,
    span: HighLowWindow<T>,
    span_a: DisplacementBuffer<T>,
    span_b: DisplacementBuffer<T>,
}

impl<T: SeriesElement> IchimokuCloud<T> {
    /// Creates a calculator in the warming phase.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a window period is zero.
    pub fn new(config: &Ichimoku) -> Result<Self> {
        config.validate()?;
        let warmup = config.warmup();
        debug!(
            conversion_period = config.conversion_period,
            base_period = config.base_period,
            span_period = config.span_period,
            displacement = config.displacement,
            warmup,
            "ichimoku calculator created"
        );
        Ok(Self {
            config: *config,
            warmup,
            seen: 0,
            conversion: HighLowWindow::new(config.conversion_period)?,
            base: HighLowWindow::new(config.base_period)?,
            span: HighLowWindow::new(config.span_period)?,
            span_a: DisplacementBuffer::new(config.displacement),
            span_b: DisplacementBuffer::new(config.displacement),
        })
    }

    /// Returns the configuration this calculator was built with.
    #[must_use]
    pub const fn config(&self) -> &Ichimoku {
        &self.config
    }

    /// Returns the number of bars needed before the first record.
    #[must_use]
    pub const fn warmup(&self) -> usize {
        self.warmup
    }

    /// Returns the current warm-up state.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.seen < self.warmup {
            Phase::Warming {
                remaining: self.warmup - self.seen,
            }
        } else {
            Phase::Active
        }
    }

    /// Returns true once every bar yields a record.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.seen >= self.warmup
    }

    /// Processes the next bar.
    ///
    /// Returns `None` while warming up, otherwise the record for this bar.
    /// Span values in the record stay `None` until the displacement has
    /// elapsed.
    pub fn step(&mut self, bar: Bar<T>) -> Option<IchimokuRecord<T>> {
        self.conversion.push(bar);
        self.base.push(bar);
        self.span.push(bar);

        if self.seen < self.warmup {
            self.seen += 1;
            if self.seen < self.warmup {
                return None;
            }
            trace!(warmup = self.warmup, "ichimoku warm-up complete");
        }

        let conversion = self.conversion.midpoint().ok()?;
        let base = self.base.midpoint().ok()?;
        let raw_span_b = self.span.midpoint().ok()?;

        let span_a = self.span_a.push(T::midpoint_of(conversion, base));
        let span_b = self.span_b.push(raw_span_b);

        Some(IchimokuRecord {
            conversion,
            base,
            span_a,
            span_b,
        })
    }

    /// Span values computed but not yet released, oldest first.
    ///
    /// This is the part of the cloud drawn ahead of the latest bar: the
    /// `k`-th pair (0-based) is released `k + 1` steps from now.
    pub fn projection(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.span_a
            .pending()
            .zip(self.span_b.pending())
            .map(|(&a, &b)| (a, b))
    }

    /// Discards all history, returning to the warming phase.
    pub fn reset(&mut self) {
        self.seen = 0;
        self.conversion.clear();
        self.base.clear();
        self.span.clear();
        self.span_a.clear();
        self.span_b.clear();
    }
}

// ==================== Batch API ====================

/// Computes the Ichimoku Cloud over a complete series.
///
/// Bars are taken in `config`'s input order; the returned records are in the
/// same order and cover only the bars at or after warm-up. Input shorter
/// than the warm-up yields an empty vector.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if a window period is zero.
///
/// # Example
///
/// ```
/// use ichimoku::indicators::ichimoku::{ichimoku, Ichimoku};
/// use ichimoku::{Bar, InputOrder};
///
/// let newest_first: Vec<Bar<f64>> = (0..8).rev()
///     .map(|i| Bar::new(f64::from(i) + 1.0, f64::from(i)))
///     .collect();
/// let config = Ichimoku::new()
///     .conversion_period(2).base_period(3).span_period(4).displacement(1)
///     .input_order(InputOrder::NewestFirst);
///
/// let records = ichimoku(&newest_first, &config).unwrap();
/// // Newest record first, matching the input
/// assert!(records[0].conversion > records[records.len() - 1].conversion);
/// ```
pub fn ichimoku<T: SeriesElement>(
    bars: &[Bar<T>],
    config: &Ichimoku,
) -> Result<Vec<IchimokuRecord<T>>> {
    let mut cloud = IchimokuCloud::new(config)?;
    let ordered = chronological(bars, config.input_order);

    let records: Vec<_> = ordered.iter().filter_map(|&bar| cloud.step(bar)).collect();
    debug!(
        bars = bars.len(),
        records = records.len(),
        "ichimoku batch computed"
    );
    Ok(restore_order(records, config.input_order))
}

/// Computes the Ichimoku Cloud into a pre-allocated output struct.
///
/// Every row of `output` up to the input length is written: rows without a
/// value yet are NaN. Rows follow `config`'s input order.
///
/// Returns the number of rows that received a record.
///
/// # Errors
///
/// Returns an error if:
/// - A window period is zero (`Error::InvalidPeriod`)
/// - `high` and `low` have different lengths (`Error::LengthMismatch`)
/// - An output column is shorter than the input (`Error::BufferTooSmall`)
pub fn ichimoku_into<T: SeriesElement>(
    high: &[T],
    low: &[T],
    config: &Ichimoku,
    output: &mut IchimokuOutput<T>,
) -> Result<usize> {
    if high.len() != low.len() {
        return Err(Error::LengthMismatch {
            description: format!("high has {} elements, low has {}", high.len(), low.len()),
        });
    }

    let len = high.len();
    if output.shortest_column() < len {
        return Err(Error::BufferTooSmall {
            required: len,
            actual: output.shortest_column(),
        });
    }

    let mut cloud = IchimokuCloud::new(config)?;
    let mut written = 0;

    if config.input_order.is_reversed() {
        for i in (0..len).rev() {
            written += usize::from(fill_row(&mut cloud, high[i], low[i], output, i));
        }
    } else {
        for i in 0..len {
            written += usize::from(fill_row(&mut cloud, high[i], low[i], output, i));
        }
    }

    Ok(written)
}

/// Steps `cloud` with one row and writes the result at `index`.
#[inline]
fn fill_row<T: SeriesElement>(
    cloud: &mut IchimokuCloud<T>,
    high: T,
    low: T,
    output: &mut IchimokuOutput<T>,
    index: usize,
) -> bool {
    match cloud.step(Bar::new(high, low)) {
        Some(record) => {
            output.conversion[index] = record.conversion;
            output.base[index] = record.base;
            output.span_a[index] = record.span_a.unwrap_or_else(T::nan);
            output.span_b[index] = record.span_b.unwrap_or_else(T::nan);
            true
        }
        None => {
            output.conversion[index] = T::nan();
            output.base[index] = T::nan();
            output.span_a[index] = T::nan();
            output.span_b[index] = T::nan();
            false
        }
    }
}

/// Computes the Ichimoku Cloud as NaN-padded columns aligned with the input.
///
/// # Errors
///
/// Returns an error if:
/// - A window period is zero (`Error::InvalidPeriod`)
/// - `high` and `low` have different lengths (`Error::LengthMismatch`)
///
/// # Example
///
/// ```
/// use ichimoku::indicators::ichimoku::{ichimoku_columns, Ichimoku};
///
/// let high: Vec<f64> = vec![11.0, 12.0, 13.0, 12.0, 11.0, 10.0, 11.0, 12.0];
/// let low: Vec<f64> = vec![9.0, 10.0, 11.0, 10.0, 9.0, 8.0, 9.0, 10.0];
/// let config = Ichimoku::new().conversion_period(2).base_period(3).span_period(4).displacement(2);
///
/// let output = ichimoku_columns(&high, &low, &config).unwrap();
/// assert!(output.conversion[2].is_nan());
/// assert!(output.conversion[3].is_finite());
/// assert!(output.span_a[4].is_nan());
/// assert!(output.span_a[5].is_finite());
/// ```
pub fn ichimoku_columns<T: SeriesElement>(
    high: &[T],
    low: &[T],
    config: &Ichimoku,
) -> Result<IchimokuOutput<T>> {
    let mut output = IchimokuOutput::with_len(high.len());
    ichimoku_into(high, low, config, &mut output)?;
    Ok(output)
}
