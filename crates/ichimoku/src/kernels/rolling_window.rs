//! Streaming rolling extrema over a bounded window.
//!
//! [`RollingWindow`] holds the most recent `period` values of a series and
//! reports their maximum and minimum. Unlike a slice-based rolling max, it is
//! fed one value at a time and never sees the full series, which is what a
//! tick-driven calculator needs.
//!
//! # Algorithm
//!
//! Two monotonic deques of `(sequence, value)` pairs are maintained next to
//! the raw window contents:
//! - for the maximum, values are kept in decreasing order
//! - for the minimum, values are kept in increasing order
//!
//! The front of each deque is the current extremum. Entries whose sequence
//! number has left the window are dropped from the front on every push.
//!
//! # Complexity
//!
//! - Time: O(1) amortized per push, O(1) per query
//! - Space: O(period)
//!
//! # Example
//!
//! ```
//! use ichimoku::kernels::rolling_window::RollingWindow;
//!
//! let mut window = RollingWindow::new(3).unwrap();
//! for value in [3.0_f64, 1.0, 4.0, 1.0, 5.0] {
//!     window.push(value);
//! }
//!
//! // The window now holds [4, 1, 5]
//! assert_eq!(window.max().unwrap(), 5.0);
//! assert_eq!(window.min().unwrap(), 1.0);
//! ```

use std::collections::VecDeque;

use crate::bar::Bar;
use crate::error::{Error, Result};
use crate::traits::{validate_period, SeriesElement};

use super::MAX_RESERVED;

/// A bounded window of the most recent values with O(1) min/max queries.
///
/// # NaN Handling
///
/// A NaN value occupies a slot and ages out like any other value, but it is
/// never reported as the extremum. A window that holds only NaN values
/// reports NaN.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    /// The window size
    period: usize,
    /// Raw window contents, oldest first
    values: VecDeque<T>,
    /// Decreasing values; front is the maximum
    max_deque: VecDeque<(usize, T)>,
    /// Increasing values; front is the minimum
    min_deque: VecDeque<(usize, T)>,
    /// Sequence number assigned to the next pushed value
    next_seq: usize,
}

impl<T: SeriesElement> RollingWindow<T> {
    /// Creates an empty window of the given size.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is zero.
    pub fn new(period: usize) -> Result<Self> {
        validate_period("period", period)?;
        let reserved = period.min(MAX_RESERVED);
        Ok(Self {
            period,
            values: VecDeque::with_capacity(reserved),
            max_deque: VecDeque::with_capacity(reserved),
            min_deque: VecDeque::with_capacity(reserved),
            next_seq: 0,
        })
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns the number of values currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no value has been pushed since creation or the last clear.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true once the window holds `period` values.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values.len() == self.period
    }

    /// Iterates over the window contents, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.values.iter()
    }

    /// Appends a value, evicting the oldest one if the window is full.
    pub fn push(&mut self, value: T) {
        let seq = self.next_seq;
        self.next_seq += 1;

        if self.values.len() == self.period {
            self.values.pop_front();
        }
        self.values.push_back(value);

        if !value.is_nan() {
            while let Some(&(_, back)) = self.max_deque.back() {
                if value >= back {
                    self.max_deque.pop_back();
                } else {
                    break;
                }
            }
            self.max_deque.push_back((seq, value));

            while let Some(&(_, back)) = self.min_deque.back() {
                if value <= back {
                    self.min_deque.pop_back();
                } else {
                    break;
                }
            }
            self.min_deque.push_back((seq, value));
        }

        self.remove_expired();
    }

    /// Drops deque entries that are no longer inside the window.
    #[inline]
    fn remove_expired(&mut self) {
        let window_start = self.next_seq.saturating_sub(self.period);
        while matches!(self.max_deque.front(), Some(&(seq, _)) if seq < window_start) {
            self.max_deque.pop_front();
        }
        while matches!(self.min_deque.front(), Some(&(seq, _)) if seq < window_start) {
            self.min_deque.pop_front();
        }
    }

    /// Returns the largest value in the window.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWindow` if nothing has been pushed yet.
    #[inline]
    pub fn max(&self) -> Result<T> {
        if self.values.is_empty() {
            return Err(Error::EmptyWindow);
        }
        Ok(self.max_deque.front().map_or_else(T::nan, |&(_, v)| v))
    }

    /// Returns the smallest value in the window.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWindow` if nothing has been pushed yet.
    #[inline]
    pub fn min(&self) -> Result<T> {
        if self.values.is_empty() {
            return Err(Error::EmptyWindow);
        }
        Ok(self.min_deque.front().map_or_else(T::nan, |&(_, v)| v))
    }

    /// Empties the window, keeping its period.
    pub fn clear(&mut self) {
        self.values.clear();
        self.max_deque.clear();
        self.min_deque.clear();
        self.next_seq = 0;
    }
}

/// A pair of rolling windows over the highs and lows of the same bars.
///
/// This is the building block of every Ichimoku line: the midpoint between
/// the highest high and the lowest low over `period` bars.
#[derive(Debug, Clone)]
pub struct HighLowWindow<T> {
    highs: RollingWindow<T>,
    lows: RollingWindow<T>,
}

impl<T: SeriesElement> HighLowWindow<T> {
    /// Creates an empty high/low window pair.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is zero.
    pub fn new(period: usize) -> Result<Self> {
        Ok(Self {
            highs: RollingWindow::new(period)?,
            lows: RollingWindow::new(period)?,
        })
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.highs.period()
    }

    /// Returns the number of bars currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.highs.len()
    }

    /// Returns true if no bar has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highs.is_empty()
    }

    /// Pushes one bar's high and low.
    #[inline]
    pub fn push(&mut self, bar: Bar<T>) {
        self.highs.push(bar.high);
        self.lows.push(bar.low);
    }

    /// Highest high over the window.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWindow` if nothing has been pushed yet.
    #[inline]
    pub fn highest(&self) -> Result<T> {
        self.highs.max()
    }

    /// Lowest low over the window.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWindow` if nothing has been pushed yet.
    #[inline]
    pub fn lowest(&self) -> Result<T> {
        self.lows.min()
    }

    /// `(highest high + lowest low) / 2` over the window.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWindow` if nothing has been pushed yet.
    #[inline]
    pub fn midpoint(&self) -> Result<T> {
        Ok(T::midpoint_of(self.highest()?, self.lowest()?))
    }

    /// Empties both windows.
    pub fn clear(&mut self) {
        self.highs.clear();
        self.lows.clear();
    }
}
