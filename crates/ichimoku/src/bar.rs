//! Price observations fed to the calculator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One time step's price extremes.
///
/// Bars carry no timestamp: their position in the input sequence is the only
/// notion of time, so they must be supplied oldest first to a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bar<T> {
    /// Highest price of the period.
    pub high: T,
    /// Lowest price of the period.
    pub low: T,
}

impl<T> Bar<T> {
    /// Creates a bar from its high and low.
    #[inline]
    #[must_use]
    pub const fn new(high: T, low: T) -> Self {
        Self { high, low }
    }
}

impl<T> From<(T, T)> for Bar<T> {
    /// Converts a `(high, low)` tuple.
    fn from((high, low): (T, T)) -> Self {
        Self { high, low }
    }
}

/// Zips parallel high and low columns into bars.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the columns differ in length.
///
/// # Example
///
/// ```
/// use ichimoku::{bars_from_columns, Bar};
///
/// let bars = bars_from_columns(&[11.0_f64, 12.0], &[9.0, 10.0]).unwrap();
/// assert_eq!(bars[1], Bar::new(12.0, 10.0));
/// ```
pub fn bars_from_columns<T: Copy>(high: &[T], low: &[T]) -> Result<Vec<Bar<T>>> {
    if high.len() != low.len() {
        return Err(Error::LengthMismatch {
            description: format!("high has {} elements, low has {}", high.len(), low.len()),
        });
    }
    Ok(high
        .iter()
        .zip(low)
        .map(|(&high, &low)| Bar::new(high, low))
        .collect())
}
