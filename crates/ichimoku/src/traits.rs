//! Core traits for ichimoku numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64` so every window, buffer and calculator in the crate is generic over
//! the price type.
//!
//! # Example
//!
//! ```
//! use ichimoku::traits::SeriesElement;
//!
//! fn range_midpoint<T: SeriesElement>(high: &[T], low: &[T]) -> T {
//!     let highest = high.iter().fold(T::neg_infinity(), |acc, &x| acc.max(x));
//!     let lowest = low.iter().fold(T::infinity(), |acc, &x| acc.min(x));
//!     T::midpoint_of(highest, lowest)
//! }
//!
//! let mid = range_midpoint(&[11.0_f64, 13.0, 12.0], &[9.0, 10.0, 8.0]);
//! assert!((mid - 10.5).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as price values.
///
/// # Type Bounds
///
/// The trait requires:
/// - `Float`: Standard floating-point operations (NaN handling, min/max, arithmetic)
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy` + `Default`: Cheap value semantics inside windows and buffers
/// - `Send + Sync`: A calculator can be moved to the thread that owns an instrument
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the value halfway between `a` and `b`.
    ///
    /// Every Ichimoku line is a midpoint: of a high/low range, or of two
    /// other lines.
    #[inline]
    #[must_use]
    fn midpoint_of(a: Self, b: Self) -> Self {
        (a + b) / Self::two()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a window period is usable.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` naming `parameter` if the period is zero.
#[inline]
pub const fn validate_period(parameter: &'static str, period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            parameter,
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_element_two() {
        let two_f64: f64 = SeriesElement::two();
        assert!((two_f64 - 2.0).abs() < 1e-10);

        let two_f32: f32 = SeriesElement::two();
        assert!((two_f32 - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_midpoint() {
        assert!((f64::midpoint_of(10.0, 20.0) - 15.0).abs() < 1e-10);
        assert!((f64::midpoint_of(-3.0, 4.0) - 0.5).abs() < 1e-10);
        assert!((f32::midpoint_of(1.0, 2.0) - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_midpoint_propagates_nan() {
        assert!(f64::midpoint_of(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_validate_period_success() {
        assert!(validate_period("period", 1).is_ok());
        assert!(validate_period("period", 52).is_ok());
    }

    #[test]
    fn test_validate_period_zero() {
        match validate_period("span_period", 0) {
            Err(Error::InvalidPeriod {
                parameter,
                period,
                reason,
            }) => {
                assert_eq!(parameter, "span_period");
                assert_eq!(period, 0);
                assert!(!reason.is_empty());
            }
            other => panic!("Expected InvalidPeriod error, got {other:?}"),
        }
    }

    #[test]
    fn test_series_element_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<f64>();
        assert_send_sync::<f32>();
    }
}
