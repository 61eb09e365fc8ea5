//! Floating-point helpers for comparing indicator output.
//!
//! Ichimoku values are midpoints of sums of prices, so results computed by
//! different routes can differ in the last bits. These helpers compare with a tolerance and treat NaN as equal
//! to NaN, which is how the columnar output marks missing values.
//!
//! # Example
//!
//! ```
//! use ichimoku::utils::{approx_eq, EPSILON};
//!
//! let a = (0.1_f64 + 0.2) / 2.0;
//! assert!(approx_eq(a, 0.15, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Tolerance for comparing `f64` results.
pub const EPSILON: f64 = 1e-10;

/// Returns `true` if `a` and `b` are within `tolerance`, or both NaN.
///
/// # Example
///
/// ```
/// use ichimoku::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(147.0, 147.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(147.0, 138.5, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 147.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => true,
        (false, false) => (a - b).abs() < tolerance,
        _ => false,
    }
}

/// Counts the leading NaN values of a column.
///
/// On columnar output this equals the column's lookback whenever the input
/// is longer than the lookback.
///
/// # Example
///
/// ```
/// use ichimoku::utils::count_nan_prefix;
///
/// let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, f64::NAN];
/// assert_eq!(count_nan_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0_f64, 1.0, EPSILON));
        assert!(approx_eq(1.0_f64, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0_f64, 2.0, EPSILON));
        assert!(approx_eq(1.0_f32, 1.0 + 1e-7, 1e-5));
    }

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
        assert!(!approx_eq(1.0, f64::NAN, EPSILON));
    }

    #[test]
    fn test_count_nan_prefix() {
        assert_eq!(count_nan_prefix(&[f64::NAN, f64::NAN, 1.0]), 2);
        assert_eq!(count_nan_prefix(&[1.0_f64, f64::NAN]), 0);
        assert_eq!(count_nan_prefix(&[f64::NAN; 3]), 3);
        assert_eq!(count_nan_prefix::<f64>(&[]), 0);
    }
}
