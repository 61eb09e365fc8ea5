//! Input ordering conventions.
//!
//! Many data feeds deliver bars newest first. The calculator only ever
//! consumes chronological input, so batch entry points put the data in
//! oldest-first order before computing and restore the caller's order on
//! the results afterwards.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction in which a series is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputOrder {
    /// Chronological: index 0 is the oldest bar.
    #[default]
    OldestFirst,
    /// Reverse chronological: index 0 is the most recent bar.
    NewestFirst,
}

impl InputOrder {
    /// Returns true if data in this order must be reversed before computing.
    #[inline]
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::NewestFirst)
    }
}

/// Returns `data` in oldest-first order.
///
/// Borrows when `data` is already chronological, otherwise returns a
/// reversed copy. The input slice is never mutated.
///
/// # Example
///
/// ```
/// use ichimoku::order::{chronological, InputOrder};
///
/// let newest_first = [3, 2, 1];
/// assert_eq!(&*chronological(&newest_first, InputOrder::NewestFirst), &[1, 2, 3]);
/// ```
#[must_use]
pub fn chronological<T: Clone>(data: &[T], order: InputOrder) -> Cow<'_, [T]> {
    if order.is_reversed() {
        Cow::Owned(data.iter().rev().cloned().collect())
    } else {
        Cow::Borrowed(data)
    }
}

/// Puts results computed on chronological input back into `order`.
#[must_use]
pub fn restore_order<T>(mut results: Vec<T>, order: InputOrder) -> Vec<T> {
    if order.is_reversed() {
        results.reverse();
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_oldest_first() {
        assert_eq!(InputOrder::default(), InputOrder::OldestFirst);
        assert!(!InputOrder::OldestFirst.is_reversed());
        assert!(InputOrder::NewestFirst.is_reversed());
    }

    #[test]
    fn test_chronological_borrows_oldest_first() {
        let data = [1, 2, 3];
        let ordered = chronological(&data, InputOrder::OldestFirst);
        assert!(matches!(ordered, Cow::Borrowed(_)));
        assert_eq!(&*ordered, &[1, 2, 3]);
    }

    #[test]
    fn test_chronological_reverses_newest_first() {
        let data = [1, 2, 3];
        let ordered = chronological(&data, InputOrder::NewestFirst);
        assert_eq!(&*ordered, &[3, 2, 1]);
        // Caller's data untouched
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_restore_order() {
        assert_eq!(restore_order(vec![1, 2, 3], InputOrder::OldestFirst), vec![1, 2, 3]);
        assert_eq!(restore_order(vec![1, 2, 3], InputOrder::NewestFirst), vec![3, 2, 1]);
    }
}
