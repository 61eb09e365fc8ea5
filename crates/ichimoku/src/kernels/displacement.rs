//! Fixed-lag FIFO used to shift values forward in time.
//!
//! Leading spans are plotted `displacement` bars ahead of the bar they were
//! computed on. Consumed in chronological order, that is the same as
//! releasing each value `displacement` pushes after it was queued.
//!
//! # Example
//!
//! ```
//! use ichimoku::kernels::displacement::DisplacementBuffer;
//!
//! let mut buffer = DisplacementBuffer::new(2);
//! assert_eq!(buffer.push(1.0_f64), None);
//! assert_eq!(buffer.push(2.0), None);
//! assert_eq!(buffer.push(3.0), Some(1.0));
//! assert_eq!(buffer.push(4.0), Some(2.0));
//! ```

use std::collections::VecDeque;

use super::MAX_RESERVED;

/// A FIFO that releases each value exactly `displacement` pushes later.
///
/// A displacement of zero releases every value on the push that queued it.
#[derive(Debug, Clone)]
pub struct DisplacementBuffer<T> {
    displacement: usize,
    pending: VecDeque<T>,
}

impl<T: Copy> DisplacementBuffer<T> {
    /// Creates an empty buffer with the given lag.
    #[must_use]
    pub fn new(displacement: usize) -> Self {
        Self {
            displacement,
            pending: VecDeque::with_capacity(displacement.saturating_add(1).min(MAX_RESERVED)),
        }
    }

    /// Returns the configured lag.
    #[must_use]
    pub const fn displacement(&self) -> usize {
        self.displacement
    }

    /// Returns the number of values waiting to be released.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no value is waiting.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queues `value` and releases the oldest queued value once more than
    /// `displacement` values have been pushed.
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        self.pending.push_back(value);
        if self.pending.len() > self.displacement {
            self.pending.pop_front()
        } else {
            None
        }
    }

    /// Values queued but not yet released, oldest first.
    pub fn pending(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.pending.iter()
    }

    /// Drops every pending value.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
