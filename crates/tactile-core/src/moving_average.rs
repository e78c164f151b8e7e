//! Bounded-window moving average for smoothing one input stream.
//!
//! [`MovingAverageFilter`] keeps the most recent `capacity` samples and
//! returns their arithmetic mean on every [`update`](MovingAverageFilter::update).
//! Until the window fills, the mean covers only the samples seen so far, so
//! the first output always equals the first input.
//!
//! # Implementation
//!
//! The history lives in a ring buffer allocated once at construction, so
//! eviction is a single slot overwrite with no shifting or allocation. The
//! mean is summed over the window, oldest sample first, on every update. The
//! result is bit-for-bit the mean of the last `capacity` samples: a large
//! sample cannot leave stale rounding behind once it is evicted, and a `NaN`
//! or infinite sample stops affecting the output as soon as it leaves.
//!
//! # Example
//!
//! ```rust
//! use tactile_core::MovingAverageFilter;
//!
//! let mut filter = MovingAverageFilter::new(Some(3));
//! assert_eq!(filter.update(1.0), 1.0);
//! assert_eq!(filter.update(2.0), 1.5);
//! assert_eq!(filter.update(3.0), 2.0);
//! assert_eq!(filter.update(4.0), 3.0); // (2 + 3 + 4) / 3
//! ```

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Moving-average filter over the most recent samples of one stream.
///
/// Each instance belongs to exactly one input stream. `update` takes
/// `&mut self`; sharing a filter between threads needs external locking.
///
/// There is deliberately no reset: construct a new filter to clear history.
#[derive(Debug, Clone)]
pub struct MovingAverageFilter {
    /// Ring buffer, `buffer.len()` is the capacity
    buffer: Vec<f32>,
    /// Next slot to overwrite
    write_pos: usize,
    /// Number of valid samples, at most the capacity
    filled: usize,
}

impl MovingAverageFilter {
    /// Window length used when no capacity (or zero) is given.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Create a filter averaging the last `factor` samples.
    ///
    /// `None` and `Some(0)` both resolve to [`DEFAULT_FACTOR`](Self::DEFAULT_FACTOR),
    /// so an explicit zero behaves exactly like leaving the capacity out.
    pub fn new(factor: Option<usize>) -> Self {
        let capacity = Self::resolve_factor(factor);
        Self {
            buffer: vec![0.0; capacity],
            write_pos: 0,
            filled: 0,
        }
    }

    fn resolve_factor(factor: Option<usize>) -> usize {
        match factor {
            Some(n) if n > 0 => n,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    requested = ?factor,
                    capacity = Self::DEFAULT_FACTOR,
                    "moving average capacity defaulted"
                );
                Self::DEFAULT_FACTOR
            }
        }
    }

    /// Number of samples the window holds once full.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Push `value` into the window and return the mean of the window.
    ///
    /// The oldest sample is evicted once the window is full. The result is
    /// `sum(history) / len(history)`, which propagates `NaN` and `±inf` for as
    /// long as such a sample is inside the window.
    #[inline]
    pub fn update(&mut self, value: f32) -> f32 {
        self.buffer[self.write_pos] = value;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
        if self.filled < self.buffer.len() {
            self.filled += 1;
        }

        self.window_sum() / self.filled as f32
    }

    /// Sum of the valid samples, oldest first.
    fn window_sum(&self) -> f32 {
        if self.filled < self.buffer.len() {
            self.buffer[..self.filled].iter().sum()
        } else {
            let (newer, older) = self.buffer.split_at(self.write_pos);
            older.iter().chain(newer).sum()
        }
    }
}

impl Default for MovingAverageFilter {
    fn default() -> Self {
        Self::new(None)
    }
}
