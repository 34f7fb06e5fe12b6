//! Discrete signals anchored at an arbitrary integer start index.
//!
//! A [`DiscreteSignal`] is an ordered run of real samples plus the global
//! index of its first sample, so signals need not be zero-based. Nothing
//! here mutates in place; every operation allocates a fresh signal.
//!
//! Two "no content" sentinels exist and are distinct: the empty signal
//! (`{values: [], start_index: 0}`, produced by combining zero signals) and
//! the degenerate zero signal (`{values: [0], start_index: 0}`, produced by
//! trimming an all-zero signal). [`DiscreteSignal::shape`] classifies a
//! signal so callers can pattern-match instead of inspecting lengths.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::{Float, SNAP_EPSILON};

/// Inclusive integer index range.
///
/// `start > end` signals "no valid range"; operations receiving one fall
/// back to the degenerate zero signal and callers are expected to substitute
/// their own fallback range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: i64,
    pub end: i64,
}

impl IndexRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// True when `start > end`, i.e. the range holds no indices.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of indices covered, zero for an empty range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    pub fn contains(&self, index: i64) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Content classification of a [`DiscreteSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalShape {
    /// No samples at all (`combine` of an empty list).
    Empty,
    /// Samples exist but every magnitude is at or below the relevance
    /// threshold.
    AllZero,
    /// At least one sample carries signal content.
    Dense,
}

/// A run of real samples starting at `start_index`; the domain is
/// `[start_index, start_index + values.len() - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteSignal<T: Float> {
    pub values: Vec<T>,
    pub start_index: i64,
}

impl<T: Float> DiscreteSignal<T> {
    pub fn new(values: Vec<T>, start_index: i64) -> Self {
        Self {
            values,
            start_index,
        }
    }

    /// The empty sentinel: no samples, anchored at zero.
    pub fn empty() -> Self {
        Self {
            values: Vec::new(),
            start_index: 0,
        }
    }

    /// The degenerate zero sentinel: a single zero sample at index zero.
    pub fn zero() -> Self {
        Self {
            values: vec![T::zero()],
            start_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Global index of the last sample. `None` for the empty signal.
    pub fn end_index(&self) -> Option<i64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.start_index + self.values.len() as i64 - 1)
        }
    }

    /// The signal's domain as an [`IndexRange`], `None` for the empty signal.
    pub fn domain(&self) -> Option<IndexRange> {
        self.end_index()
            .map(|end| IndexRange::new(self.start_index, end))
    }

    /// Global index of every sample, in order.
    pub fn indices(&self) -> Vec<i64> {
        (0..self.values.len() as i64)
            .map(|i| self.start_index + i)
            .collect()
    }

    /// Classify the signal content.
    pub fn shape(&self) -> SignalShape {
        if self.values.is_empty() {
            return SignalShape::Empty;
        }
        let threshold = T::from_f64(SNAP_EPSILON);
        if self.values.iter().any(|v| v.abs() > threshold) {
            SignalShape::Dense
        } else {
            SignalShape::AllZero
        }
    }

    /// Clip the signal to the span of samples whose magnitude exceeds the
    /// relevance threshold, expanded by `padding` samples on each side and
    /// clamped to the original domain. An all-zero or empty signal trims to
    /// the degenerate [`DiscreteSignal::zero`] sentinel.
    pub fn trim_to_relevant_range(&self, padding: usize) -> Self {
        let threshold = T::from_f64(SNAP_EPSILON);
        let mut first = None;
        let mut last = 0;
        for (i, v) in self.values.iter().enumerate() {
            if v.abs() > threshold {
                if first.is_none() {
                    first = Some(i);
                }
                last = i;
            }
        }
        let Some(first) = first else {
            return Self::zero();
        };
        let trim_start = first.saturating_sub(padding);
        let trim_end = (last + padding).min(self.values.len() - 1);
        Self {
            values: self.values[trim_start..=trim_end].to_vec(),
            start_index: self.start_index + trim_start as i64,
        }
    }
}

/// Build `amplitude · δ[n - delay]` sampled over `range`.
///
/// A `delay` outside `range` is not an error; the result is simply all-zero
/// over the range. An empty range yields the degenerate zero signal.
pub fn impulse<T: Float>(amplitude: T, delay: i64, range: IndexRange) -> DiscreteSignal<T> {
    if range.is_empty() {
        return DiscreteSignal::zero();
    }
    let mut values = vec![T::zero(); range.len()];
    if range.contains(delay) {
        values[(delay - range.start) as usize] = amplitude;
    }
    DiscreteSignal::new(values, range.start)
}

/// Build `amplitude · u[n - delay]` sampled over `range`: `amplitude` for
/// every index at or past `delay`, zero before. An empty range yields the
/// degenerate zero signal.
pub fn unit_step<T: Float>(amplitude: T, delay: i64, range: IndexRange) -> DiscreteSignal<T> {
    if range.is_empty() {
        return DiscreteSignal::zero();
    }
    let values = (range.start..=range.end)
        .map(|n| if n >= delay { amplitude } else { T::zero() })
        .collect();
    DiscreteSignal::new(values, range.start)
}

/// Sum a set of signals over the union of their domains.
///
/// The result spans `[min start_index, max end index]` across all inputs,
/// zero-filled, with each signal's samples added at their aligned positions.
/// An empty input list (or one containing only empty signals) yields
/// [`DiscreteSignal::empty`] — distinct from the zero sentinel.
pub fn combine<T: Float>(signals: &[DiscreteSignal<T>]) -> DiscreteSignal<T> {
    let mut min_index: Option<i64> = None;
    let mut max_index: Option<i64> = None;
    for signal in signals {
        let Some(end) = signal.end_index() else {
            continue;
        };
        min_index = Some(min_index.map_or(signal.start_index, |m| m.min(signal.start_index)));
        max_index = Some(max_index.map_or(end, |m| m.max(end)));
    }
    let (Some(min_index), Some(max_index)) = (min_index, max_index) else {
        return DiscreteSignal::empty();
    };

    let total_len = (max_index - min_index + 1) as usize;
    let mut values = vec![T::zero(); total_len];
    for signal in signals {
        for (i, &v) in signal.values.iter().enumerate() {
            let slot = (signal.start_index - min_index) as usize + i;
            values[slot] = values[slot] + v;
        }
    }
    DiscreteSignal::new(values, min_index)
}
