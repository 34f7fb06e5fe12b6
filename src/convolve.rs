//! Discrete convolution over index-anchored signals.
//!
//! The engine is intentionally the direct O(N·M) sum — there is no
//! FFT-accelerated path. Sequence lengths here are display-bounded, and the
//! direct form keeps the index bookkeeping for non-zero-based signals
//! obvious.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::Float;
use crate::signal::{DiscreteSignal, IndexRange};

/// Trim padding applied by [`convolve_auto_range`] around the relevant
/// region of the result.
const AUTO_RANGE_PADDING: usize = 3;

/// Plain zero-based convolution of two sample slices:
/// `y[n] = Σ_k f[k]·g[n−k]`, length `f.len() + g.len() − 1`.
///
/// Either slice empty yields an empty result.
pub fn convolve<T: Float>(f: &[T], g: &[T]) -> Vec<T> {
    if f.is_empty() || g.is_empty() {
        return Vec::new();
    }
    let result_len = f.len() + g.len() - 1;
    let mut result = vec![T::zero(); result_len];
    for (n, slot) in result.iter_mut().enumerate() {
        for (k, &fk) in f.iter().enumerate() {
            if n >= k && n - k < g.len() {
                *slot = *slot + fk * g[n - k];
            }
        }
    }
    result
}

/// Full convolution of two index-anchored signals.
///
/// Convolution is index-additive: the result starts at
/// `f.start_index + g.start_index` and spans
/// `f.len() + g.len() − 1` samples. Either input empty yields the empty
/// sentinel.
pub fn convolve_full<T: Float>(
    f: &DiscreteSignal<T>,
    g: &DiscreteSignal<T>,
) -> DiscreteSignal<T> {
    if f.is_empty() || g.is_empty() {
        return DiscreteSignal::empty();
    }
    DiscreteSignal::new(
        convolve(&f.values, &g.values),
        f.start_index + g.start_index,
    )
}

/// Convolve `f` and `g`, then extract exactly the samples whose global index
/// lies in `output_range`, zero-filling requested indices outside the
/// convolution's support.
///
/// Returns the extracted signal together with the global index of each of
/// its samples. When `output_range` does not overlap the support at all, the
/// result is the degenerate single-zero signal anchored at
/// `output_range.start` — callers never receive a zero-length sequence.
pub fn convolve_to_range<T: Float>(
    f: &DiscreteSignal<T>,
    g: &DiscreteSignal<T>,
    output_range: IndexRange,
) -> (DiscreteSignal<T>, Vec<i64>) {
    let full = convolve_full(f, g);

    let start_offset = output_range.start - full.start_index;
    let end_offset = output_range.end - full.start_index;
    let clamped_start = start_offset.max(0);
    let clamped_end = end_offset.min(full.values.len() as i64 - 1);

    if clamped_start > clamped_end {
        let result = DiscreteSignal::new(vec![T::zero()], output_range.start);
        let indices = result.indices();
        return (result, indices);
    }

    let mut values = vec![T::zero(); output_range.len()];
    for i in clamped_start..=clamped_end {
        let slot = (i - start_offset) as usize;
        values[slot] = full.values[i as usize];
    }
    let result = DiscreteSignal::new(values, output_range.start);
    let indices = result.indices();
    (result, indices)
}

/// Convolve `f` and `g` and clip the result to its relevant region
/// (non-zero span plus [`AUTO_RANGE_PADDING`] samples each side), with the
/// matching global indices.
pub fn convolve_auto_range<T: Float>(
    f: &DiscreteSignal<T>,
    g: &DiscreteSignal<T>,
) -> (DiscreteSignal<T>, Vec<i64>) {
    let trimmed = convolve_full(f, g).trim_to_relevant_range(AUTO_RANGE_PADDING);
    let indices = trimmed.indices();
    (trimmed, indices)
}
