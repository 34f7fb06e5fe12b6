//! Fast Fourier Transform (FFT) engine.
//!
//! Iterative radix-2 [Cooley–Tukey](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! forward and inverse transforms over complex sequences. Inputs of any
//! length are zero-padded up to the next power of two before the transform
//! runs; the output always has the padded length. A [`FftPlanner`] caches
//! per-stage twiddle tables for reuse across calls.
//!
//! The forward and inverse transforms deliberately apply different numeric
//! cleanup: both go through the per-operation snap in [`crate::num`], but
//! only the inverse finishes with a coarser pass that zeroes components below
//! `1e-5` and rounds the rest to six decimal digits. Round-trip tolerances
//! depend on this asymmetry, so it must not be "fixed".

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

use crate::num::{Complex, Float};

/// Inverse-transform components below this magnitude are zeroed in the final
/// rounding pass. Coarser than [`crate::num::SNAP_EPSILON`] on purpose: the
/// `1/N` scaling spreads accumulated error across every sample.
const OUTPUT_SNAP_EPSILON: f64 = 1e-5;

/// Scale factor used to round surviving inverse-transform components to six
/// decimal digits.
const OUTPUT_ROUND_SCALE: f64 = 1e6;

/// Errors that can occur while computing a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The input sequence was empty.
    EmptyInput,
    /// The working length is not a usable power of two. Unreachable through
    /// the public API because padding always produces one; kept as a
    /// defensive invariant check.
    InvalidSignalSize,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "signal must be non-empty"),
            FftError::InvalidSignalSize => {
                write!(f, "signal length must be a power of 2")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Transform direction, selecting the twiddle sign and the inverse-only
/// `1/N` scaling plus rounding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Reflect the low `bits` bits of `index`.
///
/// The iterative Cooley–Tukey layout consumes its input in bit-reversed
/// order. This is an involution: applying it twice with the same width
/// returns the original index.
#[inline]
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    let mut n = index;
    let mut reversed = 0;
    for _ in 0..bits {
        reversed = (reversed << 1) | (n & 1);
        n >>= 1;
    }
    reversed
}

/// Copy `signal` into a buffer zero-padded up to the next power of two.
/// Lengths that are already a power of two are copied unchanged; the target
/// size is always rounded up, never truncated.
fn pad_to_power_of_two<T: Float>(signal: &[Complex<T>]) -> Vec<Complex<T>> {
    let target = signal.len().next_power_of_two();
    let mut padded = signal.to_vec();
    padded.resize(target, Complex::zero());
    padded
}

/// Caches per-stage twiddle tables so repeated transforms of the same sizes
/// do not recompute `expi` for every butterfly.
///
/// The table for stage size `len` has `len/2` entries holding the snapped
/// values `exp(-2πi·j/len)` for `j = 0..len/2`. Inverse transforms conjugate
/// the cached entries on use, which is exactly `exp(+2πi·j/len)`.
pub struct FftPlanner<T: Float> {
    cache: HashMap<usize, Arc<[Complex<T>]>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Retrieve the forward twiddle table for stage size `n` (a power of
    /// two, `n >= 2`), computing and caching it on first use.
    pub fn get_twiddles(&mut self, n: usize) -> Arc<[Complex<T>]> {
        if let Some(table) = self.cache.get(&n) {
            return Arc::clone(table);
        }
        let half = n / 2;
        let step = -(T::one() + T::one()) * T::pi() / T::from_f64(n as f64);
        let mut table: Vec<Complex<T>> = Vec::with_capacity(half);
        for j in 0..half {
            let angle = step * T::from_f64(j as f64);
            table.push(Complex::expi(angle));
        }
        let table: Arc<[Complex<T>]> = Arc::from(table);
        self.cache.insert(n, Arc::clone(&table));
        table
    }

    /// Forward transform of `signal`, zero-padded to the next power of two.
    pub fn fft(&mut self, signal: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.transform(signal, Direction::Forward)
    }

    /// Inverse transform of `signal`, zero-padded to the next power of two,
    /// scaled by `1/N` and passed through the final rounding stage.
    pub fn ifft(&mut self, signal: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.transform(signal, Direction::Inverse)
    }

    /// Run the transform in the given direction. Pure over its input: the
    /// result is a freshly allocated buffer of the padded length.
    pub fn transform(
        &mut self,
        signal: &[Complex<T>],
        direction: Direction,
    ) -> Result<Vec<Complex<T>>, FftError> {
        if signal.is_empty() {
            return Err(FftError::EmptyInput);
        }
        let padded = pad_to_power_of_two(signal);
        let n = padded.len();
        if !n.is_power_of_two() {
            return Err(FftError::InvalidSignalSize);
        }
        let bits = n.trailing_zeros();

        let mut output = vec![Complex::zero(); n];
        for (i, &sample) in padded.iter().enumerate() {
            let reversed = bit_reverse(i, bits);
            #[cfg(feature = "verbose-logging")]
            log::trace!("bit-reverse: {} -> {}", i, reversed);
            output[reversed] = sample;
        }

        let mut size = 2;
        while size <= n {
            let half = size / 2;
            let twiddles = self.get_twiddles(size);
            #[cfg(feature = "verbose-logging")]
            log::trace!(
                "stage size {}: {} butterflies",
                size,
                (n / size) * half
            );
            let mut block = 0;
            while block < n {
                for j in 0..half {
                    let w = match direction {
                        Direction::Forward => twiddles[j],
                        Direction::Inverse => twiddles[j].conj(),
                    };
                    let even = output[block + j];
                    let odd = output[block + j + half].mul(w);
                    output[block + j] = even.add(odd);
                    output[block + j + half] = even.sub(odd);
                }
                block += size;
            }
            size *= 2;
        }

        if direction == Direction::Inverse {
            let n_t = T::from_usize(n).ok_or(FftError::InvalidSignalSize)?;
            let inv_n = T::one() / n_t;
            for value in output.iter_mut() {
                *value = value.scale(inv_n);
            }
            round_output(&mut output);
        }
        Ok(output)
    }
}

/// Final inverse-transform cleanup: zero components below
/// [`OUTPUT_SNAP_EPSILON`], round the rest to six decimal digits.
fn round_output<T: Float>(output: &mut [Complex<T>]) {
    let snap = T::from_f64(OUTPUT_SNAP_EPSILON);
    let scale = T::from_f64(OUTPUT_ROUND_SCALE);
    let clean = |x: T| -> T {
        if x.abs() < snap {
            T::zero()
        } else {
            (x * scale).round() / scale
        }
    };
    for value in output.iter_mut() {
        *value = Complex::new(clean(value.re), clean(value.im));
    }
}

/// Compute the forward FFT of `signal` with a throwaway planner.
///
/// The output length is the next power of two at or above `signal.len()`;
/// any padding appears as trailing spectrum samples the caller must account
/// for when interpreting results by index.
///
/// # Errors
/// [`FftError::EmptyInput`] if `signal` is empty.
pub fn fft<T: Float>(signal: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    FftPlanner::new().fft(signal)
}

/// Compute the inverse FFT of `signal` with a throwaway planner.
///
/// # Errors
/// [`FftError::EmptyInput`] if `signal` is empty.
pub fn ifft<T: Float>(signal: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    FftPlanner::new().ifft(signal)
}


#[cfg(all(feature = "internal-tests", test))]
mod property_tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn random_roundtrip_power_of_two_lengths() {
        let mut rng = StdRng::seed_from_u64(42);
        for &n in &[2usize, 4, 8, 16, 64, 256] {
            let signal: Vec<Complex64> = (0..n)
                .map(|_| Complex64::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
                .collect();
            let spectrum = fft(&signal).unwrap();
            let recovered = ifft(&spectrum).unwrap();
            assert_eq!(recovered.len(), n);
            for (a, b) in recovered.iter().zip(signal.iter()) {
                assert!((a.re - b.re).abs() < 1e-5, "re: {} vs {}", a.re, b.re);
                assert!((a.im - b.im).abs() < 1e-5, "im: {} vs {}", a.im, b.im);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_fft_ifft_roundtrip(
            len in proptest::sample::select(vec![2usize, 4, 8, 16, 32]),
            ref signal in proptest::collection::vec(-1000.0f64..1000.0, 32)
        ) {
            let data: Vec<Complex64> = signal
                .iter()
                .take(len)
                .map(|&x| Complex64::new(x, 0.0))
                .collect();
            let spectrum = fft(&data).unwrap();
            let recovered = ifft(&spectrum).unwrap();
            for (a, b) in recovered.iter().zip(data.iter()) {
                prop_assert!((a.re - b.re).abs() < 1e-2);
                prop_assert!((a.im - b.im).abs() < 1e-2);
            }
        }

        #[test]
        fn prop_output_length_is_next_power_of_two(len in 1usize..40) {
            let data = vec![Complex64::new(1.0, 0.0); len];
            let spectrum = fft(&data).unwrap();
            prop_assert_eq!(spectrum.len(), len.next_power_of_two());
        }
    }
}
