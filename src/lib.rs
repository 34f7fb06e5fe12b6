//! # sigcalc - educational DSP core
//!
//! The computational core of a web calculator for signal-processing
//! transforms: a radix-2 Cooley–Tukey FFT/IFFT over complex sequences, a
//! discrete-signal algebra built from impulse and step primitives, an
//! expression parser for those primitives, and a discrete convolution engine
//! with index-range extraction. Presentation concerns (rendering, charting,
//! input widgets) live outside this crate; it consumes raw text and display
//! ranges and produces numeric sequences.
//!
//! ## Design points
//!
//! - **Pure and synchronous.** Every operation allocates a fresh result;
//!   inputs are never mutated or aliased. Calls are safe from concurrent
//!   call sites as long as each call owns its inputs.
//! - **Epsilon snapping.** Complex add/sub/scale/exp outputs snap components
//!   below `1e-10` to zero. The inverse FFT additionally snaps below `1e-5`
//!   and rounds to six decimals; the forward FFT does not. This asymmetry is
//!   part of the contract.
//! - **Index-anchored signals.** A [`DiscreteSignal`] carries the global
//!   index of its first sample, so signals need not start at zero and
//!   convolution adds start indices.
//!
//! ## Cargo features
//!
//! - `std` (default): implement `std::error::Error` for the error enums
//! - `verbose-logging`: trace transform stages and dropped parser terms
//!   via the `log` crate
//! - `internal-tests`: enable randomized property tests (`proptest`, `rand`)
//!
//! ## Example
//!
//! ```
//! use sigcalc::{fft, ifft, parse_complex_list, Complex64};
//!
//! let samples = parse_complex_list::<f64>("1, 0, 0, 0").unwrap();
//! let spectrum = fft(&samples).unwrap();
//! assert!(spectrum.iter().all(|bin| (bin.re - 1.0).abs() < 1e-10));
//! let recovered = ifft(&spectrum).unwrap();
//! assert_eq!(recovered[0], Complex64::new(1.0, 0.0));
//! ```

#![no_std]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Complex arithmetic with epsilon snapping.
pub mod num;

/// Radix-2 Cooley–Tukey FFT/IFFT engine.
pub mod fft;

/// Discrete signals anchored at arbitrary integer start indices.
pub mod signal;

/// Signal expression parsing (impulse/step terms and numeric lists).
pub mod expr;

/// Discrete convolution with index-range extraction.
pub mod convolve;

/// Free-text parsing of complex sample lists.
pub mod input;

pub use convolve::{convolve, convolve_auto_range, convolve_full, convolve_to_range};
pub use expr::{auto_range, parse_signal_expression};
pub use fft::{bit_reverse, fft, ifft, Direction, FftError, FftPlanner};
pub use input::{parse_complex, parse_complex_list, ParseComplexError};
pub use num::{Complex, Complex32, Complex64, Float, SNAP_EPSILON};
pub use signal::{combine, impulse, unit_step, DiscreteSignal, IndexRange, SignalShape};
