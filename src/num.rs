//! Complex arithmetic with epsilon snapping.
//!
//! Every operation returns a fresh value; nothing is mutated in place. The
//! outputs of [`Complex::add`], [`Complex::sub`], [`Complex::scale`] and
//! [`Complex::expi`] have each component snapped to exactly zero when its
//! magnitude falls below [`SNAP_EPSILON`], so floating-point residue does not
//! accumulate through the butterfly stages of the transform. Multiplication
//! is deliberately left raw.

use libm::{cos, cosf, fabs, fabsf, round, roundf, sin, sinf};

/// Components with magnitude below this threshold snap to exactly `0.0`.
pub const SNAP_EPSILON: f64 = 1e-10;

/// Minimal float trait so the transforms stay generic over `f32`/`f64`
/// without pulling in an external numerics crate.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    /// Attempt to convert a `usize` into the floating-point type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn abs(self) -> Self;
    /// Round to the nearest integer, ties away from zero.
    fn round(self) -> Self;
    fn pi() -> Self;

    /// Snap values of negligible magnitude to exactly zero.
    #[inline(always)]
    fn snap(self) -> Self {
        if self.abs() < Self::from_f64(SNAP_EPSILON) {
            Self::zero()
        } else {
            self
        }
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 24;
        if x < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    fn cos(self) -> Self {
        cosf(self)
    }
    fn sin(self) -> Self {
        sinf(self)
    }
    fn abs(self) -> Self {
        fabsf(self)
    }
    fn round(self) -> Self {
        roundf(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 53;
        if x < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    fn cos(self) -> Self {
        cos(self)
    }
    fn sin(self) -> Self {
        sin(self)
    }
    fn abs(self) -> Self {
        fabs(self)
    }
    fn round(self) -> Self {
        round(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
}

/// Immutable complex value; all arithmetic returns new instances.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }

    /// Twiddle factor generator: `e^{iθ} = (cos θ, sin θ)`, snapped.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        Self {
            re: theta.cos().snap(),
            im: theta.sin().snap(),
        }
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: (self.re + other.re).snap(),
            im: (self.im + other.im).snap(),
        }
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: (self.re - other.re).snap(),
            im: (self.im - other.im).snap(),
        }
    }

    /// Raw complex product. The snap is intentionally not applied here:
    /// twiddle inputs are already snapped and snapping products would bias
    /// the butterfly accumulation.
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Scale both components by a real factor, snapped.
    #[inline(always)]
    pub fn scale(self, factor: T) -> Self {
        Self {
            re: (self.re * factor).snap(),
            im: (self.im * factor).snap(),
        }
    }

    /// Complex conjugate.
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_snaps_residue_to_zero() {
        let a = Complex64::new(1.0, 5e-11);
        let b = Complex64::new(-1.0, 4e-11);
        let sum = a.add(b);
        assert_eq!(sum.re, 0.0);
        assert_eq!(sum.im, 0.0);
    }

    #[test]
    fn sub_and_scale_snap() {
        let a = Complex64::new(1.0 + 1e-12, 2.0);
        let d = a.sub(Complex64::new(1.0, 2.0));
        assert_eq!(d, Complex64::zero());
        let s = Complex64::new(1e-3, -1.0).scale(1e-8);
        assert_eq!(s.re, 0.0);
        assert_eq!(s.im, -1e-8);
    }

    #[test]
    fn mul_is_not_snapped() {
        let a = Complex64::new(1e-6, 0.0);
        let b = Complex64::new(1e-6, 0.0);
        let p = a.mul(b);
        assert_eq!(p.re, 1e-12);
    }

    #[test]
    fn expi_quarter_turns_are_exact() {
        let q = Complex64::expi(core::f64::consts::FRAC_PI_2);
        assert_eq!(q.re, 0.0);
        assert_eq!(q.im, 1.0);
        let h = Complex64::expi(core::f64::consts::PI);
        assert_eq!(h.re, -1.0);
        assert_eq!(h.im, 0.0);
    }

    #[test]
    fn f32_path_matches_hand_computation() {
        let a = Complex32::new(1.5, -2.0);
        let b = Complex32::new(0.5, 4.0);
        let p = a.mul(b);
        assert_eq!(p.re, 1.5 * 0.5 - (-2.0) * 4.0);
        assert_eq!(p.im, 1.5 * 4.0 + (-2.0) * 0.5);
    }
}
