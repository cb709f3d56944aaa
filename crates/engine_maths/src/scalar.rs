//! Scalar component traits and convenience functions.
//!
//! One implementation serves integer, single- and double-precision
//! components. Operations that must produce a fractional result (lengths,
//! angles, reciprocal square roots) go through [`Scalar::Float`], which maps
//! `i32` to `f32` and leaves the float types alone.

use num_traits::{Float, Num, NumCast, One};
use std::ops::Neg;

/// A numeric vector/matrix component: `i32`, `f32` or `f64`.
pub trait Scalar: Num + NumCast + Neg<Output = Self> + PartialOrd + Copy {
    /// Floating-point type used when a fractional result is required.
    type Float: FloatScalar;

    /// Widen (or pass through) to [`Self::Float`].
    fn to_float(self) -> Self::Float;
}

impl Scalar for i32 {
    type Float = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self as f32
    }
}

impl Scalar for f32 {
    type Float = f32;

    #[inline]
    fn to_float(self) -> f32 {
        self
    }
}

impl Scalar for f64 {
    type Float = f64;

    #[inline]
    fn to_float(self) -> f64 {
        self
    }
}

/// A floating-point component (`f32` or `f64`).
pub trait FloatScalar: Float + Scalar<Float = Self> {
    /// Values with absolute value below this count as zero for [`is_zero`].
    const ZERO_EPSILON: Self;
}

impl FloatScalar for f32 {
    const ZERO_EPSILON: Self = 0.5e-6;
}

impl FloatScalar for f64 {
    const ZERO_EPSILON: Self = 0.5e-15;
}

/// Is `x` approximately zero for its precision?
#[inline]
pub fn is_zero<F: FloatScalar>(x: F) -> bool {
    x.abs() < F::ZERO_EPSILON
}

/// `1 / sqrt(x)`. Float result even for integer input.
#[inline]
pub fn inv_sqrt<T: Scalar>(x: T) -> T::Float {
    T::Float::one() / x.to_float().sqrt()
}

/// `x * x`.
#[inline]
pub fn square<T: Scalar>(x: T) -> T {
    x * x
}

/// Degrees to radians. Float result even for integer input.
#[inline]
pub fn to_radians<T: Scalar>(degrees: T) -> T::Float {
    degrees.to_float().to_radians()
}

/// Radians to degrees. Float result even for integer input.
#[inline]
pub fn to_degrees<T: Scalar>(radians: T) -> T::Float {
    radians.to_float().to_degrees()
}
