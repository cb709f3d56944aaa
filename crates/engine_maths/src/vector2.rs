//! 2D vector type.

use crate::scalar::{FloatScalar, Scalar, inv_sqrt, is_zero};
use num_traits::{Float, One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector with public `x` and `y` components.
///
/// Generic over the component type; use [`Vector2i`], [`Vector2f`] or
/// [`Vector2d`] for integer, single- and double-precision coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

pub type Vector2i = Vector2<i32>;
pub type Vector2f = Vector2<f32>;
pub type Vector2d = Vector2<f64>;

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Dot product. Order does not matter.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared length. Float result even for integer components.
    #[inline]
    pub fn length_sq(self) -> T::Float {
        self.dot(self).to_float()
    }

    /// Length. Float result even for integer components.
    #[inline]
    pub fn length(self) -> T::Float {
        self.length_sq().sqrt()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> T::Float {
        (other - self).length()
    }

    /// Angle between two vectors in radians.
    pub fn angle_between(self, other: Self) -> T::Float {
        let denominator = self.length() * other.length();
        if is_zero(denominator) {
            return T::Float::zero();
        }
        let cos = self.dot(other).to_float() / denominator;
        // Clamp against rounding drift before acos.
        cos.min(T::Float::one()).max(-T::Float::one()).acos()
    }
}

impl<T: FloatScalar> Vector2<T> {
    /// Unit-length vector in the same direction.
    ///
    /// A vector whose squared length is within epsilon of zero cannot be
    /// normalised; the zero vector is returned instead of dividing by zero.
    pub fn normalised(self) -> Self {
        let length_sq = self.length_sq();
        if is_zero(length_sq) {
            return Self::zero();
        }
        self * inv_sqrt(length_sq)
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, v: Self) {
        *self = *self + v;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, v: Self) {
        *self = *self - v;
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            #[inline]
            fn mul(self, v: Vector2<$t>) -> Vector2<$t> {
                v * self
            }
        }
    )*};
}
scalar_lhs_mul!(i32, f32, f64);
