//! 3D vector type.

use crate::scalar::{FloatScalar, Scalar, inv_sqrt, is_zero};
use num_traits::{Float, One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 3D vector with public `x`, `y` and `z` components.
///
/// Generic over the component type; use [`Vector3i`], [`Vector3f`] or
/// [`Vector3d`] for integer, single- and double-precision coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vector3i = Vector3<i32>;
pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Dot product. Order does not matter.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product. Order matters: `v.cross(w) == -(w.cross(v))`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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

impl<T: FloatScalar> Vector3<T> {
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

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, v: Self) {
        *self = *self + v;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, v: Self) {
        *self = *self - v;
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            #[inline]
            fn mul(self, v: Vector3<$t>) -> Vector3<$t> {
                v * self
            }
        }
    )*};
}
scalar_lhs_mul!(i32, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_and_negation_cancel() {
        let v = Vector3::new(3.0f32, -4.0, 0.5);
        assert_eq!(v + (-v), Vector3::zero());

        let vi = Vector3::new(5, -2, 9);
        assert_eq!(vi + (-vi), Vector3::zero());
    }

    #[test]
    fn dot_is_commutative() {
        let v = Vector3::new(1.5f64, -2.0, 3.0);
        let w = Vector3::new(4.0, 0.25, -1.0);
        assert_eq!(v.dot(w), w.dot(v));
    }

    #[test]
    fn cross_is_anti_commutative() {
        let v = Vector3::new(1.0f32, 2.0, 3.0);
        let w = Vector3::new(-4.0, 5.0, 0.5);
        assert_eq!(v.cross(w), -(w.cross(v)));
    }

    #[test]
    fn cross_is_orthogonal_to_both_inputs() {
        let v = Vector3::new(1.0f64, 2.0, 3.0);
        let w = Vector3::new(-4.0, 5.0, 0.5);
        let cross = v.cross(w);
        assert!(v.dot(cross).abs() < 1.0e-12);
        assert!(w.dot(cross).abs() < 1.0e-12);
    }

    #[test]
    fn cross_of_unit_axes() {
        let x = Vector3::new(1.0f32, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn integer_length_is_float() {
        let v = Vector3::new(2, 3, 6);
        assert_eq!(v.length(), 7.0f32);
        assert_eq!(v.length_sq(), 49.0f32);
    }

    #[test]
    fn normalised_has_unit_length() {
        let v = Vector3::new(3.0f64, -4.0, 12.0);
        assert!((v.normalised().length() - 1.0).abs() < 1.0e-12);
    }

    #[test]
    fn normalising_zero_returns_zero() {
        assert_eq!(Vector3::<f64>::zero().normalised(), Vector3::zero());
        assert_eq!(
            Vector3::new(1.0e-18f64, 0.0, 0.0).normalised(),
            Vector3::zero()
        );
    }

    #[test]
    fn scalar_multiply_both_sides() {
        let v = Vector3::new(1, -2, 3);
        assert_eq!(v * 2, Vector3::new(2, -4, 6));
        assert_eq!(2 * v, v * 2);
    }

    #[test]
    fn angle_between_perpendicular_axes() {
        let angle = Vector3::new(0.0f64, 1.0, 0.0).angle_between(Vector3::new(0.0, 0.0, 2.0));
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1.0e-12);
    }
}
