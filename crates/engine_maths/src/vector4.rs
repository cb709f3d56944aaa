//! 4D vector type.

use crate::scalar::Scalar;
use crate::vector3::Vector3;
use num_traits::Float;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 4D vector with public `x`, `y`, `z` and `w` components.
///
/// Mostly used as homogeneous coordinates alongside [`Vector3`]; the `xyz`
/// truncation drops `w`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Vector4i = Vector4<i32>;
pub type Vector4f = Vector4<f32>;
pub type Vector4d = Vector4<f64>;

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Extend a 3D vector with an explicit `w`.
    #[inline]
    pub fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// First three components, dropping `w`.
    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Squared length. Float result even for integer components.
    #[inline]
    pub fn length_sq(self) -> T::Float {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).to_float()
    }

    /// Length. Float result even for integer components.
    #[inline]
    pub fn length(self) -> T::Float {
        self.length_sq().sqrt()
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector3<T> {
    /// Truncating conversion: drops `w`.
    #[inline]
    fn from(v: Vector4<T>) -> Self {
        v.xyz()
    }
}

impl<T: Scalar> Add for Vector4<T> {
    type Output = Self;

    #[inline]
    fn add(self, v: Self) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z, self.w + v.w)
    }
}

impl<T: Scalar> Sub for Vector4<T> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Self) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z, self.w - v.w)
    }
}

impl<T: Scalar> Neg for Vector4<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Scalar> AddAssign for Vector4<T> {
    #[inline]
    fn add_assign(&mut self, v: Self) {
        *self = *self + v;
    }
}

impl<T: Scalar> SubAssign for Vector4<T> {
    #[inline]
    fn sub_assign(&mut self, v: Self) {
        *self = *self - v;
    }
}

impl<T: Scalar> Mul<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl<T: Scalar> Div<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}

impl<T: Scalar> MulAssign<T> for Vector4<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: Scalar> DivAssign<T> for Vector4<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector4<$t>> for $t {
            type Output = Vector4<$t>;

            #[inline]
            fn mul(self, v: Vector4<$t>) -> Vector4<$t> {
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
    fn truncation_drops_w() {
        let v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));

        let truncated: Vector3<f32> = v.into();
        assert_eq!(truncated, v.xyz());
    }

    #[test]
    fn round_trip_through_vector3() {
        let v = Vector3::new(1, -2, 3);
        assert_eq!(Vector4::from_vector3(v, 1).xyz(), v);
    }

    #[test]
    fn addition_and_negation_cancel() {
        let v = Vector4::new(1.0f64, -2.0, 3.0, -4.0);
        assert_eq!(v + (-v), Vector4::zero());
    }

    #[test]
    fn integer_length_is_float() {
        let v = Vector4::new(2, 2, 2, 2);
        assert_eq!(v.length(), 4.0f32);
    }

    #[test]
    fn scalar_multiply_both_sides() {
        let v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v * 0.5, Vector4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(0.5 * v, v * 0.5);
    }
}
