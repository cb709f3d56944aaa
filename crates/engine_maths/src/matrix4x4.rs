//! 4x4 affine transform matrix.
//!
//! Row-major with row-vector convention: points transform as `p * M`, so the
//! translation lives in row 3 and transforms compose left to right
//! (`scale * rotate * translate` applies the scale first).

use crate::scalar::FloatScalar;
use crate::vector3::Vector3;
use std::ops::Mul;

/// 4x4 affine transform (rotation, scale, translation).
///
/// Float and double components only; use [`Matrix4x4f`] or [`Matrix4x4d`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4x4<T> {
    pub m: [[T; 4]; 4],
}

pub type Matrix4x4f = Matrix4x4<f32>;
pub type Matrix4x4d = Matrix4x4<f64>;

impl<T: FloatScalar> Matrix4x4<T> {
    #[inline]
    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        Self { m: rows }
    }

    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self::from_rows([
            [o, z, z, z],
            [z, o, z, z],
            [z, z, o, z],
            [z, z, z, o],
        ])
    }

    /// Pure translation by `position`.
    pub fn translation(position: Vector3<T>) -> Self {
        let mut matrix = Self::identity();
        matrix.set_position(position);
        matrix
    }

    /// Per-axis scale.
    pub fn scaling(scales: Vector3<T>) -> Self {
        let mut matrix = Self::identity();
        matrix.m[0][0] = scales.x;
        matrix.m[1][1] = scales.y;
        matrix.m[2][2] = scales.z;
        matrix
    }

    /// Same scale on all three axes.
    pub fn uniform_scaling(scale: T) -> Self {
        Self::scaling(Vector3::new(scale, scale, scale))
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut matrix = Self::identity();
        matrix.m[1][1] = cos;
        matrix.m[1][2] = sin;
        matrix.m[2][1] = -sin;
        matrix.m[2][2] = cos;
        matrix
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut matrix = Self::identity();
        matrix.m[0][0] = cos;
        matrix.m[0][2] = -sin;
        matrix.m[2][0] = sin;
        matrix.m[2][2] = cos;
        matrix
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut matrix = Self::identity();
        matrix.m[0][0] = cos;
        matrix.m[0][1] = sin;
        matrix.m[1][0] = -sin;
        matrix.m[1][1] = cos;
        matrix
    }

    /// Build a full affine transform: scale, then rotate, then translate.
    ///
    /// `rotations` are Euler angles in radians, applied roll (Z), pitch (X),
    /// then yaw (Y).
    pub fn from_transform(
        position: Vector3<T>,
        rotations: Vector3<T>,
        scales: Vector3<T>,
    ) -> Self {
        Self::scaling(scales)
            * Self::rotation_z(rotations.z)
            * Self::rotation_x(rotations.x)
            * Self::rotation_y(rotations.y)
            * Self::translation(position)
    }

    /// Build a full affine transform with a uniform scale.
    pub fn from_transform_uniform(position: Vector3<T>, rotations: Vector3<T>, scale: T) -> Self {
        Self::from_transform(position, rotations, Vector3::new(scale, scale, scale))
    }

    /// XYZ part of row `row` (0-3).
    #[inline]
    pub fn row(&self, row: usize) -> Vector3<T> {
        Vector3::new(self.m[row][0], self.m[row][1], self.m[row][2])
    }

    /// Overwrite the XYZ part of row `row`, leaving the fourth column alone.
    #[inline]
    pub fn set_row(&mut self, row: usize, v: Vector3<T>) {
        self.m[row][0] = v.x;
        self.m[row][1] = v.y;
        self.m[row][2] = v.z;
    }

    /// Local X axis of the transform (row 0).
    #[inline]
    pub fn x_axis(&self) -> Vector3<T> {
        self.row(0)
    }

    /// Local Y axis of the transform (row 1).
    #[inline]
    pub fn y_axis(&self) -> Vector3<T> {
        self.row(1)
    }

    /// Local Z axis of the transform (row 2).
    #[inline]
    pub fn z_axis(&self) -> Vector3<T> {
        self.row(2)
    }

    /// Translation part of the transform (row 3).
    #[inline]
    pub fn position(&self) -> Vector3<T> {
        self.row(3)
    }

    #[inline]
    pub fn set_x_axis(&mut self, v: Vector3<T>) {
        self.set_row(0, v);
    }

    #[inline]
    pub fn set_y_axis(&mut self, v: Vector3<T>) {
        self.set_row(1, v);
    }

    #[inline]
    pub fn set_z_axis(&mut self, v: Vector3<T>) {
        self.set_row(2, v);
    }

    #[inline]
    pub fn set_position(&mut self, v: Vector3<T>) {
        self.set_row(3, v);
    }

    /// Transform a point (w = 1): scale, rotation and translation all apply.
    pub fn transform_point(&self, p: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            p.x * self.m[0][0] + p.y * self.m[1][0] + p.z * self.m[2][0] + self.m[3][0],
            p.x * self.m[0][1] + p.y * self.m[1][1] + p.z * self.m[2][1] + self.m[3][1],
            p.x * self.m[0][2] + p.y * self.m[1][2] + p.z * self.m[2][2] + self.m[3][2],
        )
    }

    /// Transform a direction (w = 0): translation does not apply.
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            v.x * self.m[0][0] + v.y * self.m[1][0] + v.z * self.m[2][0],
            v.x * self.m[0][1] + v.y * self.m[1][1] + v.z * self.m[2][1],
            v.x * self.m[0][2] + v.y * self.m[1][2] + v.z * self.m[2][2],
        )
    }
}

impl<T: FloatScalar> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> Mul for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[T::zero(); 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let mut sum = T::zero();
                for k in 0..4 {
                    sum = sum + self.m[r][k] * rhs.m[k][c];
                }
                *cell = sum;
            }
        }
        Self { m: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!(
            a.distance(b) < 1.0e-5,
            "expected {a:?} to be close to {b:?}"
        );
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = Matrix4x4::from_transform(
            Vector3::new(1.0f32, 2.0, 3.0),
            Vector3::new(0.3, -0.2, 0.9),
            Vector3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(m * Matrix4x4::identity(), m);
        assert_eq!(Matrix4x4::identity() * m, m);
    }

    #[test]
    fn translation_moves_points_but_not_vectors() {
        let m = Matrix4x4::translation(Vector3::new(10.0f32, -5.0, 1.0));
        assert_close(
            m.transform_point(Vector3::new(1.0, 2.0, 3.0)),
            Vector3::new(11.0, -3.0, 4.0),
        );
        assert_close(
            m.transform_vector(Vector3::new(1.0, 2.0, 3.0)),
            Vector3::new(1.0, 2.0, 3.0),
        );
    }

    #[test]
    fn rotation_z_quarter_turn_maps_x_to_y() {
        let m = Matrix4x4::rotation_z(FRAC_PI_2);
        assert_close(
            m.transform_point(Vector3::new(1.0, 0.0, 0.0)),
            Vector3::new(0.0, 1.0, 0.0),
        );
    }

    #[test]
    fn rotation_x_quarter_turn_maps_y_to_z() {
        let m = Matrix4x4::rotation_x(FRAC_PI_2);
        assert_close(
            m.transform_point(Vector3::new(0.0, 1.0, 0.0)),
            Vector3::new(0.0, 0.0, 1.0),
        );
    }

    #[test]
    fn rotation_y_quarter_turn_maps_z_to_x() {
        let m = Matrix4x4::rotation_y(FRAC_PI_2);
        assert_close(
            m.transform_point(Vector3::new(0.0, 0.0, 1.0)),
            Vector3::new(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn from_transform_matches_manual_composition() {
        let position = Vector3::new(1.0f32, 2.0, 3.0);
        let rotations = Vector3::new(0.4, 1.1, -0.7);
        let scales = Vector3::new(2.0, 0.5, 3.0);

        let composed = Matrix4x4::scaling(scales)
            * Matrix4x4::rotation_z(rotations.z)
            * Matrix4x4::rotation_x(rotations.x)
            * Matrix4x4::rotation_y(rotations.y)
            * Matrix4x4::translation(position);

        assert_eq!(
            Matrix4x4::from_transform(position, rotations, scales),
            composed
        );
    }

    #[test]
    fn from_transform_applies_scale_rotate_translate_in_order() {
        // Scale x2, quarter turn about Z, then move along X.
        let m = Matrix4x4::from_transform(
            Vector3::new(5.0f32, 0.0, 0.0),
            Vector3::new(0.0, 0.0, FRAC_PI_2),
            Vector3::new(2.0, 2.0, 2.0),
        );
        // (1,0,0) -> scaled (2,0,0) -> rotated (0,2,0) -> translated (5,2,0).
        assert_close(
            m.transform_point(Vector3::new(1.0, 0.0, 0.0)),
            Vector3::new(5.0, 2.0, 0.0),
        );
    }

    #[test]
    fn axis_accessors_address_the_right_rows() {
        let mut m = Matrix4x4::<f32>::identity();
        m.set_x_axis(Vector3::new(1.0, 2.0, 3.0));
        m.set_z_axis(Vector3::new(7.0, 8.0, 9.0));
        m.set_position(Vector3::new(-1.0, -2.0, -3.0));

        assert_eq!(m.x_axis(), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.y_axis(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(m.z_axis(), Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(m.position(), Vector3::new(-1.0, -2.0, -3.0));
        // The fourth column is untouched by row setters.
        assert_eq!(m.m[3][3], 1.0);
    }

    #[test]
    fn uniform_scaling_scales_every_axis() {
        let m = Matrix4x4::uniform_scaling(3.0f64);
        let p = m.transform_point(Vector3::new(1.0, -2.0, 0.5));
        assert_eq!(p, Vector3::new(3.0, -6.0, 1.5));
    }
}
