//! Maths utilities for the engine.
//!
//! ## Core types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - fixed-size vectors, generic over
//!   integer, single- and double-precision components
//! - [`Matrix4x4`] - 4x4 affine transform matrix (float/double only)
//!
//! Aliases name the concrete component types: [`Vector3i`], [`Vector3f`],
//! [`Vector3d`] and so on.
//!
//! Operations that can produce fractional results (length, normalisation,
//! angles) always return a floating-point type, even for integer vectors; the
//! mapping is defined by [`Scalar::Float`].

pub mod matrix4x4;
pub mod random;
pub mod scalar;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use matrix4x4::{Matrix4x4, Matrix4x4d, Matrix4x4f};
pub use random::random;
pub use scalar::{FloatScalar, Scalar, inv_sqrt, is_zero, square, to_degrees, to_radians};
pub use vector2::{Vector2, Vector2d, Vector2f, Vector2i};
pub use vector3::{Vector3, Vector3d, Vector3f, Vector3i};
pub use vector4::{Vector4, Vector4d, Vector4f, Vector4i};
