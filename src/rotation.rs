//! Rotation matrices built from a planar angle, Euler angles, or an axis and
//! angle.
//!
//! A [`Rotation`] owns an orthonormal [`Matrix4`] together with the angle
//! triple it was built from. It is deliberately *not* a `Matrix4`: its
//! [`inverse`](Rotation::inverse) is a plain transpose, which is only correct
//! for orthonormal matrices. Convert with [`Rotation::matrix`] (or `into()`)
//! when you need to compose it with arbitrary transforms.
//!
//! All angles are in radians. Matrices follow the crate convention (row-major,
//! column vectors on the right, `a * b` applies `b` first).
//!
//! # Example
//!
//! ```
//! use lintra::{Rotation, Vector3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! // A quarter turn about +Z carries +X onto +Y.
//! let rotation = Rotation::from_axis_angle(FRAC_PI_2, Vector3::Z_AXIS).unwrap();
//! let p = rotation.matrix().transform_point(Vector3::X_AXIS);
//! assert!(p.approx_eq(Vector3::Y_AXIS, 1e-4));
//! ```

use crate::error::Result;
use crate::matrix::Matrix4;
use crate::scalar::{acos, cos, sin};
use crate::vector::Vector3;

/// Looser than [`crate::scalar::EPSILON`]: long chains of composed rotations
/// drift further than a single construction does.
const DRIFT_TOLERANCE: f32 = 1e-3;

/// An orthonormal rotation transform plus the angles that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    matrix: Matrix4,
    angles: Vector3,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            matrix: Matrix4::IDENTITY,
            angles: Vector3::ZERO,
        }
    }
}

impl Rotation {
    /// Rotates the XY plane by `angle`.
    ///
    /// Only the top-left 2×2 block is set, to `[[cos, -sin], [sin, cos]]`; the
    /// rest stays identity. The stored angle triple is `(angle, angle, angle)`.
    ///
    /// ```
    /// use lintra::{Rotation, Vector3};
    ///
    /// let r = Rotation::planar(0.5);
    /// assert_eq!(r.angles(), Vector3::splat(0.5));
    /// assert_eq!(r.matrix()[2][2], 1.0);
    /// ```
    pub fn planar(angle: f32) -> Self {
        let (s, c) = (sin(angle), cos(angle));
        let mut matrix = Matrix4::IDENTITY;
        matrix[0][0] = c;
        matrix[0][1] = -s;
        matrix[1][0] = s;
        matrix[1][1] = c;

        Self {
            matrix,
            angles: Vector3::splat(angle),
        }
    }

    /// Rotates by `angles.x` about X, then `angles.y` about Y, then `angles.z`
    /// about Z.
    ///
    /// Each elementary rotation is right-handed. The composed matrix is
    /// `Rz * Ry * Rx`; swapping that order changes the orientation for any
    /// non-trivial combination of angles.
    pub fn from_euler(angles: Vector3) -> Self {
        Self {
            matrix: about_z(angles.z) * about_y(angles.y) * about_x(angles.x),
            angles,
        }
    }

    /// Rotates by `angle` about an arbitrary `axis` (right-handed).
    ///
    /// The axis is normalized, then an auxiliary rotation `A` built from Euler
    /// angles `(0, yaw, roll)` carries it onto +X. The result is
    /// `A⁻¹ * Rx(angle) * A`.
    ///
    /// * `yaw` is the angle between the axis' XZ-projection and +X, signed so
    ///   that it swings the axis into the XY plane.
    /// * `roll` is the angle between the yaw-aligned axis' XY-projection and
    ///   +X, signed so that it lays the axis onto +X.
    ///
    /// Either angle is 0 when its projection has zero magnitude, so axes lying
    /// along a coordinate axis never divide by zero.
    ///
    /// The stored angle triple is `(0, 0, 0)`.
    ///
    /// # Errors
    ///
    /// [`MathError::ZeroLength`](crate::MathError::ZeroLength) if `axis` is
    /// the zero vector.
    pub fn from_axis_angle(angle: f32, axis: Vector3) -> Result<Self> {
        let axis = axis.normalize()?;

        let proj_xz = axis * Vector3::new(1.0, 0.0, 1.0);
        let yaw = signed_angle_to_x(proj_xz, axis.z);

        // Drop the rounding residue left in z after the yaw.
        let aligned = about_y(yaw).transform_vector(axis);
        let proj_xy = aligned * Vector3::new(1.0, 1.0, 0.0);
        let roll = signed_angle_to_x(proj_xy, -aligned.y);

        let auxiliary = Self::from_euler(Vector3::new(0.0, yaw, roll));

        Ok(Self {
            matrix: auxiliary.inverse() * about_x(angle) * auxiliary.matrix,
            angles: Vector3::ZERO,
        })
    }

    /// Returns the inverse rotation.
    ///
    /// This is the transpose, which equals the inverse only for orthonormal
    /// matrices. Keeping the matrix orthonormal is the caller's obligation
    /// when it has been replaced through [`Rotation::set_matrix`]; debug builds
    /// assert it.
    pub fn inverse(&self) -> Matrix4 {
        debug_assert!(
            self.matrix.is_orthonormal(DRIFT_TOLERANCE),
            "Rotation::inverse on a non-orthonormal matrix"
        );
        self.matrix.transpose()
    }

    /// Replaces the matrix, keeping the stored angles.
    ///
    /// `matrix` must be orthonormal (for example a product of rotations). A
    /// warning is logged when it is not.
    pub fn set_matrix(&mut self, matrix: Matrix4) {
        if !matrix.is_orthonormal(DRIFT_TOLERANCE) {
            log::warn!("non-orthonormal matrix assigned to a Rotation; inverse() will be wrong");
        }
        self.matrix = matrix;
    }

    /// The rotation as a general transform.
    pub fn matrix(&self) -> Matrix4 {
        self.matrix
    }

    /// The angle triple this rotation was constructed from.
    pub fn angles(&self) -> Vector3 {
        self.angles
    }
}

impl From<Rotation> for Matrix4 {
    fn from(rotation: Rotation) -> Self {
        rotation.matrix
    }
}

/// `m * Rotation::planar(angle)`.
pub fn rotate(m: Matrix4, angle: f32) -> Matrix4 {
    m * Rotation::planar(angle).matrix
}

/// `m * Rotation::from_euler(angles)`.
pub fn rotate_euler(m: Matrix4, angles: Vector3) -> Matrix4 {
    m * Rotation::from_euler(angles).matrix
}

/// `m * Rotation::from_axis_angle(angle, axis)`.
///
/// # Errors
///
/// Fails like [`Rotation::from_axis_angle`] on a zero axis.
pub fn rotate_axis_angle(m: Matrix4, angle: f32, axis: Vector3) -> Result<Matrix4> {
    Ok(m * Rotation::from_axis_angle(angle, axis)?.matrix)
}

/// Unsigned angle between `projection` and +X, carrying the sign of `sign`.
/// Zero for a zero-magnitude projection.
fn signed_angle_to_x(projection: Vector3, sign: f32) -> f32 {
    let magnitude = projection.magnitude();
    if magnitude == 0.0 {
        return 0.0;
    }
    acos(Vector3::dot_product(projection, Vector3::X_AXIS) / magnitude).copysign(sign)
}

fn about_x(angle: f32) -> Matrix4 {
    let (s, c) = (sin(angle), cos(angle));
    let mut m = Matrix4::IDENTITY;
    m[1][1] = c;
    m[1][2] = -s;
    m[2][1] = s;
    m[2][2] = c;
    m
}

fn about_y(angle: f32) -> Matrix4 {
    let (s, c) = (sin(angle), cos(angle));
    let mut m = Matrix4::IDENTITY;
    m[0][0] = c;
    m[0][2] = s;
    m[2][0] = -s;
    m[2][2] = c;
    m
}

fn about_z(angle: f32) -> Matrix4 {
    let (s, c) = (sin(angle), cos(angle));
    let mut m = Matrix4::IDENTITY;
    m[0][0] = c;
    m[0][1] = -s;
    m[1][0] = s;
    m[1][1] = c;
    m
}
