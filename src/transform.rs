//! Translation, scaling, view, and projection matrices.
//!
//! These are the non-rotational pieces of a vertex pipeline's
//! model-view-projection chain. Like the [`rotation`](crate::rotation) helpers,
//! [`translate`] and [`scale`] right-multiply onto an existing matrix and
//! return a new one.
//!
//! Projections are right-handed (the camera looks down -Z) and map depth to
//! `[0, 1]`, the clip-space range wgpu uses.
//!
//! ```
//! use lintra::{Matrix4, Rotation, Vector3, transform};
//!
//! // Scale, then rotate, then translate.
//! let model = transform::translation(Vector3::new(0.0, 2.0, -5.0))
//!     * Rotation::from_euler(Vector3::new(0.0, 0.5, 0.0)).matrix()
//!     * transform::scaling(Vector3::splat(2.0));
//!
//! let origin = model.transform_point(Vector3::ZERO);
//! assert_eq!(origin, Vector3::new(0.0, 2.0, -5.0));
//! ```

use crate::error::Result;
use crate::matrix::Matrix4;
use crate::scalar::tan;
use crate::vector::Vector3;

/// A matrix that moves points by `offset`. Directions are unaffected.
pub fn translation(offset: Vector3) -> Matrix4 {
    let mut m = Matrix4::IDENTITY;
    m[0][3] = offset.x;
    m[1][3] = offset.y;
    m[2][3] = offset.z;
    m
}

/// A matrix that scales each axis by the matching component of `factors`.
pub fn scaling(factors: Vector3) -> Matrix4 {
    let mut m = Matrix4::IDENTITY;
    m[0][0] = factors.x;
    m[1][1] = factors.y;
    m[2][2] = factors.z;
    m
}

/// `m * translation(offset)`.
pub fn translate(m: Matrix4, offset: Vector3) -> Matrix4 {
    m * translation(offset)
}

/// `m * scaling(factors)`.
pub fn scale(m: Matrix4, factors: Vector3) -> Matrix4 {
    m * scaling(factors)
}

/// Right-handed view matrix for a camera at `eye` looking at `target`.
///
/// # Errors
///
/// [`MathError::ZeroLength`](crate::MathError::ZeroLength) if `eye` equals
/// `target`, or if `up` is parallel to the view direction.
pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Result<Matrix4> {
    let forward = (target - eye).normalize()?;
    let side = forward.cross(up).normalize()?;
    let up = side.cross(forward);

    Ok(Matrix4([
        [side.x, side.y, side.z, -eye.dot(side)],
        [up.x, up.y, up.z, -eye.dot(up)],
        [-forward.x, -forward.y, -forward.z, eye.dot(forward)],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}

/// Right-handed perspective projection with `[0, 1]` depth.
///
/// * `fov_y` - Vertical field of view in radians
/// * `aspect` - Width divided by height
/// * `near`, `far` - Positive distances to the clip planes
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4 {
    let h = 1.0 / tan(0.5 * fov_y);
    let w = h / aspect;
    let r = far / (near - far);

    Matrix4([
        [w, 0.0, 0.0, 0.0],
        [0.0, h, 0.0, 0.0],
        [0.0, 0.0, r, r * near],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

/// Right-handed orthographic projection with `[0, 1]` depth.
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4 {
    let rcp_width = 1.0 / (right - left);
    let rcp_height = 1.0 / (top - bottom);
    let r = 1.0 / (near - far);

    Matrix4([
        [2.0 * rcp_width, 0.0, 0.0, -(left + right) * rcp_width],
        [0.0, 2.0 * rcp_height, 0.0, -(top + bottom) * rcp_height],
        [0.0, 0.0, r, r * near],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
