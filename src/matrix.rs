//! The 4×4 homogeneous transform matrix.
//!
//! # Convention
//!
//! [`Matrix4`] stores its elements **row-major** as `[[f32; 4]; 4]`, so
//! `m[row][col]` reads the way the matrix is written on paper. Vectors are
//! **columns multiplied on the right**: `m * v`.
//!
//! It follows that in a product `a * b`, **`b` is applied first**:
//!
//! ```
//! use lintra::{Matrix4, Vector3, transform};
//!
//! let scale = transform::scaling(Vector3::splat(2.0));
//! let shift = transform::translation(Vector3::new(1.0, 0.0, 0.0));
//!
//! // Scale, then translate.
//! let p = (shift * scale).transform_point(Vector3::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Vector3::new(3.0, 2.0, 2.0));
//! ```
//!
//! WGSL expects column-major `mat4x4<f32>` data. Use
//! [`Matrix4::to_cols_array_2d`] when writing a matrix into a uniform buffer.

use std::ops::{Index, IndexMut, Mul};

use crate::scalar::EPSILON;
use crate::vector::{Vector3, Vector4};

/// A 4×4 `f32` matrix, row-major, column vectors on the right.
///
/// The default value is the identity.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix4(pub [[f32; 4]; 4]);

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const ZERO: Self = Self([[0.0; 4]; 4]);

    /// Builds a matrix from four rows.
    pub fn from_rows(rows: [Vector4; 4]) -> Self {
        Self(rows.map(Vector4::to_array))
    }

    /// Builds a matrix from four columns.
    pub fn from_cols(cols: [Vector4; 4]) -> Self {
        Self::from_rows(cols).transpose()
    }

    pub fn row(&self, row: usize) -> Vector4 {
        Vector4::from(self.0[row])
    }

    pub fn col(&self, col: usize) -> Vector4 {
        Vector4::new(self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col])
    }

    /// Returns the matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let m = &self.0;
        let mut result = [[0.0; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = m[j][i];
            }
        }
        Self(result)
    }

    /// Applies the matrix to a point (`w = 1`).
    ///
    /// Translation is applied. If the resulting `w` is neither 0 nor 1 (a
    /// projective matrix), the result is divided by `w`.
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        let v = *self * point.extend(1.0);
        if v.w == 0.0 || v.w == 1.0 {
            v.truncate()
        } else {
            v.truncate() / v.w
        }
    }

    /// Applies the matrix to a direction (`w = 0`). Translation is ignored.
    pub fn transform_vector(&self, vector: Vector3) -> Vector3 {
        (*self * vector.extend(0.0)).truncate()
    }

    /// Returns true if the upper-left 3×3 block has unit-length, mutually
    /// perpendicular columns, each within `epsilon`.
    pub fn is_orthonormal(&self, epsilon: f32) -> bool {
        let cols = [0, 1, 2].map(|c| self.col(c).truncate());
        for i in 0..3 {
            if (cols[i].dot(cols[i]) - 1.0).abs() > epsilon {
                return false;
            }
            for j in (i + 1)..3 {
                if cols[i].dot(cols[j]).abs() > epsilon {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true if every element differs by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Returns true if this is the identity within [`EPSILON`].
    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::IDENTITY, EPSILON)
    }

    /// Column-major element data, the layout WGSL `mat4x4<f32>` uniforms use.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.transpose().0
    }
}

impl Index<usize> for Matrix4 {
    type Output = [f32; 4];

    /// Row access, so `m[row][col]` reads a single element.
    fn index(&self, row: usize) -> &[f32; 4] {
        &self.0[row]
    }
}

impl IndexMut<usize> for Matrix4 {
    fn index_mut(&mut self, row: usize) -> &mut [f32; 4] {
        &mut self.0[row]
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.0[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.0[row][col]
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    /// Row-by-column product. `a * b` applies `b` first.
    fn mul(self, b: Self) -> Self {
        let a = &self.0;
        let mut result = [[0.0; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| a[i][k] * b.0[k][j]).sum();
            }
        }
        Self(result)
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        Vector4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }
}

impl From<[[f32; 4]; 4]> for Matrix4 {
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self(rows)
    }
}

impl From<Matrix4> for [[f32; 4]; 4] {
    fn from(matrix: Matrix4) -> Self {
        matrix.0
    }
}

// glam stores columns; same column-vector convention.
impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Self(m.to_cols_array_2d()).transpose()
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        glam::Mat4::from_cols_array_2d(&m.to_cols_array_2d())
    }
}
