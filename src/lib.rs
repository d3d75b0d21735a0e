//! # lintra
//!
//! **Vectors, matrices, rotations, and vertex layouts for a wgpu vertex pipeline.**
//!
//! Everything is `f32`, fixed-size, and `Copy`. There is no hidden state: every
//! operation is a pure function of its inputs.
//!
//! ## Quick Start
//!
//! ```
//! use lintra::*;
//! use std::f32::consts::FRAC_PI_2;
//!
//! // Spin a quarter turn about +Z, then move up.
//! let model = rotate_axis_angle(
//!     transform::translation(Vector3::new(0.0, 2.0, 0.0)),
//!     FRAC_PI_2,
//!     Vector3::Z_AXIS,
//! )
//! .unwrap();
//!
//! let p = model.transform_point(Vector3::X_AXIS);
//! assert!(p.approx_eq(Vector3::new(0.0, 3.0, 0.0), 1e-4));
//!
//! // Describe the vertex format for the rendering backend.
//! let layout = Vertex3d::vertex_layout();
//! assert_eq!(layout.stride(), 32);
//! ```
//!
//! ## Conventions
//!
//! - **Angles** are radians. [`scalar::deg_to_rad`] converts.
//! - **Matrices** are row-major with column vectors on the right. `a * b`
//!   applies `b` first. See [`matrix`].
//! - **Euler angles** compose as `Rz * Ry * Rx`: X first, then Y, then Z.
//! - **Normalizing** a zero vector is an error ([`MathError::ZeroLength`]),
//!   never a silent zero.
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` for vectors, [`Matrix4`], and layout
//!   descriptors.

mod error;
pub mod layout;
pub mod matrix;
pub mod rotation;
pub mod scalar;
pub mod transform;
pub mod vector;
pub mod vertex;

pub use error::{LayoutError, MathError, Result};
pub use layout::{ElementType, VertexAttribute, VertexBufferLayout};
pub use matrix::Matrix4;
pub use rotation::{Rotation, rotate, rotate_axis_angle, rotate_euler};
pub use vector::{Vector2, Vector3, Vector4};
pub use vertex::{Vertex, Vertex2d, Vertex2dColor, Vertex3d, Vertex3dColor};
