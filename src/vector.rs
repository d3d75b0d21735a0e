//! Fixed-size `f32` vectors: [`Vector2`], [`Vector3`], and [`Vector4`].
//!
//! All three share the same arithmetic surface:
//!
//! - `+`, `-`, and unary `-` componentwise
//! - `v * s`, `s * v`, and `v / s` for a scalar `s`
//! - `v * w` as the componentwise (Hadamard) product, which rotation code uses
//!   to mask a vector onto a coordinate plane
//! - [`dot`](Vector3::dot), [`magnitude`](Vector3::magnitude), and
//!   [`normalize`](Vector3::normalize)
//!
//! # Normalization
//!
//! Normalizing a vector whose magnitude is exactly zero returns
//! [`MathError::ZeroLength`]. There is no silent fallback to a zero vector, so
//! a degenerate axis or normal is reported wherever it is normalized.
//!
//! ```
//! use lintra::{MathError, Vector3};
//!
//! let v = Vector3::new(3.0, 0.0, 4.0).normalize().unwrap();
//! assert!((v.magnitude() - 1.0).abs() < 1e-6);
//!
//! assert_eq!(Vector3::ZERO.normalize(), Err(MathError::ZeroLength));
//! ```
//!
//! # Memory Layout
//!
//! Each vector is `#[repr(C)]` with tightly packed `f32` fields and derives
//! [`bytemuck::Pod`], so it can live directly inside vertex structs that are
//! uploaded to the GPU.

use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MathError, Result};

macro_rules! impl_vector {
    ($name:ident, $glam:ty, $n:literal, { $($field:ident),+ }) => {
        impl $name {
            /// Number of `f32` components, used when describing vertex layouts.
            pub const COMPONENTS: u32 = $n;

            /// All components zero.
            pub const ZERO: Self = Self { $($field: 0.0),+ };

            /// All components one.
            pub const ONE: Self = Self { $($field: 1.0),+ };

            /// Creates a vector with every component set to `value`.
            #[inline]
            pub const fn splat(value: f32) -> Self {
                Self { $($field: value),+ }
            }

            /// Dot product of `self` and `other`.
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Dot product of `a` and `b`.
            #[inline]
            pub fn dot_product(a: Self, b: Self) -> f32 {
                a.dot(b)
            }

            /// Squared Euclidean norm.
            #[inline]
            pub fn magnitude_squared(self) -> f32 {
                self.dot(self)
            }

            /// Largest absolute component.
            #[inline]
            pub fn max_abs(self) -> f32 {
                0.0f32 $(.max(self.$field.abs()))+
            }

            /// Returns true if no component is infinite or NaN.
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }

            /// Euclidean norm.
            ///
            /// Components are scaled by the largest one before squaring, so
            /// the sum neither overflows near `f32::MAX` nor underflows for
            /// tiny vectors.
            pub fn magnitude(self) -> f32 {
                let scale = self.max_abs();
                if scale == 0.0 || !scale.is_finite() {
                    return scale;
                }
                scale * (self / scale).magnitude_squared().sqrt()
            }

            /// Returns `self / |self|`.
            ///
            /// # Errors
            ///
            /// - [`MathError::ZeroLength`] if every component is exactly zero.
            /// - [`MathError::NonFinite`] if any component is infinite or NaN.
            pub fn normalize(self) -> Result<Self> {
                if !self.is_finite() {
                    return Err(MathError::NonFinite);
                }
                let scale = self.max_abs();
                if scale == 0.0 {
                    return Err(MathError::ZeroLength);
                }
                // Unit largest component keeps the squared sum in [1, N].
                let scaled = self / scale;
                Ok(scaled / scaled.magnitude_squared().sqrt())
            }

            /// Returns true if every component differs by at most `epsilon`.
            pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
                true $(&& (self.$field - other.$field).abs() <= epsilon)+
            }

            /// Components in declaration order.
            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                [$(self.$field),+]
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(values: [f32; $n]) -> Self {
                let [$($field),+] = values;
                Self { $($field),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl From<$glam> for $name {
            fn from(v: $glam) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl From<$name> for $glam {
            fn from(v: $name) -> Self {
                <$glam>::new($(v.$field),+)
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: Self) {
                $(self.$field += other.$field;)+
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, other: Self) {
                $(self.$field -= other.$field;)+
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, scalar: f32) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;

            fn mul(self, v: $name) -> $name {
                v * self
            }
        }

        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, scalar: f32) {
                $(self.$field *= scalar;)+
            }
        }

        // Hadamard product
        impl Mul for $name {
            type Output = Self;

            fn mul(self, other: Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }
        }

        impl Div<f32> for $name {
            type Output = Self;

            fn div(self, scalar: f32) -> Self {
                Self { $($field: self.$field / scalar),+ }
            }
        }

        impl Index<usize> for $name {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                let fields = [$(&self.$field),+];
                match fields.into_iter().nth(index) {
                    Some(component) => component,
                    None => panic!(
                        "component index {} out of range for {}",
                        index,
                        stringify!($name)
                    ),
                }
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                let fields = [$(&mut self.$field),+];
                match fields.into_iter().nth(index) {
                    Some(component) => component,
                    None => panic!(
                        "component index {} out of range for {}",
                        index,
                        stringify!($name)
                    ),
                }
            }
        }
    };
}

/// A 2-component vector, used for 2D positions and texture coordinates.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// A 3-component vector, used for 3D positions, normals, directions, and
/// Euler angle triples.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4-component vector, used for homogeneous coordinates and RGBA colors.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vector!(Vector2, glam::Vec2, 2, { x, y });
impl_vector!(Vector3, glam::Vec3, 3, { x, y, z });
impl_vector!(Vector4, glam::Vec4, 4, { x, y, z, w });

impl Vector2 {
    pub const X_AXIS: Self = Self::new(1.0, 0.0);
    pub const Y_AXIS: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Appends a `z` component.
    #[inline]
    pub const fn extend(self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }
}

impl Vector3 {
    /// Unit vector along +X.
    pub const X_AXIS: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const Y_AXIS: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const Z_AXIS: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Appends a `w` component, producing homogeneous coordinates.
    ///
    /// Use `w = 1.0` for points (affected by translation) and `w = 0.0` for
    /// directions.
    #[inline]
    pub const fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Drops the `z` component.
    #[inline]
    pub const fn truncate(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Drops the `w` component without a perspective divide.
    #[inline]
    pub const fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}
