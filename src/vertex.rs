//! Vertex shapes and their attribute layouts.
//!
//! Each vertex struct is plain `#[repr(C)]` data that derives
//! [`bytemuck::Pod`], so a slice of vertices can be uploaded byte-for-byte.
//! Its [`Vertex::vertex_layout`] describes those bytes: one attribute per
//! field, in declaration order.
//!
//! | Shape             | Attributes (components)        | Stride |
//! |-------------------|--------------------------------|--------|
//! | [`Vertex2d`]      | position (2), uv (2)           | 16     |
//! | [`Vertex2dColor`] | position (2), color (4)        | 24     |
//! | [`Vertex3d`]      | position (3), normal (3), uv (2)    | 32 |
//! | [`Vertex3dColor`] | position (3), normal (3), color (4) | 40 |
//!
//! ```
//! use lintra::{Vector2, Vector3, Vertex, Vertex3d};
//!
//! let vertices = [
//!     Vertex3d::new(Vector3::new(0.0, 1.0, 0.0), Vector3::Z_AXIS, Vector2::new(0.5, 0.0)),
//!     Vertex3d::new(Vector3::new(-1.0, -1.0, 0.0), Vector3::Z_AXIS, Vector2::new(0.0, 1.0)),
//!     Vertex3d::new(Vector3::new(1.0, -1.0, 0.0), Vector3::Z_AXIS, Vector2::new(1.0, 1.0)),
//! ];
//!
//! let layout = Vertex3d::vertex_layout();
//! assert_eq!(Vertex3d::as_bytes(&vertices).len() as u64, 3 * layout.stride());
//! ```

use crate::layout::{ElementType, VertexBufferLayout};
use crate::vector::{Vector2, Vector3, Vector4};

/// A vertex shape that can describe its own memory layout.
pub trait Vertex: bytemuck::Pod {
    /// A fresh layout with one `Float32` attribute per field, in field order.
    fn vertex_layout() -> VertexBufferLayout;

    /// The raw bytes of `vertices`, ready for a vertex buffer.
    fn as_bytes(vertices: &[Self]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// A 2D vertex with texture coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex2d {
    pub position: Vector2,
    /// Texture coordinates, typically in `[0, 1]`.
    pub uv: Vector2,
}

impl Vertex2d {
    pub fn new(position: Vector2, uv: Vector2) -> Self {
        Self { position, uv }
    }
}

impl Vertex for Vertex2d {
    fn vertex_layout() -> VertexBufferLayout {
        VertexBufferLayout::new()
            .push(ElementType::Float32, Vector2::COMPONENTS)
            .push(ElementType::Float32, Vector2::COMPONENTS)
    }
}

/// A 2D vertex with an RGBA color instead of texture coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex2dColor {
    pub position: Vector2,
    pub color: Vector4,
}

impl Vertex2dColor {
    pub fn new(position: Vector2, color: Vector4) -> Self {
        Self { position, color }
    }
}

impl Vertex for Vertex2dColor {
    fn vertex_layout() -> VertexBufferLayout {
        VertexBufferLayout::new()
            .push(ElementType::Float32, Vector2::COMPONENTS)
            .push(ElementType::Float32, Vector4::COMPONENTS)
    }
}

/// A vertex for 3D mesh rendering with position, normal, and texture
/// coordinates.
///
/// # Memory Layout
///
/// Each vertex occupies 32 bytes:
/// - `position`: 12 bytes (3 × f32) at offset 0
/// - `normal`: 12 bytes (3 × f32) at offset 12
/// - `uv`: 8 bytes (2 × f32) at offset 24
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3d {
    /// Position in model space.
    pub position: Vector3,
    /// Surface normal (should be normalized for correct lighting).
    pub normal: Vector3,
    /// Texture coordinates, typically in `[0, 1]`.
    pub uv: Vector2,
}

impl Vertex3d {
    pub fn new(position: Vector3, normal: Vector3, uv: Vector2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

impl Vertex for Vertex3d {
    fn vertex_layout() -> VertexBufferLayout {
        VertexBufferLayout::new()
            .push(ElementType::Float32, Vector3::COMPONENTS)
            .push(ElementType::Float32, Vector3::COMPONENTS)
            .push(ElementType::Float32, Vector2::COMPONENTS)
    }
}

/// A 3D vertex with an RGBA color instead of texture coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3dColor {
    pub position: Vector3,
    pub normal: Vector3,
    pub color: Vector4,
}

impl Vertex3dColor {
    pub fn new(position: Vector3, normal: Vector3, color: Vector4) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }
}

impl Vertex for Vertex3dColor {
    fn vertex_layout() -> VertexBufferLayout {
        VertexBufferLayout::new()
            .push(ElementType::Float32, Vector3::COMPONENTS)
            .push(ElementType::Float32, Vector3::COMPONENTS)
            .push(ElementType::Float32, Vector4::COMPONENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts<V: Vertex>() -> Vec<u32> {
        V::vertex_layout().attributes().iter().map(|a| a.count).collect()
    }

    fn assert_stride_matches_struct<V: Vertex>() {
        assert_eq!(
            V::vertex_layout().stride(),
            std::mem::size_of::<V>() as u64,
            "{}",
            std::any::type_name::<V>()
        );
    }

    #[test]
    fn component_counts_follow_field_order() {
        assert_eq!(counts::<Vertex2d>(), vec![2, 2]);
        assert_eq!(counts::<Vertex2dColor>(), vec![2, 4]);
        assert_eq!(counts::<Vertex3d>(), vec![3, 3, 2]);
        assert_eq!(counts::<Vertex3dColor>(), vec![3, 3, 4]);
    }

    #[test]
    fn strides_match_struct_sizes() {
        assert_stride_matches_struct::<Vertex2d>();
        assert_stride_matches_struct::<Vertex2dColor>();
        assert_stride_matches_struct::<Vertex3d>();
        assert_stride_matches_struct::<Vertex3dColor>();
    }

    #[test]
    fn offsets_match_field_offsets() {
        let layout = Vertex3dColor::vertex_layout();
        let offsets: Vec<u64> = layout.attributes().iter().map(|a| a.offset).collect();
        assert_eq!(
            offsets,
            vec![
                std::mem::offset_of!(Vertex3dColor, position) as u64,
                std::mem::offset_of!(Vertex3dColor, normal) as u64,
                std::mem::offset_of!(Vertex3dColor, color) as u64,
            ]
        );
    }

    #[test]
    fn layouts_are_fresh_per_call() {
        assert_eq!(Vertex3d::vertex_layout(), Vertex3d::vertex_layout());
    }

    #[test]
    fn bytes_are_fields_in_order() {
        let vertex = Vertex2d::new(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        let bytes = Vertex2d::as_bytes(std::slice::from_ref(&vertex));
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn every_layout_converts_to_wgpu() {
        assert!(Vertex2d::vertex_layout().wgpu_attributes().is_ok());
        assert!(Vertex2dColor::vertex_layout().wgpu_attributes().is_ok());
        assert!(Vertex3d::vertex_layout().wgpu_attributes().is_ok());
        assert!(Vertex3dColor::vertex_layout().wgpu_attributes().is_ok());
    }
}
