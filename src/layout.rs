//! Vertex attribute layouts.
//!
//! A [`VertexBufferLayout`] is an ordered list of attribute descriptors, each
//! naming an [`ElementType`], a component count, and the byte offset at which
//! the attribute starts inside one vertex. Layouts are built by successive
//! [`push`](VertexBufferLayout::push) calls; offsets and the stride are
//! computed as attributes are appended, and nothing can be removed.
//!
//! ```
//! use lintra::{ElementType, VertexBufferLayout};
//!
//! let layout = VertexBufferLayout::new()
//!     .push(ElementType::Float32, 3) // position
//!     .push(ElementType::Float32, 2); // uv
//!
//! assert_eq!(layout.stride(), 20);
//! assert_eq!(layout.attributes()[1].offset, 12);
//! ```
//!
//! # Handing a Layout to wgpu
//!
//! The rendering backend converts a layout into wgpu descriptors. Shader
//! locations are assigned in push order, starting at 0:
//!
//! ```ignore
//! let attributes = Vertex3d::vertex_layout().wgpu_attributes()?;
//! let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
//!     vertex: wgpu::VertexState {
//!         module: &shader,
//!         entry_point: Some("vs_main"),
//!         buffers: &[Vertex3d::vertex_layout().wgpu_layout(&attributes)],
//!         ..Default::default()
//!     },
//!     // ...
//! });
//! ```

use crate::error::LayoutError;

/// The numeric representation of one attribute component.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    Float32,
    Uint32,
    Sint32,
    Uint16,
    Sint16,
    Uint8,
    Sint8,
    /// Unsigned byte read as a float in `[0, 1]`.
    Unorm8,
}

impl ElementType {
    /// Size of one component in bytes.
    pub const fn size(self) -> u64 {
        match self {
            ElementType::Float32 | ElementType::Uint32 | ElementType::Sint32 => 4,
            ElementType::Uint16 | ElementType::Sint16 => 2,
            ElementType::Uint8 | ElementType::Sint8 | ElementType::Unorm8 => 1,
        }
    }

    /// The wgpu vertex format for `count` components of this type.
    ///
    /// 32-bit types support 1 to 4 components. 8- and 16-bit types support 2
    /// or 4, matching the formats every wgpu backend accepts.
    pub fn vertex_format(self, count: u32) -> Result<wgpu::VertexFormat, LayoutError> {
        use wgpu::VertexFormat as F;

        let format = match (self, count) {
            (ElementType::Float32, 1) => F::Float32,
            (ElementType::Float32, 2) => F::Float32x2,
            (ElementType::Float32, 3) => F::Float32x3,
            (ElementType::Float32, 4) => F::Float32x4,
            (ElementType::Uint32, 1) => F::Uint32,
            (ElementType::Uint32, 2) => F::Uint32x2,
            (ElementType::Uint32, 3) => F::Uint32x3,
            (ElementType::Uint32, 4) => F::Uint32x4,
            (ElementType::Sint32, 1) => F::Sint32,
            (ElementType::Sint32, 2) => F::Sint32x2,
            (ElementType::Sint32, 3) => F::Sint32x3,
            (ElementType::Sint32, 4) => F::Sint32x4,
            (ElementType::Uint16, 2) => F::Uint16x2,
            (ElementType::Uint16, 4) => F::Uint16x4,
            (ElementType::Sint16, 2) => F::Sint16x2,
            (ElementType::Sint16, 4) => F::Sint16x4,
            (ElementType::Uint8, 2) => F::Uint8x2,
            (ElementType::Uint8, 4) => F::Uint8x4,
            (ElementType::Sint8, 2) => F::Sint8x2,
            (ElementType::Sint8, 4) => F::Sint8x4,
            (ElementType::Unorm8, 2) => F::Unorm8x2,
            (ElementType::Unorm8, 4) => F::Unorm8x4,
            (element_type, count) => {
                return Err(LayoutError::UnsupportedFormat {
                    element_type,
                    count,
                });
            }
        };
        Ok(format)
    }
}

/// One attribute within a vertex.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    pub element_type: ElementType,
    /// Number of components, e.g. 3 for a position.
    pub count: u32,
    /// Byte offset from the start of the vertex.
    pub offset: u64,
}

impl VertexAttribute {
    /// Size of the whole attribute in bytes.
    pub fn size(&self) -> u64 {
        self.element_type.size() * self.count as u64
    }
}

/// An ordered, append-only list of vertex attributes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexBufferLayout {
    attributes: Vec<VertexAttribute>,
    stride: u64,
}

impl VertexBufferLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute of `count` components at the current end of the
    /// vertex.
    ///
    /// # Panics
    ///
    /// If `count` is zero. Use [`try_push`](Self::try_push) when the count is
    /// not a constant.
    pub fn push(self, element_type: ElementType, count: u32) -> Self {
        match self.try_push(element_type, count) {
            Ok(layout) => layout,
            Err(e) => panic!("VertexBufferLayout::push: {}", e),
        }
    }

    /// Appends an attribute, rejecting a zero component count.
    pub fn try_push(mut self, element_type: ElementType, count: u32) -> Result<Self, LayoutError> {
        if count == 0 {
            return Err(LayoutError::EmptyAttribute);
        }

        let attribute = VertexAttribute {
            element_type,
            count,
            offset: self.stride,
        };
        log::trace!(
            "vertex attribute {}: {} x {:?} at offset {}",
            self.attributes.len(),
            count,
            element_type,
            attribute.offset
        );

        self.stride += attribute.size();
        self.attributes.push(attribute);
        Ok(self)
    }

    /// Attributes in push order.
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Bytes from the start of one vertex to the start of the next.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Converts the attributes to wgpu descriptors, assigning shader locations
    /// 0, 1, 2, ... in push order.
    pub fn wgpu_attributes(&self) -> Result<Vec<wgpu::VertexAttribute>, LayoutError> {
        let attributes = self
            .attributes
            .iter()
            .zip(0u32..)
            .map(|(attribute, shader_location)| {
                Ok(wgpu::VertexAttribute {
                    format: attribute.element_type.vertex_format(attribute.count)?,
                    offset: attribute.offset,
                    shader_location,
                })
            })
            .collect::<Result<Vec<_>, LayoutError>>()?;

        log::debug!(
            "converted vertex layout: {} attributes, stride {}",
            attributes.len(),
            self.stride
        );
        Ok(attributes)
    }

    /// Builds a per-vertex `wgpu::VertexBufferLayout` over `attributes`, which
    /// should come from [`wgpu_attributes`](Self::wgpu_attributes).
    pub fn wgpu_layout<'a>(
        &self,
        attributes: &'a [wgpu::VertexAttribute],
    ) -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_accumulate_in_push_order() {
        let layout = VertexBufferLayout::new()
            .push(ElementType::Float32, 3)
            .push(ElementType::Unorm8, 4)
            .push(ElementType::Float32, 2);

        let offsets: Vec<u64> = layout.attributes().iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 16]);
        assert_eq!(layout.stride(), 24);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn empty_layout() {
        let layout = VertexBufferLayout::new();
        assert!(layout.is_empty());
        assert_eq!(layout.stride(), 0);
        assert_eq!(layout.wgpu_attributes(), Ok(vec![]));
    }

    #[test]
    fn zero_count_is_rejected() {
        let result = VertexBufferLayout::new().try_push(ElementType::Float32, 0);
        assert_eq!(result, Err(LayoutError::EmptyAttribute));
    }

    #[test]
    #[should_panic(expected = "at least one component")]
    fn push_zero_count_panics() {
        let _ = VertexBufferLayout::new().push(ElementType::Float32, 0);
    }

    #[test]
    fn wgpu_attributes_assign_locations() {
        let layout = VertexBufferLayout::new()
            .push(ElementType::Float32, 3)
            .push(ElementType::Float32, 4);
        let attributes = layout.wgpu_attributes().unwrap();

        assert_eq!(attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(attributes[0].shader_location, 0);
        assert_eq!(attributes[1].format, wgpu::VertexFormat::Float32x4);
        assert_eq!(attributes[1].offset, 12);
        assert_eq!(attributes[1].shader_location, 1);

        let wgpu_layout = layout.wgpu_layout(&attributes);
        assert_eq!(wgpu_layout.array_stride, 28);
        assert_eq!(wgpu_layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn unsupported_format_is_reported() {
        let layout = VertexBufferLayout::new().push(ElementType::Uint8, 3);
        assert_eq!(
            layout.wgpu_attributes(),
            Err(LayoutError::UnsupportedFormat {
                element_type: ElementType::Uint8,
                count: 3
            })
        );
        assert!(ElementType::Float32.vertex_format(5).is_err());
    }

    #[test]
    fn element_sizes_agree_with_wgpu() {
        let cases = [
            (ElementType::Float32, 3),
            (ElementType::Sint32, 1),
            (ElementType::Uint16, 2),
            (ElementType::Sint16, 4),
            (ElementType::Unorm8, 4),
            (ElementType::Sint8, 2),
        ];
        for (element_type, count) in cases {
            let format = element_type.vertex_format(count).unwrap();
            assert_eq!(format.size(), element_type.size() * count as u64);
        }
    }
}
