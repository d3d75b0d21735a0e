//! Error types for the math and layout modules

use thiserror::Error;

use crate::layout::ElementType;

/// Numeric failures in vector and rotation construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A vector with exactly zero magnitude cannot be normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// A vector with an infinite or NaN component has no direction.
    #[error("cannot normalize a vector with a non-finite component")]
    NonFinite,
}

/// Failures while building a vertex layout or handing it to wgpu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// An attribute must have at least one component.
    #[error("vertex attribute must have at least one component")]
    EmptyAttribute,

    /// wgpu has no vertex format for this element type and component count.
    #[error("no wgpu vertex format for {count} x {element_type:?}")]
    UnsupportedFormat { element_type: ElementType, count: u32 },
}

/// Result type for math operations
pub type Result<T> = std::result::Result<T, MathError>;
