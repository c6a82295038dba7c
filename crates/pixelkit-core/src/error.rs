//! Error types for pixel transforms.

use thiserror::Error;

use crate::buffer::PixelFormat;

/// Errors reported by buffer validation and transform operations.
///
/// All of these are detected before the first write, so a failed call
/// leaves every buffer it was given untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The buffer is not packed 32-bit ARGB.
    #[error("unsupported pixel format: {0:?} (expected Argb8888)")]
    InvalidFormat(PixelFormat),

    /// Dimensions, stride, data length or a crop rectangle fall outside
    /// the addressable pixel grid.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A destination buffer does not have the dimensions the operation
    /// produces.
    #[error("destination is {}x{}, expected {}x{}", actual.0, actual.1, expected.0, expected.1)]
    AllocationMismatch {
        /// Required (width, height).
        expected: (u32, u32),
        /// Destination (width, height).
        actual: (u32, u32),
    },

    /// The buffer was handed out read-only and cannot be locked for writing.
    #[error("buffer is read-only")]
    ReadOnly,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
