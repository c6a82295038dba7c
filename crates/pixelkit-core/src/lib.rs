//! PixelKit Core - Packed ARGB pixel transforms
//!
//! This crate provides the pixel-transform engine behind PixelKit: color
//! filters (grayscale, sepia, invert, brightness, contrast) and geometric
//! operations (quarter and half turns, rectangular crop) over caller-owned
//! buffers of packed 32-bit ARGB pixels.
//!
//! Every operation is a single synchronous pass. Buffers are addressed
//! through [`PixelView`] / [`PixelViewMut`], bounds-checked views built from
//! a [`BufferDescriptor`]; the engine never allocates or frees pixel memory.

pub mod buffer;
pub mod codec;
pub mod error;
pub mod filters;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_support;

pub use buffer::{BufferDescriptor, PixelFormat, PixelView, PixelViewMut, BYTES_PER_PIXEL};
pub use error::{TransformError, TransformResult};
pub use filters::{
    adjust_brightness, adjust_contrast, apply_filter, apply_grayscale, apply_invert, apply_sepia,
};
pub use transform::{apply_crop, rotate_180, rotate_90_ccw, rotate_90_cw, CropRect, Rotation};

/// Named filter presets.
///
/// Each preset maps to exactly one single-pass color filter. `None` leaves
/// the pixels untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFilter {
    /// No filter applied
    #[default]
    None,
    /// Luminosity-weighted grayscale
    Grayscale,
    /// Sepia tone
    Sepia,
    /// Color inversion
    Invert,
}

impl ImageFilter {
    /// All presets, in menu order.
    pub const ALL: [ImageFilter; 4] = [
        ImageFilter::None,
        ImageFilter::Grayscale,
        ImageFilter::Sepia,
        ImageFilter::Invert,
    ];

    /// Check if this preset changes pixels at all
    pub fn is_identity(self) -> bool {
        self == ImageFilter::None
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            ImageFilter::None => "none",
            ImageFilter::Grayscale => "grayscale",
            ImageFilter::Sepia => "sepia",
            ImageFilter::Invert => "invert",
        }
    }
}
