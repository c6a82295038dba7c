//! Core types for describing pixel buffers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TransformError, TransformResult};

/// Bytes occupied by one packed ARGB pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Pixel layouts a host may report for a bitmap.
///
/// Only [`PixelFormat::Argb8888`] can be transformed; the other variants
/// exist so a host can describe what it has and get a clean
/// [`TransformError::InvalidFormat`] back instead of garbage output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Packed 32-bit ARGB, 8 bits per channel, alpha most significant.
    #[default]
    Argb8888,
    /// Packed 16-bit RGB (5-6-5).
    Rgb565,
    /// Single 8-bit alpha channel.
    Alpha8,
    /// Four half-float channels.
    RgbaF16,
}

impl PixelFormat {
    /// Size of one pixel in bytes.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Argb8888 => BYTES_PER_PIXEL,
            PixelFormat::Rgb565 => 2,
            PixelFormat::Alpha8 => 1,
            PixelFormat::RgbaF16 => 8,
        }
    }

    /// Returns true if the transform engine can operate on this layout.
    #[inline]
    pub fn is_supported(self) -> bool {
        self == PixelFormat::Argb8888
    }
}

/// Geometry and format of a caller-owned pixel grid.
///
/// The descriptor carries no pixel data; pair it with a byte slice through
/// [`PixelView::new`](super::PixelView::new) or
/// [`PixelViewMut::new`](super::PixelViewMut::new), which validate the two
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferDescriptor {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Distance in bytes between the starts of consecutive rows.
    pub stride: u32,
    /// Pixel layout.
    #[serde(default)]
    pub format: PixelFormat,
}

impl BufferDescriptor {
    /// Create a descriptor with an explicit stride and format.
    pub fn new(width: u32, height: u32, stride: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            stride,
            format,
        }
    }

    /// Create a tightly packed ARGB descriptor (`stride = width * 4`).
    ///
    /// Saturates the stride for absurd widths; [`validate`](Self::validate)
    /// then rejects the result.
    pub fn packed(width: u32, height: u32) -> Self {
        Self::new(
            width,
            height,
            width.saturating_mul(BYTES_PER_PIXEL as u32),
            PixelFormat::Argb8888,
        )
    }

    /// Dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of bytes of each row that hold pixels (`width * 4`).
    pub fn row_bytes(&self) -> Option<usize> {
        (self.width as usize).checked_mul(BYTES_PER_PIXEL)
    }

    /// Minimum data length able to hold every row.
    ///
    /// The last row only needs its pixel bytes, not its trailing padding.
    /// Returns `None` on arithmetic overflow.
    pub fn required_len(&self) -> Option<usize> {
        if self.height == 0 {
            return Some(0);
        }
        let row_bytes = self.row_bytes()?;
        (self.height as usize - 1)
            .checked_mul(self.stride as usize)?
            .checked_add(row_bytes)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check this descriptor against a data region of `data_len` bytes.
    ///
    /// Checks run in order: format, non-zero dimensions, stride, data
    /// length. The first failure is reported.
    pub fn validate(&self, data_len: usize) -> TransformResult<()> {
        if !self.format.is_supported() {
            debug!(format = ?self.format, "rejecting buffer: unsupported format");
            return Err(TransformError::InvalidFormat(self.format));
        }

        if self.width == 0 || self.height == 0 {
            debug!(width = self.width, height = self.height, "rejecting buffer: empty grid");
            return Err(TransformError::InvalidBounds(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        let row_bytes = self.row_bytes().ok_or_else(|| {
            TransformError::InvalidBounds(format!("width {} overflows row size", self.width))
        })?;
        if (self.stride as usize) < row_bytes {
            debug!(stride = self.stride, row_bytes, "rejecting buffer: stride too small");
            return Err(TransformError::InvalidBounds(format!(
                "stride {} < row size {}",
                self.stride, row_bytes
            )));
        }

        let required = self.required_len().ok_or_else(|| {
            TransformError::InvalidBounds(format!(
                "{}x{} with stride {} overflows addressable memory",
                self.width, self.height, self.stride
            ))
        })?;
        if data_len < required {
            debug!(data_len, required, "rejecting buffer: data too short");
            return Err(TransformError::InvalidBounds(format!(
                "data is {} bytes, need at least {}",
                data_len, required
            )));
        }

        Ok(())
    }
}
