//! Rectangular cropping in whole source pixels.
//!
//! A crop relocates pixels without touching their values, so each output
//! row is one bulk copy of `width * 4` bytes out of the matching source
//! row. Row padding on either side is neither read nor written.
//!
//! # Example
//!
//! ```ignore
//! // Keep the 50x50 block whose top-left corner is at (25, 25)
//! let rect = CropRect::new(25, 25, 50, 50);
//! let (w, h) = rect.dimensions();
//! let mut out = vec![0u8; (w * h * 4) as usize];
//! let mut dst = PixelViewMut::new(&mut out, BufferDescriptor::packed(w, h))?;
//! apply_crop(&src, &mut dst, rect)?;
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::check_destination;
use crate::buffer::{PixelView, PixelViewMut, BYTES_PER_PIXEL};
use crate::error::{TransformError, TransformResult};

/// A crop region in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge, inclusive.
    pub x: u32,
    /// Top edge, inclusive.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle covering a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Output dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns true if the rectangle is non-empty and lies entirely inside
    /// a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= width && b <= height)
    }

    /// Like [`fits_within`](Self::fits_within), but reports the failure.
    ///
    /// # Errors
    ///
    /// [`TransformError::InvalidBounds`] if the rectangle is empty or does
    /// not fit.
    pub fn check_within(&self, width: u32, height: u32) -> TransformResult<()> {
        if self.fits_within(width, height) {
            return Ok(());
        }
        debug!(rect = ?self, width, height, "rejecting crop: rectangle outside source");
        Err(TransformError::InvalidBounds(format!(
            "crop {}x{} at ({}, {}) does not fit in {}x{}",
            self.width, self.height, self.x, self.y, width, height
        )))
    }
}

/// Copy the pixels of `rect` from `src` into `dst`.
///
/// `dst` must be exactly `rect.width` x `rect.height`. All checks run
/// before the first write.
///
/// # Errors
///
/// - [`TransformError::InvalidBounds`] if `rect` is empty or extends past
///   the source
/// - [`TransformError::AllocationMismatch`] if `dst` is not the size of
///   `rect`
pub fn apply_crop(src: &PixelView<'_>, dst: &mut PixelViewMut<'_>, rect: CropRect) -> TransformResult<()> {
    let (src_w, src_h) = src.dimensions();
    trace!(?rect, src_w, src_h, "apply_crop");

    rect.check_within(src_w, src_h)?;
    check_destination("apply_crop", dst, rect.dimensions())?;

    let start = rect.x as usize * BYTES_PER_PIXEL;
    let end = start + rect.width as usize * BYTES_PER_PIXEL;
    for row in 0..rect.height as usize {
        let src_row = src.row(rect.y as usize + row);
        dst.row_mut(row).copy_from_slice(&src_row[start..end]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestBuffer;

    fn crop(img: &TestBuffer, rect: CropRect, padding: usize) -> TransformResult<TestBuffer> {
        let mut dst = TestBuffer::blank(rect.width.max(1), rect.height.max(1), padding);
        apply_crop(&img.view(), &mut dst.view_mut(), rect)?;
        Ok(dst)
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = TestBuffer::gradient(10, 8, 0);
        let dst = crop(&img, CropRect::full(10, 8), 0).unwrap();
        assert_eq!(dst, img);
    }

    #[test]
    fn test_crop_interior_region() {
        let img = TestBuffer::from_pixels(4, 3, 0, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        // 1  2  3  4
        // 5  6  7  8
        // 9 10 11 12
        let dst = crop(&img, CropRect::new(1, 1, 2, 2), 0).unwrap();
        assert_eq!(dst.desc.dimensions(), (2, 2));
        assert_eq!(dst.pixels(), vec![6, 7, 10, 11]);
    }

    #[test]
    fn test_crop_single_pixel() {
        let img = TestBuffer::gradient(5, 5, 3);
        let dst = crop(&img, CropRect::new(4, 4, 1, 1), 0).unwrap();
        assert_eq!(dst.pixels(), vec![img.at(4, 4)]);
    }

    #[test]
    fn test_crop_between_padded_buffers() {
        let img = TestBuffer::gradient(9, 6, 12);
        let rect = CropRect::new(2, 1, 5, 4);
        let dst = crop(&img, rect, 8).unwrap();

        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(dst.at(x, y), img.at(x + 2, y + 1));
            }
        }
        assert!(dst.padding_intact());
    }

    #[test]
    fn test_crop_outside_source_rejected_without_writing() {
        let img = TestBuffer::gradient(4, 4, 0);
        let mut dst = TestBuffer::blank(3, 2, 4);
        let before = dst.clone();

        let rect = CropRect::new(2, 0, 3, 2);
        let err = apply_crop(&img.view(), &mut dst.view_mut(), rect).unwrap_err();
        assert!(matches!(err, TransformError::InvalidBounds(_)));
        assert_eq!(dst, before);
    }

    #[test]
    fn test_crop_bottom_edge_rejected() {
        let img = TestBuffer::gradient(4, 4, 0);
        let err = crop(&img, CropRect::new(0, 3, 4, 2), 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid bounds: crop 4x2 at (0, 3) does not fit in 4x4"
        );
    }

    #[test]
    fn test_crop_overflowing_rect_rejected() {
        let img = TestBuffer::gradient(4, 4, 0);
        let err = crop(&img, CropRect::new(u32::MAX, 0, 2, 1), 0).unwrap_err();
        assert!(matches!(err, TransformError::InvalidBounds(_)));
    }

    #[test]
    fn test_empty_crop_rejected() {
        let img = TestBuffer::gradient(4, 4, 0);
        assert!(matches!(
            crop(&img, CropRect::new(0, 0, 0, 2), 0),
            Err(TransformError::InvalidBounds(_))
        ));
        assert!(matches!(
            crop(&img, CropRect::new(0, 0, 2, 0), 0),
            Err(TransformError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_crop_destination_size_mismatch() {
        let img = TestBuffer::gradient(6, 6, 0);
        let mut dst = TestBuffer::blank(3, 3, 0);
        let before = dst.clone();

        let err = apply_crop(&img.view(), &mut dst.view_mut(), CropRect::new(0, 0, 3, 2)).unwrap_err();
        assert_eq!(
            err,
            TransformError::AllocationMismatch {
                expected: (3, 2),
                actual: (3, 3),
            }
        );
        assert_eq!(dst, before);
    }

    #[test]
    fn test_bounds_checked_before_destination() {
        let img = TestBuffer::gradient(4, 4, 0);
        // Both the rect and the destination are wrong
        let mut dst = TestBuffer::blank(1, 1, 0);
        let err = apply_crop(&img.view(), &mut dst.view_mut(), CropRect::new(3, 3, 2, 2)).unwrap_err();
        assert!(matches!(err, TransformError::InvalidBounds(_)));
    }

    #[test]
    fn test_fits_within() {
        assert!(CropRect::new(0, 0, 4, 4).fits_within(4, 4));
        assert!(CropRect::new(3, 3, 1, 1).fits_within(4, 4));
        assert!(!CropRect::new(3, 3, 2, 1).fits_within(4, 4));
        assert!(!CropRect::new(0, 0, 0, 1).fits_within(4, 4));
        assert!(!CropRect::new(1, u32::MAX, 1, 1).fits_within(4, 4));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
