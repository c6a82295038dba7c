//! Lossless rotation by quarter and half turns.
//!
//! Quarter turns remap indices into a separate destination with swapped
//! dimensions:
//! ```text
//! clockwise:         dst[x][height - 1 - y] = src[y][x]
//! counter-clockwise: dst[width - 1 - x][y]  = src[y][x]
//! ```
//!
//! The half turn runs in place. Row `y` of the top half is paired with row
//! `height - 1 - y` of the bottom half and pixel `x` with pixel
//! `width - 1 - x`, so each swap touches two pixels no other swap reads.
//! An odd middle row is mirrored onto itself, leaving the center pixel of
//! an odd-by-odd image where it is.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::check_destination;
use crate::buffer::{PixelView, PixelViewMut, BYTES_PER_PIXEL};
use crate::error::TransformResult;

/// A lossless rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    /// 90 degrees clockwise.
    Clockwise90,
    /// 90 degrees counter-clockwise.
    CounterClockwise90,
    /// 180 degrees.
    Half,
}

impl Rotation {
    /// Dimensions of the rotated image for a `width` x `height` source.
    ///
    /// Quarter turns swap the dimensions, the half turn keeps them.
    ///
    /// # Example
    ///
    /// ```
    /// use pixelkit_core::Rotation;
    ///
    /// assert_eq!(Rotation::Clockwise90.output_dimensions(3, 2), (2, 3));
    /// assert_eq!(Rotation::Half.output_dimensions(3, 2), (3, 2));
    /// ```
    pub fn output_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Rotation::Clockwise90 | Rotation::CounterClockwise90 => (height, width),
            Rotation::Half => (width, height),
        }
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise90 => Rotation::CounterClockwise90,
            Rotation::CounterClockwise90 => Rotation::Clockwise90,
            Rotation::Half => Rotation::Half,
        }
    }

    /// Clockwise angle in degrees (90, 270 or 180).
    pub fn clockwise_degrees(self) -> u32 {
        match self {
            Rotation::Clockwise90 => 90,
            Rotation::CounterClockwise90 => 270,
            Rotation::Half => 180,
        }
    }
}

/// Rotate 90 degrees clockwise from `src` into `dst`.
///
/// `dst` must be `src.height()` wide and `src.width()` tall.
///
/// # Errors
///
/// [`TransformError::AllocationMismatch`](crate::TransformError::AllocationMismatch)
/// if `dst` has the wrong dimensions. Nothing is written in that case.
pub fn rotate_90_cw(src: &PixelView<'_>, dst: &mut PixelViewMut<'_>) -> TransformResult<()> {
    let (width, height) = src.dimensions();
    trace!(width, height, "rotate_90_cw");
    check_destination(
        "rotate_90_cw",
        dst,
        Rotation::Clockwise90.output_dimensions(width, height),
    )?;

    let (w, h) = (width as usize, height as usize);
    for y in 0..h {
        for x in 0..w {
            dst.put(h - 1 - y, x, src.pixel(x, y));
        }
    }
    Ok(())
}

/// Rotate 90 degrees counter-clockwise from `src` into `dst`.
///
/// `dst` must be `src.height()` wide and `src.width()` tall.
///
/// # Errors
///
/// [`TransformError::AllocationMismatch`](crate::TransformError::AllocationMismatch)
/// if `dst` has the wrong dimensions. Nothing is written in that case.
pub fn rotate_90_ccw(src: &PixelView<'_>, dst: &mut PixelViewMut<'_>) -> TransformResult<()> {
    let (width, height) = src.dimensions();
    trace!(width, height, "rotate_90_ccw");
    check_destination(
        "rotate_90_ccw",
        dst,
        Rotation::CounterClockwise90.output_dimensions(width, height),
    )?;

    let (w, h) = (width as usize, height as usize);
    for y in 0..h {
        for x in 0..w {
            dst.put(y, w - 1 - x, src.pixel(x, y));
        }
    }
    Ok(())
}

/// Rotate 180 degrees in place, without an auxiliary buffer.
pub fn rotate_180(view: &mut PixelViewMut<'_>) {
    let (width, height) = view.dimensions();
    trace!(width, height, "rotate_180");

    let (w, h) = (width as usize, height as usize);
    for y in 0..h / 2 {
        let (top, bottom) = view.row_pair_mut(y, h - 1 - y);
        for x in 0..w {
            let a = x * BYTES_PER_PIXEL;
            let b = (w - 1 - x) * BYTES_PER_PIXEL;
            top[a..a + BYTES_PER_PIXEL].swap_with_slice(&mut bottom[b..b + BYTES_PER_PIXEL]);
        }
    }

    if h % 2 == 1 {
        mirror_row(view.row_mut(h / 2), w);
    }
}

/// Reverse the pixel order of one row in place.
fn mirror_row(row: &mut [u8], width: usize) {
    for x in 0..width / 2 {
        let a = x * BYTES_PER_PIXEL;
        let b = (width - 1 - x) * BYTES_PER_PIXEL;
        let (left, right) = row.split_at_mut(b);
        left[a..a + BYTES_PER_PIXEL].swap_with_slice(&mut right[..BYTES_PER_PIXEL]);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
