//! Geometric transforms: quarter/half turns and cropping.
//!
//! These operations move pixels without changing them. Quarter turns and
//! crops change the image dimensions and write into a caller-allocated
//! destination; the half turn keeps the dimensions and runs in place.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, `x` grows right, `y` grows down
//! - Clockwise means clockwise as displayed
//! - Crop rectangles are in whole pixels of the source image
//!
//! # Destinations
//!
//! The engine never allocates. Use [`Rotation::output_dimensions`] or
//! [`CropRect::dimensions`] to size the destination; a destination of any
//! other size is rejected with
//! [`TransformError::AllocationMismatch`](crate::TransformError::AllocationMismatch)
//! before anything is written.

mod crop;
mod rotation;

pub use crop::{apply_crop, CropRect};
pub use rotation::{rotate_180, rotate_90_ccw, rotate_90_cw, Rotation};

use tracing::debug;

use crate::buffer::PixelViewMut;
use crate::error::{TransformError, TransformResult};

/// Reject a destination whose dimensions differ from `expected`.
fn check_destination(op: &str, dst: &PixelViewMut<'_>, expected: (u32, u32)) -> TransformResult<()> {
    let actual = dst.dimensions();
    if actual != expected {
        debug!(op, ?expected, ?actual, "rejecting destination: size mismatch");
        return Err(TransformError::AllocationMismatch { expected, actual });
    }
    Ok(())
}
