//! WASM bindings for geometric transforms.
//!
//! The half turn runs in place. Quarter turns and crops change the
//! dimensions, so these bindings allocate a packed destination bitmap of the
//! right size and return it; the source is only read and may be read-only.

use crate::types::JsBitmap;
use pixelkit_core::transform::{
    apply_crop as core_crop, rotate_180 as core_rotate_180, rotate_90_ccw as core_rotate_ccw,
    rotate_90_cw as core_rotate_cw,
};
use pixelkit_core::{CropRect, Rotation, TransformError, TransformResult};
use tracing::debug;
use wasm_bindgen::prelude::*;

/// Rotate 180 degrees in place.
#[wasm_bindgen]
pub fn rotate_180(bitmap: &mut JsBitmap) -> Result<(), JsValue> {
    let mut view = bitmap
        .lock_pixels_mut()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    core_rotate_180(&mut view);
    Ok(())
}

/// Rotate 90 degrees clockwise into a new bitmap.
#[wasm_bindgen]
pub fn rotate_90_cw(bitmap: &JsBitmap) -> Result<JsBitmap, JsValue> {
    rotated(bitmap, Rotation::Clockwise90).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate 90 degrees counter-clockwise into a new bitmap.
#[wasm_bindgen]
pub fn rotate_90_ccw(bitmap: &JsBitmap) -> Result<JsBitmap, JsValue> {
    rotated(bitmap, Rotation::CounterClockwise90).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate into a new bitmap using a serialized rotation.
///
/// # Arguments
///
/// * `bitmap` - Source bitmap (not modified)
/// * `rotation` - One of `"Clockwise90"`, `"CounterClockwise90"` or `"Half"`
///
/// # Example (TypeScript)
///
/// ```typescript
/// const turned = apply_rotation(bitmap, "CounterClockwise90");
/// console.log(`${turned.width}x${turned.height}`);
/// ```
#[wasm_bindgen]
pub fn apply_rotation(bitmap: &JsBitmap, rotation: JsValue) -> Result<JsBitmap, JsValue> {
    let rotation: Rotation = serde_wasm_bindgen::from_value(rotation)
        .map_err(|e| JsValue::from_str(&format!("Invalid rotation: {}", e)))?;
    rotated(bitmap, rotation).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Crop a rectangle into a new bitmap.
///
/// # Arguments
///
/// * `bitmap` - Source bitmap (not modified)
/// * `x`, `y` - Top-left corner of the region, in pixels
/// * `width`, `height` - Size of the region, in pixels
///
/// # Errors
///
/// Returns error if the coordinates are negative, the size is not positive,
/// or the region extends past the source.
#[wasm_bindgen]
pub fn crop(bitmap: &JsBitmap, x: i32, y: i32, width: i32, height: i32) -> Result<JsBitmap, JsValue> {
    crop_rect_from_signed(x, y, width, height)
        .and_then(|rect| cropped(bitmap, rect))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Crop using a `{ x, y, width, height }` object.
#[wasm_bindgen]
pub fn crop_region(bitmap: &JsBitmap, rect: JsValue) -> Result<JsBitmap, JsValue> {
    let rect: CropRect = serde_wasm_bindgen::from_value(rect)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop rectangle: {}", e)))?;
    cropped(bitmap, rect).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub(crate) fn rotated(bitmap: &JsBitmap, rotation: Rotation) -> TransformResult<JsBitmap> {
    let src = bitmap.lock_pixels()?;
    let (width, height) = rotation.output_dimensions(src.width(), src.height());
    let mut out = JsBitmap::blank(width, height)?;
    {
        let mut dst = out.lock_pixels_mut()?;
        match rotation {
            Rotation::Clockwise90 => core_rotate_cw(&src, &mut dst)?,
            Rotation::CounterClockwise90 => core_rotate_ccw(&src, &mut dst)?,
            Rotation::Half => {
                core_crop(&src, &mut dst, CropRect::full(width, height))?;
                core_rotate_180(&mut dst);
            }
        }
    }
    Ok(out)
}

pub(crate) fn cropped(bitmap: &JsBitmap, rect: CropRect) -> TransformResult<JsBitmap> {
    let src = bitmap.lock_pixels()?;
    // Reject before allocating a destination for a bogus rectangle
    rect.check_within(src.width(), src.height())?;

    let (width, height) = rect.dimensions();
    let mut out = JsBitmap::blank(width, height)?;
    core_crop(&src, &mut out.lock_pixels_mut()?, rect)?;
    Ok(out)
}

/// Convert signed crop arguments into a rectangle.
pub(crate) fn crop_rect_from_signed(x: i32, y: i32, width: i32, height: i32) -> TransformResult<CropRect> {
    if x < 0 || y < 0 || width <= 0 || height <= 0 {
        debug!(x, y, width, height, "rejecting crop: negative origin or empty size");
        return Err(TransformError::InvalidBounds(format!(
            "crop {}x{} at ({}, {}) must have a non-negative origin and positive size",
            width, height, x, y
        )));
    }
    Ok(CropRect::new(x as u32, y as u32, width as u32, height as u32))
}
