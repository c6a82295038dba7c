//! Color filter WASM bindings.
//!
//! Every filter here runs in place on a writable `JsBitmap`. Factor ranges
//! are enforced at this boundary; the core engine accepts any factor and
//! saturates.

use crate::types::{filter_from_name, JsBitmap};
use pixelkit_core::filters::{
    adjust_brightness as core_brightness, adjust_contrast as core_contrast,
    apply_filter as core_filter, apply_grayscale as core_grayscale, apply_invert as core_invert,
    apply_sepia as core_sepia,
};
use pixelkit_core::{PixelViewMut, TransformError, TransformResult};
use std::ops::RangeInclusive;
use tracing::debug;
use wasm_bindgen::prelude::*;

/// Accepted brightness offsets.
pub const BRIGHTNESS_RANGE: RangeInclusive<i32> = -255..=255;

/// Accepted contrast factors.
pub const CONTRAST_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// Convert the pixels to luminosity-weighted grayscale.
#[wasm_bindgen]
pub fn apply_grayscale(bitmap: &mut JsBitmap) -> Result<(), JsValue> {
    in_place(bitmap, core_grayscale).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply a sepia tone.
#[wasm_bindgen]
pub fn apply_sepia(bitmap: &mut JsBitmap) -> Result<(), JsValue> {
    in_place(bitmap, core_sepia).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Invert every color channel, keeping alpha.
#[wasm_bindgen]
pub fn apply_invert(bitmap: &mut JsBitmap) -> Result<(), JsValue> {
    in_place(bitmap, core_invert).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Add `factor` to each color channel.
///
/// # Arguments
/// * `bitmap` - Writable bitmap to adjust
/// * `factor` - Offset in -255 to 255
///
/// # Errors
/// Returns error if the bitmap is read-only or invalid, or `factor` is out
/// of range
#[wasm_bindgen]
pub fn adjust_brightness(bitmap: &mut JsBitmap, factor: i32) -> Result<(), JsValue> {
    brightness_in_place(bitmap, factor).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Scale each color channel's distance from mid-gray by `factor`.
///
/// # Arguments
/// * `bitmap` - Writable bitmap to adjust
/// * `factor` - Contrast multiplier in 0.0 to 2.0 (1.0 = unchanged)
///
/// # Errors
/// Returns error if the bitmap is read-only or invalid, or `factor` is out
/// of range or not finite
#[wasm_bindgen]
pub fn adjust_contrast(bitmap: &mut JsBitmap, factor: f32) -> Result<(), JsValue> {
    contrast_in_place(bitmap, factor).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply a filter preset by name.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // The viewer always filters a copy of the original
/// const preview = original.copy();
/// apply_filter(preview, "sepia");
/// ```
#[wasm_bindgen]
pub fn apply_filter(bitmap: &mut JsBitmap, name: &str) -> Result<(), JsValue> {
    let filter = filter_from_name(name);
    in_place(bitmap, |view| core_filter(view, filter)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Lock `bitmap` for writing, run `op`, and release the lock.
pub(crate) fn in_place<F>(bitmap: &mut JsBitmap, op: F) -> TransformResult<()>
where
    F: FnOnce(&mut PixelViewMut<'_>),
{
    let mut view = bitmap.lock_pixels_mut()?;
    op(&mut view);
    Ok(())
}

pub(crate) fn brightness_in_place(bitmap: &mut JsBitmap, factor: i32) -> TransformResult<()> {
    let mut view = bitmap.lock_pixels_mut()?;
    if !BRIGHTNESS_RANGE.contains(&factor) {
        debug!(factor, "rejecting brightness: factor out of range");
        return Err(TransformError::InvalidBounds(format!(
            "brightness {} outside {}..={}",
            factor,
            BRIGHTNESS_RANGE.start(),
            BRIGHTNESS_RANGE.end()
        )));
    }
    core_brightness(&mut view, factor);
    Ok(())
}

pub(crate) fn contrast_in_place(bitmap: &mut JsBitmap, factor: f32) -> TransformResult<()> {
    let mut view = bitmap.lock_pixels_mut()?;
    // NaN fails `contains`
    if !CONTRAST_RANGE.contains(&factor) {
        debug!(factor, "rejecting contrast: factor out of range");
        return Err(TransformError::InvalidBounds(format!(
            "contrast {} outside {}..={}",
            factor,
            CONTRAST_RANGE.start(),
            CONTRAST_RANGE.end()
        )));
    }
    core_contrast(&mut view, factor);
    Ok(())
}
