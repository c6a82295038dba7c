//! Color filters
//!
//! Each filter is one in-place pass over a [`PixelViewMut`]: decode the
//! pixel, compute new color channels, clamp, re-encode. Alpha is carried
//! through untouched.
//!
//! ## Rounding
//! All fractional results truncate toward zero. The weighted-sum filters
//! (grayscale, sepia) are evaluated in fixed point with weights scaled by
//! 1000, which truncates the exact weighted sum. Floating point would land
//! just below an integer for some inputs (0.299 * 1 + 0.587 * 1 + 0.114 * 1
//! is not exactly 1.0) and turn a gray of 1 into 0 on a second pass.

use tracing::trace;

use crate::buffer::PixelViewMut;
use crate::codec::{clamp_channel, decode_argb, encode_argb};
use crate::ImageFilter;

/// Fixed-point scale of the weight tables below.
const WEIGHT_SCALE: i32 = 1000;

/// Luminosity weights (0.299, 0.587, 0.114).
const GRAY_WEIGHTS: [i32; 3] = [299, 587, 114];

/// Sepia tone matrix, one row per output channel (r, g, b).
const SEPIA_MATRIX: [[i32; 3]; 3] = [[393, 769, 189], [349, 686, 168], [272, 534, 131]];

/// Mid-gray pivot for contrast.
const CONTRAST_PIVOT: f32 = 128.0;

#[inline]
fn weighted_sum(weights: &[i32; 3], r: u8, g: u8, b: u8) -> i32 {
    (weights[0] * r as i32 + weights[1] * g as i32 + weights[2] * b as i32) / WEIGHT_SCALE
}

#[inline]
fn grayscale_pixel(pixel: u32) -> u32 {
    let (a, r, g, b) = decode_argb(pixel);
    // Weights sum to 1, so the result never leaves [0, 255]
    let gray = weighted_sum(&GRAY_WEIGHTS, r, g, b) as u8;
    encode_argb(a, gray, gray, gray)
}

#[inline]
fn sepia_pixel(pixel: u32) -> u32 {
    let (a, r, g, b) = decode_argb(pixel);
    let [wr, wg, wb] = &SEPIA_MATRIX;
    encode_argb(
        a,
        clamp_channel(weighted_sum(wr, r, g, b)),
        clamp_channel(weighted_sum(wg, r, g, b)),
        clamp_channel(weighted_sum(wb, r, g, b)),
    )
}

#[inline]
fn invert_pixel(pixel: u32) -> u32 {
    let (a, r, g, b) = decode_argb(pixel);
    encode_argb(a, 255 - r, 255 - g, 255 - b)
}

#[inline]
fn brightness_channel(c: u8, factor: i32) -> u8 {
    clamp_channel((c as i32).saturating_add(factor))
}

#[inline]
fn contrast_channel(c: u8, factor: f32) -> u8 {
    // `as i32` truncates toward zero and saturates (NaN becomes 0)
    clamp_channel(((c as f32 - CONTRAST_PIVOT) * factor + CONTRAST_PIVOT) as i32)
}

/// Convert to luminosity-weighted grayscale in place.
///
/// `gray = trunc(0.299 r + 0.587 g + 0.114 b)`, written to all three color
/// channels. Applying it twice gives the same result as applying it once.
pub fn apply_grayscale(view: &mut PixelViewMut<'_>) {
    trace!(width = view.width(), height = view.height(), "apply_grayscale");
    view.map_pixels(grayscale_pixel);
}

/// Apply a sepia tone in place.
///
/// ```text
/// r' = 0.393 r + 0.769 g + 0.189 b
/// g' = 0.349 r + 0.686 g + 0.168 b
/// b' = 0.272 r + 0.534 g + 0.131 b
/// ```
///
/// Each channel is truncated, then clamped to 255 independently.
pub fn apply_sepia(view: &mut PixelViewMut<'_>) {
    trace!(width = view.width(), height = view.height(), "apply_sepia");
    view.map_pixels(sepia_pixel);
}

/// Invert the color channels in place (`c' = 255 - c`).
pub fn apply_invert(view: &mut PixelViewMut<'_>) {
    trace!(width = view.width(), height = view.height(), "apply_invert");
    view.map_pixels(invert_pixel);
}

/// Add `factor` to every color channel, saturating at 0 and 255.
///
/// The supported range is -255 to 255; larger magnitudes are accepted and
/// simply saturate every channel.
pub fn adjust_brightness(view: &mut PixelViewMut<'_>, factor: i32) {
    trace!(width = view.width(), height = view.height(), factor, "adjust_brightness");
    if factor == 0 {
        return;
    }
    view.map_pixels(|pixel| {
        let (a, r, g, b) = decode_argb(pixel);
        encode_argb(
            a,
            brightness_channel(r, factor),
            brightness_channel(g, factor),
            brightness_channel(b, factor),
        )
    });
}

/// Scale every color channel's distance from mid-gray by `factor`.
///
/// Formula: `c' = clamp(trunc((c - 128) * factor + 128))`
///
/// The supported range is 0.0 to 2.0 with 1.0 as identity. Other finite
/// values are computed with the same formula.
pub fn adjust_contrast(view: &mut PixelViewMut<'_>, factor: f32) {
    trace!(width = view.width(), height = view.height(), factor, "adjust_contrast");
    if factor == 1.0 {
        return;
    }
    view.map_pixels(|pixel| {
        let (a, r, g, b) = decode_argb(pixel);
        encode_argb(
            a,
            contrast_channel(r, factor),
            contrast_channel(g, factor),
            contrast_channel(b, factor),
        )
    });
}

/// Apply a named filter preset in place.
pub fn apply_filter(view: &mut PixelViewMut<'_>, filter: ImageFilter) {
    match filter {
        ImageFilter::None => {}
        ImageFilter::Grayscale => apply_grayscale(view),
        ImageFilter::Sepia => apply_sepia(view),
        ImageFilter::Invert => apply_invert(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestBuffer;

    /// Helper to build a single opaque pixel
    fn rgb(r: u8, g: u8, b: u8) -> u32 {
        encode_argb(255, r, g, b)
    }

    /// Helper to run a filter on a 1x1 buffer and return the pixel
    fn apply_one(pixel: u32, f: impl FnOnce(&mut PixelViewMut<'_>)) -> u32 {
        let mut buf = TestBuffer::from_pixels(1, 1, 0, &[pixel]);
        f(&mut buf.view_mut());
        buf.at(0, 0)
    }

    // ===== Grayscale Tests =====

    #[test]
    fn test_grayscale_primaries() {
        assert_eq!(apply_one(rgb(255, 0, 0), apply_grayscale), rgb(76, 76, 76));
        assert_eq!(apply_one(rgb(0, 255, 0), apply_grayscale), rgb(149, 149, 149));
        assert_eq!(apply_one(rgb(0, 0, 255), apply_grayscale), rgb(29, 29, 29));
    }

    #[test]
    fn test_grayscale_mixed() {
        // 0.299 * 100 + 0.587 * 150 + 0.114 * 200 = 140.75
        assert_eq!(apply_one(rgb(100, 150, 200), apply_grayscale), rgb(140, 140, 140));
    }

    #[test]
    fn test_grayscale_gray_unchanged() {
        for v in 0..=255u8 {
            let pixel = encode_argb(10, v, v, v);
            assert_eq!(apply_one(pixel, apply_grayscale), pixel, "gray {} drifted", v);
        }
    }

    #[test]
    fn test_grayscale_white_black() {
        assert_eq!(apply_one(rgb(255, 255, 255), apply_grayscale), rgb(255, 255, 255));
        assert_eq!(apply_one(rgb(0, 0, 0), apply_grayscale), rgb(0, 0, 0));
    }

    // ===== Sepia Tests =====

    #[test]
    fn test_sepia_mixed() {
        // r' = 39.3 + 115.35 + 37.8 = 192.45
        // g' = 34.9 + 102.9 + 33.6 = 171.4
        // b' = 27.2 + 80.1 + 26.2 = 133.5
        assert_eq!(apply_one(rgb(100, 150, 200), apply_sepia), rgb(192, 171, 133));
    }

    #[test]
    fn test_sepia_clamps_each_channel() {
        // White overflows red and green, blue lands at 238.935
        assert_eq!(apply_one(rgb(255, 255, 255), apply_sepia), rgb(255, 255, 238));
    }

    #[test]
    fn test_sepia_black_stays_black() {
        assert_eq!(apply_one(rgb(0, 0, 0), apply_sepia), rgb(0, 0, 0));
    }

    // ===== Invert Tests =====

    #[test]
    fn test_invert() {
        assert_eq!(apply_one(rgb(10, 20, 30), apply_invert), rgb(245, 235, 225));
        assert_eq!(apply_one(rgb(0, 255, 128), apply_invert), rgb(255, 0, 127));
    }

    #[test]
    fn test_invert_keeps_alpha() {
        let pixel = encode_argb(0x42, 1, 2, 3);
        assert_eq!(apply_one(pixel, apply_invert), encode_argb(0x42, 254, 253, 252));
    }

    // ===== Brightness Tests =====

    #[test]
    fn test_brightness_saturates_high() {
        let out = apply_one(rgb(200, 100, 0), |v| adjust_brightness(v, 300));
        assert_eq!(out, rgb(255, 255, 255));
    }

    #[test]
    fn test_brightness_clamped_not_wrapped() {
        let out = apply_one(rgb(250, 1, 128), |v| adjust_brightness(v, 10));
        assert_eq!(out, rgb(255, 11, 138));
    }

    #[test]
    fn test_brightness_saturates_low() {
        let out = apply_one(rgb(30, 60, 200), |v| adjust_brightness(v, -50));
        assert_eq!(out, rgb(0, 10, 150));
    }

    #[test]
    fn test_brightness_extreme_factor() {
        let out = apply_one(rgb(1, 2, 3), |v| adjust_brightness(v, i32::MAX));
        assert_eq!(out, rgb(255, 255, 255));
        let out = apply_one(rgb(253, 254, 255), |v| adjust_brightness(v, i32::MIN));
        assert_eq!(out, rgb(0, 0, 0));
    }

    // ===== Contrast Tests =====

    #[test]
    fn test_contrast_double() {
        // (200 - 128) * 2 + 128 = 272 -> 255
        // (100 - 128) * 2 + 128 = 72
        // (128 - 128) * 2 + 128 = 128
        let out = apply_one(rgb(200, 100, 128), |v| adjust_contrast(v, 2.0));
        assert_eq!(out, rgb(255, 72, 128));
    }

    #[test]
    fn test_contrast_half_truncates() {
        // (255 - 128) * 0.5 + 128 = 191.5 -> 191
        // (0 - 128) * 0.5 + 128 = 64
        let out = apply_one(rgb(255, 0, 129), |v| adjust_contrast(v, 0.5));
        assert_eq!(out, rgb(191, 64, 128));
    }

    #[test]
    fn test_contrast_zero_flattens() {
        let out = apply_one(rgb(0, 77, 255), |v| adjust_contrast(v, 0.0));
        assert_eq!(out, rgb(128, 128, 128));
    }

    #[test]
    fn test_contrast_out_of_range_still_computed() {
        // Negative factor mirrors around mid-gray: (0 - 128) * -1 + 128 = 256 -> 255
        let out = apply_one(rgb(0, 255, 128), |v| adjust_contrast(v, -1.0));
        assert_eq!(out, rgb(255, 1, 128));
    }

    #[test]
    fn test_contrast_nan_does_not_panic() {
        let out = apply_one(rgb(10, 20, 30), |v| adjust_contrast(v, f32::NAN));
        assert_eq!(out, rgb(0, 0, 0));
    }

    // ===== Preset Tests =====

    #[test]
    fn test_apply_filter_dispatch() {
        let src = rgb(100, 150, 200);
        assert_eq!(apply_one(src, |v| apply_filter(v, ImageFilter::None)), src);
        assert_eq!(
            apply_one(src, |v| apply_filter(v, ImageFilter::Grayscale)),
            apply_one(src, apply_grayscale)
        );
        assert_eq!(
            apply_one(src, |v| apply_filter(v, ImageFilter::Sepia)),
            apply_one(src, apply_sepia)
        );
        assert_eq!(
            apply_one(src, |v| apply_filter(v, ImageFilter::Invert)),
            apply_one(src, apply_invert)
        );
    }

    #[test]
    fn test_filters_cover_every_pixel_with_padding() {
        let mut buf = TestBuffer::gradient(7, 5, 12);
        let before = buf.pixels();
        apply_invert(&mut buf.view_mut());

        let after = buf.pixels();
        for (old, new) in before.iter().zip(&after) {
            assert_eq!(*new, invert_pixel(*old));
        }
        assert!(buf.padding_intact());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
