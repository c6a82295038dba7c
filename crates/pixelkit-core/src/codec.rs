//! Packed ARGB pixel codec.
//!
//! A pixel is one `u32` holding four 8-bit channels, alpha in the most
//! significant byte: `0xAARRGGBB`. Every filter and transform goes through
//! these helpers to split and rebuild pixels.

/// Bit offset of the alpha channel.
pub const ALPHA_SHIFT: u32 = 24;

/// Bit offset of the red channel.
pub const RED_SHIFT: u32 = 16;

/// Bit offset of the green channel.
pub const GREEN_SHIFT: u32 = 8;

/// Bit offset of the blue channel.
pub const BLUE_SHIFT: u32 = 0;

/// Split a packed pixel into `(a, r, g, b)`.
#[inline]
pub fn decode_argb(pixel: u32) -> (u8, u8, u8, u8) {
    (
        (pixel >> ALPHA_SHIFT) as u8,
        (pixel >> RED_SHIFT) as u8,
        (pixel >> GREEN_SHIFT) as u8,
        (pixel >> BLUE_SHIFT) as u8,
    )
}

/// Pack four channels into a pixel.
///
/// No range checking happens here; channel values are already `u8`, so
/// anything computed wider must go through [`clamp_channel`] first.
#[inline]
pub fn encode_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << ALPHA_SHIFT
        | (r as u32) << RED_SHIFT
        | (g as u32) << GREEN_SHIFT
        | (b as u32) << BLUE_SHIFT
}

/// Saturate an integer to the channel range [0, 255].
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Alpha channel of a packed pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    (pixel >> ALPHA_SHIFT) as u8
}
