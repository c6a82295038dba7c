//! Test fixtures: owned pixel buffers with sentinel-filled row padding.

use crate::buffer::{BufferDescriptor, PixelFormat, PixelView, PixelViewMut, BYTES_PER_PIXEL};
use crate::codec::encode_argb;

/// Byte written into every padding position.
pub(crate) const PAD: u8 = 0xEE;

/// An owned buffer plus its descriptor.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TestBuffer {
    pub data: Vec<u8>,
    pub desc: BufferDescriptor,
}

impl TestBuffer {
    /// Build a buffer from row-major pixels, adding `padding` bytes after
    /// each row.
    pub fn from_pixels(width: u32, height: u32, padding: usize, pixels: &[u32]) -> Self {
        assert_eq!(pixels.len(), (width * height) as usize);
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let stride = row_bytes + padding;
        let mut data = vec![PAD; stride * height as usize];
        for (y, row) in pixels.chunks(width as usize).enumerate() {
            for (x, pixel) in row.iter().enumerate() {
                let i = y * stride + x * BYTES_PER_PIXEL;
                data[i..i + BYTES_PER_PIXEL].copy_from_slice(&pixel.to_ne_bytes());
            }
        }
        Self {
            data,
            desc: BufferDescriptor::new(width, height, stride as u32, PixelFormat::Argb8888),
        }
    }

    /// A buffer where every pixel encodes its own position and alpha varies.
    pub fn gradient(width: u32, height: u32, padding: usize) -> Self {
        let pixels: Vec<u32> = (0..height)
            .flat_map(|y| (0..width).map(move |x| position_pixel(x, y)))
            .collect();
        Self::from_pixels(width, height, padding, &pixels)
    }

    /// An empty (transparent black) packed buffer of the given size.
    pub fn blank(width: u32, height: u32, padding: usize) -> Self {
        Self::from_pixels(width, height, padding, &vec![0; (width * height) as usize])
    }

    pub fn view(&self) -> PixelView<'_> {
        PixelView::new(&self.data, self.desc).unwrap()
    }

    pub fn view_mut(&mut self) -> PixelViewMut<'_> {
        PixelViewMut::new(&mut self.data, self.desc).unwrap()
    }

    /// Logical pixels in row-major order.
    pub fn pixels(&self) -> Vec<u32> {
        self.view().to_pixels()
    }

    /// Pixel at (x, y).
    pub fn at(&self, x: u32, y: u32) -> u32 {
        self.view().get(x, y).unwrap()
    }

    /// True if no padding byte has been touched.
    pub fn padding_intact(&self) -> bool {
        let stride = self.desc.stride as usize;
        let row_bytes = self.desc.width as usize * BYTES_PER_PIXEL;
        self.data
            .chunks(stride)
            .all(|row| row[row_bytes..].iter().all(|&b| b == PAD))
    }
}

/// A pixel unique to (x, y) for images up to 256x256.
pub(crate) fn position_pixel(x: u32, y: u32) -> u32 {
    encode_argb((x * 7 + y * 13) as u8, x as u8, y as u8, (x ^ y) as u8)
}
