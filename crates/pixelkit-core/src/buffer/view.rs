//! Bounds-checked 2-D views over caller-owned pixel memory.

use super::types::{BufferDescriptor, BYTES_PER_PIXEL};
use crate::error::{TransformError, TransformResult};

#[inline]
fn load(row: &[u8], x: usize) -> u32 {
    let i = x * BYTES_PER_PIXEL;
    u32::from_ne_bytes([row[i], row[i + 1], row[i + 2], row[i + 3]])
}

#[inline]
fn store(row: &mut [u8], x: usize, pixel: u32) {
    let i = x * BYTES_PER_PIXEL;
    row[i..i + BYTES_PER_PIXEL].copy_from_slice(&pixel.to_ne_bytes());
}

/// Shared, read-only view of a validated ARGB pixel grid.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelView<'a> {
    /// Validate `desc` against `data` and create a view.
    ///
    /// # Errors
    ///
    /// See [`BufferDescriptor::validate`].
    pub fn new(data: &'a [u8], desc: BufferDescriptor) -> TransformResult<Self> {
        desc.validate(data.len())?;
        Ok(Self {
            data,
            width: desc.width as usize,
            height: desc.height as usize,
            stride: desc.stride as usize,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// Dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Row stride in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel bytes of row `y`, excluding padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &'a [u8] {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);
        let data: &'a [u8] = self.data;
        let start = y * self.stride;
        &data[start..start + self.width * BYTES_PER_PIXEL]
    }

    /// Iterate over the pixel bytes of every row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Packed pixel at (x, y), or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(load(self.row(y), x))
    }

    /// Packed pixel at (x, y); the caller guarantees the coordinates are
    /// inside the grid.
    #[inline]
    pub(crate) fn pixel(&self, x: usize, y: usize) -> u32 {
        load(self.row(y), x)
    }

    /// Copy the logical pixels out in row-major order, dropping padding.
    pub fn to_pixels(&self) -> Vec<u32> {
        let mut pixels = Vec::with_capacity(self.width * self.height);
        for row in self.rows() {
            pixels.extend((0..self.width).map(|x| load(row, x)));
        }
        pixels
    }
}

/// Exclusive view of a validated ARGB pixel grid.
///
/// Holding this view is holding the lock on the buffer. It is released
/// when the view is dropped.
#[derive(Debug)]
pub struct PixelViewMut<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelViewMut<'a> {
    /// Validate `desc` against `data` and create an exclusive view.
    ///
    /// Validation happens here, before anything can be written, so every
    /// in-place transform either runs to completion or never starts.
    ///
    /// # Errors
    ///
    /// See [`BufferDescriptor::validate`].
    pub fn new(data: &'a mut [u8], desc: BufferDescriptor) -> TransformResult<Self> {
        desc.validate(data.len())?;
        Ok(Self {
            data,
            width: desc.width as usize,
            height: desc.height as usize,
            stride: desc.stride as usize,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// Dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Row stride in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Pixel bytes of row `y`, excluding padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);
        let start = y * self.stride;
        &self.data[start..start + self.width * BYTES_PER_PIXEL]
    }

    /// Mutable pixel bytes of row `y`, excluding padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);
        let start = y * self.stride;
        &mut self.data[start..start + self.width * BYTES_PER_PIXEL]
    }

    /// Two distinct rows at once, `upper` strictly above `lower`.
    pub(crate) fn row_pair_mut(&mut self, upper: usize, lower: usize) -> (&mut [u8], &mut [u8]) {
        assert!(upper < lower && lower < self.height);
        let row_bytes = self.width * BYTES_PER_PIXEL;
        let (head, tail) = self.data.split_at_mut(lower * self.stride);
        let start = upper * self.stride;
        (&mut head[start..start + row_bytes], &mut tail[..row_bytes])
    }

    /// Packed pixel at (x, y), or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        self.as_view().get(x, y)
    }

    /// Overwrite the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidBounds`] if (x, y) lies outside the
    /// grid; padding bytes cannot be reached through this call.
    pub fn set(&mut self, x: u32, y: u32, pixel: u32) -> TransformResult<()> {
        let (xu, yu) = (x as usize, y as usize);
        if xu >= self.width || yu >= self.height {
            return Err(TransformError::InvalidBounds(format!(
                "pixel ({}, {}) outside {}x{}",
                x, y, self.width, self.height
            )));
        }
        store(self.row_mut(yu), xu, pixel);
        Ok(())
    }

    /// Packed pixel write at (x, y); the caller guarantees the coordinates
    /// are inside the grid.
    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, pixel: u32) {
        store(self.row_mut(y), x, pixel);
    }

    /// Replace every pixel with `f(pixel)`, row by row.
    pub fn map_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(u32) -> u32,
    {
        for y in 0..self.height {
            for chunk in self.row_mut(y).chunks_exact_mut(BYTES_PER_PIXEL) {
                let pixel = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                chunk.copy_from_slice(&f(pixel).to_ne_bytes());
            }
        }
    }

    /// Copy the logical pixels out in row-major order, dropping padding.
    pub fn to_pixels(&self) -> Vec<u32> {
        self.as_view().to_pixels()
    }
}
