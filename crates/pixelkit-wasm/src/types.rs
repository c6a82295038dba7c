//! WASM-compatible bitmap type.
//!
//! `JsBitmap` plays the host role around the core engine: it owns the pixel
//! bytes, knows whether they may be written, and hands out scoped views to
//! the transform bindings.

use pixelkit_core::{
    BufferDescriptor, ImageFilter, PixelFormat, PixelView, PixelViewMut, TransformError,
    TransformResult,
};
use tracing::debug;
use wasm_bindgen::prelude::*;

/// A bitmap of packed ARGB pixels owned by WASM memory.
///
/// Each pixel is a native-endian `u32` laid out as `0xAARRGGBB`. Rows may be
/// padded: `stride` is the byte distance between row starts and can exceed
/// `width * 4`.
///
/// # Memory Management
///
/// `pixels()` copies the bytes out to a JavaScript `Uint8Array`. Call
/// `free()` to release a large bitmap early; otherwise the wasm-bindgen
/// finalizer reclaims it.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsBitmap {
    desc: BufferDescriptor,
    read_only: bool,
    data: Vec<u8>,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a tightly packed ARGB bitmap (`stride = width * 4`).
    ///
    /// The bytes are not checked here; every operation validates the
    /// geometry before touching them.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> JsBitmap {
        Self::from_parts(BufferDescriptor::packed(width, height), data)
    }

    /// Create an ARGB bitmap whose rows are `stride` bytes apart.
    pub fn with_stride(width: u32, height: u32, stride: u32, data: Vec<u8>) -> JsBitmap {
        Self::from_parts(
            BufferDescriptor::new(width, height, stride, PixelFormat::Argb8888),
            data,
        )
    }

    /// Create a bitmap from a `{ width, height, stride, format }` object.
    ///
    /// `format` is optional and defaults to `"Argb8888"`.
    pub fn from_descriptor(descriptor: JsValue, data: Vec<u8>) -> Result<JsBitmap, JsValue> {
        let desc: BufferDescriptor = serde_wasm_bindgen::from_value(descriptor)
            .map_err(|e| JsValue::from_str(&format!("Invalid descriptor: {}", e)))?;
        Ok(Self::from_parts(desc, data))
    }

    /// Serialize the geometry and format to a plain object.
    pub fn descriptor(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.desc).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.desc.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.desc.height
    }

    /// Byte distance between row starts
    #[wasm_bindgen(getter)]
    pub fn stride(&self) -> u32 {
        self.desc.stride
    }

    /// Pixel format name, e.g. `"Argb8888"`
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        format!("{:?}", self.desc.format)
    }

    #[wasm_bindgen(getter)]
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Mark the bitmap read-only (or writable again).
    ///
    /// In-place operations on a read-only bitmap fail; operations that
    /// produce a new bitmap still read from it.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of bytes in the backing storage, padding included
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    /// Returns the raw backing bytes, padding included, as a `Uint8Array`.
    pub fn pixels(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Returns the logical pixels in row-major order as a `Uint32Array`,
    /// without row padding.
    pub fn pixels_u32(&self) -> Result<js_sys::Uint32Array, JsValue> {
        let view = self
            .lock_pixels()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(js_sys::Uint32Array::from(&view.to_pixels()[..]))
    }

    /// Packed pixel at (x, y).
    pub fn pixel_at(&self, x: u32, y: u32) -> Result<u32, JsValue> {
        self.try_pixel_at(x, y)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// A writable copy of this bitmap.
    pub fn copy(&self) -> JsBitmap {
        Self::from_parts(self.desc, self.data.clone())
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsBitmap {
    /// Wrap existing bytes with a descriptor. The bitmap starts writable.
    pub fn from_parts(desc: BufferDescriptor, data: Vec<u8>) -> Self {
        Self {
            desc,
            read_only: false,
            data,
        }
    }

    /// A zeroed, tightly packed ARGB bitmap.
    pub(crate) fn blank(width: u32, height: u32) -> TransformResult<Self> {
        let desc = BufferDescriptor::packed(width, height);
        let len = desc.required_len().ok_or_else(|| {
            TransformError::InvalidBounds(format!("cannot allocate {}x{} bitmap", width, height))
        })?;
        Ok(Self::from_parts(desc, vec![0; len]))
    }

    /// The geometry and format of this bitmap.
    pub fn buffer_descriptor(&self) -> BufferDescriptor {
        self.desc
    }

    /// Validate the bitmap and borrow its pixels for reading.
    ///
    /// # Errors
    ///
    /// Any validation error from [`PixelView::new`].
    pub fn lock_pixels(&self) -> TransformResult<PixelView<'_>> {
        PixelView::new(&self.data, self.desc)
    }

    /// Validate the bitmap and borrow its pixels exclusively for writing.
    ///
    /// The lock is the borrow: no other access to the bitmap is possible
    /// until the returned view is dropped.
    ///
    /// # Errors
    ///
    /// [`TransformError::ReadOnly`] if the bitmap is read-only, otherwise
    /// any validation error from [`PixelViewMut::new`].
    pub fn lock_pixels_mut(&mut self) -> TransformResult<PixelViewMut<'_>> {
        if self.read_only {
            debug!(
                width = self.desc.width,
                height = self.desc.height,
                "rejecting write lock: bitmap is read-only"
            );
            return Err(TransformError::ReadOnly);
        }
        PixelViewMut::new(&mut self.data, self.desc)
    }

    pub(crate) fn try_pixel_at(&self, x: u32, y: u32) -> TransformResult<u32> {
        let view = self.lock_pixels()?;
        view.get(x, y).ok_or_else(|| {
            TransformError::InvalidBounds(format!(
                "pixel ({}, {}) outside {}x{}",
                x,
                y,
                view.width(),
                view.height()
            ))
        })
    }
}

/// Convert a preset name to the core ImageFilter enum.
///
/// Names are the lowercase preset names: `"none"`, `"grayscale"`, `"sepia"`
/// and `"invert"`, matched case-insensitively. Any other value defaults to
/// `None`.
pub(crate) fn filter_from_name(name: &str) -> ImageFilter {
    ImageFilter::ALL
        .into_iter()
        .find(|filter| filter.name().eq_ignore_ascii_case(name))
        .unwrap_or_else(|| {
            debug!(name, "unknown filter preset, using none");
            ImageFilter::None
        })
}
