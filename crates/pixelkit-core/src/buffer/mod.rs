//! Pixel buffer addressing.
//!
//! This module describes caller-owned pixel memory and provides the
//! bounds-checked views every transform works through:
//!
//! - [`BufferDescriptor`] - width, height, row stride (bytes) and format
//! - [`PixelView`] - shared, read-only access to a validated grid
//! - [`PixelViewMut`] - exclusive access to a validated grid
//!
//! # Layout
//!
//! Rows are stored top to bottom, `stride` bytes apart. Row `y` starts at
//! byte `y * stride`; pixel `x` within a row occupies bytes
//! `x * 4 .. x * 4 + 4` as a native-endian `u32` in `0xAARRGGBB` form.
//! Bytes between `width * 4` and `stride` are row padding and are never
//! read or written.
//!
//! # Ownership
//!
//! A view borrows the caller's slice for as long as it lives. Holding a
//! [`PixelViewMut`] is the exclusive lock on the buffer: the borrow checker
//! forbids any other access until the view is dropped, on every exit path.

mod types;
mod view;

pub use types::{BufferDescriptor, PixelFormat, BYTES_PER_PIXEL};
pub use view::{PixelView, PixelViewMut};
