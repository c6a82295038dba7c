//! PixelKit WASM - WebAssembly bindings for PixelKit
//!
//! This crate exposes the pixelkit-core transforms to JavaScript/TypeScript.
//! It owns the bitmaps, locks them for the duration of each call, allocates
//! destinations for dimension-changing operations and reports failures as
//! thrown strings.
//!
//! # Module Structure
//!
//! - `types` - `JsBitmap`, the bitmap owned by WASM memory
//! - `filters` - In-place color filters and filter presets
//! - `transform` - Rotations and cropping
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsBitmap, apply_filter, rotate_90_cw } from '@pixelkit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bitmap = new JsBitmap(width, height, bytes);
//! apply_filter(bitmap, "sepia");
//! const rotated = rotate_90_cw(bitmap);
//! console.log(`Rotated to ${rotated.width}x${rotated.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod filters;
mod transform;
mod types;

// Re-export public types
pub use filters::{
    adjust_brightness, adjust_contrast, apply_filter, apply_grayscale, apply_invert, apply_sepia,
    BRIGHTNESS_RANGE, CONTRAST_RANGE,
};
pub use transform::{apply_rotation, crop, crop_region, rotate_180, rotate_90_ccw, rotate_90_cw};
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // No global state; tracing events are dropped unless the embedder
    // installs a subscriber
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names of the filter presets accepted by `apply_filter`, in menu order.
#[wasm_bindgen]
pub fn filter_names() -> Vec<String> {
    pixelkit_core::ImageFilter::ALL
        .iter()
        .map(|filter| filter.name().to_string())
        .collect()
}
