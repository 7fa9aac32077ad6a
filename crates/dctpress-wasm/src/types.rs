//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core dctpress
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use dctpress_core::{CodecError, Grid};
use wasm_bindgen::prelude::*;

/// A grayscale image wrapper for JavaScript.
///
/// Pixels are one byte per pixel, row-major. The image stays in WASM memory;
/// `pixels()` copies it out to a `Uint8Array`.
#[wasm_bindgen]
pub struct JsGrayImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsGrayImage {
    /// Create a new JsGrayImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - Intensity data (1 byte per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsGrayImage {
        JsGrayImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns intensity data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsGrayImage {
    /// Build a wrapper from a core grid.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidShape` if a dimension does not fit in
    /// `u32`.
    pub(crate) fn from_grid(grid: Grid<u8>) -> Result<Self, CodecError> {
        let (height, width) = grid.dimensions();
        let (height, width) = js_dimensions(height, width)?;
        Ok(Self {
            width,
            height,
            pixels: grid.into_vec(),
        })
    }

    /// Convert to a core grid, validating that the buffer matches the
    /// dimensions.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_grid(&self) -> Result<Grid<u8>, CodecError> {
        Grid::new(self.height as usize, self.width as usize, self.pixels.clone())
    }
}

/// Narrow core `(height, width)` to the `u32` pair JavaScript sees.
fn js_dimensions(height: usize, width: usize) -> Result<(u32, u32), CodecError> {
    match (u32::try_from(height), u32::try_from(width)) {
        (Ok(h), Ok(w)) => Ok((h, w)),
        _ => Err(CodecError::InvalidShape(format!(
            "{height}x{width} image exceeds u32 dimensions"
        ))),
    }
}

/// Convert any displayable core error into a JavaScript error value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_gray_image_creation() {
        let img = JsGrayImage::new(100, 50, vec![0u8; 100 * 50]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 5000);
    }

    #[test]
    fn test_js_gray_image_pixels() {
        let pixels = vec![255u8, 128, 64, 32];
        let img = JsGrayImage::new(2, 2, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_grid_conversion_round_trip() {
        let grid = Grid::new(3, 4, (0..12u8).collect()).unwrap();
        let img = JsGrayImage::from_grid(grid.clone()).unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.to_grid().unwrap(), grid);
    }

    #[test]
    fn test_js_dimensions_within_u32() {
        assert_eq!(js_dimensions(3, 4).unwrap(), (3, 4));
        let max = u32::MAX as usize;
        assert_eq!(js_dimensions(1, max).unwrap(), (1, u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_js_dimensions_rejects_values_beyond_u32() {
        let over = u32::MAX as usize + 1;
        assert!(matches!(js_dimensions(1, over), Err(CodecError::InvalidShape(_))));
        assert!(matches!(js_dimensions(over, 1), Err(CodecError::InvalidShape(_))));
    }

    #[test]
    fn test_to_grid_rejects_wrong_length() {
        let img = JsGrayImage::new(10, 10, vec![0u8; 99]);
        assert!(matches!(img.to_grid(), Err(CodecError::InvalidShape(_))));
    }
}
