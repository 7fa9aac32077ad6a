//! Image file encoding WASM bindings.
//!
//! This module writes grayscale images out as real files so the browser can
//! display or download them: JPEG through the `image` crate's encoder (the
//! library-backed alternative to the block codec) and lossless PNG.
//!
//! # Example
//!
//! ```typescript
//! import { compress_roundtrip, encode_jpeg, encode_png } from '@dctpress/wasm';
//!
//! const reconstructed = compress_roundtrip(image, 50);
//! const png = encode_png(reconstructed);
//! const reference = encode_jpeg(image, 50);
//! ```

use crate::types::{to_js_error, JsGrayImage};
use dctpress_core::convert;
use wasm_bindgen::prelude::*;

/// Encode a grayscale image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The grayscale image to encode
/// * `quality` - JPEG quality (1-100, clamped)
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the dimensions or
/// encoding fails internally.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsGrayImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let grid = image.to_grid().map_err(to_js_error)?;
    convert::encode_jpeg(&grid, quality).map_err(to_js_error)
}

/// Encode a grayscale image to PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsGrayImage) -> Result<Vec<u8>, JsValue> {
    let grid = image.to_grid().map_err(to_js_error)?;
    convert::encode_png(&grid).map_err(to_js_error)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let img = JsGrayImage::new(50, 50, vec![128u8; 50 * 50]);
        let jpeg = encode_jpeg(&img, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let img = JsGrayImage::new(100, 100, vec![128u8; 50 * 50]);
        assert!(encode_jpeg(&img, 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_png_basic() {
        let img = JsGrayImage::new(8, 8, vec![10u8; 64]);
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
}
