//! Image loading WASM bindings.
//!
//! This module turns uploaded image files into grayscale images the codec
//! can work on.
//!
//! # Example
//!
//! ```typescript
//! import { load_grayscale } from '@dctpress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = load_grayscale(bytes);
//! console.log(`Loaded ${image.width}x${image.height}`);
//! ```

use crate::types::{to_js_error, JsGrayImage};
use dctpress_core::convert;
use wasm_bindgen::prelude::*;

/// Decode an image file (JPEG or PNG) and reduce it to intensity.
///
/// Colour images are converted with BT.601 weights; grayscale files pass
/// through unchanged.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image or the image is
/// empty.
#[wasm_bindgen]
pub fn load_grayscale(bytes: &[u8]) -> Result<JsGrayImage, JsValue> {
    let grid = convert::load_grayscale(bytes).map_err(to_js_error)?;
    JsGrayImage::from_grid(grid).map_err(to_js_error)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_load_grayscale_invalid_bytes() {
        let result = load_grayscale(&[0x00, 0x01, 0x02]);
        assert!(result.is_err());
    }
}
