//! Block codec WASM bindings.
//!
//! This module exposes the dctpress encode/decode pipeline to JavaScript.
//! The encoded form crosses the boundary as a plain object
//! (`{ height, width, blocks: [[{ value, count }, ...], ...] }`) via
//! `serde-wasm-bindgen`.
//!
//! # Example
//!
//! ```typescript
//! import { compress_roundtrip, encode_image, decode_image } from '@dctpress/wasm';
//!
//! // One-shot: compress and reconstruct
//! const preview = compress_roundtrip(image, 50);
//!
//! // Keep the compressed form around
//! const encoded = encode_image(image, 50);
//! const restored = decode_image(encoded, 50);
//! ```

use crate::types::{to_js_error, JsGrayImage};
use dctpress_core::{Codec, CodecError, EncodedImage, Grid};
use wasm_bindgen::prelude::*;

/// Compress an image and immediately reconstruct it.
///
/// # Arguments
///
/// * `image` - Grayscale image to compress
/// * `quality` - Quality 1-100 scaling the standard table (50 = standard)
#[wasm_bindgen]
pub fn compress_roundtrip(image: &JsGrayImage, quality: u8) -> Result<JsGrayImage, JsValue> {
    roundtrip_core(image, quality).map_err(to_js_error)
}

/// Compress an image into its run-length coded block form.
#[wasm_bindgen]
pub fn encode_image(image: &JsGrayImage, quality: u8) -> Result<JsValue, JsValue> {
    let encoded = encode_core(image, quality).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&encoded).map_err(to_js_error)
}

/// Reconstruct an image from the object returned by [`encode_image`].
///
/// `quality` must match the value used to encode.
#[wasm_bindgen]
pub fn decode_image(encoded: JsValue, quality: u8) -> Result<JsGrayImage, JsValue> {
    let encoded: EncodedImage = serde_wasm_bindgen::from_value(encoded).map_err(to_js_error)?;
    decode_core(&encoded, quality).map_err(to_js_error)
}

/// Number of run-length symbols in an encoded image, for size comparison.
#[wasm_bindgen]
pub fn symbol_count(encoded: JsValue) -> Result<usize, JsValue> {
    let encoded: EncodedImage = serde_wasm_bindgen::from_value(encoded).map_err(to_js_error)?;
    Ok(encoded.symbol_count())
}

fn encode_core(image: &JsGrayImage, quality: u8) -> Result<EncodedImage, CodecError> {
    let grid = image.to_grid()?;
    Ok(Codec::with_quality(quality).encode(&grid))
}

fn decode_core(encoded: &EncodedImage, quality: u8) -> Result<JsGrayImage, CodecError> {
    Codec::with_quality(quality)
        .decode(encoded)
        .and_then(JsGrayImage::from_grid)
}

fn roundtrip_core(image: &JsGrayImage, quality: u8) -> Result<JsGrayImage, CodecError> {
    let grid: Grid<u8> = image.to_grid()?;
    Codec::with_quality(quality)
        .roundtrip(&grid)
        .and_then(JsGrayImage::from_grid)
}
