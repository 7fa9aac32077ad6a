//! dctpress WASM - WebAssembly bindings for dctpress
//!
//! This crate provides WASM bindings to expose the dctpress-core codec to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Loading uploaded image files as grayscale
//! - `codec` - Block codec encode/decode bindings
//! - `encode` - Writing grayscale images as JPEG/PNG files
//!
//! # Usage
//!
//! ```typescript
//! import init, { load_grayscale, compress_roundtrip, encode_png } from '@dctpress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = load_grayscale(bytes);
//! const compressed = compress_roundtrip(image, 50);
//! const png = encode_png(compressed);
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod decode;
mod encode;
mod types;

// Re-export public types
pub use codec::{compress_roundtrip, decode_image, encode_image, symbol_count};
pub use decode::load_grayscale;
pub use encode::{encode_jpeg, encode_png};
pub use types::JsGrayImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
