//! The block transform codec.
//!
//! # Pipeline
//!
//! Encoding runs these stages in order:
//! 1. Level shift (0..=255 to -128..=127)
//! 2. Split into zero-padded 8x8 blocks
//! 3. Per block: forward DCT, quantize, zigzag scan, run-length code
//!
//! Decoding mirrors them in reverse and finishes by cropping the padding
//! and clamping back to 8-bit intensities.
//!
//! # Concurrency
//!
//! Both directions are synchronous, stateless calls. With the `parallel`
//! feature the per-block stages run on the rayon thread pool; the shared
//! quantization table is read-only and needs no synchronization.
//!
//! # Examples
//!
//! ```ignore
//! use dctpress_core::{Codec, Grid};
//!
//! let image = Grid::filled(16, 16, 200u8).unwrap();
//! let codec = Codec::with_quality(50);
//! let encoded = codec.encode(&image);
//! let decoded = codec.decode(&encoded).unwrap();
//! assert_eq!(decoded.dimensions(), (16, 16));
//! ```

mod pipeline;
mod types;

pub use pipeline::{compress_roundtrip, decode, decode_block, encode, encode_block, Codec};
pub use types::{CodecConfig, EncodedImage};
