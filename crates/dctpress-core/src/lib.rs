//! dctpress Core - Block transform codec for grayscale images
//!
//! This crate turns a grid of 8-bit intensities into a compact, lossy
//! representation and back: level shift, 8x8 tiling, orthonormal DCT,
//! quantization, zigzag scan and run-length coding, then every step in
//! reverse.
//!
//! # Module Structure
//!
//! - `grid` - Row-major 2D sample buffers
//! - `level` - Level shift between 0..=255 and -128..=127
//! - `block` - 8x8 blocks, image tiling and reassembly
//! - `dct` - Forward and inverse orthonormal DCT
//! - `quant` - Quantization tables and (de)quantization
//! - `zigzag` - Zigzag scan order
//! - `rle` - Run-length coding and encoded blocks
//! - `codec` - The end-to-end encode/decode pipeline
//! - `convert` - Loading and saving image files via the `image` crate

pub mod block;
pub mod codec;
pub mod convert;
pub mod dct;
pub mod error;
pub mod grid;
pub mod level;
pub mod quant;
pub mod rle;
pub mod zigzag;

pub use block::Block;
pub use codec::{compress_roundtrip, decode, encode, Codec, CodecConfig, EncodedImage};
pub use error::CodecError;
pub use grid::Grid;
pub use quant::QuantTable;
pub use rle::{EncodedBlock, RleSymbol};
