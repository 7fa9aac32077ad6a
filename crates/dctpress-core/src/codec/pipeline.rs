//! Encode and decode pipelines.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::{CodecConfig, EncodedImage};
use crate::block::{self, Block};
use crate::dct::{forward_dct, inverse_dct};
use crate::error::CodecError;
use crate::grid::Grid;
use crate::level::{shift, unshift};
use crate::quant::{dequantize, quantize, QuantTable};
use crate::rle::EncodedBlock;
use crate::zigzag::{inverse_scan, scan};

/// A codec bound to one quantization table.
///
/// The table is validated when the codec is built, so encoding never fails
/// and decoding only fails on malformed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codec {
    table: QuantTable,
}

impl Codec {
    /// Create a codec using `table`.
    pub fn new(table: QuantTable) -> Self {
        Self { table }
    }

    /// Create a codec with the standard table scaled to `quality` (1-100).
    pub fn with_quality(quality: u8) -> Self {
        Self::new(QuantTable::with_quality(quality))
    }

    /// Create a codec from a config.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::TableMismatch` for an invalid custom table.
    pub fn from_config(config: &CodecConfig) -> Result<Self, CodecError> {
        config.quant_table().map(Self::new)
    }

    /// The quantization table in use.
    pub fn table(&self) -> &QuantTable {
        &self.table
    }

    /// Compress an image.
    pub fn encode(&self, image: &Grid<u8>) -> EncodedImage {
        encode(image, &self.table)
    }

    /// Reconstruct an image from its compressed form.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn decode(&self, encoded: &EncodedImage) -> Result<Grid<u8>, CodecError> {
        decode(&encoded.blocks, encoded.height, encoded.width, &self.table)
    }

    /// Compress and immediately reconstruct an image.
    pub fn roundtrip(&self, image: &Grid<u8>) -> Result<Grid<u8>, CodecError> {
        compress_roundtrip(image, &self.table)
    }
}

/// Compress an image: level shift, split into blocks, then per block
/// transform, quantize, zigzag scan and run-length code.
pub fn encode(image: &Grid<u8>, table: &QuantTable) -> EncodedImage {
    let (height, width) = image.dimensions();
    log::debug!("Encoding {}x{} image", height, width);

    let shifted = shift(image);
    let (tiles, height, width) = block::split(&shifted);
    let blocks = encode_blocks(&tiles, table);

    let encoded = EncodedImage {
        height,
        width,
        blocks,
    };
    log::debug!(
        "Encoded {} blocks into {} symbols (ratio {:.2})",
        encoded.blocks.len(),
        encoded.symbol_count(),
        encoded.compression_ratio()
    );
    encoded
}

/// Reconstruct an image from run-length coded blocks and its original size.
///
/// Per block: expand runs, inverse zigzag, dequantize, inverse transform.
/// The blocks are then reassembled, cropped and level shifted back.
///
/// # Errors
///
/// - `CodecError::InvalidShape` if a dimension is zero, the block count for
///   the dimensions overflows, or a block does not expand to exactly 64
///   values.
/// - `CodecError::BlockCountMismatch` if `blocks.len()` disagrees with the
///   dimensions. This is checked before any block is decoded.
pub fn decode(
    blocks: &[EncodedBlock],
    height: usize,
    width: usize,
    table: &QuantTable,
) -> Result<Grid<u8>, CodecError> {
    log::debug!("Decoding {} blocks into {}x{} image", blocks.len(), height, width);

    if height == 0 || width == 0 {
        return Err(CodecError::InvalidShape(format!(
            "original dimensions must be non-zero, got {height}x{width}"
        )));
    }
    let expected = block::block_count(height, width).ok_or_else(|| {
        CodecError::InvalidShape(format!("dimensions {height}x{width} are too large"))
    })?;
    if blocks.len() != expected {
        return Err(CodecError::BlockCountMismatch {
            height,
            width,
            expected,
            actual: blocks.len(),
        });
    }

    let tiles = decode_blocks(blocks, table)?;
    let samples = block::reconstruct(&tiles, height, width)?;
    Ok(unshift(&samples))
}

/// Encode then decode, returning the lossy reconstruction.
pub fn compress_roundtrip(image: &Grid<u8>, table: &QuantTable) -> Result<Grid<u8>, CodecError> {
    let encoded = encode(image, table);
    decode(&encoded.blocks, encoded.height, encoded.width, table)
}

/// Forward path for one level-shifted block.
pub fn encode_block(tile: &Block<i32>, table: &QuantTable) -> EncodedBlock {
    let coeffs = forward_dct(&tile.map(f64::from));
    let quantized = quantize(&coeffs, table);
    let encoded = EncodedBlock::from_scan(&scan(&quantized));
    log::trace!("Block DC {} -> {} symbols", quantized.get(0, 0), encoded.len());
    encoded
}

/// Inverse path for one encoded block, yielding level-shifted samples.
pub fn decode_block(encoded: &EncodedBlock, table: &QuantTable) -> Result<Block<f64>, CodecError> {
    let quantized = inverse_scan(&encoded.to_scan()?);
    Ok(inverse_dct(&dequantize(&quantized, table)))
}

// Blocks are independent, so each result lands in its own slot of the
// output vector regardless of scheduling.

#[cfg(feature = "parallel")]
fn encode_blocks(tiles: &[Block<i32>], table: &QuantTable) -> Vec<EncodedBlock> {
    tiles.par_iter().map(|tile| encode_block(tile, table)).collect()
}

#[cfg(not(feature = "parallel"))]
fn encode_blocks(tiles: &[Block<i32>], table: &QuantTable) -> Vec<EncodedBlock> {
    tiles.iter().map(|tile| encode_block(tile, table)).collect()
}

#[cfg(feature = "parallel")]
fn decode_blocks(
    blocks: &[EncodedBlock],
    table: &QuantTable,
) -> Result<Vec<Block<f64>>, CodecError> {
    blocks.par_iter().map(|b| decode_block(b, table)).collect()
}

#[cfg(not(feature = "parallel"))]
fn decode_blocks(
    blocks: &[EncodedBlock],
    table: &QuantTable,
) -> Result<Vec<Block<f64>>, CodecError> {
    blocks.iter().map(|b| decode_block(b, table)).collect()
}
