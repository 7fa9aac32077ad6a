//! Codec configuration and the encoded image representation.

use serde::{Deserialize, Serialize};

use crate::block::{self, BLOCK_LEN, BLOCK_SIZE};
use crate::error::CodecError;
use crate::quant::QuantTable;
use crate::rle::EncodedBlock;

/// Settings that select the quantization table.
///
/// A custom `table` takes precedence over `quality`. With neither set the
/// standard luminance table is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Quality 1-100 used to scale the standard table (50 = unscaled).
    pub quality: Option<u8>,
    /// Custom 8x8 quantization table, row-major.
    pub table: Option<[[u16; BLOCK_SIZE]; BLOCK_SIZE]>,
}

impl CodecConfig {
    /// Create a config that uses the standard table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config that scales the standard table to `quality`.
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: Some(quality),
            table: None,
        }
    }

    /// Resolve the configured quantization table.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::TableMismatch` if a custom table has a zero entry.
    pub fn quant_table(&self) -> Result<QuantTable, CodecError> {
        match (self.table, self.quality) {
            (Some(rows), _) => QuantTable::new(rows),
            (None, Some(quality)) => Ok(QuantTable::with_quality(quality)),
            (None, None) => Ok(QuantTable::standard_luminance()),
        }
    }
}

/// A compressed image: one run-length coded block per 8x8 tile, in
/// row-major tile order, plus the original dimensions needed to crop the
/// padding on decode.
///
/// This is an in-memory representation. It derives serde traits so callers
/// can hand it to whichever serializer suits their storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    pub height: usize,
    pub width: usize,
    pub blocks: Vec<EncodedBlock>,
}

impl EncodedImage {
    /// `(height, width)` of the original image.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of blocks the declared dimensions call for, or `None` if that
    /// count overflows.
    pub fn expected_block_count(&self) -> Option<usize> {
        block::block_count(self.height, self.width)
    }

    /// Total number of run-length symbols across all blocks.
    pub fn symbol_count(&self) -> usize {
        self.blocks.iter().map(EncodedBlock::len).sum()
    }

    /// Ratio of padded samples to stored numbers (two per symbol).
    ///
    /// A flat image compresses to one symbol per block, giving 32.0.
    /// Returns 0.0 for an image with no symbols.
    pub fn compression_ratio(&self) -> f64 {
        let symbols = self.symbol_count();
        if symbols == 0 {
            return 0.0;
        }
        (self.blocks.len() * BLOCK_LEN) as f64 / (2 * symbols) as f64
    }
}
