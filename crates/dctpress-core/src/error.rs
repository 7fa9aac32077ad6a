//! Error types for the codec pipeline.

use thiserror::Error;

/// Errors that can occur while encoding or decoding an image.
///
/// Every variant is a caller contract violation. The codec is deterministic,
/// so none of these are retried or masked internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input is not a rectangular, non-empty 2D grid, or a block or scan
    /// sequence does not hold exactly 64 values.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Quantization table is not 8x8 or holds a non-positive entry.
    #[error("Invalid quantization table: {0}")]
    TableMismatch(String),

    /// Number of encoded blocks disagrees with the declared image dimensions.
    #[error(
        "Block count mismatch: {height}x{width} image needs {expected} blocks, got {actual}"
    )]
    BlockCountMismatch {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },
}
