//! Run-length coding of scanned coefficient sequences.
//!
//! This is a plain consecutive-run coder: every maximal run of equal values
//! becomes one `(value, count)` symbol. It is not the JPEG `(zero-run,
//! value)` scheme and carries no end-of-block marker; an encoded block is
//! simply the symbols whose counts add up to 64.

use serde::{Deserialize, Serialize};

use crate::block::BLOCK_LEN;
use crate::error::CodecError;

/// One run: `count` consecutive copies of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RleSymbol<T> {
    pub value: T,
    pub count: u32,
}

impl<T> RleSymbol<T> {
    pub fn new(value: T, count: u32) -> Self {
        Self { value, count }
    }
}

/// Collapse runs of equal consecutive values into symbols.
///
/// An empty input yields no symbols.
pub fn encode<T: Copy + PartialEq>(sequence: &[T]) -> Vec<RleSymbol<T>> {
    let mut symbols: Vec<RleSymbol<T>> = Vec::new();
    for &value in sequence {
        match symbols.last_mut() {
            Some(last) if last.value == value => last.count += 1,
            _ => symbols.push(RleSymbol::new(value, 1)),
        }
    }
    symbols
}

/// Expand symbols back into the sequence they were encoded from.
pub fn decode<T: Copy>(symbols: &[RleSymbol<T>]) -> Vec<T> {
    let total: usize = symbols.iter().map(|s| s.count as usize).sum();
    let mut sequence = Vec::with_capacity(total);
    for symbol in symbols {
        sequence.extend(std::iter::repeat_n(symbol.value, symbol.count as usize));
    }
    sequence
}

/// The run-length coded form of one quantized, zigzag-scanned block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedBlock {
    symbols: Vec<RleSymbol<i32>>,
}

impl EncodedBlock {
    /// Run-length code a 64-value scan.
    pub fn from_scan(sequence: &[i32; BLOCK_LEN]) -> Self {
        Self {
            symbols: encode(sequence),
        }
    }

    /// Wrap symbols received from elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidShape` if a symbol has a zero count or the
    /// counts do not add up to 64.
    pub fn from_symbols(symbols: Vec<RleSymbol<i32>>) -> Result<Self, CodecError> {
        let block = Self { symbols };
        block.validate()?;
        Ok(block)
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[RleSymbol<i32>] {
        &self.symbols
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the block holds no symbols (never the case for a valid block).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Expand back to the 64-value zigzag sequence.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidShape` for a block that does not describe
    /// exactly 64 values, which can only happen for data that was
    /// deserialized rather than produced by [`EncodedBlock::from_scan`].
    pub fn to_scan(&self) -> Result<[i32; BLOCK_LEN], CodecError> {
        self.validate()?;
        let expanded = decode(&self.symbols);
        expanded.try_into().map_err(|v: Vec<i32>| {
            CodecError::InvalidShape(format!(
                "block expands to {} values, expected {BLOCK_LEN}",
                v.len()
            ))
        })
    }

    fn validate(&self) -> Result<(), CodecError> {
        if let Some(index) = self.symbols.iter().position(|s| s.count == 0) {
            return Err(CodecError::InvalidShape(format!("symbol {index} has a zero run length")));
        }
        let total: u64 = self.symbols.iter().map(|s| s.count as u64).sum();
        if total != BLOCK_LEN as u64 {
            return Err(CodecError::InvalidShape(format!(
                "run lengths sum to {total}, expected {BLOCK_LEN}"
            )));
        }
        Ok(())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
