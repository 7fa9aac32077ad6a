//! Quantization tables and (de)quantization of coefficient blocks.
//!
//! Quantization is the lossy stage of the codec: each coefficient is divided
//! by its table entry and rounded, and dequantization multiplies it back.
//! The per-coefficient reconstruction error is therefore at most half the
//! table entry.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BLOCK_LEN, BLOCK_SIZE};
use crate::error::CodecError;

/// Standard luminance quantization table (ITU-T T.81 Annex K), row-major.
#[rustfmt::skip]
pub const STANDARD_LUMINANCE: [u16; BLOCK_LEN] = [
    16, 11, 10, 16, 24, 40, 51, 61,
    12, 12, 14, 19, 26, 58, 60, 55,
    14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62,
    18, 22, 37, 56, 68, 109, 103, 77,
    24, 35, 55, 64, 81, 104, 113, 92,
    49, 64, 78, 87, 103, 121, 120, 101,
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// Quality the standard table corresponds to.
pub const DEFAULT_QUALITY: u8 = 50;

/// An 8x8 table of strictly positive quantizer step sizes.
///
/// Construction validates every entry, so a `QuantTable` in hand is always
/// safe to divide by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u16>>", into = "Vec<Vec<u16>>")]
pub struct QuantTable {
    steps: [u16; BLOCK_LEN],
}

impl QuantTable {
    /// Create a table from 8 rows of 8 step sizes.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::TableMismatch` if any entry is zero.
    pub fn new(rows: [[u16; BLOCK_SIZE]; BLOCK_SIZE]) -> Result<Self, CodecError> {
        let mut steps = [0u16; BLOCK_LEN];
        for (row, values) in rows.iter().enumerate() {
            steps[row * BLOCK_SIZE..(row + 1) * BLOCK_SIZE].copy_from_slice(values);
        }
        Self::from_steps(steps)
    }

    /// Create a table from dynamically sized rows, as supplied by a caller
    /// that parsed it from user input.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::TableMismatch` if the rows are not 8x8, or if an
    /// entry is not in `1..=u16::MAX`.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, CodecError> {
        if rows.len() != BLOCK_SIZE {
            return Err(CodecError::TableMismatch(format!(
                "table has {} rows, expected {BLOCK_SIZE}",
                rows.len()
            )));
        }

        let mut steps = [0u16; BLOCK_LEN];
        for (row, values) in rows.iter().enumerate() {
            if values.len() != BLOCK_SIZE {
                return Err(CodecError::TableMismatch(format!(
                    "table row {row} has {} entries, expected {BLOCK_SIZE}",
                    values.len()
                )));
            }
            for (col, &value) in values.iter().enumerate() {
                steps[row * BLOCK_SIZE + col] = u16::try_from(value)
                    .ok()
                    .filter(|&v| v > 0)
                    .ok_or_else(|| {
                        CodecError::TableMismatch(format!(
                            "entry ({row}, {col}) is {value}, expected 1..={}",
                            u16::MAX
                        ))
                    })?;
            }
        }
        Ok(Self { steps })
    }

    /// The standard luminance table.
    pub fn standard_luminance() -> Self {
        Self {
            steps: STANDARD_LUMINANCE,
        }
    }

    /// Scale the standard luminance table to a 1-100 quality setting.
    ///
    /// Uses the IJG scaling rule: quality 50 yields the standard table,
    /// higher qualities shrink the steps and lower ones grow them. Quality is
    /// clamped to 1..=100 and every scaled step to 1..=255.
    pub fn with_quality(quality: u8) -> Self {
        let quality = quality.clamp(1, 100) as u32;
        let scale = if quality < 50 {
            5000 / quality
        } else {
            200 - quality * 2
        };

        let steps = STANDARD_LUMINANCE
            .map(|base| ((base as u32 * scale + 50) / 100).clamp(1, 255) as u16);
        Self { steps }
    }

    fn from_steps(steps: [u16; BLOCK_LEN]) -> Result<Self, CodecError> {
        if let Some(index) = steps.iter().position(|&s| s == 0) {
            return Err(CodecError::TableMismatch(format!(
                "entry ({}, {}) is 0, expected a positive step",
                index / BLOCK_SIZE,
                index % BLOCK_SIZE
            )));
        }
        Ok(Self { steps })
    }

    /// Step size at `(row, col)`.
    #[inline]
    pub fn step(&self, row: usize, col: usize) -> u16 {
        self.steps[row * BLOCK_SIZE + col]
    }

    /// Step sizes in row-major order.
    pub fn as_array(&self) -> &[u16; BLOCK_LEN] {
        &self.steps
    }

    /// Step sizes as nested rows.
    pub fn to_rows(&self) -> [[u16; BLOCK_SIZE]; BLOCK_SIZE] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.step(row, col)))
    }
}

impl Default for QuantTable {
    fn default() -> Self {
        Self::standard_luminance()
    }
}

impl TryFrom<Vec<Vec<u16>>> for QuantTable {
    type Error = CodecError;

    fn try_from(rows: Vec<Vec<u16>>) -> Result<Self, Self::Error> {
        let rows: Vec<Vec<i64>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(i64::from).collect())
            .collect();
        Self::from_rows(&rows)
    }
}

impl From<QuantTable> for Vec<Vec<u16>> {
    fn from(table: QuantTable) -> Self {
        table.to_rows().iter().map(|row| row.to_vec()).collect()
    }
}

/// Divide each coefficient by its step and round to the nearest integer.
///
/// Halfway cases round away from zero.
pub fn quantize(coeffs: &Block<f64>, table: &QuantTable) -> Block<i32> {
    let steps = table.as_array();
    let values = coeffs.as_array();
    Block::new(std::array::from_fn(|i| (values[i] / steps[i] as f64).round() as i32))
}

/// Multiply each quantized value by its step.
pub fn dequantize(quantized: &Block<i32>, table: &QuantTable) -> Block<f64> {
    let steps = table.as_array();
    let values = quantized.as_array();
    Block::new(std::array::from_fn(|i| values[i] as f64 * steps[i] as f64))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn table_strategy() -> impl Strategy<Value = QuantTable> {
        prop::collection::vec(1u16..=255, BLOCK_LEN).prop_map(|steps| {
            let mut array = [0u16; BLOCK_LEN];
            array.copy_from_slice(&steps);
            QuantTable::from_steps(array).unwrap()
        })
    }

    fn coeff_block_strategy() -> impl Strategy<Value = Block<f64>> {
        prop::collection::vec(-2048.0f64..2048.0, BLOCK_LEN).prop_map(|values| {
            let mut array = [0.0; BLOCK_LEN];
            array.copy_from_slice(&values);
            Block::new(array)
        })
    }

    proptest! {
        /// Property: |dequantize(quantize(b)) - b| <= step / 2 for every coefficient.
        #[test]
        fn prop_quantize_error_bounded(
            coeffs in coeff_block_strategy(),
            table in table_strategy(),
        ) {
            let restored = dequantize(&quantize(&coeffs, &table), &table);
            for i in 0..BLOCK_LEN {
                let step = table.as_array()[i] as f64;
                let error = (restored.as_array()[i] - coeffs.as_array()[i]).abs();
                prop_assert!(
                    error <= step / 2.0 + 1e-9,
                    "coefficient {}: error {} exceeds half step {}",
                    i,
                    error,
                    step / 2.0
                );
            }
        }

        /// Property: every quality setting yields a valid table.
        #[test]
        fn prop_all_qualities_valid(quality in 0u8..=255) {
            let table = QuantTable::with_quality(quality);
            prop_assert!(table.as_array().iter().all(|&s| (1..=255).contains(&s)));
        }
    }
}
