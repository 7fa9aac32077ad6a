//! Fixed 8x8 blocks and the tiling of images into them.
//!
//! A [`Block`] is the unit every per-block stage (transform, quantization,
//! zigzag scan) consumes and produces. Its size is fixed by the type, so a
//! wrongly shaped block can only arise when building one from dynamic rows,
//! which [`Block::from_rows`] rejects.
//!
//! # Tile Order
//!
//! [`split`] emits tiles top-to-bottom, left-to-right, and [`reconstruct`]
//! expects them back in that same order.

mod split;

pub use split::{block_count, reconstruct, split, tile_grid};

use crate::error::CodecError;

/// Side length of a block.
pub const BLOCK_SIZE: usize = 8;

/// Number of samples in a block.
pub const BLOCK_LEN: usize = BLOCK_SIZE * BLOCK_SIZE;

/// An 8x8 block of samples in natural (row-major) order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<T> {
    values: [T; BLOCK_LEN],
}

impl<T> Block<T> {
    /// Wrap 64 row-major samples.
    pub fn new(values: [T; BLOCK_LEN]) -> Self {
        Self { values }
    }

    /// Build a block by evaluating `f(row, col)` for every position.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            values: std::array::from_fn(|i| f(i / BLOCK_SIZE, i % BLOCK_SIZE)),
        }
    }

    /// Samples in row-major order.
    pub fn as_array(&self) -> &[T; BLOCK_LEN] {
        &self.values
    }

    /// Consume the block and return its row-major samples.
    pub fn into_array(self) -> [T; BLOCK_LEN] {
        self.values
    }

    /// Apply `f` to every sample.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Block<U> {
        Block {
            values: self.values.map(f),
        }
    }
}

impl<T: Copy> Block<T> {
    /// Block with every sample set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            values: [value; BLOCK_LEN],
        }
    }

    /// Build a block from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidShape` unless there are exactly 8 rows of
    /// exactly 8 samples each.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, CodecError> {
        if rows.len() != BLOCK_SIZE {
            return Err(CodecError::InvalidShape(format!(
                "block has {} rows, expected {BLOCK_SIZE}",
                rows.len()
            )));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != BLOCK_SIZE) {
            return Err(CodecError::InvalidShape(format!(
                "block row {index} has {} samples, expected {BLOCK_SIZE}",
                row.len()
            )));
        }

        let flat: Vec<T> = rows.iter().flatten().copied().collect();
        let values: [T; BLOCK_LEN] = flat.try_into().map_err(|v: Vec<T>| {
            CodecError::InvalidShape(format!("block has {} samples, expected {BLOCK_LEN}", v.len()))
        })?;
        Ok(Self { values })
    }

    /// Sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < BLOCK_SIZE && col < BLOCK_SIZE, "block index ({row}, {col}) out of range");
        self.values[row * BLOCK_SIZE + col]
    }

    /// Samples of one row.
    pub fn row(&self, row: usize) -> &[T] {
        &self.values[row * BLOCK_SIZE..(row + 1) * BLOCK_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let block = Block::from_fn(|r, c| (r * 10 + c) as i32);
        assert_eq!(block.get(0, 0), 0);
        assert_eq!(block.get(0, 7), 7);
        assert_eq!(block.get(3, 5), 35);
        assert_eq!(block.as_array()[8], 10);
        assert_eq!(block.row(7), &[70, 71, 72, 73, 74, 75, 76, 77]);
    }

    #[test]
    fn test_from_rows_accepts_8x8() {
        let rows: Vec<Vec<i32>> = (0..8).map(|r| (0..8).map(|c| r * 8 + c).collect()).collect();
        let block = Block::from_rows(&rows).unwrap();
        assert_eq!(block.get(7, 7), 63);
        assert_eq!(block.get(2, 1), 17);
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_count() {
        let rows = vec![vec![0i32; 8]; 7];
        assert!(matches!(Block::from_rows(&rows), Err(CodecError::InvalidShape(_))));
    }

    #[test]
    fn test_from_rows_rejects_wrong_row_length() {
        let mut rows = vec![vec![0i32; 8]; 8];
        rows[4].push(1);
        assert!(matches!(Block::from_rows(&rows), Err(CodecError::InvalidShape(_))));
    }

    #[test]
    fn test_map_converts_type() {
        let block = Block::filled(-3i32).map(f64::from);
        assert_eq!(block, Block::filled(-3.0f64));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let block = Block::filled(0u8);
        block.get(8, 0);
    }
}
