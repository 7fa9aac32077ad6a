//! Tiling an image into 8x8 blocks and reassembling it.

use super::{Block, BLOCK_SIZE};
use crate::error::CodecError;
use crate::grid::{sample_count, Grid};

/// Number of tile rows and tile columns covering a `height` x `width` image.
///
/// Each dimension is rounded up to the next multiple of 8.
#[inline]
pub fn tile_grid(height: usize, width: usize) -> (usize, usize) {
    (height.div_ceil(BLOCK_SIZE), width.div_ceil(BLOCK_SIZE))
}

/// Number of blocks a `height` x `width` image splits into, or `None` when
/// that count does not fit in `usize`.
#[inline]
pub fn block_count(height: usize, width: usize) -> Option<usize> {
    let (tile_rows, tile_cols) = tile_grid(height, width);
    tile_rows.checked_mul(tile_cols)
}

/// Split an image into 8x8 blocks.
///
/// The image is conceptually padded with `T::default()` (zero for numeric
/// samples) on the bottom and right until both dimensions are multiples of 8.
/// Blocks are returned in row-major tile order together with the original
/// `(height, width)`, which [`reconstruct`] needs to crop the padding again.
///
/// Each block is computed from its tile index alone, so the result is the
/// same however the work is scheduled.
pub fn split<T: Copy + Default>(image: &Grid<T>) -> (Vec<Block<T>>, usize, usize) {
    let (height, width) = image.dimensions();
    let (tile_rows, tile_cols) = tile_grid(height, width);

    let blocks = (0..tile_rows * tile_cols)
        .map(|index| {
            let top = (index / tile_cols) * BLOCK_SIZE;
            let left = (index % tile_cols) * BLOCK_SIZE;
            Block::from_fn(|r, c| image.get(top + r, left + c).unwrap_or_default())
        })
        .collect();

    (blocks, height, width)
}

/// Reassemble blocks produced by [`split`] into an image of the original size.
///
/// Blocks are laid out in row-major tile order and the padded border is
/// cropped away.
///
/// # Errors
///
/// - `CodecError::InvalidShape` if either original dimension is zero or
///   `height * width` overflows.
/// - `CodecError::BlockCountMismatch` if `blocks.len()` is not
///   `ceil(height / 8) * ceil(width / 8)`.
pub fn reconstruct<T: Copy>(
    blocks: &[Block<T>],
    height: usize,
    width: usize,
) -> Result<Grid<T>, CodecError> {
    let len = sample_count(height, width)?;

    // The tile count never exceeds the sample count, so it cannot overflow here.
    let (tile_rows, tile_cols) = tile_grid(height, width);
    let expected = tile_rows * tile_cols;
    if blocks.len() != expected {
        return Err(CodecError::BlockCountMismatch {
            height,
            width,
            expected,
            actual: blocks.len(),
        });
    }

    let data = (0..len)
        .map(|i| {
            let (row, col) = (i / width, i % width);
            let tile = (row / BLOCK_SIZE) * tile_cols + col / BLOCK_SIZE;
            blocks[tile].get(row % BLOCK_SIZE, col % BLOCK_SIZE)
        })
        .collect();

    Grid::new(height, width, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_grid(height: usize, width: usize) -> Grid<i32> {
        let data = (0..(height * width) as i32).map(|v| v + 1).collect();
        Grid::new(height, width, data).unwrap()
    }

    #[test]
    fn test_block_count() {
        assert_eq!(block_count(8, 8), Some(1));
        assert_eq!(block_count(10, 10), Some(4));
        assert_eq!(block_count(1, 17), Some(3));
        assert_eq!(block_count(16, 24), Some(6));
    }

    #[test]
    fn test_block_count_overflow() {
        assert_eq!(block_count(usize::MAX, usize::MAX), None);
        let huge = 1usize << (usize::BITS / 2 + 3);
        assert_eq!(block_count(huge, huge), None);
    }

    #[test]
    fn test_split_exact_multiple_has_no_padding() {
        let image = numbered_grid(8, 16);
        let (blocks, h, w) = split(&image);
        assert_eq!((h, w), (8, 16));
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].get(0, 0), 1);
        assert_eq!(blocks[1].get(0, 0), 9);
        assert_eq!(blocks[1].get(7, 7), 128);
    }

    #[test]
    fn test_split_pads_with_zero() {
        let image = numbered_grid(10, 10);
        let (blocks, h, w) = split(&image);
        assert_eq!((h, w), (10, 10));
        assert_eq!(blocks.len(), 4);

        // Top-right tile holds columns 8..16, of which only 8 and 9 are real.
        assert_eq!(blocks[1].get(0, 0), 9);
        assert_eq!(blocks[1].get(0, 1), 10);
        assert_eq!(blocks[1].get(0, 2), 0);

        // Bottom-right tile holds rows 8..16, columns 8..16.
        assert_eq!(blocks[3].get(1, 1), 100);
        assert_eq!(blocks[3].get(2, 0), 0);
        assert_eq!(blocks[3].get(7, 7), 0);
    }

    #[test]
    fn test_split_reconstruct_10x10_is_exact() {
        let image = numbered_grid(10, 10);
        let (blocks, h, w) = split(&image);
        let restored = reconstruct(&blocks, h, w).unwrap();
        assert_eq!(restored, image);
    }

    #[test]
    fn test_reconstruct_wrong_block_count() {
        let image = numbered_grid(10, 10);
        let (mut blocks, h, w) = split(&image);
        blocks.pop();

        let result = reconstruct(&blocks, h, w);
        assert_eq!(
            result,
            Err(CodecError::BlockCountMismatch {
                height: 10,
                width: 10,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_reconstruct_zero_dimensions() {
        let result = reconstruct::<i32>(&[], 0, 8);
        assert!(matches!(result, Err(CodecError::InvalidShape(_))));
    }

    #[test]
    fn test_reconstruct_overflowing_dimensions() {
        let result = reconstruct::<i32>(&[], usize::MAX, usize::MAX);
        assert!(matches!(result, Err(CodecError::InvalidShape(_))));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
