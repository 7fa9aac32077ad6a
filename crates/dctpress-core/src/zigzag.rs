//! Zigzag scan between 8x8 blocks and 64-element sequences.
//!
//! The scan walks the anti-diagonals of a block starting at the DC
//! coefficient, alternating direction on each diagonal:
//! `(0,0), (0,1), (1,0), (2,0), (1,1), (0,2), ...`. After quantization of
//! natural images the tail of the sequence is dominated by zeros, which the
//! run-length stage collapses into a single symbol.

use crate::block::{Block, BLOCK_LEN};

/// Maps zigzag index (0-63) to natural row-major index (0-63).
#[rustfmt::skip]
pub const ZIGZAG_TO_NATURAL: [usize; BLOCK_LEN] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Maps natural row-major index (0-63) to zigzag index (0-63).
///
/// Inverse of [`ZIGZAG_TO_NATURAL`].
pub const NATURAL_TO_ZIGZAG: [usize; BLOCK_LEN] = {
    let mut table = [0usize; BLOCK_LEN];
    let mut i = 0;
    while i < BLOCK_LEN {
        table[ZIGZAG_TO_NATURAL[i]] = i;
        i += 1;
    }
    table
};

/// Read a block out in zigzag order.
pub fn scan<T: Copy>(block: &Block<T>) -> [T; BLOCK_LEN] {
    let values = block.as_array();
    std::array::from_fn(|i| values[ZIGZAG_TO_NATURAL[i]])
}

/// Place a zigzag-ordered sequence back into block positions.
pub fn inverse_scan<T: Copy>(sequence: &[T; BLOCK_LEN]) -> Block<T> {
    Block::new(std::array::from_fn(|i| sequence[NATURAL_TO_ZIGZAG[i]]))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: inverse_scan(scan(b)) == b exactly.
        #[test]
        fn prop_scan_involution(values in prop::collection::vec(any::<i32>(), BLOCK_LEN)) {
            let mut array = [0i32; BLOCK_LEN];
            array.copy_from_slice(&values);
            let block = Block::new(array);
            prop_assert_eq!(inverse_scan(&scan(&block)), block);
        }

        /// Property: the reindexing is exact for floating-point samples too.
        #[test]
        fn prop_scan_involution_f64(values in prop::collection::vec(-1e6f64..1e6, BLOCK_LEN)) {
            let mut array = [0.0f64; BLOCK_LEN];
            array.copy_from_slice(&values);
            let block = Block::new(array);
            prop_assert_eq!(inverse_scan(&scan(&block)), block);
        }
    }
}
