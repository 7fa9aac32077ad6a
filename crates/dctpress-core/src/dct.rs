//! Orthonormal 8x8 discrete cosine transform.
//!
//! The forward transform is a separable DCT-II: a 1D transform over every
//! row followed by a 1D transform over every column. The inverse applies
//! the matching DCT-III along both axes. With orthonormal scaling
//! (`1/sqrt(8)` for the DC basis, `1/2` for AC bases) the basis matrix is
//! orthogonal, so `inverse_dct(forward_dct(b))` reproduces `b` up to
//! floating-point rounding.

use std::sync::OnceLock;

use crate::block::{Block, BLOCK_LEN, BLOCK_SIZE};

/// Orthonormal basis: `BASIS[u][x] = c(u) * cos((2x + 1) * u * PI / 16)`.
static BASIS: OnceLock<[[f64; BLOCK_SIZE]; BLOCK_SIZE]> = OnceLock::new();

fn basis() -> &'static [[f64; BLOCK_SIZE]; BLOCK_SIZE] {
    BASIS.get_or_init(|| {
        let n = BLOCK_SIZE as f64;
        let mut table = [[0.0f64; BLOCK_SIZE]; BLOCK_SIZE];
        for u in 0..BLOCK_SIZE {
            let scale = if u == 0 {
                (1.0 / n).sqrt()
            } else {
                (2.0 / n).sqrt()
            };
            for x in 0..BLOCK_SIZE {
                let angle = (2 * x + 1) as f64 * u as f64 * std::f64::consts::PI / (2.0 * n);
                table[u][x] = scale * angle.cos();
            }
        }
        table
    })
}

/// Forward 2D DCT-II of one block.
pub fn forward_dct(block: &Block<f64>) -> Block<f64> {
    let basis = basis();
    let input = block.as_array();

    // Rows: temp[row][u] = sum_x basis[u][x] * input[row][x]
    let mut temp = [0.0f64; BLOCK_LEN];
    for row in 0..BLOCK_SIZE {
        for u in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for x in 0..BLOCK_SIZE {
                sum += basis[u][x] * input[row * BLOCK_SIZE + x];
            }
            temp[row * BLOCK_SIZE + u] = sum;
        }
    }

    // Columns: out[v][col] = sum_y basis[v][y] * temp[y][col]
    let mut out = [0.0f64; BLOCK_LEN];
    for col in 0..BLOCK_SIZE {
        for v in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for y in 0..BLOCK_SIZE {
                sum += basis[v][y] * temp[y * BLOCK_SIZE + col];
            }
            out[v * BLOCK_SIZE + col] = sum;
        }
    }

    debug_assert!(out.iter().all(|c| c.is_finite()), "non-finite DCT coefficient");
    Block::new(out)
}

/// Inverse 2D DCT (DCT-III) of one block of coefficients.
pub fn inverse_dct(coeffs: &Block<f64>) -> Block<f64> {
    let basis = basis();
    let input = coeffs.as_array();

    // Columns: temp[y][col] = sum_v basis[v][y] * input[v][col]
    let mut temp = [0.0f64; BLOCK_LEN];
    for col in 0..BLOCK_SIZE {
        for y in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for v in 0..BLOCK_SIZE {
                sum += basis[v][y] * input[v * BLOCK_SIZE + col];
            }
            temp[y * BLOCK_SIZE + col] = sum;
        }
    }

    // Rows: out[row][x] = sum_u basis[u][x] * temp[row][u]
    let mut out = [0.0f64; BLOCK_LEN];
    for row in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            let mut sum = 0.0;
            for u in 0..BLOCK_SIZE {
                sum += basis[u][x] * temp[row * BLOCK_SIZE + u];
            }
            out[row * BLOCK_SIZE + x] = sum;
        }
    }

    debug_assert!(out.iter().all(|s| s.is_finite()), "non-finite IDCT sample");
    Block::new(out)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
