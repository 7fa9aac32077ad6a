//! Level shifting between the unsigned intensity domain and the signed
//! domain the transform works in.

use crate::grid::Grid;

/// Offset between 0..=255 intensities and samples centred on zero.
pub const LEVEL_OFFSET: i32 = 128;

/// Map intensities 0..=255 to signed samples -128..=127.
pub fn shift(image: &Grid<u8>) -> Grid<i32> {
    image.map(|&v| v as i32 - LEVEL_OFFSET)
}

/// Map reconstructed samples back to 8-bit intensities.
///
/// Adds the level offset, rounds to the nearest integer and clamps to
/// 0..=255. Lossy stages upstream routinely push samples slightly past the
/// representable range, so clamping is expected here rather than an error.
pub fn unshift(samples: &Grid<f64>) -> Grid<u8> {
    samples.map(|&v| unshift_sample(v))
}

#[inline]
fn unshift_sample(value: f64) -> u8 {
    (value + LEVEL_OFFSET as f64).round().clamp(0.0, 255.0) as u8
}
