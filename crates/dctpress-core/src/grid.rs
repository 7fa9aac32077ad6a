//! Row-major 2D sample buffers.
//!
//! A [`Grid`] is the image-sized container that moves between pipeline
//! stages. The element type records which stage produced it:
//!
//! - `Grid<u8>` - intensities in 0..=255, as handed over by the caller
//! - `Grid<i32>` - level-shifted samples centred on zero
//! - `Grid<f64>` - reconstructed samples before the final unshift
//!
//! Dimensions are always given as `(height, width)`, matching the order in
//! which the codec reports original image sizes.

use crate::error::CodecError;

/// A rectangular, non-empty grid of samples stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a grid from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidShape` if either dimension is zero, if
    /// `height * width` overflows, or if the buffer length is not
    /// `height * width`.
    pub fn new(height: usize, width: usize, data: Vec<T>) -> Result<Self, CodecError> {
        let expected = sample_count(height, width)?;
        if data.len() != expected {
            return Err(CodecError::InvalidShape(format!(
                "expected {expected} samples for {height}x{width}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Create a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidShape` for an empty or ragged row set.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, CodecError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(CodecError::InvalidShape(format!(
                "row {index} has {} samples, expected {width}",
                row.len()
            )));
        }

        let data = rows.into_iter().flatten().collect();
        Self::new(height, width, data)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)` pair.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Flat row-major samples.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid and return its row-major samples.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.width)
    }

    /// Apply `f` to every sample, producing a new grid of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            height: self.height,
            width: self.width,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Create a grid where every sample is `value`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidShape` if either dimension is zero or the
    /// sample count overflows.
    pub fn filled(height: usize, width: usize, value: T) -> Result<Self, CodecError> {
        let len = sample_count(height, width)?;
        Self::new(height, width, vec![value; len])
    }

    /// Sample at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }
}

/// Number of samples in a `height` x `width` grid.
///
/// # Errors
///
/// Returns `CodecError::InvalidShape` if either dimension is zero or the
/// product does not fit in `usize`.
pub(crate) fn sample_count(height: usize, width: usize) -> Result<usize, CodecError> {
    if height == 0 || width == 0 {
        return Err(CodecError::InvalidShape(format!(
            "grid dimensions must be non-zero, got {height}x{width}"
        )));
    }
    height.checked_mul(width).ok_or_else(|| {
        CodecError::InvalidShape(format!("grid dimensions {height}x{width} are too large"))
    })
}
