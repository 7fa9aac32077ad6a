//! Conversion between image files and intensity grids.
//!
//! The codec only understands single-channel grids. This module sits at the
//! boundary with the `image` crate: it loads uploaded files, reduces colour
//! input to intensity, and writes grids back out as real JPEG or PNG files.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, GrayImage, ImageEncoder, ImageFormat, ImageReader};
use thiserror::Error;

use crate::grid::Grid;

/// ITU-R BT.601 weight of the red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 weight of the green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 weight of the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Errors that can occur while converting to or from image files.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The bytes are not a decodable image.
    #[error("Image decoding failed: {0}")]
    Decode(String),

    /// Writing the output file failed.
    #[error("Image encoding failed: {0}")]
    Encode(String),

    /// Dimensions do not fit the target representation.
    #[error("Invalid dimensions: {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
}

/// Intensity of an RGB pixel using BT.601 weights.
///
/// The weighted sum is truncated, so a pure gray pixel keeps its value.
#[inline]
pub fn luma_from_rgb(r: u8, g: u8, b: u8) -> u8 {
    let luma = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    // Nudge before truncating so that r == g == b maps back exactly.
    (luma + 1e-3).clamp(0.0, 255.0) as u8
}

/// Reduce any decoded image to an intensity grid.
///
/// Single-channel images are used as-is; colour images are converted with
/// [`luma_from_rgb`]. Alpha is ignored.
pub fn grid_from_dynamic(image: &DynamicImage) -> Result<Grid<u8>, ConvertError> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let data = match image {
        DynamicImage::ImageLuma8(gray) => gray.as_raw().clone(),
        other => other
            .to_rgb8()
            .pixels()
            .map(|p| luma_from_rgb(p[0], p[1], p[2]))
            .collect(),
    };
    Grid::new(height, width, data).map_err(|_| ConvertError::InvalidDimensions { height, width })
}

/// Decode image file bytes (any format the `image` crate is built with) into
/// an intensity grid.
pub fn load_grayscale(bytes: &[u8]) -> Result<Grid<u8>, ConvertError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ConvertError::Decode(e.to_string()))?;

    let image = reader
        .decode()
        .map_err(|e| ConvertError::Decode(e.to_string()))?;

    log::debug!("Loaded {}x{} {:?} image", image.width(), image.height(), image.color());
    grid_from_dynamic(&image)
}

/// Wrap an intensity grid as an `image::GrayImage`.
pub fn to_gray_image(grid: &Grid<u8>) -> Result<GrayImage, ConvertError> {
    let (height, width) = grid.dimensions();
    let (w, h) = dimensions_u32(height, width)?;
    GrayImage::from_raw(w, h, grid.as_slice().to_vec())
        .ok_or(ConvertError::InvalidDimensions { height, width })
}

/// Encode an intensity grid as a grayscale JPEG file with the `image`
/// crate's baseline encoder.
///
/// This is the library-backed alternative to the block codec and also the
/// way a reconstructed grid is saved for display. Quality is clamped to
/// 1..=100.
pub fn encode_jpeg(grid: &Grid<u8>, quality: u8) -> Result<Vec<u8>, ConvertError> {
    let (height, width) = grid.dimensions();
    let (w, h) = dimensions_u32(height, width)?;
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(grid.as_slice(), w, h, ExtendedColorType::L8)
        .map_err(|e| ConvertError::Encode(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an intensity grid as a lossless grayscale PNG file.
pub fn encode_png(grid: &Grid<u8>) -> Result<Vec<u8>, ConvertError> {
    let image = to_gray_image(grid)?;
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| ConvertError::Encode(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn dimensions_u32(height: usize, width: usize) -> Result<(u32, u32), ConvertError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(ConvertError::InvalidDimensions { height, width }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn gradient(height: usize, width: usize) -> Grid<u8> {
        let data = (0..height * width)
            .map(|i| ((i / width) * 255 / height.max(1)) as u8)
            .collect();
        Grid::new(height, width, data).unwrap()
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((LUMA_R + LUMA_G + LUMA_B - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(luma_from_rgb(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_primaries() {
        assert_eq!(luma_from_rgb(255, 0, 0), 76);
        assert_eq!(luma_from_rgb(0, 255, 0), 149);
        assert_eq!(luma_from_rgb(0, 0, 255), 29);
    }

    #[test]
    fn test_grid_from_rgb_image() {
        let mut rgb = RgbImage::new(3, 2);
        rgb.put_pixel(2, 1, image::Rgb([255, 0, 0]));
        let grid = grid_from_dynamic(&DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(1, 2), Some(76));
        assert_eq!(grid.get(0, 0), Some(0));
    }

    #[test]
    fn test_grid_from_luma_image_is_untouched() {
        let gray = GrayImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        let grid = grid_from_dynamic(&DynamicImage::ImageLuma8(gray)).unwrap();
        assert_eq!(grid.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_image_rejected() {
        let empty = DynamicImage::ImageLuma8(GrayImage::new(0, 0));
        assert!(matches!(
            grid_from_dynamic(&empty),
            Err(ConvertError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_jpeg(&gradient(20, 30), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let grid = gradient(8, 8);
        assert!(encode_jpeg(&grid, 0).is_ok());
        assert!(encode_jpeg(&grid, 255).is_ok());
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let grid = gradient(17, 9);
        let png = encode_png(&grid).unwrap();
        let loaded = load_grayscale(&png).unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_jpeg_load_keeps_dimensions() {
        let grid = gradient(24, 40);
        let jpeg = encode_jpeg(&grid, 95).unwrap();
        let loaded = load_grayscale(&jpeg).unwrap();
        assert_eq!(loaded.dimensions(), (24, 40));
    }

    #[test]
    fn test_load_garbage_fails() {
        let result = load_grayscale(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }
}
