//! PNG output for generated buffers.
//!
//! Converts pixel buffers to PNG files with optional integer scaling.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::{PixgenError, Result};
use crate::generate::PixelBuffer;
use crate::types::Colour;

/// Convert a buffer to an RGBA image, upscaled by an integer factor.
///
/// Uses nearest-neighbour scaling so each generated pixel stays a crisp
/// square. A scale of 0 is treated as 1.
pub fn to_rgba_image(buffer: &PixelBuffer, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);

    let too_large = || PixgenError::InvalidDimensions {
        width: buffer.width(),
        height: buffer.height(),
    };
    let width = buffer.width().checked_mul(scale).ok_or_else(too_large)?;
    let height = buffer.height().checked_mul(scale).ok_or_else(too_large)?;

    let pixels = buffer.pixels();
    let stride = buffer.width() as usize;

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let index = (y / scale) as usize * stride + (x / scale) as usize;
        Rgba(Colour::unpack(pixels[index]).to_rgba())
    }))
}

/// Write a generated buffer to a PNG file.
///
/// # Arguments
///
/// * `buffer` - The generated pixels
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(buffer: &PixelBuffer, path: &Path, scale: u32) -> Result<()> {
    let img = to_rgba_image(buffer, scale)?;

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PixgenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn checker() -> PixelBuffer {
        PixelBuffer::from_pixels(
            2,
            2,
            vec![
                Colour::BLACK.pack(),
                Colour::RED.pack(),
                Colour::GREEN.pack(),
                Colour::new(0, 0, 255, 128).pack(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_write_png_simple() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&checker(), &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 128]);
    }

    #[test]
    fn test_write_png_scaled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&checker(), &path, 3).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 6);
        assert_eq!(img.height(), 6);
        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 2).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 3).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_scale_zero_treated_as_one() {
        let img = to_rgba_image(&checker(), 0).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
    }

    #[test]
    fn test_scale_overflow() {
        let buffer = PixelBuffer::from_pixels(2, 1, vec![0, 0]).unwrap();
        assert!(matches!(
            to_rgba_image(&buffer, u32::MAX),
            Err(PixgenError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_write_png_bad_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(matches!(
            write_png(&checker(), &path, 1),
            Err(PixgenError::Io { .. })
        ));
    }
}
