//! Pixel buffer produced by the generator.

use crate::error::{PixgenError, Result};
use crate::types::Colour;

/// A row-major grid of packed `0xRRGGBBAA` colours, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Wrap an existing packed pixel vector.
    ///
    /// Fails if either dimension is zero or the vector length is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(PixgenError::Validation {
                message: format!(
                    "Expected {} pixels for {}x{}, got {}",
                    expected,
                    width,
                    height,
                    pixels.len()
                ),
                help: None,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn new_unchecked(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The packed pixels in row-major order.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Take ownership of the packed pixels.
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Colour at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels.get(index).copied().map(Colour::unpack)
    }

    /// Iterate rows of packed pixels, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Iterate pixels as unpacked colours.
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.pixels.iter().copied().map(Colour::unpack)
    }

    /// Raw byte layout: 4 bytes per pixel in R, G, B, A order, no header.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_be_bytes()).collect()
    }
}

/// Validate dimensions and return the pixel count.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(PixgenError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(PixgenError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PixelBuffer {
        // 3x2:
        //   red   green blue
        //   black white clear
        PixelBuffer::from_pixels(
            3,
            2,
            vec![
                0xFF00_00FF,
                0x00FF_00FF,
                0x0000_FFFF,
                0x0000_00FF,
                0xFFFF_FFFF,
                0x0000_0000,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        let result = PixelBuffer::from_pixels(2, 2, vec![0; 3]);
        assert!(matches!(result, Err(PixgenError::Validation { .. })));
    }

    #[test]
    fn test_from_pixels_zero_dimension() {
        let result = PixelBuffer::from_pixels(0, 2, vec![]);
        assert!(matches!(
            result,
            Err(PixgenError::InvalidDimensions { width: 0, height: 2 })
        ));
    }

    #[test]
    fn test_get_is_row_major() {
        let buffer = sample();
        assert_eq!(buffer.get(0, 0), Some(Colour::RED));
        assert_eq!(buffer.get(2, 0), Some(Colour::BLUE));
        assert_eq!(buffer.get(0, 1), Some(Colour::BLACK));
        assert_eq!(buffer.get(2, 1), Some(Colour::new(0, 0, 0, 0)));
        assert_eq!(buffer.get(3, 0), None);
        assert_eq!(buffer.get(0, 2), None);
    }

    #[test]
    fn test_rows() {
        let buffer = sample();
        let rows: Vec<&[u32]> = buffer.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[0xFF00_00FF, 0x00FF_00FF, 0x0000_FFFF]);
    }

    #[test]
    fn test_into_pixels_keeps_order() {
        let pixels = vec![1, 2, 3, 4, 5, 6];
        let buffer = PixelBuffer::from_pixels(2, 3, pixels.clone()).unwrap();
        assert_eq!(buffer.into_pixels(), pixels);
    }

    #[test]
    fn test_rgba_bytes_layout() {
        let buffer = PixelBuffer::from_pixels(2, 1, vec![0x1122_3344, 0xAABB_CCDD]).unwrap();
        assert_eq!(
            buffer.to_rgba_bytes(),
            vec![0x11, 0x22, 0x33, 0x44, 0xAA, 0xBB, 0xCC, 0xDD]
        );
    }

    #[test]
    fn test_pixel_count_overflow() {
        if usize::BITS <= 32 {
            assert!(pixel_count(u32::MAX, u32::MAX).is_err());
        } else {
            assert_eq!(
                pixel_count(u32::MAX, 2).unwrap(),
                u32::MAX as usize * 2
            );
        }
    }
}
