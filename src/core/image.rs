//! In-memory ARGB raster.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroize;

use super::pixel::PackedPixel;

/// A rectangular grid of packed ARGB pixels stored row-major, top row first.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct PixelImage {
    width: usize,
    height: usize,
    pixels: Vec<PackedPixel>,
}

impl fmt::Debug for PixelImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl PixelImage {
    /// Creates a blank (all-zero, fully transparent) image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Wraps an existing row-major pixel buffer.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<PackedPixel>) -> Option<Self> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// Builds an image by evaluating `f(row, col)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> PackedPixel,
    {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[PackedPixel] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> PackedPixel {
        assert!(row < self.height && col < self.width, "pixel ({}, {}) out of bounds", row, col);
        self.pixels[row * self.width + col]
    }

    /// Overwrites the pixel at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, pixel: PackedPixel) {
        assert!(row < self.height && col < self.width, "pixel ({}, {}) out of bounds", row, col);
        self.pixels[row * self.width + col] = pixel;
    }

    /// Number of 2x2 blocks per row, counting a trailing partial block.
    pub fn blocks_per_row(&self) -> usize {
        self.width.div_ceil(2)
    }

    /// Number of 2x2 blocks covering the image, counting partial blocks on the
    /// right and bottom edges: `ceil(H/2) * ceil(W/2)`.
    pub fn block_count(&self) -> usize {
        self.height.div_ceil(2) * self.blocks_per_row()
    }

    /// Linear index of the 2x2 block containing `(row, col)`.
    #[inline]
    pub fn block_index(&self, row: usize, col: usize) -> usize {
        (row / 2) * self.blocks_per_row() + col / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_image() {
        let img = PixelImage::new(4, 2);
        assert_eq!(img.dimensions(), (4, 2));
        assert!(img.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_from_pixels_validates_length() {
        assert!(PixelImage::from_pixels(2, 2, vec![1, 2, 3, 4]).is_some());
        assert!(PixelImage::from_pixels(2, 2, vec![1, 2, 3]).is_none());
        assert!(PixelImage::from_pixels(usize::MAX, 2, vec![]).is_none());
    }

    #[test]
    fn test_get_set_row_major() {
        let mut img = PixelImage::from_fn(3, 2, |r, c| (r * 10 + c) as i32);
        assert_eq!(img.get(1, 2), 12);
        img.set(0, 1, -5);
        assert_eq!(img.pixels(), &[0, -5, 2, 10, 11, 12]);
    }

    #[test]
    fn test_block_layout() {
        let even = PixelImage::new(4, 4);
        assert_eq!(even.block_count(), 4);
        assert_eq!(even.block_index(3, 3), 3);
        assert_eq!(even.block_index(2, 1), 2);

        let odd = PixelImage::new(5, 3);
        assert_eq!(odd.block_count(), 6);
        assert_eq!(odd.block_index(2, 4), 5);
    }

    #[test]
    fn test_debug_omits_pixels() {
        let img = PixelImage::from_fn(2, 2, |_, _| 0x0BAD_F00D);
        let debug_str = alloc::format!("{:?}", img);
        assert!(debug_str.contains("width: 2"));
        assert!(!debug_str.contains(&alloc::format!("{}", 0x0BAD_F00D)));
    }
}
