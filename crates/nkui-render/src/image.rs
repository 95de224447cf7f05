#![forbid(unsafe_code)]

//! RGBA bitmaps used as widget fills.

use crate::color::Rgba;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("pixel count {actual} does not match {width}x{height} image ({expected} pixels)")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A row-major RGBA bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Image {
    /// Create a fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Wrap existing row-major pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ImageError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = color;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_is_transparent() {
        let img = Image::new(3, 2);
        assert_eq!(img.pixels().len(), 6);
        assert!(img.pixels().iter().all(|p| p.is_transparent()));
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        let err = Image::from_pixels(2, 2, vec![Rgba::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            ImageError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 4,
                actual: 3,
            }
        );
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn pixel_access_is_row_major() {
        let mut img = Image::new(4, 3);
        assert!(img.set_pixel(2, 1, Rgba::WHITE));
        assert_eq!(img.pixel(2, 1), Some(Rgba::WHITE));
        assert_eq!(img.pixels()[6], Rgba::WHITE);
        assert_eq!(img.pixel(4, 0), None);
        assert!(!img.set_pixel(0, 3, Rgba::WHITE));
    }
}
