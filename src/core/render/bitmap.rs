//=========================================================================
// Image
//=========================================================================
//
// Decoded RGBA8 pixel buffer shared between scenes as `Arc<Image>`.
//
// Images are immutable after load: transparency effects are applied per
// blit, never written back into the shared pixels.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;
use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::RgbaImage;

//=== Internal Dependencies ===============================================

use super::Color;
use crate::core::error::{GameError, Result};
use crate::core::geometry::Size;

//=== Image ===============================================================

/// Shared, read-only image handle.
pub type ImageHandle = Arc<Image>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    //--- Construction -----------------------------------------------------

    /// Wraps a raw RGBA8 buffer.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "RGBA buffer does not match {}x{}",
            width,
            height
        );
        Self { width, height, pixels }
    }

    /// A `width`×`height` image filled with one colour.
    pub fn filled(width: u32, height: u32, color: Color, alpha: u8) -> Self {
        let pixels = color
            .with_alpha(alpha)
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self { width, height, pixels }
    }

    /// Decodes an image file (PNG) into RGBA8.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|source| match source {
            image::ImageError::IoError(source) => GameError::AssetIo {
                path: path.to_path_buf(),
                source,
            },
            source => GameError::AssetDecode {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(width, height, rgba.into_raw()))
    }

    //--- Accessors --------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA of the pixel at (`x`, `y`).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    //--- Transformations --------------------------------------------------

    /// Makes every pixel of exactly `key` fully transparent.
    pub fn with_color_key(mut self, key: Color) -> Self {
        for px in self.pixels.chunks_exact_mut(4) {
            if px[0] == key.r && px[1] == key.g && px[2] == key.b {
                px[3] = 0;
            }
        }
        self
    }

    /// Nearest-neighbour resample to `width`×`height`.
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        if width == self.width && height == self.height {
            return self.clone();
        }
        if self.width == 0 || self.height == 0 || width == 0 || height == 0 {
            return Self::filled(width, height, Color::BLACK, 0);
        }

        let source = RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .expect("Image buffer always matches its dimensions");
        let resized = imageops::resize(&source, width, height, FilterType::Nearest);
        Self {
            width,
            height,
            pixels: resized.into_raw(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_repeats_colour() {
        let image = Image::filled(3, 2, Color::PURPLE, 200);
        assert_eq!(image.pixels().len(), 24);
        assert_eq!(image.pixel(2, 1), [127, 0, 255, 200]);
    }

    #[test]
    #[should_panic(expected = "RGBA buffer does not match")]
    fn from_rgba_rejects_wrong_length() {
        Image::from_rgba(2, 2, vec![0; 15]);
    }

    #[test]
    fn color_key_clears_only_matching_pixels() {
        let mut raw = Vec::new();
        raw.extend_from_slice(&[255, 255, 255, 255]);
        raw.extend_from_slice(&[254, 255, 255, 255]);
        let image = Image::from_rgba(2, 1, raw).with_color_key(Color::WHITE);

        assert_eq!(image.pixel(0, 0)[3], 0);
        assert_eq!(image.pixel(1, 0)[3], 255);
    }

    #[test]
    fn scaled_keeps_quadrants() {
        let mut raw = Vec::new();
        raw.extend_from_slice(&[255, 0, 0, 255]);
        raw.extend_from_slice(&[0, 255, 0, 255]);
        raw.extend_from_slice(&[0, 0, 255, 255]);
        raw.extend_from_slice(&[255, 255, 255, 255]);
        let image = Image::from_rgba(2, 2, raw).scaled(4, 4);

        assert_eq!(image.size(), Size::new(4, 4));
        assert_eq!(image.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(image.pixel(3, 0), [0, 255, 0, 255]);
        assert_eq!(image.pixel(0, 3), [0, 0, 255, 255]);
        assert_eq!(image.pixel(3, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn open_reports_missing_file_as_io() {
        let err = Image::open(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, GameError::AssetIo { .. }), "got {:?}", err);
    }
}
