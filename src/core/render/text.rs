//=========================================================================
// Text Rendering
//=========================================================================
//
// Label rasterisation using RustType. Labels are rendered once into an
// `Image` and blitted like any other sprite.
//
//=========================================================================

use std::path::Path;

use rusttype::{point, Font, Scale};

use super::{Color, Image};
use crate::core::error::{GameError, Result};

/// Turns a string into a drawable image.
pub trait TextRenderer {
    fn render(&self, text: &str, size: f32, color: Color, background: Option<Color>) -> Image;
}

/// `TextRenderer` backed by a single TrueType/OpenType font.
pub struct FontText {
    font: Font<'static>,
}

impl FontText {
    pub fn from_bytes(bytes: Vec<u8>, origin: &Path) -> Result<Self> {
        let font = Font::try_from_vec(bytes).ok_or_else(|| GameError::Font {
            path: origin.to_path_buf(),
        })?;
        Ok(Self { font })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| GameError::AssetIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes, path)
    }
}

impl TextRenderer for FontText {
    fn render(&self, text: &str, size: f32, color: Color, background: Option<Color>) -> Image {
        let scale = Scale::uniform(size);
        let v_metrics = self.font.v_metrics(scale);

        let glyphs: Vec<_> = self
            .font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .collect();

        let width = glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
            .ceil()
            .max(1.0) as u32;
        let height = (v_metrics.ascent - v_metrics.descent).ceil().max(1.0) as u32;

        let mut coverage = vec![0.0f32; width as usize * height as usize];
        for glyph in &glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|x, y, v| {
                let x = x as i32 + bb.min.x;
                let y = y as i32 + bb.min.y;
                if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                    let cell = &mut coverage[y as usize * width as usize + x as usize];
                    *cell = (*cell + v).min(1.0);
                }
            });
        }

        let pixels = coverage
            .into_iter()
            .flat_map(|v| shade(v, color, background))
            .collect();
        Image::from_rgba(width, height, pixels)
    }
}

/// Composites glyph coverage `v` (0–1) of `color` over an optional
/// opaque background.
fn shade(v: f32, color: Color, background: Option<Color>) -> [u8; 4] {
    let v = v.clamp(0.0, 1.0);
    match background {
        None => color.with_alpha((v * 255.0).round() as u8),
        Some(bg) => {
            let mix = |fg: u8, bg: u8| (fg as f32 * v + bg as f32 * (1.0 - v)).round() as u8;
            [mix(color.r, bg.r), mix(color.g, bg.g), mix(color.b, bg.b), 255]
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
