//=========================================================================
// Render Collaborator
//=========================================================================
//
// The minimal drawing contract the scenes need.
//
// Architecture:
//   Scene::draw() → Canvas::blit(Image, Point, alpha)
//                     └─ FrameCanvas (pixels frame buffer, RGBA8)
//
//   Labels: TextRenderer::render() → Image (rasterised once, at scene
//   construction)
//
//=========================================================================

//=== Module Declarations =================================================

mod bitmap;
mod frame_canvas;
mod text;

//=== Public API ==========================================================

pub use bitmap::{Image, ImageHandle};
pub use frame_canvas::FrameCanvas;
pub use text::{FontText, TextRenderer};

use crate::core::geometry::{Point, Size};

//=== Color ===============================================================

/// Opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const PURPLE: Self = Self::rgb(127, 0, 255);
    pub const NAVY_BLUE: Self = Self::rgb(60, 60, 100);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn with_alpha(self, a: u8) -> [u8; 4] {
        [self.r, self.g, self.b, a]
    }
}

/// Fully opaque alpha for `Canvas::blit`.
pub const OPAQUE: u8 = 255;

//=== Canvas ==============================================================

/// Draw surface for a single frame.
pub trait Canvas {
    fn size(&self) -> Size;

    /// Composites `image` at `at` (top-left), scaled by `alpha` (0–255).
    fn blit(&mut self, image: &Image, at: Point, alpha: u8);
}
