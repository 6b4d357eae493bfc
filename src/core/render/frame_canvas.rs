//=========================================================================
// Frame Canvas
//=========================================================================
//
// Software `Canvas` over a borrowed RGBA8 frame buffer (the `pixels`
// frame during a real run, a plain Vec in tests).
//
// Blits are clipped to the frame and composited source-over; the
// destination stays opaque.
//
//=========================================================================

use super::{Canvas, Color, Image};
use crate::core::geometry::{Point, Size};

//=== FrameCanvas =========================================================

pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameCanvas<'a> {
    /// # Panics
    ///
    /// Panics if `frame` is not exactly `width * height * 4` bytes.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        assert_eq!(
            frame.len(),
            width as usize * height as usize * 4,
            "frame buffer does not match {}x{}",
            width,
            height
        );
        Self { frame, width, height }
    }

    pub fn clear(&mut self, color: Color) {
        let rgba = color.with_alpha(255);
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn blit(&mut self, image: &Image, at: Point, alpha: u8) {
        if alpha == 0 {
            return;
        }

        // Visible window of the source image after clipping.
        let x0 = (-at.x).max(0);
        let y0 = (-at.y).max(0);
        let x1 = (image.width() as i32).min(self.width as i32 - at.x);
        let y1 = (image.height() as i32).min(self.height as i32 - at.y);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let src = image.pixels();
        let src_stride = image.width() as usize * 4;
        let dst_stride = self.width as usize * 4;

        for sy in y0..y1 {
            let dy = (sy + at.y) as usize;
            for sx in x0..x1 {
                let dx = (sx + at.x) as usize;
                let s = sy as usize * src_stride + sx as usize * 4;
                let d = dy * dst_stride + dx * 4;
                blend(&mut self.frame[d..d + 4], &src[s..s + 4], alpha);
            }
        }
    }
}

//=== Helpers =============================================================

fn blend(dst: &mut [u8], src: &[u8], alpha: u8) {
    let a = src[3] as u32 * alpha as u32 / 255;
    if a == 0 {
        return;
    }
    let inv = 255 - a;
    for c in 0..3 {
        dst[c] = ((src[c] as u32 * a + dst[c] as u32 * inv) / 255) as u8;
    }
    dst[3] = 255;
}

//=========================================================================
// Unit Tests
//=========================================================================
