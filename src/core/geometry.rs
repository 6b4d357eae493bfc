//=========================================================================
// Screen Geometry
//=========================================================================
//
// Integer points, sizes and axis-aligned rectangles in frame-buffer
// pixels (top-left origin).
//
// Collision semantics follow the usual blitter conventions:
// - `contains` is half-open: [x, x + w) × [y, y + h)
// - `intersects` requires a positive-area overlap; touching edges
//   do not collide
//
//=========================================================================

//=== Point ===============================================================

/// A pixel position on the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

//=== Size ================================================================

/// Pixel dimensions of an image or surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of `size` with its top-left corner at `origin`.
    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width as i32, size.height as i32)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns true if `point` lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns true if both rectangles share a positive-area overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Grows the rectangle by `margin` pixels on every side.
    pub fn inflate(&self, margin: i32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2,
            self.height + margin * 2,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
