// Axis-aligned rectangle shared by physics and rendering

use glam::Vec2;

/// Axis-aligned rectangle described by its top-left corner and extent.
///
/// Y grows downward (screen coordinates), so `top()` is the smaller y value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Create a rect from raw `x, y, width, height` values
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.half_extents()
    }

    /// Penetration depth on each axis against `other`.
    ///
    /// Positive on both axes means the rects overlap; zero or negative on either
    /// axis means they are separated (touching edges count as separated).
    pub fn overlap(&self, other: &Rect) -> Vec2 {
        let delta = (self.center() - other.center()).abs();
        (self.half_extents() + other.half_extents()) - delta
    }

    /// Strict overlap test, edges that only touch do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        let overlap = self.overlap(other);
        overlap.x > 0.0 && overlap.y > 0.0
    }

    /// Whether `other` lies fully inside this rect (shared edges allowed)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Both dimensions strictly positive and every component finite
    pub fn is_valid(&self) -> bool {
        self.position.is_finite()
            && self.size.is_finite()
            && self.size.x > 0.0
            && self.size.y > 0.0
    }
}
