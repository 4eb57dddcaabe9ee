use crate::core::Rect;
use glam::Vec2;

/// The single movable entity of the simulation
///
/// `position` is the top-left corner of the bounding box. `size` stays fixed
/// for the lifetime of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    size: Vec2,
    pub velocity: Vec2,
    /// True iff the bottom edge rests on a solid surface
    pub grounded: bool,
}

impl Body {
    /// Create a body at rest
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Current bounding box
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// Builder for bodies in arbitrary starting states
#[cfg(test)]
pub struct BodyBuilder {
    position: Vec2,
    size: Vec2,
    velocity: Vec2,
    grounded: bool,
}

#[cfg(test)]
impl BodyBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::new(width, height),
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    /// Set the initial top-left position
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Set the initial velocity
    pub fn velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Start resting on a surface
    pub fn grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }

    pub fn build(self) -> Body {
        Body {
            position: self.position,
            size: self.size,
            velocity: self.velocity,
            grounded: self.grounded,
        }
    }
}

/// A static platform, immutable after construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    rect: Rect,
}

impl Obstacle {
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Common body configurations for game objects
pub mod presets {
    use super::*;

    /// Player body at rest at the given top-left spawn point
    pub fn player_body(spawn: Vec2, size: Vec2) -> Body {
        Body::new(spawn, size)
    }

    /// Platform with its top-left corner at `(x, y)`
    pub fn platform(x: f32, y: f32, width: f32, height: f32) -> Obstacle {
        Obstacle::from_rect(Rect::from_xywh(x, y, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_starts_at_rest() {
        let body = Body::new(Vec2::new(250.0, 200.0), Vec2::new(20.0, 20.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(!body.grounded);
        assert_eq!(body.rect().center(), Vec2::new(260.0, 210.0));
    }

    #[test]
    fn test_body_builder() {
        let body = BodyBuilder::new(10.0, 30.0)
            .position(1.0, 2.0)
            .velocity(5.0, -3.0)
            .grounded(true)
            .build();

        assert_eq!(body.position, Vec2::new(1.0, 2.0));
        assert_eq!(body.size(), Vec2::new(10.0, 30.0));
        assert_eq!(body.velocity, Vec2::new(5.0, -3.0));
        assert!(body.grounded);
    }

    #[test]
    fn test_player_preset_matches_spawn() {
        let spawn = Vec2::new(250.0, 200.0);
        let body = presets::player_body(spawn, Vec2::new(20.0, 20.0));
        assert_eq!(body, Body::new(spawn, Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn test_body_rect_follows_position() {
        let mut body = presets::player_body(Vec2::new(0.0, 0.0), Vec2::new(20.0, 20.0));
        body.position += Vec2::new(5.0, 7.0);
        assert_eq!(body.rect(), Rect::from_xywh(5.0, 7.0, 20.0, 20.0));
    }

    #[test]
    fn test_platform_preset() {
        let platform = presets::platform(200.0, 300.0, 100.0, 20.0);
        assert_eq!(platform.rect().position, Vec2::new(200.0, 300.0));
        assert_eq!(platform.rect().size, Vec2::new(100.0, 20.0));
        assert_eq!(platform.rect().bottom(), 320.0);
    }
}
