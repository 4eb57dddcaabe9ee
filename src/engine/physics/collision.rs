use super::body::{Body, Obstacle};
use glam::Vec2;

/// Axis along which an overlap was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveAxis {
    Horizontal,
    Vertical,
}

/// Which face of the obstacle the body was pushed out through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSide {
    /// Body pushed left, it ran into the obstacle's left face
    Left,
    /// Body pushed right, it ran into the obstacle's right face
    Right,
    /// Body pushed up onto the obstacle (landing)
    Top,
    /// Body pushed down out of the obstacle's underside (ceiling hit)
    Bottom,
}

impl ContactSide {
    pub fn axis(self) -> ResolveAxis {
        match self {
            Self::Left | Self::Right => ResolveAxis::Horizontal,
            Self::Top | Self::Bottom => ResolveAxis::Vertical,
        }
    }
}

/// Outcome of a single overlap resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub side: ContactSide,
    /// Distance the body was pushed along the resolved axis
    pub depth: f32,
}

/// Pick the axis of minimum penetration.
///
/// Ties go to the vertical axis, which keeps corner hits reproducible.
pub fn resolve_axis(overlap: Vec2) -> ResolveAxis {
    if overlap.x < overlap.y {
        ResolveAxis::Horizontal
    } else {
        ResolveAxis::Vertical
    }
}

/// Push `body` out of `obstacle` along the axis of least overlap.
///
/// Only the resolved axis is touched. A landing sets `grounded`, a ceiling hit
/// clears it, and a side hit leaves it alone. Returns `None` (and mutates
/// nothing) when the rectangles do not overlap.
pub fn resolve(body: &mut Body, obstacle: &Obstacle) -> Option<Contact> {
    let a = body.rect();
    let b = obstacle.rect();

    if !a.intersects(&b) {
        return None;
    }
    let overlap = a.overlap(&b);

    let delta = a.center() - b.center();

    let side = match resolve_axis(overlap) {
        ResolveAxis::Horizontal => {
            let side = if delta.x > 0.0 {
                body.position.x += overlap.x;
                ContactSide::Right
            } else {
                body.position.x -= overlap.x;
                ContactSide::Left
            };
            body.velocity.x = 0.0;
            side
        }
        ResolveAxis::Vertical => {
            if delta.y > 0.0 {
                body.position.y += overlap.y;
                if body.velocity.y < 0.0 {
                    body.velocity.y = 0.0;
                }
                body.grounded = false;
                ContactSide::Bottom
            } else {
                body.position.y -= overlap.y;
                if body.velocity.y > 0.0 {
                    body.velocity.y = 0.0;
                }
                body.grounded = true;
                ContactSide::Top
            }
        }
    };

    let depth = match side.axis() {
        ResolveAxis::Horizontal => overlap.x,
        ResolveAxis::Vertical => overlap.y,
    };

    Some(Contact { side, depth })
}

/// Index of an obstacle in the world's fixed iteration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub usize);

/// Custom collision event for game logic
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionEvent {
    /// Body came to rest on top of an obstacle
    Landed { obstacle: ObstacleId },

    /// Body hit an obstacle's underside while rising
    HitCeiling { obstacle: ObstacleId },

    /// Body ran into an obstacle's side
    HitWall {
        obstacle: ObstacleId,
        side: ContactSide,
    },
}

impl CollisionEvent {
    pub fn from_contact(obstacle: ObstacleId, contact: &Contact) -> Self {
        match contact.side {
            ContactSide::Top => Self::Landed { obstacle },
            ContactSide::Bottom => Self::HitCeiling { obstacle },
            side => Self::HitWall { obstacle, side },
        }
    }

    pub fn obstacle(&self) -> ObstacleId {
        match *self {
            Self::Landed { obstacle }
            | Self::HitCeiling { obstacle }
            | Self::HitWall { obstacle, .. } => obstacle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::{presets, BodyBuilder};
    use approx::assert_relative_eq;

    fn body_at(x: f32, y: f32) -> Body {
        BodyBuilder::new(20.0, 20.0).position(x, y).build()
    }

    #[test]
    fn test_no_overlap_is_noop() {
        let platform = presets::platform(200.0, 300.0, 100.0, 20.0);
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(0.0, 0.0)
            .velocity(5.0, 5.0)
            .grounded(true)
            .build();
        let before = body;

        assert!(resolve(&mut body, &platform).is_none());
        assert_eq!(body, before);
    }

    #[test]
    fn test_touching_is_not_a_collision() {
        let platform = presets::platform(200.0, 300.0, 100.0, 20.0);
        // Bottom edge exactly on the platform's top edge
        let mut body = body_at(250.0, 280.0);
        assert!(resolve(&mut body, &platform).is_none());
        assert!(!body.grounded);
    }

    #[test]
    fn test_landing_on_top() {
        let platform = presets::platform(200.0, 300.0, 100.0, 20.0);
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(250.0, 284.0)
            .velocity(0.0, 400.0)
            .build();

        let contact = resolve(&mut body, &platform).unwrap();

        assert_eq!(contact.side, ContactSide::Top);
        assert_relative_eq!(contact.depth, 4.0);
        assert_relative_eq!(body.position.y, 280.0);
        assert_eq!(body.position.x, 250.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.grounded);
        assert!(!body.rect().intersects(&platform.rect()));
    }

    #[test]
    fn test_landing_keeps_upward_velocity() {
        // Moving up while overlapping the top face must not be cancelled
        let platform = presets::platform(200.0, 300.0, 100.0, 20.0);
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(250.0, 284.0)
            .velocity(0.0, -50.0)
            .build();

        resolve(&mut body, &platform).unwrap();
        assert_eq!(body.velocity.y, -50.0);
        assert!(body.grounded);
    }

    #[test]
    fn test_ceiling_hit_from_below() {
        let platform = presets::platform(200.0, 300.0, 100.0, 20.0);
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(250.0, 317.0)
            .velocity(0.0, -600.0)
            .grounded(true)
            .build();

        let contact = resolve(&mut body, &platform).unwrap();

        assert_eq!(contact.side, ContactSide::Bottom);
        assert_relative_eq!(body.position.y, 320.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(!body.grounded);
    }

    #[test]
    fn test_ceiling_hit_keeps_downward_velocity() {
        let platform = presets::platform(200.0, 300.0, 100.0, 20.0);
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(250.0, 317.0)
            .velocity(0.0, 30.0)
            .build();

        resolve(&mut body, &platform).unwrap();
        assert_eq!(body.velocity.y, 30.0);
    }

    #[test]
    fn test_side_hit_moving_right() {
        let wall = presets::platform(100.0, 100.0, 50.0, 100.0);
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(81.5, 140.0)
            .velocity(300.0, 10.0)
            .grounded(true)
            .build();

        let contact = resolve(&mut body, &wall).unwrap();

        assert_eq!(contact.side, ContactSide::Left);
        assert_eq!(contact.side.axis(), ResolveAxis::Horizontal);
        assert_relative_eq!(contact.depth, 1.5);
        assert_relative_eq!(body.position.x, 80.0);
        assert_eq!(body.position.y, 140.0);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.velocity.y, 10.0);
        assert!(body.grounded, "side hits leave grounded unchanged");
    }

    #[test]
    fn test_side_hit_moving_left() {
        let wall = presets::platform(100.0, 100.0, 50.0, 100.0);
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(148.0, 140.0)
            .velocity(-300.0, 0.0)
            .build();

        let contact = resolve(&mut body, &wall).unwrap();

        assert_eq!(contact.side, ContactSide::Right);
        assert_relative_eq!(body.position.x, 150.0);
        assert_eq!(body.velocity.x, 0.0);
        assert!(!body.grounded);
    }

    #[test]
    fn test_smaller_overlap_axis_wins() {
        assert_eq!(resolve_axis(Vec2::new(1.0, 2.0)), ResolveAxis::Horizontal);
        assert_eq!(resolve_axis(Vec2::new(2.0, 1.0)), ResolveAxis::Vertical);
    }

    #[test]
    fn test_equal_overlap_resolves_vertically() {
        assert_eq!(resolve_axis(Vec2::new(3.0, 3.0)), ResolveAxis::Vertical);

        // Exact corner overlap of 10 on both axes, body above-left of the block
        let block = presets::platform(100.0, 100.0, 20.0, 20.0);
        let mut body = body_at(90.0, 90.0);

        let contact = resolve(&mut body, &block).unwrap();

        assert_eq!(contact.side, ContactSide::Top);
        assert_eq!(body.position, Vec2::new(90.0, 80.0));
        assert!(body.grounded);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let platform = presets::platform(200.0, 300.0, 100.0, 20.0);
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(250.0, 290.0)
            .velocity(0.0, 100.0)
            .build();

        assert!(resolve(&mut body, &platform).is_some());
        let settled = body;

        assert!(resolve(&mut body, &platform).is_none());
        assert_eq!(body, settled);
    }

    #[test]
    fn test_collision_event_from_contact() {
        let id = ObstacleId(3);
        let landed = Contact {
            side: ContactSide::Top,
            depth: 1.0,
        };
        let wall = Contact {
            side: ContactSide::Left,
            depth: 1.0,
        };

        assert_eq!(
            CollisionEvent::from_contact(id, &landed),
            CollisionEvent::Landed { obstacle: id }
        );
        assert_eq!(
            CollisionEvent::from_contact(id, &wall),
            CollisionEvent::HitWall {
                obstacle: id,
                side: ContactSide::Left
            }
        );
        assert_eq!(CollisionEvent::from_contact(id, &wall).obstacle(), id);
    }
}
