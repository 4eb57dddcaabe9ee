// Input-driven velocity, gravity accumulation and position integration

use super::body::Body;
use super::config::PhysicsConfig;

/// Movement intent for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionInput {
    /// Horizontal axis, one of -1.0, 0.0 or 1.0
    pub axis: f32,
    /// Jump requested this tick (honoured only when grounded)
    pub jump: bool,
}

impl MotionInput {
    pub fn new(axis: f32, jump: bool) -> Self {
        Self {
            axis: axis.clamp(-1.0, 1.0),
            jump,
        }
    }
}

/// Advance `body` by one tick. Returns true if a jump started.
///
/// `dt` is clamped to `config.max_frame_time` before use. Jump gating reads
/// `grounded` as left by the previous tick's resolution pass.
pub fn integrate(body: &mut Body, config: &PhysicsConfig, input: MotionInput, dt: f32) -> bool {
    let dt = config.clamp_dt(dt);

    body.velocity.x = input.axis * config.move_speed;

    let jumped = input.jump && body.grounded;
    if jumped {
        body.velocity.y = -config.jump_speed;
        body.grounded = false;
    }

    body.velocity.y += config.gravity * dt;
    body.position += body.velocity * dt;

    jumped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::BodyBuilder;
    use approx::assert_relative_eq;
    use glam::Vec2;

    const DT: f32 = 1.0 / 120.0;

    fn airborne_body() -> Body {
        BodyBuilder::new(20.0, 20.0).position(100.0, 100.0).build()
    }

    #[test]
    fn test_horizontal_velocity_follows_axis() {
        let config = PhysicsConfig::default();
        let mut body = airborne_body();

        integrate(&mut body, &config, MotionInput::new(1.0, false), DT);
        assert_eq!(body.velocity.x, config.move_speed);

        integrate(&mut body, &config, MotionInput::new(-1.0, false), DT);
        assert_eq!(body.velocity.x, -config.move_speed);

        integrate(&mut body, &config, MotionInput::default(), DT);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_axis_is_clamped() {
        assert_eq!(MotionInput::new(4.0, false).axis, 1.0);
        assert_eq!(MotionInput::new(-4.0, false).axis, -1.0);
    }

    #[test]
    fn test_gravity_increases_fall_speed_monotonically() {
        let config = PhysicsConfig::default();
        let mut body = airborne_body();
        let mut previous = body.velocity.y;

        for _ in 0..10 {
            integrate(&mut body, &config, MotionInput::default(), DT);
            assert!(body.velocity.y > previous);
            assert_relative_eq!(
                body.velocity.y - previous,
                config.gravity * DT,
                max_relative = 1e-4
            );
            previous = body.velocity.y;
        }
    }

    #[test]
    fn test_position_advances_by_velocity() {
        let config = PhysicsConfig {
            gravity: 100.0,
            ..Default::default()
        };
        let mut body = airborne_body();

        integrate(&mut body, &config, MotionInput::new(1.0, false), 0.01);

        // Velocity is updated before the position step (semi-implicit Euler)
        assert_relative_eq!(body.position.x, 100.0 + 300.0 * 0.01);
        assert_relative_eq!(body.position.y, 100.0 + 1.0 * 0.01);
    }

    #[test]
    fn test_jump_requires_grounded() {
        let config = PhysicsConfig::default();
        let mut body = airborne_body();

        let jumped = integrate(&mut body, &config, MotionInput::new(0.0, true), DT);
        assert!(!jumped);
        assert!(body.velocity.y > 0.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let config = PhysicsConfig::default();
        let mut body = BodyBuilder::new(20.0, 20.0)
            .position(100.0, 100.0)
            .grounded(true)
            .build();

        let jumped = integrate(&mut body, &config, MotionInput::new(0.0, true), DT);

        assert!(jumped);
        assert!(!body.grounded);
        assert_relative_eq!(
            body.velocity.y,
            -config.jump_speed + config.gravity * DT,
            max_relative = 1e-5
        );
        assert!(body.position.y < 100.0);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let config = PhysicsConfig::default();
        let mut clamped = airborne_body();
        let mut reference = airborne_body();

        integrate(&mut clamped, &config, MotionInput::default(), 1.0);
        integrate(&mut reference, &config, MotionInput::default(), config.max_frame_time);

        assert_eq!(clamped, reference);
    }

    #[test]
    fn test_zero_dt_keeps_position() {
        let config = PhysicsConfig::default();
        let mut body = airborne_body();
        integrate(&mut body, &config, MotionInput::new(1.0, false), 0.0);
        assert_eq!(body.position, Vec2::new(100.0, 100.0));
    }
}
