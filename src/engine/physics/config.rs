// Physics tuning values and play area bounds

use thiserror::Error;

/// Physics configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("Play area must have positive dimensions, got {width}x{height}")]
    InvalidArea { width: f32, height: f32 },
}

/// Tuning values for the kinematics integrator
///
/// Units are pixels and seconds. Y points down, so gravity is a positive
/// acceleration and a jump sets a negative vertical velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Horizontal speed while a move action is held (px/s)
    pub move_speed: f32,
    /// Initial upward speed of a jump (px/s)
    pub jump_speed: f32,
    /// Upper bound for a single tick's elapsed time (s)
    pub max_frame_time: f32,
}

pub const DEFAULT_PHYSICS: PhysicsConfig = PhysicsConfig {
    gravity: 2000.0,
    move_speed: 300.0,
    jump_speed: 700.0,
    // Large steps would let the body tunnel through thin platforms
    max_frame_time: 0.033,
};

impl Default for PhysicsConfig {
    fn default() -> Self {
        DEFAULT_PHYSICS
    }
}

impl PhysicsConfig {
    /// Clamp an elapsed time into `[0, max_frame_time]`
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_frame_time)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("jump_speed", self.jump_speed),
            ("max_frame_time", self.max_frame_time),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        Ok(())
    }
}

/// The fixed world boundary, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidArea {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
