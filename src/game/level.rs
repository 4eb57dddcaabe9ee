// Level description: play area, spawn point and platform layout

use crate::core::Rect;
use crate::engine::physics::body::presets;
use crate::engine::physics::{ConfigError, PhysicsConfig, PhysicsWorld, PlayArea};
use glam::Vec2;
use log::info;
use thiserror::Error;

/// Level validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("Invalid physics configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Body size must be positive, got {width}x{height}")]
    InvalidBodySize { width: f32, height: f32 },

    #[error("Platform {index} is degenerate: {rect:?}")]
    InvalidPlatform { index: usize, rect: Rect },

    #[error("Spawn rect {0:?} does not fit inside the play area")]
    SpawnOutsideArea(Rect),
}

/// Static layout of a level
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub area: PlayArea,
    /// Top-left corner of the body at start
    pub spawn: Vec2,
    pub body_size: Vec2,
    /// Platforms, resolved in this order every tick
    pub platforms: Vec<Rect>,
}

impl Level {
    /// The starter scene: two floating platforms above an open floor
    pub fn default_level() -> Self {
        Self {
            name: "Starter".to_string(),
            area: PlayArea::new(800.0, 600.0),
            spawn: Vec2::new(250.0, 200.0),
            body_size: Vec2::new(20.0, 20.0),
            platforms: vec![
                Rect::from_xywh(50.0, 300.0, 50.0, 20.0),
                Rect::from_xywh(200.0, 300.0, 100.0, 20.0),
            ],
        }
    }

    pub fn spawn_rect(&self) -> Rect {
        Rect::new(self.spawn, self.body_size)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        self.area.validate()?;

        let body_valid = self.body_size.is_finite() && self.body_size.cmpgt(Vec2::ZERO).all();
        if !body_valid {
            return Err(LevelError::InvalidBodySize {
                width: self.body_size.x,
                height: self.body_size.y,
            });
        }

        if let Some((index, rect)) = self
            .platforms
            .iter()
            .enumerate()
            .find(|(_, rect)| !rect.is_valid())
        {
            return Err(LevelError::InvalidPlatform { index, rect: *rect });
        }

        let bounds = Rect::new(Vec2::ZERO, Vec2::new(self.area.width, self.area.height));
        let spawn = self.spawn_rect();
        if !spawn.is_valid() || !bounds.contains_rect(&spawn) {
            return Err(LevelError::SpawnOutsideArea(spawn));
        }

        Ok(())
    }

    /// Validate the level and build a physics world for it
    pub fn build_world(&self, config: PhysicsConfig) -> Result<PhysicsWorld, LevelError> {
        self.validate()?;

        let body = presets::player_body(self.spawn, self.body_size);
        let mut world = PhysicsWorld::new(config, self.area, body)?;
        for rect in &self.platforms {
            world.add_obstacle(presets::platform(
                rect.position.x,
                rect.position.y,
                rect.size.x,
                rect.size.y,
            ));
        }

        info!(
            "Level '{}' loaded: {}x{} area, {} platforms",
            self.name,
            self.area.width,
            self.area.height,
            self.platforms.len()
        );

        Ok(world)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::default_level()
    }
}
