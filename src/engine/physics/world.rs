use log::trace;

use super::body::{Body, Obstacle};
use super::boundary::{clamp_to_area, EdgeContacts};
use super::collision::{resolve, CollisionEvent, ObstacleId};
use super::config::{ConfigError, PhysicsConfig, PlayArea};
use super::kinematics::{integrate, MotionInput};

/// Summary of a single physics step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Clamped elapsed time actually simulated
    pub dt: f32,
    /// A jump started this step
    pub jumped: bool,
    /// Area edges the body was clamped against
    pub edges: EdgeContacts,
}

/// Physics world that owns the body, the platforms and the tuning values
#[derive(Debug)]
pub struct PhysicsWorld {
    /// Integrator tuning (gravity, speeds, max frame time)
    config: PhysicsConfig,

    /// World boundary
    area: PlayArea,

    /// The one movable body
    body: Body,

    /// Static platforms, resolved in insertion order every step
    obstacles: Vec<Obstacle>,

    /// Collision events produced by the last step
    collision_events: Vec<CollisionEvent>,

    /// Number of steps simulated so far
    step_count: u64,
}

impl PhysicsWorld {
    /// Create a world after validating the tuning values and area
    pub fn new(config: PhysicsConfig, area: PlayArea, body: Body) -> Result<Self, ConfigError> {
        config.validate()?;
        area.validate()?;

        Ok(Self {
            config,
            area,
            body,
            obstacles: Vec::new(),
            collision_events: Vec::with_capacity(8),
            step_count: 0,
        })
    }

    /// Add a static platform. Resolution order follows insertion order.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> ObstacleId {
        let id = ObstacleId(self.obstacles.len());
        self.obstacles.push(obstacle);
        id
    }

    /// Step the simulation forward by `dt` seconds
    ///
    /// Order: integrate, reset grounded, resolve each obstacle in turn, clamp to
    /// the play area.
    pub fn step(&mut self, dt: f32, input: MotionInput) -> StepReport {
        self.collision_events.clear();

        let dt = self.config.clamp_dt(dt);
        let jumped = integrate(&mut self.body, &self.config, input, dt);

        // Only this step's resolutions may set it again
        self.body.grounded = false;

        for (index, obstacle) in self.obstacles.iter().enumerate() {
            if let Some(contact) = resolve(&mut self.body, obstacle) {
                trace!("{:?} contact, depth {:.3}", contact.side, contact.depth);
                self.collision_events
                    .push(CollisionEvent::from_contact(ObstacleId(index), &contact));
            }
        }

        let edges = clamp_to_area(&mut self.body, &self.area);

        self.step_count += 1;
        trace!(
            "step {}: pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) grounded={}",
            self.step_count,
            self.body.position.x,
            self.body.position.y,
            self.body.velocity.x,
            self.body.velocity.y,
            self.body.grounded
        );

        StepReport { dt, jumped, edges }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Collision events from the most recent step, in resolution order
    pub fn collision_events(&self) -> &[CollisionEvent] {
        &self.collision_events
    }
}
