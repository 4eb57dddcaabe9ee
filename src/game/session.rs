// A running level: physics world plus the player's movement state

use super::level::{Level, LevelError};
use super::player_state::PlayerStateMachine;
use crate::engine::input::FrameInput;
use crate::engine::physics::{CollisionEvent, PhysicsConfig, PhysicsWorld, StepReport};
use log::debug;
use crate::engine::renderer::FrameSnapshot;

/// Owns everything that changes while a level is being played
pub struct Session {
    world: PhysicsWorld,
    player_state: PlayerStateMachine,
}

impl Session {
    pub fn new(level: &Level, config: PhysicsConfig) -> Result<Self, LevelError> {
        Ok(Self {
            world: level.build_world(config)?,
            player_state: PlayerStateMachine::new(),
        })
    }

    /// Run one tick with the input sampled for it
    pub fn tick(&mut self, dt: f32, input: &FrameInput) -> StepReport {
        let report = self.world.step(dt, input.motion());
        if report.jumped {
            let position = self.world.body().position;
            debug!("Jump from ({:.1}, {:.1})", position.x, position.y);
        }
        self.log_contacts(&report);
        self.player_state.update(report.dt, self.world.body());
        report
    }

    fn log_contacts(&self, report: &StepReport) {
        // A resting body lands every tick; only report the touchdown
        let was_landed = self.player_state.state().is_grounded();
        for event in self.world.collision_events() {
            let platform = event.obstacle().0 + 1;
            match event {
                CollisionEvent::Landed { .. } if was_landed => {}
                CollisionEvent::Landed { .. } => debug!("Landed on platform {}", platform),
                CollisionEvent::HitCeiling { .. } => {
                    debug!("Hit underside of platform {}", platform)
                }
                CollisionEvent::HitWall { side, .. } => {
                    debug!("Hit {:?} side of platform {}", side, platform)
                }
            }
        }
        if report.edges.any() {
            debug!("Clamped to play area: {:?}", report.edges);
        }
    }

    /// Copy of the drawable state after the last tick
    pub fn snapshot(&self, paused: bool, fps: f32) -> FrameSnapshot {
        let body = self.world.body();
        FrameSnapshot {
            body: body.rect(),
            velocity: body.velocity,
            grounded: body.grounded,
            obstacles: self.world.obstacles().iter().map(|o| o.rect()).collect(),
            state: self.player_state.state().animation_name(),
            state_time: self.player_state.state_time(),
            paused,
            fps,
        }
    }

    #[cfg(test)]
    fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    #[cfg(test)]
    fn player_state(&self) -> super::player_state::PlayerState {
        self.player_state.state()
    }
}
