// Player movement state machine, derived from physics output each tick

use crate::engine::physics::Body;

/// Represents the current movement state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    /// Standing still on a surface
    #[default]
    Idle,
    /// Moving horizontally on a surface
    Walking,
    /// In the air, moving upward
    Jumping,
    /// In the air, moving downward or at the apex
    Falling,
}

impl PlayerState {
    /// Classify a body after its tick has been resolved
    pub fn from_body(body: &Body) -> Self {
        if body.grounded {
            if body.velocity.x != 0.0 {
                Self::Walking
            } else {
                Self::Idle
            }
        } else if body.velocity.y < 0.0 {
            Self::Jumping
        } else {
            Self::Falling
        }
    }

    /// Check if the player is on a surface
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Idle | Self::Walking)
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walk",
            Self::Jumping => "jump",
            Self::Falling => "fall",
        }
    }
}

/// Tracks state transitions and time spent in the current state
#[derive(Debug, Default)]
pub struct PlayerStateMachine {
    current_state: PlayerState,
    state_time: f32,
}

impl PlayerStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    pub fn state(&self) -> PlayerState {
        self.current_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Transition to a new state
    pub fn transition(&mut self, new_state: PlayerState) {
        if self.current_state != new_state {
            log::debug!("Player state {:?} -> {:?}", self.current_state, new_state);
            self.current_state = new_state;
            self.state_time = 0.0;
        }
    }

    /// Update from the resolved body (called every tick)
    pub fn update(&mut self, dt: f32, body: &Body) {
        let next = PlayerState::from_body(body);
        if next == self.current_state {
            self.state_time += dt;
        } else {
            self.transition(next);
        }
    }
}
