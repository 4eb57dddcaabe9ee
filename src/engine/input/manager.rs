// Input manager - turns winit keyboard events into per-tick input samples

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use crate::engine::physics::MotionInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Everything the frame driver needs from the keyboard for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal axis in {-1, 0, 1}
    pub axis: f32,
    /// Jump held (level-triggered, gated on grounded by the integrator)
    pub jump: bool,
    /// Pause pressed this frame
    pub toggle_pause: bool,
    /// Close requested
    pub close: bool,
}

impl FrameInput {
    /// The part of the sample the physics integrator consumes
    pub fn motion(&self) -> MotionInput {
        MotionInput::new(self.axis, self.jump)
    }
}

/// Coordinates key bindings and input state
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a key transition; OS key repeats are ignored
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };

        match state {
            ElementState::Pressed if !repeat => self.player.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.player.release(action),
        }
    }

    /// Sample the current state for one tick
    pub fn sample(&self) -> FrameInput {
        FrameInput {
            axis: self.player.horizontal_axis(),
            jump: self.player.is_pressed(Action::Jump),
            toggle_pause: self.player.just_pressed(Action::Pause),
            close: self.player.is_pressed(Action::Close),
        }
    }

    /// Update input state for a new frame
    /// Call this once per frame after the tick has consumed its sample
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}
