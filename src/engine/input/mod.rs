// Input handling system
//
// Keyboard events are folded into a level-triggered state and sampled once
// per tick. Nothing is buffered: a tick sees what is held when it runs.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `player`: Held / just-pressed state
// - `config`: Key binding and remapping
// - `manager`: winit adapter producing a `FrameInput` per tick
//
// ## Usage Example
//
// ```rust
// use engine::input::InputManager;
//
// let mut input = InputManager::default();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per tick
// let frame = input.sample();
// world.step(dt, frame.motion());
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use manager::{FrameInput, InputManager};

#[allow(unused_imports)]
pub use action::{Action, InputSource};
#[allow(unused_imports)]
pub use config::InputConfig;
