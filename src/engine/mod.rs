// Engine modules: physics, input, timing, rendering seam

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
