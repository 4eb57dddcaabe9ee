// Platformer physics: kinematics, AABB resolution against static platforms,
// and the play area clamp.
//
// Per tick: integrate -> reset grounded -> resolve every obstacle in a fixed
// order -> clamp to the play area.

pub mod body;
pub mod boundary;
pub mod collision;
pub mod config;
pub mod kinematics;
mod world;

pub use body::Body;
pub use collision::CollisionEvent;
pub use config::{ConfigError, PhysicsConfig, PlayArea};
pub use kinematics::MotionInput;
pub use world::{PhysicsWorld, StepReport};
