// Game layer: level layout, player movement state and the running session

pub mod level;
pub mod player_state;
pub mod session;

// Re-export commonly used types
pub use level::Level;
pub use session::Session;
