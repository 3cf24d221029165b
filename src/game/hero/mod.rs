// Hero character
//
// This module contains everything related to the controlled hero:
// - The sprite entity and its movement
// - Movement stats
// - The context handed to state handlers each frame
// - The state machine deciding what the hero does

pub mod context;
pub mod entity;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use context::CharacterContext;
pub use entity::{Direction, Hero};
pub use state::{CharacterState, CharacterStateMachine};
pub use stats::HeroStats;
