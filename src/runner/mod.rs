//! Dino Run simulation.
//!
//! The actor dodges cacti by jumping and birds by ducking. All state lives in
//! `RunnerGame`; the terminal UI only reads it and the input layer only posts
//! `RunnerInput` intents.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
