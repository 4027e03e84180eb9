//! Dino Run - a terminal endless runner.
//!
//! The simulation in [`runner`] is deterministic given an injected RNG and
//! host timestamps, so the same code drives the interactive game, the
//! headless simulator and the tests.

pub mod core;
pub mod input;
pub mod runner;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use runner::{process_input, tick_runner, GameOver, RunnerGame, RunnerInput, TimingMode};
