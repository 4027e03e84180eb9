//! Tuning constants shared by the simulation, renderer and simulator.

pub mod constants;

pub use constants::*;
