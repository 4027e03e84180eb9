//! Headless simulator for balance analysis.
//!
//! Plays many seeded runs with a scripted autopilot through the same
//! `tick_runner` path as the interactive game and summarizes the scores.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
