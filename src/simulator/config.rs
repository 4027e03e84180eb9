//! Simulation configuration.

use crate::core::constants::REALTIME_FRAME_MS;
use crate::runner::TimingMode;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Host frames per run before it counts as timed out
    pub max_frames_per_run: u64,

    /// Simulated redraw interval of the host loop
    pub host_frame_ms: u64,

    pub timing: TimingMode,

    /// Frames of warning the autopilot wants before an obstacle arrives
    pub lead_frames: f64,

    /// Chance the autopilot fails to react to a given obstacle
    pub miss_chance: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_frames_per_run: 100_000,
            host_frame_ms: REALTIME_FRAME_MS,
            timing: TimingMode::default(),
            lead_frames: 6.0,
            miss_chance: 0.02,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible batch
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 50,
            seed: Some(seed),
            max_frames_per_run: 20_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
