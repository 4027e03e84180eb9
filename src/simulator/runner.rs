//! Main simulation runner.
//!
//! Each run drives a fresh `RunnerGame` through `tick_runner` with a
//! synthetic clock, the same path the interactive game takes, until the
//! first collision or the frame limit.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::SimReport;
use crate::runner::{process_input, tick_runner, GameOver, RunnerGame};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Outcome of one simulated run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub score: u32,
    /// Simulation frames stepped
    pub frames: u64,
    /// Host clock time survived
    pub elapsed_ms: u64,
    pub top_speed: f64,
    pub jumps: u32,
    pub ducks: u32,
    /// Hit the frame limit without colliding
    pub timed_out: bool,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Frames {}, Top Speed {:.2}, Jumps {}, Ducks {}{}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.frames,
                stats.top_speed,
                stats.jumps,
                stats.ducks,
                if stats.timed_out { " (timed out)" } else { "" }
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.max_frames_per_run)
}

/// Play one run with the autopilot until it collides or times out.
pub fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut game = RunnerGame::new(config.timing, 0);
    let mut pilot = Autopilot::new(config.lead_frames, config.miss_chance);
    let mut top_speed = game.speed;
    let mut now_ms = 0;
    let mut outcome: Option<GameOver> = None;

    for _ in 0..config.max_frames_per_run {
        if let Some(input) = pilot.decide(&game, rng) {
            process_input(&mut game, input);
        }

        now_ms += config.host_frame_ms;
        // end_run resets speed; keep the last live value
        let speed_before = game.speed;
        if let Some(over) = tick_runner(&mut game, now_ms, config.host_frame_ms, rng) {
            top_speed = top_speed.max(speed_before);
            outcome = Some(over);
            break;
        }
        top_speed = top_speed.max(game.speed);
    }

    RunStats {
        score: outcome.map_or(game.score, |o| o.score),
        frames: game.frame_count,
        elapsed_ms: now_ms,
        top_speed,
        jumps: pilot.jumps,
        ducks: pilot.ducks,
        timed_out: outcome.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TimingMode;

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig::quick(42);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.run_stats, b.run_stats);
    }

    #[test]
    fn test_hopeless_pilot_dies_to_first_obstacle() {
        let config = SimConfig {
            num_runs: 5,
            seed: Some(7),
            miss_chance: 1.0,
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert!(report.run_stats.iter().all(|r| r.score == 0 && !r.timed_out));
        assert!(report.run_stats.iter().all(|r| r.jumps == 0 && r.ducks == 0));
    }

    #[test]
    fn test_frame_limit_times_out() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(3),
            max_frames_per_run: 10,
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config);
        let run = &report.run_stats[0];
        assert!(run.timed_out);
        assert_eq!(run.frames, 10);
        assert_eq!(run.elapsed_ms, 160);
    }

    #[test]
    fn test_per_frame_steps_once_per_host_frame() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(3),
            max_frames_per_run: 10,
            host_frame_ms: 40,
            timing: TimingMode::PerFrame,
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert_eq!(report.run_stats[0].frames, 10);
    }

    #[test]
    fn test_fixed_step_follows_host_clock() {
        let config = SimConfig {
            num_runs: 1,
            seed: Some(3),
            max_frames_per_run: 10,
            host_frame_ms: 32,
            timing: TimingMode::FixedStep { step_ms: 16 },
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config);
        assert_eq!(report.run_stats[0].frames, 20);
    }
}
