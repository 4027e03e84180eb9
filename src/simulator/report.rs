//! Simulation report generation.

use super::runner::RunStats;
use serde::Serialize;

/// Width of one score histogram bucket.
const SCORE_BUCKET: u32 = 10;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub max_frames_per_run: u64,

    pub avg_score: f64,
    pub min_score: u32,
    pub median_score: u32,
    pub max_score: u32,
    pub avg_frames: f64,
    pub avg_survival_secs: f64,
    pub avg_top_speed: f64,
    pub avg_jumps: f64,
    pub avg_ducks: f64,

    /// Runs per score bucket of `SCORE_BUCKET` points, lowest first
    pub score_histogram: Vec<u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_frames: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();
        let min_score = scores.first().copied().unwrap_or(0);
        let max_score = scores.last().copied().unwrap_or(0);
        let median_score = scores.get(scores.len() / 2).copied().unwrap_or(0);

        let mut score_histogram = vec![0u32; (max_score / SCORE_BUCKET) as usize + 1];
        for score in &scores {
            score_histogram[(score / SCORE_BUCKET) as usize] += 1;
        }

        Self {
            num_runs,
            runs_timed_out,
            max_frames_per_run: max_frames,
            avg_score: mean(&runs, |r| r.score as f64),
            min_score,
            median_score,
            max_score,
            avg_frames: mean(&runs, |r| r.frames as f64),
            avg_survival_secs: mean(&runs, |r| r.elapsed_ms as f64 / 1000.0),
            avg_top_speed: mean(&runs, |r| r.top_speed),
            avg_jumps: mean(&runs, |r| r.jumps as f64),
            avg_ducks: mean(&runs, |r| r.ducks as f64),
            score_histogram,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out (limit {} frames)\n\n",
            self.num_runs, self.runs_timed_out, self.max_frames_per_run
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:        {:.1}\n", self.avg_score));
        report.push_str(&format!("  Min Score:        {}\n", self.min_score));
        report.push_str(&format!("  Median Score:     {}\n", self.median_score));
        report.push_str(&format!("  Max Score:        {}\n\n", self.max_score));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Frames:       {:.0}\n", self.avg_frames));
        report.push_str(&format!(
            "  Avg Survival:     {:.1}s\n",
            self.avg_survival_secs
        ));
        report.push_str(&format!("  Avg Top Speed:    {:.2}\n", self.avg_top_speed));
        report.push_str(&format!("  Avg Jumps:        {:.1}\n", self.avg_jumps));
        report.push_str(&format!("  Avg Ducks:        {:.1}\n\n", self.avg_ducks));

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (bucket, &count) in self.score_histogram.iter().enumerate() {
            let low = bucket as u32 * SCORE_BUCKET;
            let pct = if self.num_runs > 0 {
                count as f64 / self.num_runs as f64 * 100.0
            } else {
                0.0
            };
            let bar: String = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!(
                "  {:4}-{:<4} {:>5.1}% {}\n",
                low,
                low + SCORE_BUCKET - 1,
                pct,
                bar
            ));
        }

        if self.num_runs > 0 && self.runs_timed_out == self.num_runs {
            report.push_str("\n  ⚠️  Every run hit the frame limit - raise --frames?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
