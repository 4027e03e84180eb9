//! Optional user settings read from ~/.dino-run/settings.json.
//!
//! Every field has a default, so a missing or partial file is fine. Command
//! line flags take precedence over the file.

use super::persistence::load_json_or_default;
use crate::runner::TimingMode;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How host frames map onto simulation frames.
    pub timing: TimingMode,
    /// Fixed RNG seed for a reproducible obstacle sequence.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default(SETTINGS_FILE)
    }

    /// Apply command line overrides on top of the loaded settings.
    pub fn with_args(mut self, args: &[String]) -> Self {
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" | "-s" => {
                    if i + 1 < args.len() {
                        self.seed = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--frame-coupled" => {
                    self.timing = TimingMode::PerFrame;
                }
                _ => {}
            }
            i += 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("dino-run")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.timing, TimingMode::FixedStep { step_ms: 16 });
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.timing, TimingMode::default());

        let settings: Settings =
            serde_json::from_str(r#"{"timing": {"mode": "fixed_step", "step_ms": 10}}"#).unwrap();
        assert_eq!(settings.timing, TimingMode::FixedStep { step_ms: 10 });
    }

    #[test]
    fn test_args_override() {
        let settings = Settings::default().with_args(&args(&["--seed", "7", "--frame-coupled"]));
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.timing, TimingMode::PerFrame);
    }

    #[test]
    fn test_args_bad_seed_clears() {
        let settings = Settings {
            seed: Some(1),
            ..Default::default()
        }
        .with_args(&args(&["--seed", "abc"]));
        assert!(settings.seed.is_none());
    }
}
