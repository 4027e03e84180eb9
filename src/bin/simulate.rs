//! Dino Run headless simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # 1000 autopilot runs
//!   cargo run --bin simulate -- -n 100 -s 42    # 100 reproducible runs
//!   cargo run --bin simulate -- --json          # JSON summary on stdout

use dino_run::runner::TimingMode;
use dino_run::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    if !json {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              DINO RUN SIMULATOR                               ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Max Frames:     {}", config.max_frames_per_run);
        println!("  Host Frame:     {} ms", config.host_frame_ms);
        match config.timing {
            TimingMode::PerFrame => println!("  Timing:         frame-coupled"),
            TimingMode::FixedStep { step_ms } => {
                println!("  Timing:         fixed step ({} ms)", step_ms)
            }
        }
        println!("  Miss Chance:    {:.1}%", config.miss_chance * 100.0);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-f" | "--frames" => {
                if i + 1 < args.len() {
                    config.max_frames_per_run = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--host-ms" => {
                if i + 1 < args.len() {
                    config.host_frame_ms = args[i + 1].parse().unwrap_or(16).max(1);
                    i += 1;
                }
            }
            "--miss" => {
                if i + 1 < args.len() {
                    config.miss_chance = args[i + 1].parse().unwrap_or(0.02);
                    i += 1;
                }
            }
            "--frame-coupled" => {
                config.timing = TimingMode::PerFrame;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    // Keep stdout parseable
    if json {
        config.verbosity = 0;
    }

    (config, json)
}

fn print_help() {
    println!("Dino Run Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated runs (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -f, --frames <F>    Max host frames per run (default: 100,000)");
    println!("    --host-ms <MS>      Simulated redraw interval (default: 16)");
    println!("    --miss <P>          Chance the autopilot ignores an obstacle (default: 0.02)");
    println!("    --frame-coupled     One physics step per host frame");
    println!("    -v, --verbose       Print every run");
    println!("    --json              Print the summary as JSON");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                          # Default run");
    println!("    cargo run --bin simulate -- -n 100 -s 42          # Reproducible");
    println!("    cargo run --bin simulate -- --frame-coupled --host-ms 33");
}
