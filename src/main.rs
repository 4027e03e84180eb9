use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dino_run::core::constants::{INPUT_POLL_MS, REALTIME_FRAME_MS};
use dino_run::input::{InputAction, KeyMapper};
use dino_run::runner::{process_input, tick_runner, RunnerGame};
use dino_run::ui::draw_ui;
use dino_run::utils::{build_info, logging, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" | "-s" => {
                if args.get(i + 1).and_then(|v| v.parse::<u64>().ok()).is_none() {
                    eprintln!("--seed expects a number");
                    std::process::exit(1);
                }
                i += 1;
            }
            "--frame-coupled" => {}
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'dino-run --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = logging::init_file_logger() {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let settings = Settings::load().with_args(&args);
    log::info!(
        "starting {} timing={:?} seed={:?}",
        build_info::version_string(),
        settings.timing,
        settings.seed
    );

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;

    // Key releases let Down act as a hold-to-duck key
    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true));
    if reports_release {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    log::debug!("key release reporting: {}", reports_release);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_session(
        &mut terminal,
        &settings,
        &mut rng,
        KeyMapper::new(reports_release),
    );

    // Restore terminal even if the session failed
    if reports_release {
        let _ = terminal.backend_mut().execute(PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("session aborted: {}", e);
    }
    result
}

/// Run the interactive game until the player quits.
fn run_session<B: Backend>(
    terminal: &mut Terminal<B>,
    settings: &Settings,
    rng: &mut StdRng,
    mapper: KeyMapper,
) -> io::Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut game = RunnerGame::new(settings.timing, now_ms());
    let mut last_frame = now_ms();

    loop {
        let now = now_ms();
        terminal.draw(|frame| draw_ui(frame, &game, now))?;

        // Drain every queued event before the next step
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            loop {
                if let Event::Key(key) = event::read()? {
                    match mapper.map(key) {
                        InputAction::Quit => {
                            log::info!(
                                "quit after {} runs, high score {}",
                                game.runs_played,
                                game.high_score
                            );
                            return Ok(());
                        }
                        InputAction::Ignore => {}
                        InputAction::Runner(input) => {
                            if game.game_over.is_none() {
                                process_input(&mut game, input);
                            } else if key.kind == KeyEventKind::Press {
                                game.acknowledge_game_over(now_ms());
                                last_frame = now_ms();
                            }
                        }
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = now_ms();
        let dt = now.saturating_sub(last_frame);
        if dt >= REALTIME_FRAME_MS {
            last_frame = now;
            if let Some(over) = tick_runner(&mut game, now, dt, rng) {
                log::debug!(
                    "game over shown: score={} new_high={}",
                    over.score,
                    over.new_high_score
                );
            }
        }
    }
}

fn print_help() {
    println!("Dino Run - Terminal Endless Runner\n");
    println!("Usage: dino-run [options]\n");
    println!("Options:");
    println!("  -s, --seed <N>     Reproducible obstacle sequence");
    println!("  --frame-coupled    One physics step per drawn frame");
    println!("  -v, --version      Show version information");
    println!("  -h, --help         Show this help message");
    println!();
    println!("Controls:");
    println!("  Space / Up         Jump");
    println!("  Down               Duck (hold, or toggle on basic terminals)");
    println!("  Left / Right       Slow down / speed up");
    println!("  q / Esc            Quit");
    println!();
    println!("Settings are read from ~/.dino-run/settings.json when present.");
}
