//! End-to-end scenarios for the runner simulation.

use dino_run::core::constants::*;
use dino_run::runner::{
    process_input, tick_runner, Actor, Obstacle, ObstacleKind, RunnerGame, RunnerInput, Stance,
    TimingMode,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn game_with(kind: ObstacleKind, x: f64, speed: f64) -> RunnerGame {
    let mut game = RunnerGame::new(TimingMode::PerFrame, 0);
    // Suppress the immediate first spawn
    game.last_spawn_ms = Some(0);
    let mut obstacle = Obstacle::new(kind, speed);
    obstacle.x = x;
    game.obstacles.push(obstacle);
    game
}

#[test]
fn test_standing_actor_hit_by_bird_exactly_once() {
    let mut game = game_with(ObstacleKind::Bird, 600.0, 5.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut endings = 0;
    let mut hit_at = None;
    for frame in 1..=200u64 {
        let x_before = game.obstacles.first().map(|o| o.x);
        if let Some(over) = tick_runner(&mut game, frame * 16, 16, &mut rng) {
            endings += 1;
            assert_eq!(over.score, 0);
            hit_at = x_before.map(|x| x - 5.0);
            // Keep stepping without acknowledging: the run stays paused
        }
    }

    assert_eq!(endings, 1);
    let x = hit_at.unwrap();
    assert!(x < ACTOR_X + ACTOR_WIDTH, "hit at x={}", x);
    assert!(x + 5.0 >= ACTOR_X + ACTOR_WIDTH);
    assert!(game.game_over.is_some());
}

#[test]
fn test_ducking_actor_lets_bird_pass() {
    let mut game = game_with(ObstacleKind::Bird, 600.0, 5.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    process_input(&mut game, RunnerInput::Duck);

    for frame in 1..=120u64 {
        game.last_spawn_ms = Some(frame * 16);
        assert!(tick_runner(&mut game, frame * 16, 16, &mut rng).is_none());
    }
    assert_eq!(game.score, 1);
    assert!((game.speed - 5.1).abs() < 1e-9);
}

#[test]
fn test_jump_clears_cactus() {
    let mut game = game_with(ObstacleKind::Cactus, 120.0, 5.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    process_input(&mut game, RunnerInput::Jump);

    for frame in 1..=60u64 {
        game.last_spawn_ms = Some(frame * 16);
        assert!(tick_runner(&mut game, frame * 16, 16, &mut rng).is_none());
    }
    assert_eq!(game.score, 1);
    assert_eq!(game.actor.stance, Stance::Standing);
}

#[test]
fn test_speed_floor_after_twenty_slowdowns() {
    let mut game = RunnerGame::new(TimingMode::default(), 0);
    for _ in 0..20 {
        process_input(&mut game, RunnerInput::SlowDown);
    }
    assert_eq!(game.speed, MIN_SPEED);
}

#[test]
fn test_state_after_game_over() {
    let mut game = game_with(ObstacleKind::Cactus, 100.0, 5.0);
    game.score = 7;
    game.speed = 9.0;
    let over = game.end_run(5_000);

    assert_eq!(over.score, 7);
    assert!(over.new_high_score);
    assert_eq!(game.score, 0);
    assert_eq!(game.high_score, 7);
    assert_eq!(game.speed, INITIAL_SPEED);
    assert!(game.obstacles.is_empty());
    assert_eq!(game.actor, Actor::default());
    assert_eq!(game.actor.y, GROUND_Y - ACTOR_STANDING_HEIGHT);

    // Acknowledging starts the next run's clock
    game.acknowledge_game_over(9_000);
    assert!(game.game_over.is_none());
    assert_eq!(game.elapsed_secs(10_500), 1);
}

#[test]
fn test_inputs_ignored_while_game_over_pending() {
    let mut game = RunnerGame::new(TimingMode::default(), 0);
    game.end_run(0);
    process_input(&mut game, RunnerInput::Jump);
    process_input(&mut game, RunnerInput::SpeedUp);
    assert!(!game.actor.is_airborne());
    assert_eq!(game.speed, INITIAL_SPEED);
}

#[test]
fn test_seeded_sessions_match() {
    let play = |seed: u64| {
        let mut game = RunnerGame::new(TimingMode::default(), 0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut trace = Vec::new();
        for frame in 1..=2_000u64 {
            if frame % 37 == 0 {
                process_input(&mut game, RunnerInput::Jump);
            }
            if let Some(over) = tick_runner(&mut game, frame * 16, 16, &mut rng) {
                trace.push((frame, over.score));
                game.acknowledge_game_over(frame * 16);
            }
        }
        (trace, game.obstacles.len(), game.score)
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn test_fixed_step_independent_of_redraw_rate() {
    let mut fast = RunnerGame::new(TimingMode::FixedStep { step_ms: 16 }, 0);
    let mut slow = RunnerGame::new(TimingMode::FixedStep { step_ms: 16 }, 0);
    let mut rng_fast = ChaCha8Rng::seed_from_u64(5);
    let mut rng_slow = ChaCha8Rng::seed_from_u64(5);

    for frame in 1..=64u64 {
        tick_runner(&mut fast, frame * 8, 8, &mut rng_fast);
    }
    for frame in 1..=16u64 {
        tick_runner(&mut slow, frame * 32, 32, &mut rng_slow);
    }

    assert_eq!(fast.frame_count, 32);
    assert_eq!(slow.frame_count, 32);
    assert_eq!(fast.obstacles.len(), slow.obstacles.len());
    assert_eq!(fast.obstacles[0].x, slow.obstacles[0].x);
}
