//! Dino Run game logic: physics, spawning, scoring, collision detection.

use super::types::*;
use crate::core::constants::*;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Jump,       // Space or Up arrow
    Duck,       // Down pressed
    Stand,      // Down released
    ToggleDuck, // Down pressed on terminals that never report releases
    SlowDown,   // Left arrow
    SpeedUp,    // Right arrow
    Other,
}

/// Apply a player input. Ignored while a game-over notice is pending.
pub fn process_input(game: &mut RunnerGame, input: RunnerInput) {
    if game.game_over.is_some() {
        return;
    }

    match input {
        RunnerInput::Jump => game.trigger_jump(),
        RunnerInput::Duck => game.set_posture(true),
        RunnerInput::Stand => game.set_posture(false),
        RunnerInput::ToggleDuck => {
            let lowered = !game.actor.is_lowered();
            game.set_posture(lowered);
        }
        RunnerInput::SlowDown => {
            game.adjust_speed(-MANUAL_SPEED_STEP);
            game.log.push(format!("Speed set to {:.2}", game.speed), false);
        }
        RunnerInput::SpeedUp => {
            game.adjust_speed(MANUAL_SPEED_STEP);
            game.log.push(format!("Speed set to {:.2}", game.speed), false);
        }
        RunnerInput::Other => {}
    }
}

/// Advance the simulation. Called once per host frame.
///
/// `now_ms` is the host's monotonic clock, `dt_ms` the time since the
/// previous call. Returns the game-over record if a run ended.
pub fn tick_runner<R: Rng>(
    game: &mut RunnerGame,
    now_ms: u64,
    dt_ms: u64,
    rng: &mut R,
) -> Option<GameOver> {
    if game.game_over.is_some() {
        return None;
    }

    match game.timing {
        TimingMode::PerFrame => game.step_frame(now_ms, rng),
        TimingMode::FixedStep { step_ms } => {
            let step_ms = step_ms.max(1);
            // Clamp dt so a stall doesn't replay seconds of frames at once
            game.accumulated_time_ms += dt_ms.min(MAX_FRAME_DT_MS);

            while game.accumulated_time_ms >= step_ms {
                game.accumulated_time_ms -= step_ms;
                if let Some(over) = game.step_frame(now_ms, rng) {
                    game.accumulated_time_ms = 0;
                    return Some(over);
                }
            }
            None
        }
    }
}

impl RunnerGame {
    /// One simulation frame: actor physics, spawn check, obstacle step.
    pub fn step_frame<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> Option<GameOver> {
        self.frame_count += 1;
        self.advance_actor();
        self.maybe_spawn_obstacle(now_ms, rng);
        self.step_obstacles(now_ms)
    }

    /// Apply velocity and gravity while airborne; land on the resting line.
    pub fn advance_actor(&mut self) {
        if !self.actor.is_airborne() {
            return;
        }

        self.actor.y += self.actor.velocity;
        self.actor.velocity += GRAVITY;

        // Ceiling: the actor never leaves the playfield
        if self.actor.y < 0.0 {
            self.actor.y = 0.0;
        }

        let rest = self.actor.resting_y();
        if self.actor.y > rest {
            self.actor.y = rest;
            self.actor.velocity = 0.0;
            self.actor.stance = self.actor.stance.on(StanceEvent::Land);
        }
    }

    /// Switch between upright and lowered posture. No-op while airborne.
    pub fn set_posture(&mut self, lowered: bool) {
        let event = if lowered {
            StanceEvent::Duck
        } else {
            StanceEvent::Stand
        };
        let next = self.actor.stance.on(event);
        if next != self.actor.stance {
            self.actor.stance = next;
            self.actor.y = self.actor.resting_y();
        }
    }

    /// Start a jump from either ground posture. No double jumps.
    pub fn trigger_jump(&mut self) {
        let next = self.actor.stance.on(StanceEvent::Jump);
        if next != self.actor.stance {
            self.actor.stance = next;
            self.actor.velocity = JUMP_VELOCITY;
        }
    }

    /// Spawn an obstacle if the minimum interval has elapsed since the last one.
    /// Returns true if an obstacle was spawned.
    pub fn maybe_spawn_obstacle<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> bool {
        let due = match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > MIN_SPAWN_INTERVAL_MS,
        };
        if !due {
            return false;
        }

        self.spawn_obstacle(rng);
        self.last_spawn_ms = Some(now_ms);
        true
    }

    /// Move obstacles, credit passed ones, resolve collisions, drop off-screen ones.
    pub fn step_obstacles(&mut self, now_ms: u64) -> Option<GameOver> {
        let actor_box = self.actor.bounds();
        let lowered = self.actor.is_lowered();

        for i in 0..self.obstacles.len() {
            let obstacle = &mut self.obstacles[i];
            obstacle.x -= obstacle.speed;

            let credited = !obstacle.passed && obstacle.trailing_edge() < actor_box.x;
            if credited {
                obstacle.passed = true;
            }
            let hit = actor_box.overlaps(&obstacle.bounds())
                && !(lowered && obstacle.kind.avoided_by_ducking());

            if credited {
                self.score += 1;
                self.adjust_speed(PASS_SPEED_INCREMENT);
            }
            if hit {
                return Some(self.end_run(now_ms));
            }
        }

        self.obstacles.retain(|o| o.trailing_edge() > 0.0);
        None
    }

    /// Finish the current run: record the high score, queue the game-over
    /// notice, and reset everything else for the next run.
    pub fn end_run(&mut self, now_ms: u64) -> GameOver {
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        let over = GameOver {
            score: self.score,
            high_score: self.high_score,
            new_high_score,
        };

        self.runs_played += 1;
        self.log.push(format!("Game Over! Score: {}", over.score), false);
        if new_high_score {
            self.log.push(format!("New high score: {}", over.high_score), true);
        }
        log::info!(
            "run {} ended: score={} high_score={} frames={}",
            self.runs_played,
            over.score,
            over.high_score,
            self.frame_count
        );

        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.obstacles.clear();
        self.actor = Actor::default();
        self.run_start_ms = now_ms;
        self.game_over = Some(over);
        over
    }

    /// Dismiss the pending game-over notice and restart the run clock.
    pub fn acknowledge_game_over(&mut self, now_ms: u64) -> Option<GameOver> {
        let over = self.game_over.take()?;
        self.run_start_ms = now_ms;
        self.accumulated_time_ms = 0;
        self.log.push(format!("Run {} started", self.runs_played + 1), false);
        Some(over)
    }

    /// Add `delta` to the global speed, clamped to [MIN_SPEED, MAX_SPEED].
    pub fn adjust_speed(&mut self, delta: f64) {
        self.speed = (self.speed + delta).clamp(MIN_SPEED, MAX_SPEED);
    }
}
