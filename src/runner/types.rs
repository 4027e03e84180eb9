//! Dino Run data structures.
//!
//! A single-screen endless runner: the actor stays at a fixed column while
//! cacti and birds scroll in from the right. Jump over cacti, duck under
//! birds. Every obstacle passed bumps the score and the global speed.

use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Body posture, independent of whether the actor is in the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    Upright,
    Lowered,
}

impl Posture {
    /// Hitbox height in game units.
    pub fn height(self) -> f64 {
        match self {
            Self::Upright => ACTOR_STANDING_HEIGHT,
            Self::Lowered => ACTOR_LOWERED_HEIGHT,
        }
    }
}

/// Actor state machine.
///
/// `Airborne` remembers the posture held at take-off; posture changes are
/// ignored mid-air, so landing always restores that posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Standing,
    Lowered,
    Airborne { posture: Posture },
}

/// Events that drive `Stance` transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StanceEvent {
    Jump,
    Duck,
    Stand,
    Land,
}

impl Stance {
    /// Next stance after `event`. Disallowed transitions return `self`.
    pub fn on(self, event: StanceEvent) -> Self {
        match (self, event) {
            (Self::Standing, StanceEvent::Jump) => Self::Airborne {
                posture: Posture::Upright,
            },
            (Self::Lowered, StanceEvent::Jump) => Self::Airborne {
                posture: Posture::Lowered,
            },
            (Self::Standing, StanceEvent::Duck) => Self::Lowered,
            (Self::Lowered, StanceEvent::Stand) => Self::Standing,
            (Self::Airborne { posture }, StanceEvent::Land) => match posture {
                Posture::Upright => Self::Standing,
                Posture::Lowered => Self::Lowered,
            },
            (stance, _) => stance,
        }
    }

    pub fn posture(self) -> Posture {
        match self {
            Self::Standing => Posture::Upright,
            Self::Lowered => Posture::Lowered,
            Self::Airborne { posture } => posture,
        }
    }

    pub fn is_airborne(self) -> bool {
        matches!(self, Self::Airborne { .. })
    }

    pub fn is_lowered(self) -> bool {
        self.posture() == Posture::Lowered
    }
}

/// Axis-aligned bounding box in game units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Strict overlap test: boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// The player-controlled runner.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Left edge. Never changes.
    pub x: f64,
    /// Top edge (y grows downward).
    pub y: f64,
    /// Vertical velocity in units/frame (negative = upward).
    pub velocity: f64,
    pub stance: Stance,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            x: ACTOR_X,
            y: GROUND_Y - ACTOR_STANDING_HEIGHT,
            velocity: 0.0,
            stance: Stance::Standing,
        }
    }
}

impl Actor {
    pub fn width(&self) -> f64 {
        ACTOR_WIDTH
    }

    pub fn height(&self) -> f64 {
        self.stance.posture().height()
    }

    /// Top edge when the actor's base sits on the ground.
    pub fn resting_y(&self) -> f64 {
        GROUND_Y - self.height()
    }

    pub fn is_airborne(&self) -> bool {
        self.stance.is_airborne()
    }

    pub fn is_lowered(&self) -> bool {
        self.stance.is_lowered()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Kinds of obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ground obstacle -- jump over it.
    Cactus,
    /// Low-flying obstacle at head height -- duck under it.
    Bird,
}

impl ObstacleKind {
    pub fn width(self) -> f64 {
        OBSTACLE_WIDTH
    }

    pub fn height(self) -> f64 {
        match self {
            Self::Cactus => CACTUS_HEIGHT,
            Self::Bird => BIRD_HEIGHT,
        }
    }

    /// Fixed top edge for this kind.
    pub fn y(self) -> f64 {
        match self {
            Self::Cactus => GROUND_Y - CACTUS_ELEVATION,
            Self::Bird => GROUND_Y - BIRD_ELEVATION,
        }
    }

    /// True if a lowered actor passes under this kind without a collision.
    pub fn avoided_by_ducking(self) -> bool {
        matches!(self, Self::Bird)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Cactus => "Cactus",
            Self::Bird => "Bird",
        }
    }
}

/// A single obstacle in the game world.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Left edge (decreases every frame).
    pub x: f64,
    /// Units per frame, sampled once at spawn.
    pub speed: f64,
    /// Whether this obstacle has already been credited to the score.
    pub passed: bool,
}

impl Obstacle {
    /// New obstacle entering at the right edge of the playfield.
    pub fn new(kind: ObstacleKind, speed: f64) -> Self {
        Self {
            kind,
            x: FIELD_WIDTH,
            speed,
            passed: false,
        }
    }

    /// Right edge.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.kind.width()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.kind.y(),
            width: self.kind.width(),
            height: self.kind.height(),
        }
    }
}

/// How wall-clock time maps onto simulation frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimingMode {
    /// One simulation frame per host frame; speed follows the redraw rate.
    PerFrame,
    /// One simulation frame per `step_ms` of elapsed time.
    FixedStep { step_ms: u64 },
}

impl Default for TimingMode {
    fn default() -> Self {
        Self::FixedStep {
            step_ms: REALTIME_FRAME_MS,
        }
    }
}

/// Record surfaced when a collision ends a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub highlight: bool,
}

/// Bounded log of notable run events, newest last.
#[derive(Debug, Clone, Default)]
pub struct RunLog {
    entries: VecDeque<LogEntry>,
}

impl RunLog {
    pub fn push(&mut self, message: String, highlight: bool) {
        if self.entries.len() >= RUN_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry { message, highlight });
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    // -- Actor --
    pub actor: Actor,

    // -- Obstacles, oldest first --
    pub obstacles: Vec<Obstacle>,

    // -- Scoring --
    pub score: u32,
    /// Best score this session. Never persisted.
    pub high_score: u32,
    /// Global speed in units/frame, clamped to [MIN_SPEED, MAX_SPEED].
    pub speed: f64,

    // -- Timing (milliseconds on the host's monotonic clock) --
    pub run_start_ms: u64,
    /// `None` until the first spawn, which then happens immediately.
    pub last_spawn_ms: Option<u64>,
    pub timing: TimingMode,
    /// Sub-step time accumulator for `TimingMode::FixedStep`.
    pub accumulated_time_ms: u64,
    pub frame_count: u64,

    /// Pending game-over notice. Simulation is paused while set.
    pub game_over: Option<GameOver>,
    /// Completed runs this session.
    pub runs_played: u32,
    pub log: RunLog,
}

impl RunnerGame {
    /// Create a fresh session whose first run starts at `now_ms`.
    pub fn new(timing: TimingMode, now_ms: u64) -> Self {
        let mut log = RunLog::default();
        log.push("Run 1 started".to_string(), false);
        Self {
            actor: Actor::default(),
            obstacles: Vec::new(),
            score: 0,
            high_score: 0,
            speed: INITIAL_SPEED,
            run_start_ms: now_ms,
            last_spawn_ms: None,
            timing,
            accumulated_time_ms: 0,
            frame_count: 0,
            game_over: None,
            runs_played: 0,
            log,
        }
    }

    /// Spawn a new obstacle at the right edge with a random kind and speed.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let kind = if rng.gen::<f64>() < BIRD_SPAWN_CHANCE {
            ObstacleKind::Bird
        } else {
            ObstacleKind::Cactus
        };
        let speed = self.speed * rng.gen_range(SPAWN_SPEED_MIN_FACTOR..SPAWN_SPEED_MAX_FACTOR);
        self.obstacles.push(Obstacle::new(kind, speed));
    }

    /// Whole seconds since the current run started.
    pub fn elapsed_secs(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.run_start_ms) / 1000
    }

    /// Sprite opacity: fades by 10% every 10 points, never below 20%.
    pub fn opacity(&self) -> f64 {
        let steps = (self.score / SCORE_PER_FADE_STEP) as f64;
        (1.0 - steps * OPACITY_STEP).max(MIN_OPACITY)
    }

    pub fn status_line(&self, now_ms: u64) -> String {
        format!(
            "Time: {}s | Score: {} | High Score: {} | Speed: {:.2}",
            self.elapsed_secs(now_ms),
            self.score,
            self.high_score,
            self.speed
        )
    }
}
