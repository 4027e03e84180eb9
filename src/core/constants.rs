// Playfield geometry (game units, y grows downward)
pub const FIELD_WIDTH: f64 = 600.0;
pub const FIELD_HEIGHT: f64 = 150.0;
pub const GROUND_HEIGHT: f64 = 20.0;
pub const GROUND_Y: f64 = FIELD_HEIGHT - GROUND_HEIGHT;

// Actor
pub const ACTOR_X: f64 = 50.0;
pub const ACTOR_WIDTH: f64 = 40.0;
pub const ACTOR_STANDING_HEIGHT: f64 = 40.0;
pub const ACTOR_LOWERED_HEIGHT: f64 = 20.0;
pub const JUMP_VELOCITY: f64 = -10.0;
pub const GRAVITY: f64 = 0.5;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 24.0;
pub const CACTUS_HEIGHT: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const CACTUS_ELEVATION: f64 = 40.0; // top edge sits this far above the ground
pub const BIRD_ELEVATION: f64 = 60.0;
pub const BIRD_SPAWN_CHANCE: f64 = 0.3;
pub const MIN_SPAWN_INTERVAL_MS: u64 = 1500;
pub const SPAWN_SPEED_MIN_FACTOR: f64 = 0.8;
pub const SPAWN_SPEED_MAX_FACTOR: f64 = 1.2;

// Speed
pub const INITIAL_SPEED: f64 = 5.0;
pub const MIN_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 20.0;
pub const PASS_SPEED_INCREMENT: f64 = 0.1;
pub const MANUAL_SPEED_STEP: f64 = 0.5;

// Rendering
pub const SPRITE_PIXEL_SIZE: f64 = 4.0;
pub const MIN_OPACITY: f64 = 0.2;
pub const OPACITY_STEP: f64 = 0.1;
pub const SCORE_PER_FADE_STEP: u32 = 10;

// Frame timing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_DT_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 8;

// Event log
pub const RUN_LOG_CAPACITY: usize = 8;
