// Window / playfield (logical units)
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;
pub const WINDOW_TITLE: &str = "Flappy Bird";

// Bird
pub const BIRD_SIZE: f64 = 40.0;
pub const GRAVITY: f64 = 600.0; // units/s²
pub const FLAP_VELOCITY: f64 = -300.0; // units/s, overrides current velocity

// Tilt: target = velocity * TILT_FACTOR, low-pass filtered toward target
pub const TILT_FACTOR: f64 = 0.15;
pub const TILT_MIN_DEGREES: f64 = -90.0;
pub const TILT_MAX_DEGREES: f64 = 30.0;
pub const TILT_SMOOTHING: f64 = 0.9;

// Pipes
pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPEED: f64 = 200.0; // units/s
pub const PIPE_SPAWN_INTERVAL_SECONDS: f64 = 3.0;
pub const GAP_TOP_MIN: f64 = 100.0;
// Gap top is drawn from [GAP_TOP_MIN, SCREEN_HEIGHT - GAP_BOTTOM_MARGIN - PIPE_GAP)
pub const GAP_BOTTOM_MARGIN: f64 = 200.0;

// Tick and timing
pub const TICKS_PER_SECOND: u32 = 60;
pub const TICK_SECONDS: f64 = 1.0 / TICKS_PER_SECOND as f64;
pub const MAX_FRAME_MS: u64 = 100; // clamp after a stall so physics doesn't explode

// Input
pub const INPUT_HOLD_TICKS: u32 = 2; // activate hold without key-release support
