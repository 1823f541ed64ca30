//! Tunable game parameters.
//!
//! `GameConfig::default()` reproduces the classic 800×600 tuning from
//! [`crate::core::constants`]. Tests and the simulator build variants with
//! struct-update syntax.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Physics and layout parameters for one game instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,

    pub bird_size: f64,
    /// Downward acceleration in units/s².
    pub gravity: f64,
    /// Velocity set (not added) while activate is held. Negative = upward.
    pub flap_velocity: f64,

    pub tilt_factor: f64,
    pub tilt_min: f64,
    pub tilt_max: f64,
    /// Weight of the previous angle in the low-pass filter.
    pub tilt_smoothing: f64,

    pub pipe_width: f64,
    pub pipe_gap: f64,
    /// Leftward pipe speed in units/s.
    pub pipe_speed: f64,
    pub spawn_interval: f64,
    pub gap_top_min: f64,
    pub gap_bottom_margin: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            bird_size: BIRD_SIZE,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,

            tilt_factor: TILT_FACTOR,
            tilt_min: TILT_MIN_DEGREES,
            tilt_max: TILT_MAX_DEGREES,
            tilt_smoothing: TILT_SMOOTHING,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            spawn_interval: PIPE_SPAWN_INTERVAL_SECONDS,
            gap_top_min: GAP_TOP_MIN,
            gap_bottom_margin: GAP_BOTTOM_MARGIN,
        }
    }
}

impl GameConfig {
    /// Fixed horizontal position of the bird.
    pub fn bird_x(&self) -> f64 {
        self.screen_width / 2.0
    }

    /// Vertical position the bird is reset to.
    pub fn bird_start_y(&self) -> f64 {
        self.screen_height / 2.0
    }

    /// Half-open range `[min, max)` a new pipe's gap top is drawn from.
    ///
    /// Collapses to `min..min` when the playfield is too short for the margins.
    pub fn gap_top_range(&self) -> (f64, f64) {
        let min = self.gap_top_min;
        let max = self.screen_height - self.gap_bottom_margin - self.pipe_gap;
        (min, max.max(min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 800.0);
        assert_eq!(config.screen_height, 600.0);
        assert_eq!(config.gravity, 600.0);
        assert_eq!(config.flap_velocity, -300.0);
        assert_eq!(config.pipe_speed, 200.0);
        assert_eq!(config.spawn_interval, 3.0);
    }

    #[test]
    fn test_bird_start_position() {
        let config = GameConfig::default();
        assert_eq!(config.bird_x(), 400.0);
        assert_eq!(config.bird_start_y(), 300.0);
    }

    #[test]
    fn test_gap_top_range() {
        let (min, max) = GameConfig::default().gap_top_range();
        assert_eq!(min, 100.0);
        assert_eq!(max, 250.0);
    }

    #[test]
    fn test_gap_top_range_collapses_on_short_screen() {
        let config = GameConfig {
            screen_height: 300.0,
            ..Default::default()
        };
        let (min, max) = config.gap_top_range();
        assert_eq!(min, max);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig {
            pipe_speed: 350.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
