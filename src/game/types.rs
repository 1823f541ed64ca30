//! Flappy Bird data structures.

use crate::core::config::GameConfig;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Phase of the game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Waiting for the first activate press. Physics paused.
    Start,
    Play,
    /// Bird crashed. Activate restarts.
    GameOver,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Play => "play",
            Self::GameOver => "gameover",
        }
    }
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrashCause {
    Pipe,
    Floor,
    Ceiling,
}

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// Start → Play.
    Started,
    /// GameOver → Play. Carries the high score that survived the reset.
    Restarted { high_score: u32 },
    /// Velocity was overridden by the flap impulse.
    Flapped,
    PipeSpawned { gap_top: f64 },
    Scored { score: u32 },
    PipePruned,
    Crashed { cause: CrashCause },
}

/// The player-controlled bird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Horizontal center. Constant for the lifetime of a run.
    pub x: f64,
    /// Vertical center (positive = downward).
    pub y: f64,
    /// Vertical velocity in units/s (positive = downward).
    pub velocity: f64,
    /// Smoothed visual tilt in degrees.
    pub angle: f64,
}

/// A single pipe obstacle (top + bottom column with a gap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Top of the gap. Fixed at spawn.
    pub gap_top: f64,
    /// Whether the bird has passed this pipe.
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f64, gap_top: f64) -> Self {
        Self {
            x,
            gap_top,
            scored: false,
        }
    }
}

/// Main game state. Owned by the host and passed by reference to
/// [`crate::game::logic::update`].
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub mode: Mode,

    pub bird: Bird,
    /// Oldest pipe at the front.
    pub pipes: VecDeque<Pipe>,

    pub score: u32,
    /// Best score this process. Survives resets.
    pub high_score: u32,

    /// Simulation seconds spent in Play. Drives the spawn cadence.
    pub elapsed: f64,
    /// Value of `elapsed` when the last pipe spawned (or the run began).
    pub last_spawn: f64,
    /// Play ticks in the current run.
    pub tick_count: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state in `Start` mode with the default tuning.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut state = Self {
            config,
            mode: Mode::Start,
            bird: Bird {
                x: config.bird_x(),
                y: config.bird_start_y(),
                velocity: 0.0,
                angle: 0.0,
            },
            pipes: VecDeque::new(),
            score: 0,
            high_score: 0,
            elapsed: 0.0,
            last_spawn: 0.0,
            tick_count: 0,
        };
        state.reset();
        state
    }

    /// Clear the run: bird back to center at rest, no pipes, score zero,
    /// spawn timer restamped. Mode and high score are left alone.
    pub fn reset(&mut self) {
        self.bird = Bird {
            x: self.config.bird_x(),
            y: self.config.bird_start_y(),
            velocity: 0.0,
            angle: 0.0,
        };
        self.pipes.clear();
        self.score = 0;
        self.last_spawn = self.elapsed;
        self.tick_count = 0;
    }

    /// Append a pipe at the right screen edge.
    pub fn push_pipe(&mut self, gap_top: f64) {
        self.pipes
            .push_back(Pipe::new(self.config.screen_width, gap_top));
    }

    /// Award one point, raising the high score if it is beaten.
    pub fn add_point(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = GameState::new();
        assert_eq!(game.mode, Mode::Start);
        assert_eq!(game.bird.x, 400.0);
        assert_eq!(game.bird.y, 300.0);
        assert_eq!(game.bird.velocity, 0.0);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 0);
        assert!(game.pipes.is_empty());
    }

    #[test]
    fn test_reset_keeps_high_score_and_mode() {
        let mut game = GameState::new();
        game.mode = Mode::GameOver;
        game.add_point();
        game.add_point();
        game.bird.y = 12.0;
        game.bird.velocity = 250.0;
        game.bird.angle = 30.0;
        game.push_pipe(150.0);

        game.reset();

        assert_eq!(game.mode, Mode::GameOver);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 2);
        assert_eq!(game.bird.y, 300.0);
        assert_eq!(game.bird.velocity, 0.0);
        assert_eq!(game.bird.angle, 0.0);
        assert!(game.pipes.is_empty());
    }

    #[test]
    fn test_reset_restamps_spawn_timer() {
        let mut game = GameState::new();
        game.elapsed = 42.5;
        game.last_spawn = 10.0;
        game.reset();
        assert_eq!(game.last_spawn, 42.5);
    }

    #[test]
    fn test_add_point_only_raises_high_score() {
        let mut game = GameState::new();
        game.high_score = 5;
        game.add_point();
        assert_eq!(game.score, 1);
        assert_eq!(game.high_score, 5);
    }

    #[test]
    fn test_push_pipe_at_right_edge() {
        let mut game = GameState::new();
        game.push_pipe(180.0);
        game.push_pipe(120.0);
        assert_eq!(game.pipes.len(), 2);
        assert_eq!(game.pipes[0], Pipe::new(800.0, 180.0));
        assert_eq!(game.pipes[1].gap_top, 120.0);
        assert!(!game.pipes[1].scored);
    }
}
