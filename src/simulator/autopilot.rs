//! Scripted player used by the simulator.
//!
//! Aims for a height a little above the bottom of the next gap and flaps
//! whenever the bird is falling below it. One flap rises roughly 75 units
//! before gravity wins, so the bird bobs inside the gap.

use crate::game::{GameState, Mode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Clearance kept between the bird's bottom edge and the gap bottom.
    pub margin: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { margin: 15.0 }
    }
}

impl Autopilot {
    /// Height the bird should not sink below.
    ///
    /// Targets the first pipe the bird has not fully cleared, or mid-screen
    /// when there is none.
    pub fn target_y(&self, game: &GameState) -> f64 {
        let config = &game.config;
        let half = config.bird_size / 2.0;
        let bird_left = game.bird.x - half;

        game.pipes
            .iter()
            .find(|pipe| pipe.x + config.pipe_width > bird_left)
            .map(|pipe| pipe.gap_top + config.pipe_gap - half - self.margin)
            .unwrap_or(config.screen_height / 2.0)
    }

    /// Whether activate should be held this tick.
    pub fn wants_activate(&self, game: &GameState) -> bool {
        match game.mode {
            Mode::Start => true,
            Mode::Play => game.bird.velocity > 0.0 && game.bird.y > self.target_y(game),
            Mode::GameOver => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Pipe;

    #[test]
    fn test_starts_the_game() {
        let game = GameState::new();
        assert!(Autopilot::default().wants_activate(&game));
    }

    #[test]
    fn test_targets_mid_screen_without_pipes() {
        let mut game = GameState::new();
        game.mode = Mode::Play;
        assert_eq!(Autopilot::default().target_y(&game), 300.0);
    }

    #[test]
    fn test_targets_next_uncleared_pipe() {
        let mut game = GameState::new();
        game.mode = Mode::Play;
        // Already behind the bird
        game.pipes.push_back(Pipe::new(250.0, 100.0));
        // Still overlapping the bird's column
        game.pipes.push_back(Pipe::new(320.0, 200.0));
        game.pipes.push_back(Pipe::new(700.0, 150.0));

        // 200 + 150 - 20 - 15
        assert_eq!(Autopilot::default().target_y(&game), 315.0);
    }

    #[test]
    fn test_flaps_only_when_falling_below_target() {
        let autopilot = Autopilot::default();
        let mut game = GameState::new();
        game.mode = Mode::Play;

        game.bird.y = 320.0;
        game.bird.velocity = 50.0;
        assert!(autopilot.wants_activate(&game));

        game.bird.velocity = -50.0;
        assert!(!autopilot.wants_activate(&game));

        game.bird.y = 280.0;
        game.bird.velocity = 50.0;
        assert!(!autopilot.wants_activate(&game));
    }

    #[test]
    fn test_never_restarts() {
        let mut game = GameState::new();
        game.mode = Mode::GameOver;
        assert!(!Autopilot::default().wants_activate(&game));
    }
}
