//! Read-only render snapshot of a [`GameState`].

use super::types::{GameState, Mode};
use serde::Serialize;

/// Bird as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirdView {
    pub x: f64,
    pub y: f64,
    /// Tilt in degrees, pivoting about (x, y).
    pub angle: f64,
    pub size: f64,
}

/// One pipe column: solid from 0 to `gap_top` and from `gap_top + gap_height`
/// to the bottom of the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeView {
    pub x: f64,
    pub gap_top: f64,
    pub gap_height: f64,
    pub width: f64,
}

impl PipeView {
    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap_height
    }

    /// True if logical point (x, y) is inside solid pipe.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && (y < self.gap_top || y >= self.gap_bottom())
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub bird: BirdView,
    /// Oldest first.
    pub pipes: Vec<PipeView>,
    pub mode: Mode,
    pub score: u32,
    pub high_score: u32,
}

impl GameState {
    /// Snapshot the current state for rendering.
    pub fn scene(&self) -> Scene {
        let config = &self.config;
        Scene {
            width: config.screen_width,
            height: config.screen_height,
            bird: BirdView {
                x: self.bird.x,
                y: self.bird.y,
                angle: self.bird.angle,
                size: config.bird_size,
            },
            pipes: self
                .pipes
                .iter()
                .map(|pipe| PipeView {
                    x: pipe.x,
                    gap_top: pipe.gap_top,
                    gap_height: config.pipe_gap,
                    width: config.pipe_width,
                })
                .collect(),
            mode: self.mode,
            score: self.score,
            high_score: self.high_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_mirrors_state() {
        let mut game = GameState::new();
        game.mode = Mode::Play;
        game.bird.angle = -12.5;
        game.push_pipe(200.0);
        game.push_pipe(120.0);
        game.pipes[0].x = 350.0;
        game.score = 3;
        game.high_score = 7;

        let scene = game.scene();

        assert_eq!(scene.width, 800.0);
        assert_eq!(scene.height, 600.0);
        assert_eq!(scene.mode, Mode::Play);
        assert_eq!(scene.score, 3);
        assert_eq!(scene.high_score, 7);
        assert_eq!(scene.bird.x, 400.0);
        assert_eq!(scene.bird.angle, -12.5);
        assert_eq!(scene.bird.size, 40.0);
        assert_eq!(scene.pipes.len(), 2);
        assert_eq!(scene.pipes[0].x, 350.0);
        assert_eq!(scene.pipes[0].gap_height, 150.0);
        assert_eq!(scene.pipes[1].gap_top, 120.0);
    }

    #[test]
    fn test_pipe_view_contains() {
        let pipe = PipeView {
            x: 100.0,
            gap_top: 200.0,
            gap_height: 150.0,
            width: 80.0,
        };
        assert!(pipe.contains(120.0, 50.0));
        assert!(pipe.contains(120.0, 400.0));
        assert!(!pipe.contains(120.0, 275.0));
        assert!(!pipe.contains(90.0, 50.0));
        assert!(!pipe.contains(180.0, 50.0));
    }

    #[test]
    fn test_scene_serializes_mode() {
        let scene = GameState::new().scene();
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["mode"], "Start");
        assert_eq!(json["bird"]["y"], 300.0);
    }
}
