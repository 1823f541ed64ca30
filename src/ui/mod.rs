pub mod flappy_scene;
pub mod game_common;

use crate::game::Scene;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the game screen is drawn in.
pub const MIN_WIDTH: u16 = 48;
pub const MIN_HEIGHT: u16 = 12;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, scene: &Scene) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let message = Paragraph::new(format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        let y = size.height / 2;
        frame.render_widget(message, Rect::new(0, y, size.width, 1.min(size.height)));
        return;
    }

    flappy_scene::render_flappy_scene(frame, size, scene);
}
