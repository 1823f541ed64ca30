//! UI rendering for the Flappy Bird scene.
//!
//! The 800×600 logical field is scaled onto whatever cells the play area has.
//! Each terminal cell draws two vertical samples with a half-block (`▀`):
//! the top sample as foreground, the bottom one as background.

use crate::game::{BirdView, Mode, Scene};
use crate::ui::game_common::{
    create_game_layout, render_center_prompt, render_game_over_banner, render_info_panel_frame,
    render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(135, 206, 235);
const PIPE: Color = Color::Rgb(0, 200, 0);
const BIRD: Color = Color::Rgb(255, 255, 0);

const CONTROLS: &[(&str, &str)] = &[("[Space/Up/Enter]", "Flap"), ("[Esc/q]", "Quit")];

/// What occupies a point of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Sky,
    Pipe,
    Bird,
}

impl Sample {
    fn color(self) -> Color {
        match self {
            Self::Sky => SKY,
            Self::Pipe => PIPE,
            Self::Bird => BIRD,
        }
    }
}

/// True if logical point (x, y) falls inside the bird's square after it is
/// rotated by its tilt about its center.
fn bird_contains(bird: &BirdView, x: f64, y: f64) -> bool {
    let (sin, cos) = (-bird.angle.to_radians()).sin_cos();
    let dx = x - bird.x;
    let dy = y - bird.y;
    let local_x = dx * cos - dy * sin;
    let local_y = dx * sin + dy * cos;
    let half = bird.size / 2.0;
    local_x.abs() <= half && local_y.abs() <= half
}

/// Classify a logical point. The bird draws over pipes.
pub fn sample(scene: &Scene, x: f64, y: f64) -> Sample {
    if bird_contains(&scene.bird, x, y) {
        Sample::Bird
    } else if scene.pipes.iter().any(|pipe| pipe.contains(x, y)) {
        Sample::Pipe
    } else {
        Sample::Sky
    }
}

/// Render the full game screen for a scene.
pub fn render_flappy_scene(frame: &mut Frame, area: Rect, scene: &Scene) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 6, 22);

    render_play_area(frame, layout.content, scene);
    render_overlay(frame, layout.content, scene);
    render_status_bar_content(frame, layout.status_bar, scene);
    render_info_panel(frame, layout.info_panel, scene);
}

/// Render the playfield with bird and pipes.
fn render_play_area(frame: &mut Frame, area: Rect, scene: &Scene) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let x_scale = scene.width / width as f64;
    // Two samples per row
    let y_scale = scene.height / (height * 2) as f64;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let top_y = (row * 2) as f64 * y_scale + y_scale / 2.0;
        let bottom_y = top_y + y_scale;

        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let x = (col as f64 + 0.5) * x_scale;
                let top = sample(scene, x, top_y);
                let bottom = sample(scene, x, bottom_y);
                Span::styled(
                    "▀",
                    Style::default().fg(top.color()).bg(bottom.color()),
                )
            })
            .collect();

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Mode-dependent text drawn over the playfield.
fn render_overlay(frame: &mut Frame, area: Rect, scene: &Scene) {
    match scene.mode {
        Mode::Start => {
            render_center_prompt(frame, area, "PRESS SPACE TO START", Color::Yellow);
        }
        Mode::Play => {
            let score = Paragraph::new(Span::styled(
                format!(" Score: {} ", scene.score),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(score, Rect { height: 1, ..area });
        }
        Mode::GameOver => {
            render_game_over_banner(
                frame,
                area,
                "GAME OVER",
                &format!("Score: {}  High Score: {}", scene.score, scene.high_score),
                "PRESS SPACE TO RESTART",
            );
        }
    }
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, scene: &Scene) {
    let (text, color) = match scene.mode {
        Mode::Start => ("Press Space to start!".to_string(), Color::Yellow),
        Mode::Play => (format!("Score: {}", scene.score), Color::Green),
        Mode::GameOver => (
            format!("Crashed with {} points", scene.score),
            Color::Red,
        ),
    };
    render_status_bar(frame, area, &text, color, CONTROLS);
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, scene: &Scene) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", scene.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", label),
            Span::styled(
                format!("{}", scene.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Mode: ", label),
            Span::styled(scene.mode.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                format!("{}", scene.pipes.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Tilt: ", label),
            Span::styled(
                format!("{:+.0}°", scene.bird.angle),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
