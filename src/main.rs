use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen, SetTitle,
};
use crossterm::ExecutableCommand;
use flappy::core::{FixedStep, TICK_SECONDS, WINDOW_TITLE};
use flappy::game::{update, GameState};
use flappy::input::{ActivateInput, KeyAction};
use flappy::ui::draw_ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(SetTitle(WINDOW_TITLE))?;

    // Key release events make the flap key truly level-triggered
    let release_events = matches!(supports_keyboard_enhancement(), Ok(true));
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, release_events);

    // Cleanup terminal, even when the loop failed
    let restored = restore_terminal(&mut terminal, release_events);

    let high_score = result?;
    restored?;
    println!("Best score this session: {}", high_score);
    Ok(())
}

/// Undo every terminal mode change. All steps run; the first error wins.
fn restore_terminal(terminal: &mut Term, release_events: bool) -> io::Result<()> {
    let pop_flags = if release_events {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)
            .map(|_| ())
    } else {
        Ok(())
    };
    let raw_mode = disable_raw_mode();
    let screen = terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map(|_| ());
    let cursor = terminal.show_cursor();

    first_error([pop_flags, raw_mode, screen, cursor])
}

fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

/// Main loop. Returns the session's high score when the player quits.
fn run(terminal: &mut Term, release_events: bool) -> io::Result<u32> {
    let mut game = GameState::new();
    let mut input = ActivateInput::new(release_events);
    let mut step = FixedStep::default();
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();
    let mut redraw = true;

    loop {
        if redraw {
            let scene = game.scene();
            terminal.draw(|f| draw_ui(f, &scene))?;
            redraw = false;
        }

        // Handle input until the next tick is due
        if event::poll(step.until_next())? {
            loop {
                match event::read()? {
                    Event::Key(key) => {
                        let action = input.handle_key(key);
                        if action == KeyAction::Quit && key.kind != KeyEventKind::Release {
                            return Ok(game.high_score);
                        }
                    }
                    Event::Resize(_, _) => redraw = true,
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        let due = step.advance(now - last_frame);
        last_frame = now;

        for _ in 0..due {
            update(&mut game, TICK_SECONDS, input.pressed(), &mut rng);
            input.end_tick();
        }
        if due > 0 {
            redraw = true;
        }
    }
}
