//! Keyboard handling for the game screen.
//!
//! The core wants a level-triggered "activate" signal: true on every tick the
//! key is down. Terminals only report key releases when the kitty keyboard
//! protocol is enabled, so two models are supported:
//!
//! - With release events, activate is held from press until release. A tap
//!   that presses and releases between two ticks is still seen by one tick.
//! - Without them, each press (or terminal key-repeat) holds activate for
//!   `INPUT_HOLD_TICKS` ticks.

use crate::core::constants::INPUT_HOLD_TICKS;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key means to the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Space, Up or Enter.
    Activate,
    /// Esc, q or Ctrl-C.
    Quit,
    Other,
}

/// Map a key to its game action, ignoring press/release.
pub fn map_key(key: &KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => KeyAction::Activate,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::Other,
    }
}

/// Tracks the activate key across ticks.
#[derive(Debug, Clone)]
pub struct ActivateInput {
    /// Terminal reports `KeyEventKind::Release`.
    release_events: bool,
    /// Key is physically down (release-event mode only).
    held: bool,
    /// Ticks that still see activate regardless of `held`.
    hold_ticks: u32,
}

impl ActivateInput {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            held: false,
            hold_ticks: 0,
        }
    }

    /// Feed a key event. Returns the key's action so the caller can handle quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        let action = map_key(&key);
        if action != KeyAction::Activate {
            return action;
        }

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if self.release_events {
                    self.held = true;
                    self.hold_ticks = self.hold_ticks.max(1);
                } else {
                    self.hold_ticks = INPUT_HOLD_TICKS;
                }
            }
            KeyEventKind::Release => self.held = false,
        }
        action
    }

    /// Whether the current tick sees activate.
    pub fn pressed(&self) -> bool {
        self.held || self.hold_ticks > 0
    }

    /// Call once after each tick has consumed `pressed()`.
    pub fn end_tick(&mut self) {
        self.hold_ticks = self.hold_ticks.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_map_key() {
        assert_eq!(
            map_key(&key(KeyCode::Char(' '), KeyEventKind::Press)),
            KeyAction::Activate
        );
        assert_eq!(
            map_key(&key(KeyCode::Up, KeyEventKind::Press)),
            KeyAction::Activate
        );
        assert_eq!(
            map_key(&key(KeyCode::Esc, KeyEventKind::Press)),
            KeyAction::Quit
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('x'), KeyEventKind::Press)),
            KeyAction::Other
        );

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_held_until_release() {
        let mut input = ActivateInput::new(true);
        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press));

        for _ in 0..10 {
            assert!(input.pressed());
            input.end_tick();
        }

        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Release));
        assert!(!input.pressed());
    }

    #[test]
    fn test_quick_tap_seen_by_one_tick() {
        let mut input = ActivateInput::new(true);
        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press));
        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Release));

        assert!(input.pressed());
        input.end_tick();
        assert!(!input.pressed());
    }

    #[test]
    fn test_press_holds_without_release_events() {
        let mut input = ActivateInput::new(false);
        input.handle_key(key(KeyCode::Enter, KeyEventKind::Press));

        for _ in 0..INPUT_HOLD_TICKS {
            assert!(input.pressed());
            input.end_tick();
        }
        assert!(!input.pressed());
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut input = ActivateInput::new(false);
        input.handle_key(key(KeyCode::Up, KeyEventKind::Press));
        input.end_tick();
        input.handle_key(key(KeyCode::Up, KeyEventKind::Repeat));
        assert!(input.pressed());
    }

    #[test]
    fn test_other_keys_do_not_activate() {
        let mut input = ActivateInput::new(false);
        let action = input.handle_key(key(KeyCode::Char('a'), KeyEventKind::Press));
        assert_eq!(action, KeyAction::Other);
        assert!(!input.pressed());
    }
}
