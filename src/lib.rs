//! Flappy Bird - fixed-step game core with a terminal host.
//!
//! This module exposes the game logic for testing and external use.

pub mod core;
pub mod game;
pub mod input;
pub mod simulator;
pub mod ui;

pub use crate::core::{GameConfig, TICK_SECONDS};
pub use crate::game::{update, GameState, Mode, Scene, TickEvent};
