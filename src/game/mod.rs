//! Flappy Bird game core.
//!
//! The player keeps a bird airborne against gravity and threads it through
//! scrolling pipe gaps. [`logic::update`] advances one fixed tick;
//! [`GameState::scene`] produces the snapshot the renderer draws.

pub mod logic;
pub mod scene;
pub mod types;

pub use logic::*;
pub use scene::*;
pub use types::*;
