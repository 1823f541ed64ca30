//! Constants, configuration and timing shared by the game and its hosts.

pub mod config;
pub mod constants;
pub mod timing;

pub use config::GameConfig;
pub use constants::*;
pub use timing::FixedStep;
