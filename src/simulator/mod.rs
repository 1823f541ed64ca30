//! Headless simulator for balance and regression checks.
//!
//! Plays many runs of the real game logic with a scripted autopilot and a
//! seeded RNG, then aggregates:
//! - Scores and survival time
//! - Flap counts
//! - What ended each run
//!
//! The simulation clock only advances by the fixed tick, so a seed fully
//! determines a report.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
