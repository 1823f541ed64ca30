//! Simulation configuration.

use super::autopilot::Autopilot;
use crate::core::config::GameConfig;
use crate::core::constants::TICKS_PER_SECOND;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum ticks per run before timeout
    pub max_ticks_per_run: u64,

    /// Game tuning every run is played with
    pub game: GameConfig,

    /// Scripted player
    pub autopilot: Autopilot,

    /// Output verbosity (0 = report only, 1 = header and report, 2 = also each run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            // Five minutes of play
            max_ticks_per_run: 5 * 60 * TICKS_PER_SECOND as u64,
            game: GameConfig::default(),
            autopilot: Autopilot::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible config for smoke testing.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_ticks_per_run: 60 * TICKS_PER_SECOND as u64,
            ..Default::default()
        }
    }
}
