//! Main simulation runner. Plays the real game logic headless, one fixed
//! tick at a time, with the autopilot on the controls.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::constants::TICK_SECONDS;
use crate::game::{update, GameState, TickEvent};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        debug!(run = run_idx, score = stats.score, ticks = stats.ticks, "run finished");

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Ticks {}, Crash {:?}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.ticks,
                stats.crash
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one run from the start screen until the first crash or timeout.
pub fn simulate_single_run<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut game = GameState::with_config(config.game);
    let mut stats = RunStats::default();

    while stats.ticks < config.max_ticks_per_run {
        let activate = config.autopilot.wants_activate(&game);
        let events = update(&mut game, TICK_SECONDS, activate, rng);
        stats.ticks += 1;

        for event in events {
            match event {
                TickEvent::Flapped => stats.flaps += 1,
                TickEvent::PipeSpawned { .. } => stats.pipes_spawned += 1,
                TickEvent::Crashed { cause } => stats.crash = Some(cause),
                _ => {}
            }
        }

        if stats.crash.is_some() {
            break;
        }
    }

    stats.score = game.score;
    stats.play_ticks = game.tick_count;
    stats.final_scene = Some(game.scene());
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::game::{CrashCause, Mode};

    #[test]
    fn test_gap_too_small_crashes_into_pipe() {
        // Narrower than the bird: the first pipe cannot be passed
        let config = SimConfig {
            game: GameConfig {
                pipe_gap: 35.0,
                ..Default::default()
            },
            ..SimConfig::quick(1)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = simulate_single_run(&config, &mut rng);
        assert_eq!(stats.crash, Some(CrashCause::Pipe));
        assert_eq!(stats.score, 0);
        assert_eq!(stats.pipes_spawned, 1);
        assert!(stats.flaps > 0);

        let scene = stats.final_scene.expect("final frame recorded");
        assert_eq!(scene.mode, Mode::GameOver);
        assert_eq!(scene.pipes.len(), 1);
        assert_eq!(scene.pipes[0].gap_height, 35.0);
    }

    #[test]
    fn test_run_stops_at_max_ticks() {
        let config = SimConfig {
            max_ticks_per_run: 30,
            ..SimConfig::quick(2)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let stats = simulate_single_run(&config, &mut rng);
        assert_eq!(stats.ticks, 30);
        // The first tick only leaves the start screen
        assert_eq!(stats.play_ticks, 29);
        assert!(stats.crash.is_none());
    }

    #[test]
    fn test_simulation_run_count() {
        let config = SimConfig {
            num_runs: 3,
            max_ticks_per_run: 120,
            ..SimConfig::quick(3)
        };
        let report = run_simulation(&config);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.run_stats.len(), 3);
    }
}
