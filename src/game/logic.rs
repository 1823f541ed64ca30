//! Game logic for Flappy Bird: mode flow, physics, pipe lifecycle,
//! scoring and collision detection.

use super::types::*;
use crate::core::config::GameConfig;
use rand::Rng;
use tracing::{debug, info};

/// Advance the game by one tick of `dt` seconds.
///
/// `activate` is the level-triggered input: true for every tick the key is
/// down. Returns what happened during the tick, in order.
pub fn update<R: Rng + ?Sized>(
    game: &mut GameState,
    dt: f64,
    activate: bool,
    rng: &mut R,
) -> Vec<TickEvent> {
    let mut events = Vec::new();

    match game.mode {
        Mode::Start => {
            if activate {
                game.mode = Mode::Play;
                info!("run started");
                events.push(TickEvent::Started);
            }
        }
        Mode::Play => step_play(game, dt, activate, rng, &mut events),
        Mode::GameOver => {
            if activate {
                game.reset();
                game.mode = Mode::Play;
                info!(high_score = game.high_score, "run restarted");
                events.push(TickEvent::Restarted {
                    high_score: game.high_score,
                });
            }
        }
    }

    events
}

/// One physics tick in Play mode.
fn step_play<R: Rng + ?Sized>(
    game: &mut GameState,
    dt: f64,
    activate: bool,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    game.tick_count += 1;

    // Gravity, then flap override (not additive)
    game.bird.velocity += game.config.gravity * dt;
    if activate {
        game.bird.velocity = game.config.flap_velocity;
        events.push(TickEvent::Flapped);
    }
    game.bird.y += game.bird.velocity * dt;

    let target = target_tilt(&game.config, game.bird.velocity);
    let smoothing = game.config.tilt_smoothing;
    game.bird.angle = game.bird.angle * smoothing + target * (1.0 - smoothing);

    game.elapsed += dt;
    spawn_pipe_if_due(game, rng, events);

    let shift = game.config.pipe_speed * dt;
    for pipe in &mut game.pipes {
        pipe.x -= shift;
    }

    score_passed_pipes(game, events);
    prune_offscreen_pipe(game, events);

    check_pipe_collisions(game, events);
    check_bounds(game, events);
}

/// Tilt the bird is easing toward: proportional to velocity, clamped.
pub fn target_tilt(config: &GameConfig, velocity: f64) -> f64 {
    (velocity * config.tilt_factor).clamp(config.tilt_min, config.tilt_max)
}

fn spawn_pipe_if_due<R: Rng + ?Sized>(
    game: &mut GameState,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    if game.elapsed - game.last_spawn <= game.config.spawn_interval {
        return;
    }

    let (min, max) = game.config.gap_top_range();
    let gap_top = if max > min {
        rng.gen_range(min..max)
    } else {
        min
    };

    game.push_pipe(gap_top);
    game.last_spawn = game.elapsed;
    debug!(gap_top, pipes = game.pipes.len(), "pipe spawned");
    events.push(TickEvent::PipeSpawned { gap_top });
}

/// Score every unscored pipe whose left edge is strictly behind the bird.
fn score_passed_pipes(game: &mut GameState, events: &mut Vec<TickEvent>) {
    let bird_x = game.bird.x;
    let mut passed = 0;
    for pipe in &mut game.pipes {
        if !pipe.scored && pipe.x < bird_x {
            pipe.scored = true;
            passed += 1;
        }
    }

    for _ in 0..passed {
        game.add_point();
        debug!(score = game.score, "pipe passed");
        events.push(TickEvent::Scored { score: game.score });
    }
}

/// Drop the oldest pipe once its right edge is past the left screen edge.
/// At most one per tick: pipes arrive far slower than one per tick.
fn prune_offscreen_pipe(game: &mut GameState, events: &mut Vec<TickEvent>) {
    let width = game.config.pipe_width;
    if game.pipes.front().is_some_and(|p| p.x + width < 0.0) {
        game.pipes.pop_front();
        events.push(TickEvent::PipePruned);
    }
}

/// True if the bird's bounding square overlaps the solid part of `pipe`.
pub fn collides_with_pipe(config: &GameConfig, bird: &Bird, pipe: &Pipe) -> bool {
    let half = config.bird_size / 2.0;

    let overlaps_column = bird.x + half > pipe.x && bird.x - half < pipe.x + config.pipe_width;
    if !overlaps_column {
        return false;
    }

    bird.y - half < pipe.gap_top || bird.y + half > pipe.gap_top + config.pipe_gap
}

fn check_pipe_collisions(game: &mut GameState, events: &mut Vec<TickEvent>) {
    for pipe in &game.pipes {
        if collides_with_pipe(&game.config, &game.bird, pipe) {
            crash(game.mode == Mode::Play, CrashCause::Pipe, events);
            game.mode = Mode::GameOver;
        }
    }
}

fn check_bounds(game: &mut GameState, events: &mut Vec<TickEvent>) {
    let half = game.config.bird_size / 2.0;
    let cause = if game.bird.y > game.config.screen_height - half {
        CrashCause::Floor
    } else if game.bird.y < half {
        CrashCause::Ceiling
    } else {
        return;
    };

    crash(game.mode == Mode::Play, cause, events);
    game.mode = Mode::GameOver;
}

/// Record a crash. Only the first hit of a tick is reported.
fn crash(first: bool, cause: CrashCause, events: &mut Vec<TickEvent>) {
    if first {
        info!(?cause, "bird crashed");
        events.push(TickEvent::Crashed { cause });
    }
}
