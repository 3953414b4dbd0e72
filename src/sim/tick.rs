//! Fixed timestep simulation tick
//!
//! Advances the planes by exactly one step: move, clamp, collide.

use std::time::Duration;

use glam::Vec2;

use super::collision::CollisionPolicy;
use super::motion::{apply_velocity, keep_on_screen};
use super::state::GameState;
use crate::consts::*;

/// Per-run simulation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub collision: CollisionPolicy,
    /// Whole-millisecond step length every tick is expected to have
    pub expected_step_ms: u128,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            collision: CollisionPolicy::Distance,
            expected_step_ms: EXPECTED_STEP_MS,
        }
    }
}

/// What a tick asks of the outside world
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Exit was requested; the window should close
    pub close_window: bool,
    /// The planes overlapped this tick
    pub collided: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, config: &SimConfig, dt: Duration) -> TickReport {
    let mut report = TickReport::default();

    if dt.as_millis() != config.expected_step_ms {
        log::warn!(
            "time warp: step took {} ms, expected {} ms",
            dt.as_millis(),
            config.expected_step_ms
        );
    }

    if state.exit_requested {
        report.close_window = true;
    }

    state.time_ticks += 1;

    apply_velocity(&mut state.big);
    apply_velocity(&mut state.small);

    let bounds = state.bounds;
    keep_on_screen(&mut state.small.pos, bounds);
    keep_on_screen(&mut state.big.pos, bounds);

    if config.collision.collides(&state.big, &state.small) {
        report.collided = true;
        if state.big.vel != Vec2::ZERO || state.small.vel != Vec2::ZERO {
            log::info!(
                "Planes collided at tick {} ({:.1}, {:.1}) / ({:.1}, {:.1})",
                state.time_ticks,
                state.big.pos.x,
                state.big.pos.y,
                state.small.pos.x,
                state.small.pos.y
            );
        }
        state.big.stop();
        state.small.stop();
    }

    report
}
