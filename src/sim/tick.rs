//! Fixed timestep frame orchestrator
//!
//! One call per tick, in strict order: pointer input, AI, physics, scoring.
//! Rendering and audio are pull-based: callers turn the returned events and
//! the post-tick state into platform commands.

use crate::consts::*;

use super::state::{GameEvent, GameState};
use super::{ai, physics, score};

/// Input sampled by the platform layer for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer vertical position in field coordinates; `None` leaves the
    /// left paddle where it is
    pub pointer_y: Option<f32>,
    /// External quit signal; the simulation ignores it, the driving loop
    /// terminates on it before the next tick
    pub quit: bool,
}

/// Advance the game by one tick, returning the events it produced.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(pointer_y) = input.pointer_y {
        state.left_paddle.rect.set_center_y(pointer_y);
        state.left_paddle.rect.clamp_field_y(FIELD_HEIGHT);
    }

    ai::step(state);
    physics::step(state, &mut events);
    score::step(state, &mut events);

    state.time_ticks += 1;
    events
}
