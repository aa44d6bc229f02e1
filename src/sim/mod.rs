//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No rendering, audio, or platform dependencies
//! - Side effects leave only as `GameEvent` values for the platform layer

pub mod ai;
pub mod physics;
pub mod score;
pub mod state;
pub mod tick;

pub use state::{Ball, GameEvent, GameState, Paddle, Rect, Side};
pub use tick::{TickInput, tick};
