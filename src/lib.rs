//! Pong GB - mouse-vs-AI Pong with procedural retro sound
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, AI)
//! - `render`: Declarative draw-command production for the platform layer
//! - `audio`: Procedural square/sawtooth tone synthesis and the sound bank
//! - `platform`: Frame pacing and the seam to windowing/audio backends
//! - `settings`: Audio preferences persisted as JSON

pub mod audio;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Target tick rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Field dimensions (logical canvas units)
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    /// Horizontal gap between each paddle and its field edge
    pub const PADDLE_MARGIN: f32 = 30.0;
    /// Fixed per-tick AI paddle step
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Horizontal speed assigned on every serve
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Horizontal speed multiplier applied on each paddle hit
    pub const PADDLE_HIT_SPEEDUP: f32 = 1.1;
    /// Scales the contact offset into the post-hit vertical velocity
    pub const HIT_SPIN_FACTOR: f32 = 1.5;

    /// AI anticipation lag: lower tracks tighter, higher lags more
    pub const AI_REACTION: f32 = 0.4;
}
