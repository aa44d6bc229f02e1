//! Platform boundary
//!
//! The simulation core has no window, input device, or audio device. A real
//! frontend samples the pointer into `sim::TickInput`, consumes
//! `render::frame_commands` and `audio::SoundBank` buffers, and paces the
//! loop with [`FrameLimiter`].

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::TICKS_PER_SECOND;

/// Pads each tick to a minimum duration (1/60 s by default).
///
/// Minimum only: a slow frame simply runs long, with no catch-up or
/// frame-skipping afterwards.
pub struct FrameLimiter {
    budget: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new() -> Self {
        Self::with_rate(TICKS_PER_SECOND)
    }

    pub fn with_rate(ticks_per_second: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / ticks_per_second,
            frame_start: Instant::now(),
        }
    }

    /// Sleep out the remainder of the current frame budget, then start
    /// timing the next frame.
    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.budget {
            thread::sleep(self.budget - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}
