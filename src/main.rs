//! Pong GB entry point
//!
//! There is no windowing backend wired up yet, so the binary runs an
//! attract-mode demo: the left paddle is driven by a synthesized pointer that
//! follows the ball, the loop is paced at 60 Hz, and frame/audio output is
//! reported through the logger instead of a canvas and a mixer.

use std::path::Path;

use pong_gb::audio::{SoundBank, SoundEffect};
use pong_gb::consts::TICKS_PER_SECOND;
use pong_gb::platform::FrameLimiter;
use pong_gb::render;
use pong_gb::sim::{GameEvent, GameState, TickInput, tick};
use pong_gb::Settings;

/// Demo length before the synthetic quit signal fires
const DEMO_SECONDS: u32 = 30;

fn main() {
    env_logger::init();
    log::info!("Pong GB starting...");

    let settings = Settings::load(Path::new("pong_gb_settings.json"));
    log::info!("Effective volume: {:.2}", settings.effective_volume());

    let bank = match SoundBank::generate() {
        Ok(bank) => bank,
        Err(err) => {
            log::error!("Sound bank generation failed: {err}");
            return;
        }
    };

    let mut state = GameState::new();
    let mut limiter = FrameLimiter::new();
    let mut input = TickInput::default();
    let demo_ticks = u64::from(DEMO_SECONDS * TICKS_PER_SECOND);

    log::info!("Running attract mode for {DEMO_SECONDS} seconds");
    loop {
        // Attract mode: the "pointer" simply shadows the ball
        input.pointer_y = Some(state.ball.center_y());
        input.quit = state.time_ticks >= demo_ticks;
        if input.quit {
            break;
        }

        let events = tick(&mut state, &input);
        for event in events {
            if let GameEvent::Score(side) = event {
                log::info!(
                    "{side:?} scores: {} - {}",
                    state.left_score,
                    state.right_score
                );
            }
            let effect = SoundEffect::from(event);
            log::debug!(
                "play {effect:?} ({} samples at volume {:.2})",
                bank.buffer(effect).len(),
                settings.effective_volume()
            );
        }

        let frame = render::frame_commands(&state);
        log::trace!("frame {}: {} draw commands", state.time_ticks, frame.len());

        limiter.wait();
    }

    log::info!(
        "Attract mode finished: {} - {} after {} ticks",
        state.left_score,
        state.right_score,
        state.time_ticks
    );
}
