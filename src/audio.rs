//! Procedural sound effects
//!
//! Game Boy style tones synthesized as signed 16-bit PCM at 44.1 kHz. No
//! audio files and no device handles: the bank holds raw buffers and the
//! platform layer owns playback.

use thiserror::Error;

use crate::sim::{GameEvent, Side};

/// PCM sample rate for all generated tones
pub const SAMPLE_RATE: u32 = 44_100;

/// Fixed attenuation applied to every sample to avoid clipping
const VOLUME_SCALE: f32 = 0.1;

/// Invalid tone parameters; generation fails fast instead of emitting
/// degenerate audio.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToneError {
    #[error("tone frequency must be positive and finite, got {0}")]
    InvalidFrequency(f32),
    #[error("tone duration must be positive and finite, got {0}")]
    InvalidDuration(f32),
    #[error("frequency {frequency} Hz exceeds sample rate {sample_rate} Hz")]
    FrequencyAboveSampleRate { frequency: f32, sample_rate: u32 },
}

/// Tone shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Full positive amplitude for the first half of each period, full
    /// negative for the second
    Square,
    /// Linear ramp from negative to positive amplitude across each period
    Sawtooth,
}

/// Synthesize a fixed-length tone buffer.
///
/// Pure and deterministic: identical inputs produce byte-identical buffers.
/// Sample count and samples-per-cycle both truncate to integers, matching
/// the classic integer-period synthesis this reproduces.
pub fn generate_tone(
    frequency: f32,
    duration: f32,
    waveform: Waveform,
) -> Result<Vec<i16>, ToneError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(ToneError::InvalidFrequency(frequency));
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(ToneError::InvalidDuration(duration));
    }

    let period = (SAMPLE_RATE as f32 / frequency) as usize;
    if period < 1 {
        return Err(ToneError::FrequencyAboveSampleRate {
            frequency,
            sample_rate: SAMPLE_RATE,
        });
    }

    let amplitude = i16::MAX as f32;
    let sample_count = (SAMPLE_RATE as f32 * duration) as usize;
    let mut buf = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let phase = i % period;
        let val = match waveform {
            Waveform::Square => {
                if phase < period / 2 {
                    amplitude
                } else {
                    -amplitude
                }
            }
            Waveform::Sawtooth => {
                (phase as f32 * (amplitude * 2.0 / period as f32) - amplitude).trunc()
            }
        };
        buf.push((val * VOLUME_SCALE) as i16);
    }
    Ok(buf)
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle (E6)
    PaddleHit,
    /// Ball hits wall (E5)
    WallHit,
    /// A point is scored (E4)
    Score,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit => SoundEffect::PaddleHit,
            GameEvent::WallHit => SoundEffect::WallHit,
            GameEvent::Score(Side::Left) | GameEvent::Score(Side::Right) => SoundEffect::Score,
        }
    }
}

/// Pre-generated buffers for the three effects, built once at startup.
pub struct SoundBank {
    paddle_hit: Vec<i16>,
    wall_hit: Vec<i16>,
    score: Vec<i16>,
}

impl SoundBank {
    /// Generate all three effect buffers.
    pub fn generate() -> Result<Self, ToneError> {
        Ok(Self {
            paddle_hit: generate_tone(1319.0, 0.08, Waveform::Square)?,
            wall_hit: generate_tone(659.0, 0.06, Waveform::Square)?,
            score: generate_tone(330.0, 0.3, Waveform::Square)?,
        })
    }

    /// PCM buffer for `effect`, ready to hand to the playback collaborator.
    pub fn buffer(&self, effect: SoundEffect) -> &[i16] {
        match effect {
            SoundEffect::PaddleHit => &self.paddle_hit,
            SoundEffect::WallHit => &self.wall_hit,
            SoundEffect::Score => &self.score,
        }
    }
}
