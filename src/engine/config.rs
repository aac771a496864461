use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timing of a game, in wall-clock durations.
///
/// Defaults reproduce the classic pace: one pad every 800 ms, a 1.5 s
/// breather between rounds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Spacing between cues during playback
    pub interval: Duration,
    /// Delay between the start of a round and its first cue
    pub lead_in: Duration,
    /// Pause after a completed round before the next one starts
    pub round_pause: Duration,
    /// How long a pad stays lit after a player press
    pub input_flash: Duration,
    /// Tone length during playback
    pub tone_length: Duration,
    /// Tone length for player presses
    pub input_tone_length: Duration,
}

impl EngineConfig {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            lead_in: Self::DEFAULT_INTERVAL,
            round_pause: Duration::from_millis(1500),
            input_flash: Duration::from_millis(150),
            tone_length: Duration::from_millis(300),
            input_tone_length: Duration::from_millis(150),
        }
    }

    /// Set the cue spacing
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the delay before the first cue of each round
    pub fn lead_in(mut self, lead_in: Duration) -> Self {
        self.lead_in = lead_in;
        self
    }

    /// Set the pause between rounds
    pub fn round_pause(mut self, pause: Duration) -> Self {
        self.round_pause = pause;
        self
    }

    /// Set the flash length for player presses
    pub fn input_flash(mut self, flash: Duration) -> Self {
        self.input_flash = flash;
        self
    }

    /// Set playback and press tone lengths
    pub fn tone_lengths(mut self, playback: Duration, input: Duration) -> Self {
        self.tone_length = playback;
        self.input_tone_length = input;
        self
    }

    /// Playback flashes last half an interval, leaving a dark gap between cues
    pub fn playback_flash(&self) -> Duration {
        self.interval / 2
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
