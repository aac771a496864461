//! Board view - what the terminal shows, fed by the round engine
//!
//! The engine never touches the terminal. Everything it wants shown arrives
//! here through `FeedbackSink` and is read back when drawing.

use std::time::Duration;

use genius::{engine::FeedbackSink, synth::ToneHandle, Signal, Status};

pub struct BoardView {
    /// Per-pad deadline (engine clock) until which the pad is lit
    lit_until: [Option<Duration>; 4],
    /// Level readout
    pub level: u32,
    /// Current status message
    pub status: Status,
    /// Whether pad presses are accepted
    pub interactive: bool,
    /// Whether the start button is usable
    pub start_enabled: bool,
    /// Tone ring to the audio thread (None when muted or no device)
    tones: Option<ToneHandle>,
}

impl BoardView {
    pub fn new(tones: Option<ToneHandle>) -> Self {
        Self {
            lit_until: [None; 4],
            level: 1,
            status: Status::Welcome,
            interactive: false,
            start_enabled: true,
            tones,
        }
    }

    pub fn is_lit(&self, signal: Signal, now: Duration) -> bool {
        self.lit_until[signal.index()].is_some_and(|until| now < until)
    }

    pub fn has_audio(&self) -> bool {
        self.tones.is_some()
    }

    /// Cut any tone still ringing (quitting, abandoning)
    pub fn silence(&mut self) {
        if let Some(tones) = self.tones.as_mut() {
            tones.silence();
        }
    }
}

impl FeedbackSink for BoardView {
    fn highlight(&mut self, signal: Signal, at: Duration, hold: Duration) {
        // A newer flash on the same pad replaces the older deadline
        self.lit_until[signal.index()] = Some(at + hold);
    }

    fn tone(&mut self, signal: Signal, length: Duration) {
        if let Some(tones) = self.tones.as_mut() {
            tones.play(signal.frequency(), length.as_secs_f32());
        }
    }

    fn status(&mut self, level: u32, status: Status) {
        self.level = level;
        self.status = status;
    }

    fn board_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
    }
}
