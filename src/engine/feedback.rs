use std::time::Duration;

use crate::game::{Signal, Status};

/// Receives everything the round engine wants shown or played.
///
/// Each call is fire-and-forget: implementations must not block and the
/// engine never waits on them.
pub trait FeedbackSink {
    /// Light `signal`'s pad from `at` until `at + hold`
    fn highlight(&mut self, signal: Signal, at: Duration, hold: Duration);

    /// Play `signal`'s tone, decaying to near silence after `length`
    fn tone(&mut self, signal: Signal, length: Duration);

    /// Update the level readout and status text
    fn status(&mut self, level: u32, status: Status);

    /// Whether pad input is currently accepted
    fn board_interactive(&mut self, interactive: bool);

    /// Whether the start trigger may be used
    fn start_enabled(&mut self, enabled: bool);
}

/// Recorded form of a `FeedbackSink` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Highlight {
        signal: Signal,
        at: Duration,
        hold: Duration,
    },
    Tone {
        signal: Signal,
        length: Duration,
    },
    Status {
        level: u32,
        status: Status,
    },
    BoardInteractive(bool),
    StartEnabled(bool),
}

/// Record calls in order (tests, replays)
impl FeedbackSink for Vec<Feedback> {
    fn highlight(&mut self, signal: Signal, at: Duration, hold: Duration) {
        self.push(Feedback::Highlight { signal, at, hold });
    }

    fn tone(&mut self, signal: Signal, length: Duration) {
        self.push(Feedback::Tone { signal, length });
    }

    fn status(&mut self, level: u32, status: Status) {
        self.push(Feedback::Status { level, status });
    }

    fn board_interactive(&mut self, interactive: bool) {
        self.push(Feedback::BoardInteractive(interactive));
    }

    fn start_enabled(&mut self, enabled: bool) {
        self.push(Feedback::StartEnabled(enabled));
    }
}

/// Discards all feedback
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn highlight(&mut self, _signal: Signal, _at: Duration, _hold: Duration) {}

    fn tone(&mut self, _signal: Signal, _length: Duration) {}

    fn status(&mut self, _level: u32, _status: Status) {}

    fn board_interactive(&mut self, _interactive: bool) {}

    fn start_enabled(&mut self, _enabled: bool) {}
}
