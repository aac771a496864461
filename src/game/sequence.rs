use std::time::Duration;

use super::signal::Signal;

/// A single scheduled pad flash within a playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    /// Position in the sequence
    pub index: usize,
    /// Pad to flash
    pub signal: Signal,
    /// When the flash begins (same clock as the playback start)
    pub onset: Duration,
}

/// The growing list of signals the player has to repeat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    signals: Vec<Signal>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one step. Sequences only ever grow during a game.
    pub fn push(&mut self, signal: Signal) {
        self.signals.push(signal);
    }

    pub fn clear(&mut self) {
        self.signals.clear();
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Signal> {
        self.signals.get(index).copied()
    }

    pub fn last(&self) -> Option<Signal> {
        self.signals.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Signal> + '_ {
        self.signals.iter().copied()
    }

    pub fn as_slice(&self) -> &[Signal] {
        &self.signals
    }

    /// True when `attempt` matches the start of this sequence.
    pub fn is_prefix(&self, attempt: &[Signal]) -> bool {
        self.signals.starts_with(attempt)
    }

    /// Lazily lay the sequence out in time: cue `i` starts at `start + i * interval`.
    pub fn playback(&self, start: Duration, interval: Duration) -> Playback<'_> {
        Playback {
            signals: &self.signals,
            start,
            interval,
            next: 0,
        }
    }
}

impl From<Vec<Signal>> for Sequence {
    fn from(signals: Vec<Signal>) -> Self {
        Self { signals }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = Signal;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Signal>>;

    fn into_iter(self) -> Self::IntoIter {
        self.signals.iter().copied()
    }
}

/// Finite, restartable iterator of evenly spaced cues.
///
/// Cloning a `Playback` restarts it from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    signals: &'a [Signal],
    start: Duration,
    interval: Duration,
    next: usize,
}

impl Playback<'_> {
    /// Onset of the final cue, if the sequence is not empty.
    pub fn last_onset(&self) -> Option<Duration> {
        self.signals
            .len()
            .checked_sub(1)
            .map(|last| self.onset_of(last))
    }

    fn onset_of(&self, index: usize) -> Duration {
        self.start + self.interval * index as u32
    }
}

impl Iterator for Playback<'_> {
    type Item = Cue;

    fn next(&mut self) -> Option<Cue> {
        let signal = *self.signals.get(self.next)?;
        let cue = Cue {
            index: self.next,
            signal,
            onset: self.onset_of(self.next),
        };
        self.next += 1;
        Some(cue)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.signals.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback<'_> {}
