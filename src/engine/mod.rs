//! Round engine - the game's state machine
//!
//! The engine has no clock of its own. Callers pass the current time (any
//! monotonic `Duration` since an epoch they choose) into every operation and
//! call [`RoundEngine::advance`] to fire timers that have come due. Output
//! goes to a [`FeedbackSink`], so the engine runs the same under a terminal,
//! a test recorder, or nothing at all.

pub mod config;
pub mod feedback;
pub mod scheduler;

use std::time::Duration;

use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub use self::{
    config::EngineConfig,
    feedback::{Feedback, FeedbackSink, NullSink},
    scheduler::Scheduler,
};
use crate::game::{GameState, Signal, Status, TurnPhase};

/// Deferred work queued on the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Flash and sound one step of the playback
    Cue(Signal),
    /// Playback finished; hand the floor to the player
    AwaitInput,
    /// Pause after a completed round is over
    NextRound,
}

/// What happened to a player press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not the player's turn; nothing changed
    Ignored,
    /// Right pad, more to go this round
    Correct { remaining: usize },
    /// Right pad and the round is done; `level` is the new level
    RoundComplete { level: u32 },
    /// Wrong pad; the game is over
    Mismatch {
        index: usize,
        expected: Signal,
        got: Signal,
    },
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    WrongInput {
        index: usize,
        expected: Signal,
        got: Signal,
    },
    /// The player stopped a running game
    Abandoned,
}

/// Owns one game session and drives it through its rounds
pub struct RoundEngine<R = StdRng> {
    config: EngineConfig,
    state: GameState,
    timers: Scheduler<Action>,
    rng: R,
    end_reason: Option<EndReason>,
}

impl RoundEngine<StdRng> {
    /// Create an engine seeded from system entropy
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> RoundEngine<R> {
    /// Create an engine with a caller-supplied RNG (seeded for tests)
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self {
            config,
            state: GameState::new(),
            timers: Scheduler::new(),
            rng,
            end_reason: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reason the last game ended, if it has
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Number of timers still waiting to fire
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// When the next timer fires; callers can sleep until then
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Begin a new game. Returns `false` (and changes nothing) if one is running.
    pub fn start_game(&mut self, now: Duration, sink: &mut impl FeedbackSink) -> bool {
        if self.state.running() {
            trace!("start ignored: game already running");
            return false;
        }

        self.timers.clear();
        self.state.reset();
        self.state.phase = TurnPhase::Playing;
        self.end_reason = None;
        info!("game started");

        sink.start_enabled(false);
        self.extend_and_play(now, sink);
        true
    }

    /// Grow the sequence by one random step and schedule its playback.
    fn extend_and_play(&mut self, now: Duration, sink: &mut impl FeedbackSink) {
        let signal: Signal = self.rng.gen();
        self.state.sequence.push(signal);
        self.state.progress.clear();
        self.state.phase = TurnPhase::Playing;
        debug_assert_eq!(self.state.level as usize, self.state.sequence.len());

        sink.board_interactive(false);
        sink.status(self.state.level, Status::Observe);

        let playback = self
            .state
            .sequence
            .playback(now + self.config.lead_in, self.config.interval);
        let last_onset = playback.last_onset();
        for cue in playback {
            self.timers.schedule(cue.onset, Action::Cue(cue.signal));
        }
        if let Some(last) = last_onset {
            self.timers
                .schedule(last + self.config.interval, Action::AwaitInput);
        }

        info!(
            "round {} started ({} cues, new step {})",
            self.state.level,
            self.state.sequence.len(),
            signal
        );
    }

    /// Fire every timer due at or before `now`. Returns how many fired.
    pub fn advance(&mut self, now: Duration, sink: &mut impl FeedbackSink) -> usize {
        let mut fired = 0;
        while let Some((due, action)) = self.timers.pop_due(now) {
            fired += 1;
            match action {
                Action::Cue(signal) => {
                    trace!("cue {} at {:?}", signal, due);
                    sink.highlight(signal, due, self.config.playback_flash());
                    sink.tone(signal, self.config.tone_length);
                }
                Action::AwaitInput => {
                    self.state.phase = TurnPhase::AwaitingInput;
                    debug!("awaiting {} inputs", self.state.sequence.len());
                    sink.board_interactive(true);
                    sink.status(self.state.level, Status::YourTurn);
                }
                Action::NextRound => self.extend_and_play(due, sink),
            }
        }
        fired
    }

    /// Record a player press and check it against the sequence.
    pub fn accept_input(
        &mut self,
        signal: Signal,
        now: Duration,
        sink: &mut impl FeedbackSink,
    ) -> InputOutcome {
        if self.state.phase != TurnPhase::AwaitingInput {
            debug!("input {} dropped during {:?}", signal, self.state.phase);
            return InputOutcome::Ignored;
        }

        self.state.progress.push(signal);
        sink.tone(signal, self.config.input_tone_length);
        sink.highlight(signal, now, self.config.input_flash);

        let index = self.state.progress.len() - 1;
        let expected = match self.state.sequence.get(index) {
            Some(expected) => expected,
            // Progress never outgrows the sequence while awaiting input
            None => return InputOutcome::Ignored,
        };

        if signal != expected {
            self.end_game(
                EndReason::WrongInput {
                    index,
                    expected,
                    got: signal,
                },
                sink,
            );
            return InputOutcome::Mismatch {
                index,
                expected,
                got: signal,
            };
        }

        let remaining = self.state.remaining();
        if remaining > 0 {
            return InputOutcome::Correct { remaining };
        }

        let completed = self.state.level;
        self.state.level += 1;
        self.state.phase = TurnPhase::RoundComplete;
        info!("level {} complete", completed);

        sink.board_interactive(false);
        sink.status(self.state.level, Status::LevelComplete(completed));
        self.timers
            .schedule(now + self.config.round_pause, Action::NextRound);

        InputOutcome::RoundComplete {
            level: self.state.level,
        }
    }

    /// Stop a running game. Returns `false` if nothing was running.
    pub fn abandon(&mut self, sink: &mut impl FeedbackSink) -> bool {
        if !self.state.running() {
            return false;
        }
        self.end_game(EndReason::Abandoned, sink);
        true
    }

    fn end_game(&mut self, reason: EndReason, sink: &mut impl FeedbackSink) {
        self.state.phase = TurnPhase::GameOver;
        self.timers.clear();
        self.end_reason = Some(reason);
        info!("game over at level {}: {:?}", self.state.level, reason);

        sink.board_interactive(false);
        sink.status(self.state.level, Status::GameOver(self.state.level));
        sink.start_enabled(true);
    }
}
