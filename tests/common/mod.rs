//! Shared harness: a round engine with a manual clock and a recording sink.

#![allow(dead_code)]

use std::time::Duration;

use genius::{
    engine::{Feedback, InputOutcome},
    EngineConfig, RoundEngine, Signal, TurnPhase,
};
use rand::{rngs::StdRng, SeedableRng};

pub struct Harness {
    pub engine: RoundEngine,
    pub sink: Vec<Feedback>,
    pub now: Duration,
}

impl Harness {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, EngineConfig::default())
    }

    pub fn with_config(seed: u64, config: EngineConfig) -> Self {
        Self {
            engine: RoundEngine::with_rng(config, StdRng::seed_from_u64(seed)),
            sink: Vec::new(),
            now: Duration::ZERO,
        }
    }

    pub fn start(&mut self) -> bool {
        self.engine.start_game(self.now, &mut self.sink)
    }

    pub fn phase(&self) -> TurnPhase {
        self.engine.state().phase()
    }

    pub fn sequence(&self) -> Vec<Signal> {
        self.engine.state().sequence().iter().collect()
    }

    /// Step the clock from timer to timer until the player has the floor
    pub fn run_until_input(&mut self) {
        while self.phase() != TurnPhase::AwaitingInput {
            let due = self
                .engine
                .next_deadline()
                .expect("playback stalled before the player's turn");
            self.now = self.now.max(due);
            self.engine.advance(self.now, &mut self.sink);
        }
    }

    pub fn press(&mut self, signal: Signal) -> InputOutcome {
        self.engine.accept_input(signal, self.now, &mut self.sink)
    }

    /// Repeat the whole sequence correctly; returns the last outcome
    pub fn play_round(&mut self) -> InputOutcome {
        self.run_until_input();
        let mut outcome = InputOutcome::Ignored;
        for signal in self.sequence() {
            self.now += Duration::from_millis(200);
            outcome = self.press(signal);
        }
        outcome
    }
}

/// Any pad other than `signal`
pub fn other_than(signal: Signal) -> Signal {
    Signal::ALL
        .into_iter()
        .find(|s| *s != signal)
        .expect("four pads")
}
