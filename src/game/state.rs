use super::{sequence::Sequence, signal::Signal};

/// Which part of a round the game is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Never started
    Idle,
    /// Genius is replaying the sequence
    Playing,
    /// Player is repeating the sequence
    AwaitingInput,
    /// Player finished the round; waiting for the next one
    RoundComplete,
    /// Wrong input (or abandoned); level frozen for display
    GameOver,
}

/// Who currently has the floor in a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Floor {
    Genius,
    Player,
}

impl TurnPhase {
    pub fn is_running(self) -> bool {
        matches!(
            self,
            TurnPhase::Playing | TurnPhase::AwaitingInput | TurnPhase::RoundComplete
        )
    }

    pub fn floor(self) -> Option<Floor> {
        match self {
            TurnPhase::Playing | TurnPhase::RoundComplete => Some(Floor::Genius),
            TurnPhase::AwaitingInput => Some(Floor::Player),
            TurnPhase::Idle | TurnPhase::GameOver => None,
        }
    }
}

/// Everything one game session knows about itself.
///
/// Owned by the round engine; callers only read it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) level: u32,
    pub(crate) phase: TurnPhase,
    pub(crate) sequence: Sequence,
    pub(crate) progress: Vec<Signal>,
}

impl GameState {
    /// Dormant state before the first game.
    pub fn new() -> Self {
        Self {
            level: 1,
            phase: TurnPhase::Idle,
            sequence: Sequence::new(),
            progress: Vec::new(),
        }
    }

    /// Reset for a fresh game. Leaves the phase to the caller.
    pub(crate) fn reset(&mut self) {
        self.level = 1;
        self.sequence.clear();
        self.progress.clear();
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn floor(&self) -> Option<Floor> {
        self.phase.floor()
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Inputs the player has entered this round.
    pub fn progress(&self) -> &[Signal] {
        &self.progress
    }

    /// Inputs still needed to finish the round.
    pub fn remaining(&self) -> usize {
        self.sequence.len().saturating_sub(self.progress.len())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
