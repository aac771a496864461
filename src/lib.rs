pub mod dsp;
pub mod engine; // Round state machine and timer queue
pub mod game; // Signals, sequences and game state
pub mod graph; // Composable audio graph nodes
pub mod io;
pub mod synth; // Tone voices and polyphony

pub use engine::{EngineConfig, RoundEngine};
pub use game::{Signal, Status, TurnPhase};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
