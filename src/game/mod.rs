pub mod sequence;
pub mod signal;
pub mod state;
pub mod status;

pub use sequence::{Cue, Playback, Sequence};
pub use signal::Signal;
pub use state::{Floor, GameState, TurnPhase};
pub use status::Status;
