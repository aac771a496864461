// Purpose: Voice management and the tone synth fed by the game
// This layer sits above graph nodes and manages multiple voices

pub mod factory;
pub mod message;
pub mod poly;
pub mod voice;

pub use factory::{pad_voice, VoiceFactory};
#[cfg(feature = "rtrb")]
pub use message::ToneHandle;
pub use message::{MessageReceiver, ToneMessage};
pub use poly::ToneSynth;
