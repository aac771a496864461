// Purpose - external interfaces: the audio device

pub mod audio;

pub use audio::{AudioError, AudioOutput};
