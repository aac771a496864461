//! Real-world scenario benchmarks.
//!
//! Tone synth blocks as rendered in the audio callback, and whole game
//! rounds as driven by the terminal event loop.

mod rounds;
mod tones;

pub use rounds::bench_rounds;
pub use tones::bench_tones;
