//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs.

/// Exponential decay envelope for pad tones.
pub mod envelope;
/// Sine oscillator.
pub mod oscillator;

pub use envelope::EnvelopeState;
