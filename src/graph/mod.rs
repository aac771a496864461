//! Composable building blocks for constructing pad voices.
//!
//! Graph nodes wrap the low-level DSP primitives with note events and
//! block-based rendering. The `extensions` module adds fluent helpers so a
//! voice reads as a chain: `OscNode::sine().amplify(EnvNode::decay(0.3))`.

/// Multiply two signals together (amplitude control).
pub mod amplify;
/// Envelope generator node.
pub mod envelope;
/// Fluent combinators (`.amplify()`).
pub mod extensions;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators.
pub mod oscillator;

pub use node::{GraphNode, RenderCtx};
