use crate::dsp::oscillator::Oscillator;
use crate::graph::node::{GraphNode, RenderCtx};

/*
Pad Oscillator
==============

Every pad sounds a pure sine: a single frequency with no harmonics. Four
sines a third apart (C4, E4, G4, B4) stay distinguishable without any
filtering, and a sine is the gentlest waveform on the ear for a game that
plays the same notes over and over.

Example usage:
  let osc = OscNode::sine();                       // Tracks the note frequency
  let osc = OscNode::sine().with_frequency(440.0); // Fixed pitch

  // Pad voice: sine shaped by a decay envelope
  let voice = OscNode::sine().amplify(EnvNode::decay(0.3));
*/

pub struct OscNode {
    osc: Oscillator,
    /// Fixed frequency (Hz). If Some, ignores ctx.frequency and uses this instead.
    base_frequency: Option<f32>,
}

impl OscNode {
    pub fn sine() -> Self {
        Self {
            osc: Oscillator::sine(),
            base_frequency: None,
        }
    }

    /// Set a fixed frequency, ignoring the pitch from RenderCtx.
    pub fn with_frequency(mut self, freq: f32) -> Self {
        self.base_frequency = Some(freq.clamp(20.0, 20_000.0));
        self
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let frequency = self.base_frequency.unwrap_or(ctx.frequency);
        let modified_ctx = RenderCtx { frequency, ..*ctx };
        self.osc.render(out, &modified_ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        // Start every tone at a zero crossing so the attack stays clean
        self.osc.reset();
    }
}
