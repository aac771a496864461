use std::f32::consts::TAU;

use crate::graph::node::RenderCtx;

/*
Phase Accumulator
=================

The oscillator keeps a phase in [0, 1) and advances it by
`frequency / sample_rate` every sample. The output is `sin(TAU * phase)`.

Keeping phase normalised (instead of accumulating radians or a sample
counter) keeps precision constant no matter how long a tone plays, and
lets the frequency change between blocks without a discontinuity.
*/

pub struct Oscillator {
    phase: f32,
}

impl Oscillator {
    pub fn sine() -> Self {
        Self { phase: 0.0 }
    }

    /// Restart the waveform at zero crossing.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn render(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let step = ctx.frequency / ctx.sample_rate;
        for sample in out.iter_mut() {
            *sample = (TAU * self.phase).sin();
            self.phase += step;
            if self.phase >= 1.0 {
                self.phase -= self.phase.floor();
            }
        }
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::sine()
    }
}
