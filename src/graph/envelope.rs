use crate::{
    dsp::envelope::Envelope,
    graph::node::{GraphNode, RenderCtx},
};

/// Decay envelope as a graph node, usually the modulator of an `Amplify`
pub struct EnvNode {
    env: Envelope,
}

impl EnvNode {
    /// Fade to silence `length` seconds after each note-on
    pub fn decay(length: f32) -> Self {
        Self {
            env: Envelope::decay(length),
        }
    }

    pub fn with_attack(attack: f32, length: f32) -> Self {
        Self {
            env: Envelope::with_attack(attack, length),
        }
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.env.render(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.env.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.env.note_off(ctx);
    }

    fn get_envelope_level(&self) -> Option<f32> {
        Some(self.env.level())
    }

    fn is_active(&self) -> bool {
        self.env.is_active()
    }
}
