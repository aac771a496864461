use crate::graph::node::{GraphNode, RenderCtx};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,   // Available for allocation
    Active, // Tone sounding, envelope still running
}

/// A single voice that can play any GraphNode
pub struct Voice<T: GraphNode> {
    frequency: f32,
    length: f32,
    state: VoiceState,
    age: u64,
    sample_rate: f32,
    graph: T,
}

impl<T: GraphNode> Voice<T> {
    pub fn new(graph: T, sample_rate: f32) -> Self {
        Self {
            frequency: 0.0,
            length: 0.0,
            state: VoiceState::Free,
            age: 0,
            sample_rate,
            graph,
        }
    }

    fn ctx(&self) -> RenderCtx {
        RenderCtx::tone(self.sample_rate, self.frequency, self.length)
    }

    pub fn start(&mut self, frequency: f32, length: f32, age: u64) {
        self.frequency = frequency;
        self.length = length;
        self.state = VoiceState::Active;
        self.age = age;

        let ctx = self.ctx();
        self.graph.note_on(&ctx);
    }

    pub fn render(&mut self, out: &mut [f32]) {
        let ctx = self.ctx();
        self.graph.render_block(out, &ctx);

        // Fixed-length tones free themselves once the envelope is done
        if !self.graph.is_active() {
            self.free();
        }
    }

    pub fn is_free(&self) -> bool {
        self.state == VoiceState::Free
    }

    pub fn is_active(&self) -> bool {
        self.state == VoiceState::Active
    }

    pub fn get_envelope_level(&self) -> Option<f32> {
        self.graph.get_envelope_level()
    }

    pub fn free(&mut self) {
        if self.state == VoiceState::Active {
            let ctx = self.ctx();
            self.graph.note_off(&ctx);
        }
        self.state = VoiceState::Free;
        self.frequency = 0.0;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }
}
