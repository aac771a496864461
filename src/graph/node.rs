/// Context passed to graph nodes during rendering
///
/// Contains information about what to render:
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch to render (Hz)
/// - gain: Output level of the note (0.0-1.0)
/// - length: Note length in seconds (0.0 = let the node decide)
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
    pub gain: f32,
    pub length: f32,
}

impl RenderCtx {
    /// Create context from a frequency, leaving the note length to the node
    pub fn from_freq(sample_rate: f32, frequency: f32, gain: f32) -> Self {
        Self {
            sample_rate,
            frequency,
            gain,
            length: 0.0,
        }
    }

    /// Create context for a fixed-length tone
    pub fn tone(sample_rate: f32, frequency: f32, length: f32) -> Self {
        Self {
            sample_rate,
            frequency,
            gain: 1.0,
            length,
        }
    }
}

/// Core trait for audio processing graph nodes
///
/// Nodes can render audio and respond to note events
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Triggered when a note starts
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn note_on(&mut self, _ctx: &RenderCtx) {}

    /// Triggered when a note is released
    ///
    /// Default implementation does nothing (passthrough nodes).
    fn note_off(&mut self, _ctx: &RenderCtx) {}

    fn get_envelope_level(&self) -> Option<f32> {
        None
    }

    /// Check if this node is still producing sound
    ///
    /// Used by voice management to know when a voice can be freed.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        (**self).note_on(ctx)
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        (**self).note_off(ctx)
    }

    fn get_envelope_level(&self) -> Option<f32> {
        (**self).get_envelope_level()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
