use crate::graph::{envelope::EnvNode, extensions::NodeExt, node::GraphNode, oscillator::OscNode};

/// Factory for creating voices with a specific patch/sound design
///
/// Configure the sound once; the tone synth uses the factory to fill its
/// voice pool with identical voices.
pub trait VoiceFactory: Send {
    type Voice: GraphNode;

    fn create_voice(&self) -> Self::Voice;
}

impl<F, T> VoiceFactory for F
where
    F: Fn() -> T + Send,
    T: GraphNode,
{
    type Voice = T;

    fn create_voice(&self) -> Self::Voice {
        self()
    }
}

/// The pad sound: a sine fading exponentially to silence.
///
/// The envelope length here is only a fallback; each tone message carries
/// its own length.
pub fn pad_voice() -> impl GraphNode {
    OscNode::sine().amplify(EnvNode::decay(0.3))
}
