use crate::graph::{amplify::Amplify, node::GraphNode};

/// Fluent combinators for building voices: `OscNode::sine().amplify(env)`
pub trait NodeExt: GraphNode + Sized {
    fn amplify<M: GraphNode>(self, modulator: M) -> Amplify<Self, M> {
        Amplify::new(self, modulator)
    }
}

impl<T: GraphNode> NodeExt for T {}
