//! Sequence flow definition.

use crate::types::{FlowId, NodeId};
use serde::{Deserialize, Serialize};

/// A directed edge between two nodes in a process graph.
///
/// Flows are immutable and owned by the graph. During execution they are the
/// only thing tokens occupy: the marking is a multiset of flow IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceFlow {
    id: FlowId,
    source: NodeId,
    target: NodeId,
}

impl SequenceFlow {
    /// Create a new sequence flow.
    #[must_use]
    pub const fn new(id: FlowId, source: NodeId, target: NodeId) -> Self {
        Self { id, source, target }
    }

    /// Get the flow's identifier.
    #[must_use]
    pub const fn id(&self) -> FlowId {
        self.id
    }

    /// Get the source node.
    #[must_use]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// Get the target node.
    #[must_use]
    pub const fn target(&self) -> NodeId {
        self.target
    }
}
