//! Process node definition.

use crate::types::{FlowId, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node kinds the engine understands.
///
/// The loader contract (or the in-crate [`crate::model::ProcessBuilder`])
/// guarantees every node carries exactly one of these tags. Firing rules
/// dispatch over this enum with a single exhaustive `match`, so adding a
/// variant forces every rule site to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Entry point of a run; no incoming flows.
    Start,
    /// Terminal node; popping it ends the run. No outgoing flows.
    End,
    /// A task. Fires with default semantics.
    Activity,
    /// A throw event. Fires with default semantics, same as an activity.
    IntermediateThrow,
    /// AND-join: fires only once every incoming flow holds a token.
    ParallelJoin,
    /// XOR-split: routes each incoming token to one random outgoing flow.
    ExclusiveChoice,
}

impl NodeKind {
    /// Check if this kind marks a run entry point.
    #[must_use]
    pub const fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    /// Check if this kind terminates a run when popped.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Activity => "activity",
            Self::IntermediateThrow => "intermediate_throw",
            Self::ParallelJoin => "parallel_join",
            Self::ExclusiveChoice => "exclusive_choice",
        };
        f.write_str(name)
    }
}

/// A node in a process graph.
///
/// Nodes are immutable once the graph is built: the incoming/outgoing flow
/// lists are fixed at construction and the engine only ever reads them.
/// Flow lists are ordered by connection declaration order, which determines
/// ready-queue scheduling order during execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessNode {
    id: NodeId,
    label: String,
    kind: NodeKind,
    incoming: Vec<FlowId>,
    outgoing: Vec<FlowId>,
}

impl ProcessNode {
    /// Create a new node with empty flow lists.
    #[must_use]
    pub fn new(id: NodeId, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Get the node's identifier.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the node's kind tag.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Get the incoming flows, in declaration order.
    #[must_use]
    pub fn incoming(&self) -> &[FlowId] {
        &self.incoming
    }

    /// Get the outgoing flows, in declaration order.
    #[must_use]
    pub fn outgoing(&self) -> &[FlowId] {
        &self.outgoing
    }

    pub(crate) fn push_incoming(&mut self, flow: FlowId) {
        self.incoming.push(flow);
    }

    pub(crate) fn push_outgoing(&mut self, flow: FlowId) {
        self.outgoing.push(flow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", NodeKind::Start), "start");
        assert_eq!(format!("{}", NodeKind::ParallelJoin), "parallel_join");
        assert_eq!(format!("{}", NodeKind::ExclusiveChoice), "exclusive_choice");
    }

    #[test]
    fn kind_predicates() {
        assert!(NodeKind::Start.is_start());
        assert!(NodeKind::End.is_end());
        assert!(!NodeKind::Activity.is_start());
        assert!(!NodeKind::Activity.is_end());
    }

    #[test]
    fn node_creation() {
        let node = ProcessNode::new(NodeId::new(1), NodeKind::Activity, "Check order");
        assert_eq!(node.id(), NodeId::new(1));
        assert_eq!(node.label(), "Check order");
        assert_eq!(node.kind(), NodeKind::Activity);
        assert!(node.incoming().is_empty());
        assert!(node.outgoing().is_empty());
    }

    #[test]
    fn flow_lists_preserve_order() {
        let mut node = ProcessNode::new(NodeId::new(0), NodeKind::Activity, "A");
        node.push_outgoing(FlowId::new(2));
        node.push_outgoing(FlowId::new(0));
        node.push_outgoing(FlowId::new(1));
        assert_eq!(
            node.outgoing(),
            &[FlowId::new(2), FlowId::new(0), FlowId::new(1)]
        );
    }
}
