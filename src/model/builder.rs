//! Programmatic graph construction.

use super::flow::SequenceFlow;
use super::graph::ProcessGraph;
use super::node::{NodeKind, ProcessNode};
use crate::error::{Result, TokenflowError};
use crate::types::{FlowId, NodeId};

/// Builder for [`ProcessGraph`].
///
/// Nodes and flows receive dense IDs in declaration order. Connection order
/// fixes each node's incoming/outgoing flow ordering, which the engine uses
/// as its ready-queue scheduling order.
///
/// # Example
///
/// ```
/// use tokenflow::model::{NodeKind, ProcessBuilder};
///
/// let mut builder = ProcessBuilder::new();
/// let start = builder.add_node(NodeKind::Start, "Order received");
/// let check = builder.add_node(NodeKind::Activity, "Check stock");
/// let end = builder.add_node(NodeKind::End, "Order done");
/// builder.connect(start, check);
/// builder.connect(check, end);
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.node_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ProcessBuilder {
    nodes: Vec<ProcessNode>,
    flows: Vec<SequenceFlow>,
}

impl ProcessBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its ID.
    pub fn add_node(&mut self, kind: NodeKind, label: impl Into<String>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(ProcessNode::new(id, kind, label));
        id
    }

    /// Connect two nodes with a sequence flow and return the flow's ID.
    ///
    /// The flow is appended to the source node's outgoing list and the target
    /// node's incoming list.
    ///
    /// # Panics
    /// Panics if either ID was not issued by this builder.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> FlowId {
        let id = FlowId::new(self.flows.len() as u32);
        self.flows.push(SequenceFlow::new(id, source, target));
        self.nodes[source.as_u32() as usize].push_outgoing(id);
        self.nodes[target.as_u32() as usize].push_incoming(id);
        id
    }

    /// Finalize the graph, running the fail-fast shape checks.
    ///
    /// Every non-Start node must have at least one incoming flow and every
    /// non-End node at least one outgoing flow. This is deliberately not full
    /// model validation: no reachability, cycle, or gateway-arity analysis
    /// is performed.
    ///
    /// # Errors
    /// Returns [`TokenflowError::MissingIncoming`] or
    /// [`TokenflowError::MissingOutgoing`] for the first malformed node, in
    /// declaration order.
    pub fn build(self) -> Result<ProcessGraph> {
        for node in &self.nodes {
            if !node.kind().is_start() && node.incoming().is_empty() {
                return Err(TokenflowError::MissingIncoming {
                    node_id: node.id(),
                    kind: node.kind(),
                    label: node.label().to_string(),
                });
            }
            if !node.kind().is_end() && node.outgoing().is_empty() {
                return Err(TokenflowError::MissingOutgoing {
                    node_id: node.id(),
                    kind: node.kind(),
                    label: node.label().to_string(),
                });
            }
        }

        let starts = self
            .nodes
            .iter()
            .filter(|n| n.kind().is_start())
            .map(ProcessNode::id)
            .collect();

        Ok(ProcessGraph::new(self.nodes, self.flows, starts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_well_formed_graph() {
        let mut builder = ProcessBuilder::new();
        let s = builder.add_node(NodeKind::Start, "S");
        let a = builder.add_node(NodeKind::Activity, "A");
        let e = builder.add_node(NodeKind::End, "E");
        builder.connect(s, a);
        builder.connect(a, e);

        let graph = builder.build().unwrap();
        assert_eq!(graph.start_ids(), &[s]);
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = ProcessBuilder::new().build().unwrap();
        assert_eq!(graph.node_count(), 0);
        assert!(graph.start_ids().is_empty());
    }

    #[test]
    fn rejects_node_without_incoming() {
        let mut builder = ProcessBuilder::new();
        let s = builder.add_node(NodeKind::Start, "S");
        let orphan = builder.add_node(NodeKind::Activity, "Orphan");
        let e = builder.add_node(NodeKind::End, "E");
        builder.connect(s, e);
        builder.connect(orphan, e);

        let err = builder.build().unwrap_err();
        assert_eq!(err.code(), "E001");
        assert!(err.is_shape_error());
    }

    #[test]
    fn rejects_node_without_outgoing() {
        let mut builder = ProcessBuilder::new();
        let s = builder.add_node(NodeKind::Start, "S");
        let dead = builder.add_node(NodeKind::ExclusiveChoice, "Dead end");
        builder.connect(s, dead);

        let err = builder.build().unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn duplicate_flows_are_allowed() {
        // Two distinct flows between the same pair of nodes are legal and
        // give the target two incoming entries.
        let mut builder = ProcessBuilder::new();
        let s = builder.add_node(NodeKind::Start, "S");
        let j = builder.add_node(NodeKind::ParallelJoin, "J");
        let e = builder.add_node(NodeKind::End, "E");
        let f1 = builder.connect(s, j);
        let f2 = builder.connect(s, j);
        builder.connect(j, e);

        let graph = builder.build().unwrap();
        assert_eq!(graph.node(j).incoming(), &[f1, f2]);
    }
}
