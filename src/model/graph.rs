//! Materialized process graph.

use super::flow::SequenceFlow;
use super::node::ProcessNode;
use crate::types::{FlowId, NodeId};

/// A read-only view over the nodes and sequence flows of a process model.
///
/// Built once by the [`crate::model::ProcessBuilder`] (or any loader honoring
/// the same contract) and never mutated afterwards. Node and flow IDs are
/// dense indices into the graph's internal storage, so lookups are O(1).
#[derive(Debug, Clone)]
pub struct ProcessGraph {
    nodes: Vec<ProcessNode>,
    flows: Vec<SequenceFlow>,
    starts: Vec<NodeId>,
}

impl ProcessGraph {
    pub(crate) fn new(
        nodes: Vec<ProcessNode>,
        flows: Vec<SequenceFlow>,
        starts: Vec<NodeId>,
    ) -> Self {
        Self {
            nodes,
            flows,
            starts,
        }
    }

    /// Look up a node by ID.
    ///
    /// # Panics
    /// Panics if the ID was not issued for this graph. The engine only ever
    /// dereferences IDs it was given, so this is a programming-contract
    /// violation rather than a recoverable error.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &ProcessNode {
        &self.nodes[id.as_u32() as usize]
    }

    /// Look up a sequence flow by ID.
    ///
    /// # Panics
    /// Panics if the ID was not issued for this graph.
    #[must_use]
    pub fn flow(&self, id: FlowId) -> &SequenceFlow {
        &self.flows[id.as_u32() as usize]
    }

    /// Get the incoming flows of a node, in declaration order.
    pub fn incoming<'a>(
        &'a self,
        node: &'a ProcessNode,
    ) -> impl Iterator<Item = &'a SequenceFlow> {
        node.incoming().iter().map(|&id| self.flow(id))
    }

    /// Get the outgoing flows of a node, in declaration order.
    pub fn outgoing<'a>(
        &'a self,
        node: &'a ProcessNode,
    ) -> impl Iterator<Item = &'a SequenceFlow> {
        node.outgoing().iter().map(|&id| self.flow(id))
    }

    /// Get all Start-kind nodes, in graph-declaration order.
    pub fn start_nodes(&self) -> impl Iterator<Item = &ProcessNode> {
        self.starts.iter().map(|&id| self.node(id))
    }

    /// Get the IDs of all Start-kind nodes, in graph-declaration order.
    #[must_use]
    pub fn start_ids(&self) -> &[NodeId] {
        &self.starts
    }

    /// Get all nodes, in declaration order.
    #[must_use]
    pub fn nodes(&self) -> &[ProcessNode] {
        &self.nodes
    }

    /// Get all sequence flows, in declaration order.
    #[must_use]
    pub fn flows(&self) -> &[SequenceFlow] {
        &self.flows
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of sequence flows in the graph.
    #[must_use]
    pub fn flow_count(&self) -> usize {
        self.flows.len()
    }
}
