//! Ready queue.

use crate::types::NodeId;
use std::collections::VecDeque;

/// The ordered worklist of nodes scheduled for evaluation.
///
/// Duplicates are legal and meaningful: a join node is queued once per
/// completed predecessor branch before it is actually dispatchable, and each
/// queued entry costs one evaluation when popped.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    entries: VecDeque<NodeId>,
}

impl ReadyQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node onto the back of the queue.
    pub fn push(&mut self, node: NodeId) {
        self.entries.push_back(node);
    }

    /// Pop the queue head, if any.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.entries.pop_front()
    }

    /// Number of queued entries (duplicates included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a node is currently queued.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.entries.contains(&node)
    }
}
