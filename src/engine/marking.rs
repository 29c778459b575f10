//! Token marking.

use crate::types::FlowId;

/// The multiset of sequence flows currently carrying a token.
///
/// Represented as an ordered collection permitting duplicates: two tokens may
/// simultaneously occupy the same flow, which happens when two firings both
/// route a token onto a shared downstream flow before it is consumed.
/// Mutated only by the dispatcher, read by it to test join-readiness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marking {
    tokens: Vec<FlowId>,
}

impl Marking {
    /// Create an empty marking.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one token occurrence to a flow.
    pub fn add(&mut self, flow: FlowId) {
        self.tokens.push(flow);
    }

    /// Remove one token occurrence from a flow.
    ///
    /// Returns `true` if a token was present and removed, `false` if the flow
    /// held no token.
    pub fn remove_one(&mut self, flow: FlowId) -> bool {
        if let Some(pos) = self.tokens.iter().position(|&t| t == flow) {
            self.tokens.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check whether a flow holds at least one token.
    #[must_use]
    pub fn contains(&self, flow: FlowId) -> bool {
        self.tokens.contains(&flow)
    }

    /// Count the token occurrences on a flow.
    #[must_use]
    pub fn count(&self, flow: FlowId) -> usize {
        self.tokens.iter().filter(|&&t| t == flow).count()
    }

    /// Check whether every one of the given flows holds at least one token.
    ///
    /// This is the AND-join readiness test: each distinct flow must hold a
    /// token, not merely the same flow repeatedly.
    #[must_use]
    pub fn covers<I>(&self, flows: I) -> bool
    where
        I: IntoIterator<Item = FlowId>,
    {
        flows.into_iter().all(|f| self.contains(f))
    }

    /// Total number of token occurrences across all flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no flow holds a token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The raw token occurrences, in insertion order.
    #[must_use]
    pub fn tokens(&self) -> &[FlowId] {
        &self.tokens
    }
}
