//! Per-node-kind firing rules.
//!
//! This is the one place where node-kind polymorphism matters: a single
//! exhaustive `match` over [`NodeKind`] selects the firing rule for each
//! dispatched node. The dispatcher is the only writer of the marking and the
//! only producer of queue entries besides the driver's run seeding.

use super::marking::Marking;
use super::queue::ReadyQueue;
use super::route::FlowRouter;
use crate::model::{NodeKind, ProcessGraph, ProcessNode};
use crate::trace::{FiringEvent, TraceSink};
use tracing::{debug, trace};

/// Applies firing rules to dispatched nodes.
///
/// Borrows the graph and router for the duration of one execution; marking,
/// queue, and sink are passed per dispatch so the driver keeps ownership of
/// the mutable state.
pub struct Dispatcher<'a> {
    graph: &'a ProcessGraph,
    router: &'a dyn FlowRouter,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over a graph with the given router.
    #[must_use]
    pub fn new(graph: &'a ProcessGraph, router: &'a dyn FlowRouter) -> Self {
        Self { graph, router }
    }

    /// Dispatch one popped node, applying exactly one firing rule.
    ///
    /// Returns the number of firings reported to the sink: 1 for default
    /// firing, 0 for a gated parallel join or a token-less exclusive choice,
    /// and one per consumed token for an exclusive choice.
    pub fn dispatch(
        &self,
        node: &ProcessNode,
        marking: &mut Marking,
        queue: &mut ReadyQueue,
        sink: &mut dyn TraceSink,
    ) -> usize {
        match node.kind() {
            NodeKind::Start
            | NodeKind::End
            | NodeKind::Activity
            | NodeKind::IntermediateThrow => self.fire_default(node, marking, queue, sink),
            NodeKind::ParallelJoin => {
                if marking.covers(node.incoming().iter().copied()) {
                    self.fire_default(node, marking, queue, sink)
                } else {
                    // Not all incoming flows hold a token yet. Drop this
                    // evaluation; the join is re-queued by whichever firing
                    // delivers the next incoming token.
                    trace!(node = %node.id(), label = node.label(), "parallel join not ready");
                    0
                }
            }
            NodeKind::ExclusiveChoice => self.fire_exclusive(node, marking, queue, sink),
        }
    }

    /// Default firing: consume one token per incoming flow (where present),
    /// produce one token per outgoing flow, and schedule every target.
    fn fire_default(
        &self,
        node: &ProcessNode,
        marking: &mut Marking,
        queue: &mut ReadyQueue,
        sink: &mut dyn TraceSink,
    ) -> usize {
        for &flow in node.incoming() {
            marking.remove_one(flow);
        }
        for &flow in node.outgoing() {
            marking.add(flow);
            queue.push(self.graph.flow(flow).target());
        }
        debug!(node = %node.id(), kind = %node.kind(), label = node.label(), "node fired");
        sink.record(FiringEvent::new(node.id(), node.label()));
        1
    }

    /// Exclusive choice: each incoming flow that holds a token routes one
    /// token to an independently chosen outgoing flow.
    fn fire_exclusive(
        &self,
        node: &ProcessNode,
        marking: &mut Marking,
        queue: &mut ReadyQueue,
        sink: &mut dyn TraceSink,
    ) -> usize {
        // Snapshot the token-holding incoming flows once at dispatch time,
        // in declaration order. Tokens routed back onto an incoming flow by
        // this very dispatch are not consumed again.
        let present: Vec<_> = node
            .incoming()
            .iter()
            .copied()
            .filter(|&flow| marking.contains(flow))
            .collect();

        let mut fired = 0;
        for flow in present {
            marking.remove_one(flow);
            let route = self.router.pick_route(node.outgoing().len());
            let chosen = node.outgoing()[route];
            marking.add(chosen);
            queue.push(self.graph.flow(chosen).target());
            debug!(
                node = %node.id(),
                label = node.label(),
                from = %flow,
                to = %chosen,
                "exclusive choice routed token"
            );
            sink.record(FiringEvent::new(node.id(), node.label()));
            fired += 1;
        }
        fired
    }
}
