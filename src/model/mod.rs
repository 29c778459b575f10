//! Process model: nodes, sequence flows, and the materialized graph.
//!
//! The engine consumes an already-materialized [`ProcessGraph`]. The
//! [`ProcessBuilder`] is the in-crate way to produce one; any external loader
//! honoring the same contract (kind tags limited to [`NodeKind`], flow lists
//! consistent with flow endpoints, no dangling flows) works just as well.

mod builder;
mod flow;
mod graph;
mod node;

pub use builder::ProcessBuilder;
pub use flow::SequenceFlow;
pub use graph::ProcessGraph;
pub use node::{NodeKind, ProcessNode};
