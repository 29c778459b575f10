//! Tokenflow
//!
//! A token-propagation execution engine for business-process models
//! expressed as directed flow graphs of typed nodes (events, activities,
//! gateways) connected by sequence flows that carry control tokens.
//!
//! # Overview
//!
//! Execution works on a marking (the multiset of flows currently holding a
//! token) and a ready queue (the worklist of nodes to evaluate next). The
//! driver seeds one run per Start node and drains the queue; the dispatcher
//! applies one firing rule per popped node:
//!
//! - **Default firing** (Start, End, Activity, IntermediateThrow): consume
//!   one token per incoming flow, produce one per outgoing flow, schedule
//!   every target.
//! - **Parallel join** (AND-join): fires with default semantics only once
//!   every incoming flow holds a token; otherwise the evaluation is dropped.
//! - **Exclusive choice** (XOR-split): each arriving token is routed to one
//!   independently, uniformly chosen outgoing flow.
//!
//! Popping an End node terminates the run immediately; firings are streamed
//! to a [`trace::TraceSink`] as they happen.
//!
//! # Example
//!
//! ```
//! use tokenflow::prelude::*;
//!
//! let mut builder = ProcessBuilder::new();
//! let start = builder.add_node(NodeKind::Start, "Order received");
//! let check = builder.add_node(NodeKind::Activity, "Check stock");
//! let done = builder.add_node(NodeKind::End, "Order done");
//! builder.connect(start, check);
//! builder.connect(check, done);
//! let graph = builder.build().unwrap();
//!
//! let executor = Executor::new(ExecutorConfig::new());
//! let (report, events) = executor.execute_collected(&graph).unwrap();
//! assert!(report.all_completed());
//! assert_eq!(events.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod model;
pub mod prelude;
pub mod trace;
pub mod types;

// Re-export key types at crate root for convenience
pub use engine::{ExecutionReport, Executor, ExecutorConfig};
pub use error::{Result, TokenflowError};
pub use model::{NodeKind, ProcessBuilder, ProcessGraph};
pub use trace::{EventLog, FiringEvent, RunOutcome, TraceSink};
pub use types::{ExecutionId, FlowId, NodeId};
