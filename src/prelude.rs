//! Convenience re-exports of the most commonly used items.
//!
//! ```
//! use tokenflow::prelude::*;
//!
//! let mut builder = ProcessBuilder::new();
//! let s = builder.add_node(NodeKind::Start, "S");
//! let e = builder.add_node(NodeKind::End, "E");
//! builder.connect(s, e);
//! let graph = builder.build().unwrap();
//!
//! let executor = Executor::new(ExecutorConfig::new());
//! let (report, _events) = executor.execute_collected(&graph).unwrap();
//! assert!(report.all_completed());
//! ```

pub use crate::engine::{
    ExecutionReport, Executor, ExecutorConfig, FixedRouter, FlowRouter, RandomRouter, RunRecord,
};
pub use crate::error::{Result, TokenflowError};
pub use crate::model::{NodeKind, ProcessBuilder, ProcessGraph, ProcessNode, SequenceFlow};
pub use crate::trace::{EventLog, FiringEvent, RunOutcome, TraceSink};
pub use crate::types::{ExecutionId, FlowId, NodeId};
