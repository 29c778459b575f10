//! Execution driver.
//!
//! Outer control loop of the engine: discovers start nodes, seeds the ready
//! queue, and drains it run-to-completion, fully synchronously. Each popped
//! node is fully processed (marking updated, queue updated, trace emitted)
//! before the next pop.

use super::dispatcher::Dispatcher;
use super::marking::Marking;
use super::queue::ReadyQueue;
use super::route::{FlowRouter, RandomRouter};
use crate::error::{Result, TokenflowError};
use crate::model::ProcessGraph;
use crate::trace::{EventLog, FiringEvent, RunOutcome, TraceSink};
use crate::types::{ExecutionId, NodeId};
use serde::Serialize;
use tracing::{debug, info};

/// Configuration for the executor.
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
    /// Maximum number of queue pops across a whole `execute` call.
    ///
    /// `None` (the default) means unbounded. The engine has no cycle
    /// detection, so a bound is recommended for graphs that may loop the
    /// queue indefinitely, and for test harnesses.
    pub step_limit: Option<usize>,
}

impl ExecutorConfig {
    /// Create the default (unbounded) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step limit.
    #[must_use]
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }
}

/// Record of a single run (one start node's traversal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    /// The start node that seeded the run.
    pub start: NodeId,
    /// How the run finished.
    pub outcome: RunOutcome,
    /// Number of firings reported during the run.
    pub firings: usize,
}

/// Summary of one `execute` call.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionReport {
    /// Identifier assigned to this execution.
    pub execution_id: ExecutionId,
    /// One record per start node, in graph-declaration order.
    pub runs: Vec<RunRecord>,
    /// Total queue pops across all runs.
    pub steps: usize,
}

impl ExecutionReport {
    /// Check whether every run completed (reached an End node).
    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.runs
            .iter()
            .all(|r| r.outcome == RunOutcome::Completed)
    }

    /// Total firings across all runs.
    #[must_use]
    pub fn total_firings(&self) -> usize {
        self.runs.iter().map(|r| r.firings).sum()
    }
}

/// The token-propagation execution engine.
///
/// Issues one run per start node. Marking and queue are scoped to the whole
/// `execute` call and shared across those runs: stranded queue entries and
/// tokens from an earlier run are visible to later runs, mirroring a shared
/// workspace rather than per-run isolation.
///
/// # Example
///
/// ```
/// use tokenflow::engine::{Executor, ExecutorConfig};
/// use tokenflow::model::{NodeKind, ProcessBuilder};
///
/// let mut builder = ProcessBuilder::new();
/// let s = builder.add_node(NodeKind::Start, "S");
/// let a = builder.add_node(NodeKind::Activity, "A");
/// let e = builder.add_node(NodeKind::End, "E");
/// builder.connect(s, a);
/// builder.connect(a, e);
/// let graph = builder.build().unwrap();
///
/// let executor = Executor::new(ExecutorConfig::new());
/// let (report, events) = executor.execute_collected(&graph).unwrap();
/// assert!(report.all_completed());
/// let labels: Vec<&str> = events.iter().map(|e| e.label.as_str()).collect();
/// assert_eq!(labels, vec!["S", "A", "E"]);
/// ```
pub struct Executor {
    config: ExecutorConfig,
    router: Box<dyn FlowRouter>,
}

impl Executor {
    /// Create an executor with an entropy-seeded random router.
    #[must_use]
    pub fn new(config: ExecutorConfig) -> Self {
        Self::with_router(config, Box::new(RandomRouter::new()))
    }

    /// Create an executor with an injected router.
    ///
    /// Inject [`RandomRouter::seeded`](super::RandomRouter::seeded) or
    /// [`FixedRouter`](super::FixedRouter) for deterministic replay.
    #[must_use]
    pub fn with_router(config: ExecutorConfig, router: Box<dyn FlowRouter>) -> Self {
        Self { config, router }
    }

    /// Execute every start node's run, streaming firings to `sink`.
    ///
    /// A graph with zero start nodes yields an empty report and no events.
    ///
    /// # Errors
    /// Returns [`TokenflowError::StepLimitExceeded`] if the configured step
    /// bound trips.
    pub fn execute(
        &self,
        graph: &ProcessGraph,
        sink: &mut dyn TraceSink,
    ) -> Result<ExecutionReport> {
        let execution_id = ExecutionId::new();
        let dispatcher = Dispatcher::new(graph, self.router.as_ref());

        let mut marking = Marking::new();
        let mut queue = ReadyQueue::new();
        let mut steps = 0usize;
        let mut runs = Vec::with_capacity(graph.start_ids().len());

        for &start in graph.start_ids() {
            info!(execution = %execution_id, start = %start, "run started");
            queue.push(start);

            let mut firings = 0usize;
            let outcome = loop {
                let Some(current) = queue.pop() else {
                    break RunOutcome::Exhausted;
                };
                steps += 1;
                if let Some(limit) = self.config.step_limit {
                    if steps > limit {
                        return Err(TokenflowError::StepLimitExceeded { limit });
                    }
                }

                let node = graph.node(current);
                firings += dispatcher.dispatch(node, &mut marking, &mut queue, sink);

                // Popping an End node ends the run immediately, even with
                // unprocessed entries left from sibling branches.
                if node.kind().is_end() {
                    break RunOutcome::Completed;
                }
            };

            info!(
                execution = %execution_id,
                start = %start,
                outcome = %outcome,
                firings,
                "run finished"
            );
            sink.run_finished(outcome);
            runs.push(RunRecord {
                start,
                outcome,
                firings,
            });
        }

        debug!(execution = %execution_id, steps, runs = runs.len(), "execution finished");
        Ok(ExecutionReport {
            execution_id,
            runs,
            steps,
        })
    }

    /// Execute and collect the event stream in memory.
    ///
    /// Convenience wrapper over [`Executor::execute`] with an [`EventLog`]
    /// sink.
    ///
    /// # Errors
    /// Same as [`Executor::execute`].
    pub fn execute_collected(
        &self,
        graph: &ProcessGraph,
    ) -> Result<(ExecutionReport, Vec<FiringEvent>)> {
        let mut log = EventLog::new();
        let report = self.execute(graph, &mut log)?;
        Ok((report, log.into_events()))
    }
}
