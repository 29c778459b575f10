//! Firing trace: events, run outcomes, and sinks.
//!
//! The trace sink is a pure side-effect boundary. The engine streams one
//! [`FiringEvent`] per successful firing and one [`RunOutcome`] per finished
//! run; how the stream is rendered (console, UI, log) is the caller's
//! concern.

use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single node firing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiringEvent {
    /// The node that fired.
    pub node: NodeId,
    /// The node's display label.
    pub label: String,
}

impl FiringEvent {
    /// Create a new firing event.
    #[must_use]
    pub fn new(node: NodeId, label: impl Into<String>) -> Self {
        Self {
            node,
            label: label.into(),
        }
    }
}

impl fmt::Display for FiringEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}] fired", self.node, self.label)
    }
}

/// How a single run (one start node's traversal) finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// An End node was popped; the run terminated normally.
    Completed,
    /// The queue emptied without an End node being popped.
    Exhausted,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => f.write_str("completed"),
            Self::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// Receiver for the firing stream.
pub trait TraceSink {
    /// Record a firing.
    fn record(&mut self, event: FiringEvent);

    /// Notified once per run when it finishes, with the run's outcome.
    fn run_finished(&mut self, outcome: RunOutcome) {
        let _ = outcome;
    }
}

/// Growable in-memory sink.
///
/// Collects the full event stream for later inspection; used by tests and by
/// the collected entry point of the executor.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<FiringEvent>,
    outcomes: Vec<RunOutcome>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded firings, in order.
    #[must_use]
    pub fn events(&self) -> &[FiringEvent] {
        &self.events
    }

    /// The recorded firing labels, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.label.as_str()).collect()
    }

    /// The recorded per-run outcomes, in run order.
    #[must_use]
    pub fn outcomes(&self) -> &[RunOutcome] {
        &self.outcomes
    }

    /// Number of recorded firings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no firing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consume the log, returning the recorded firings.
    #[must_use]
    pub fn into_events(self) -> Vec<FiringEvent> {
        self.events
    }
}

impl TraceSink for EventLog {
    fn record(&mut self, event: FiringEvent) {
        self.events.push(event);
    }

    fn run_finished(&mut self, outcome: RunOutcome) {
        self.outcomes.push(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_display() {
        let event = FiringEvent::new(NodeId::new(2), "Check stock");
        assert_eq!(format!("{}", event), "[node_2 Check stock] fired");
    }

    #[test]
    fn log_collects_in_order() {
        let mut log = EventLog::new();
        log.record(FiringEvent::new(NodeId::new(0), "S"));
        log.record(FiringEvent::new(NodeId::new(1), "A"));
        log.run_finished(RunOutcome::Completed);

        assert_eq!(log.len(), 2);
        assert_eq!(log.labels(), vec!["S", "A"]);
        assert_eq!(log.outcomes(), &[RunOutcome::Completed]);
    }

    #[test]
    fn into_events_consumes() {
        let mut log = EventLog::new();
        log.record(FiringEvent::new(NodeId::new(0), "S"));
        let events = log.into_events();
        assert_eq!(events[0].label, "S");
    }

    #[test]
    fn default_run_finished_is_noop() {
        struct CountOnly(usize);
        impl TraceSink for CountOnly {
            fn record(&mut self, _event: FiringEvent) {
                self.0 += 1;
            }
        }

        let mut sink = CountOnly(0);
        sink.record(FiringEvent::new(NodeId::new(0), "S"));
        sink.run_finished(RunOutcome::Exhausted);
        assert_eq!(sink.0, 1);
    }

    #[test]
    fn event_serializes() {
        let event = FiringEvent::new(NodeId::new(4), "Ship order");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"node\":4"));
        assert!(json.contains("Ship order"));

        let back: FiringEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
