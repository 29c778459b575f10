//! Token-propagation engine: marking, ready queue, routing, firing rules,
//! and the execution driver.

mod dispatcher;
mod driver;
mod marking;
mod queue;
mod route;

pub use dispatcher::Dispatcher;
pub use driver::{ExecutionReport, Executor, ExecutorConfig, RunRecord};
pub use marking::Marking;
pub use queue::ReadyQueue;
pub use route::{FixedRouter, FlowRouter, RandomRouter};
