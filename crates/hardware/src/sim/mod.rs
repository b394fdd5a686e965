//! Trace parsing and replay.
//!
//! Provides the trace record format and the simulator that feeds records to
//! the bus in order.

/// Trace-driven simulator.
pub mod simulator;

/// Trace record parsing.
pub mod trace;

pub use simulator::Simulator;
pub use trace::{TraceReader, TraceRecord};
