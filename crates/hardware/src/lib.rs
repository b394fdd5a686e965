//! Snooping cache coherence simulator library.
//!
//! This crate models private set-associative caches kept coherent over an
//! idealized shared bus. It provides the following:
//! 1. **Cache:** Tag storage, LRU replacement and the per-line coherence state machine.
//! 2. **Bus:** The ordered peer list that snoop requests are broadcast over.
//! 3. **Statistics:** Miss, writeback and traffic counters with a fixed-format report.
//! 4. **Simulation:** Configuration, trace parsing and trace replay.
//!
//! Only state and counts are modeled; no data moves and no time passes beyond
//! the per-cache access clock.

/// Common types (access kinds, geometry, errors).
pub mod common;
/// Simulator configuration (defaults and serde structures).
pub mod config;
/// Per-core private caches.
pub mod core;
/// Trace parsing and the trace-driven simulator.
pub mod sim;
/// Shared bus.
pub mod soc;
/// Cache statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Private cache of one core.
pub use crate::core::Cache;
/// Trace-driven simulator.
pub use crate::sim::Simulator;
/// Shared snooping bus.
pub use crate::soc::Bus;
/// Counter snapshot of one cache.
pub use crate::stats::Report;
