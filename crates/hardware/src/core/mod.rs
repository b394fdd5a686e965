//! Per-core components.
//!
//! Each simulated core contributes one private cache to the bus; the core
//! itself is reduced to the stream of accesses it issues.

/// Snooping set-associative cache (storage, LRU, coherence controller).
pub mod cache;

pub use self::cache::Cache;
