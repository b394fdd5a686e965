//! Snooping Set-Associative Cache.
//!
//! This module implements one core's private cache on a shared snooping bus.
//! It models tags, per-line coherence state and LRU recency, and counts the
//! traffic an access causes. No data is stored; only state and counts are.
//!
//! The local access path lives in [`controller`]; this file holds the cache
//! itself and the responder side that peers drive through their broadcasts.

/// Local access path and snoop broadcast.
pub mod controller;

/// Cache line slot.
pub mod line;

/// Cache replacement policy implementations (LRU).
pub mod policies;

/// Coherence states and the pure transition function.
pub mod protocol;

/// Line storage grid.
pub mod storage;

use std::fmt;

use tracing::{debug, trace};

pub use self::controller::broadcast;
pub use self::line::CacheLine;
pub use self::protocol::{BusTransaction, CoherenceState, ProtocolEvent};
pub use self::storage::{LineRef, Storage};

use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::{ConfigError, Geometry};
use crate::config::CacheConfig;
use crate::stats::{CacheStats, Report};

/// Private cache of one core.
///
/// Owns its storage grid outright. Coherence with other caches happens only
/// through [`Cache::snoop_read`] and [`Cache::snoop_update`], which a
/// requester calls on every peer while handling its own access.
pub struct Cache {
    storage: Storage,
    policy: Box<dyn ReplacementPolicy>,
    stats: CacheStats,
}

impl Cache {
    /// Creates an empty LRU cache.
    ///
    /// # Arguments
    ///
    /// * `size_bytes` - Total capacity in bytes.
    /// * `ways` - Associativity.
    /// * `line_bytes` - Line size in bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] unless the set count and line size are
    /// powers of two and `size_bytes == sets * ways * line_bytes`.
    pub fn new(size_bytes: usize, ways: usize, line_bytes: usize) -> Result<Self, ConfigError> {
        let geometry = Geometry::new(size_bytes, ways, line_bytes)?;
        Ok(Self::with_policy(geometry, Box::new(LruPolicy::new())))
    }

    /// Creates an empty LRU cache from a [`CacheConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`Cache::new`].
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        Self::new(config.size_bytes, config.ways, config.line_bytes)
    }

    /// Creates an empty cache with an explicit replacement policy.
    pub fn with_policy(geometry: Geometry, policy: Box<dyn ReplacementPolicy>) -> Self {
        debug!(
            size = geometry.size_bytes(),
            sets = geometry.sets(),
            ways = geometry.ways(),
            line = geometry.line_bytes(),
            "cache created"
        );
        Self {
            storage: Storage::new(geometry),
            policy,
            stats: CacheStats::default(),
        }
    }

    /// Shape of this cache.
    pub const fn geometry(&self) -> &Geometry {
        self.storage.geometry()
    }

    /// All line slots, set-major.
    pub fn lines(&self) -> &[CacheLine] {
        self.storage.lines()
    }

    /// Live counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Read-only snapshot of the counters with the derived miss rate.
    pub fn snapshot(&self) -> Report {
        self.stats.report()
    }

    /// State of the block holding `addr`, if present.
    ///
    /// Does not touch LRU or counters.
    pub fn probe(&self, addr: u64) -> Option<CoherenceState> {
        self.storage
            .lookup(addr)
            .map(|at| self.storage.line(at).state)
    }

    /// Answers a peer's read request for `addr`.
    ///
    /// A hit downgrades `Exclusive` to `SharedClean` and `Modified` to
    /// `SharedModified`, and answers `true` for any of the four stable
    /// valid states. A miss answers `false`.
    pub fn snoop_read(&mut self, addr: u64) -> bool {
        self.snoop(addr, BusTransaction::Read)
    }

    /// Answers a peer's update for `addr`.
    ///
    /// A shared copy (`SharedClean` or `SharedModified`) becomes
    /// `SharedClean` and answers `true`; owners in `Exclusive` or `Modified`
    /// are left alone and answer `false`, as does a miss.
    pub fn snoop_update(&mut self, addr: u64) -> bool {
        self.snoop(addr, BusTransaction::Update)
    }

    /// Applies a snooped `txn` to the local copy of `addr`.
    pub fn snoop(&mut self, addr: u64, txn: BusTransaction) -> bool {
        let Some(at) = self.storage.lookup(addr) else {
            return false;
        };
        let line = self.storage.line_mut(at);
        let before = line.state;
        line.state = before.transition(ProtocolEvent::snoop(txn), false);
        let response = before.snoop_response(txn);
        trace!(addr, ?txn, ?before, after = ?line.state, response, "snoop");
        response
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("geometry", self.storage.geometry())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
