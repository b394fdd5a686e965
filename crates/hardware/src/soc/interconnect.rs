//! Snooping bus interconnect.
//!
//! This module implements the shared bus the private caches snoop on. It provides:
//! 1. **Peer list:** The ordered set of caches, one per core; order is the
//!    snoop visiting order.
//! 2. **Access routing:** Runs an access on one core's cache against the
//!    whole peer list.
//! 3. **Self-snoop control:** Whether a requester observes its own broadcasts.
//!
//! The bus is idealized: one access is in flight at a time and no timing is modeled.

use tracing::debug;

use crate::common::{AccessType, ConfigError};
use crate::config::Config;
use crate::core::cache::controller::access_on_bus;
use crate::core::cache::{Cache, CoherenceState};
use crate::stats::Report;

/// Shared bus connecting the private caches.
#[derive(Debug)]
pub struct Bus {
    /// Caches in snoop order; index is the core id.
    caches: Vec<Cache>,
    /// Whether a requester is part of its own broadcasts.
    snoop_self: bool,
}

impl Bus {
    /// Builds `config.coherence.cores` identical caches.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoCores`] for zero cores, or the geometry error
    /// of the cache configuration.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let caches = (0..config.coherence.cores)
            .map(|_| Cache::from_config(&config.cache))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_caches(caches, config.coherence.snoop_self)
    }

    /// Wraps already-built caches; their order becomes the snoop order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoCores`] if `caches` is empty.
    pub fn from_caches(caches: Vec<Cache>, snoop_self: bool) -> Result<Self, ConfigError> {
        if caches.is_empty() {
            return Err(ConfigError::NoCores);
        }
        debug!(cores = caches.len(), snoop_self, "bus created");
        Ok(Self { caches, snoop_self })
    }

    /// Runs one access of `core` on the bus.
    ///
    /// # Panics
    ///
    /// Panics if `core` is not a valid core id.
    pub fn access(&mut self, core: usize, addr: u64, op: AccessType) {
        access_on_bus(&mut self.caches, core, addr, op, self.snoop_self);
    }

    /// Number of caches on the bus.
    pub fn len(&self) -> usize {
        self.caches.len()
    }

    /// Always `false`; a bus has at least one cache.
    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }

    /// Whether requesters snoop themselves.
    pub const fn snoop_self(&self) -> bool {
        self.snoop_self
    }

    /// Cache of `core`.
    pub fn cache(&self, core: usize) -> Option<&Cache> {
        self.caches.get(core)
    }

    /// All caches in snoop order.
    pub fn caches(&self) -> &[Cache] {
        &self.caches
    }

    /// State of `addr` in every cache, in core order.
    pub fn states_of(&self, addr: u64) -> Vec<Option<CoherenceState>> {
        self.caches.iter().map(|c| c.probe(addr)).collect()
    }

    /// Snapshot of every cache, in core order.
    pub fn reports(&self) -> Vec<Report> {
        self.caches.iter().map(Cache::snapshot).collect()
    }
}
