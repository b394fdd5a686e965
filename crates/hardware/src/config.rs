//! Configuration system for the coherence simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline cache geometry and bus population.
//! 2. **Structures:** Per-cache geometry and bus-level coherence settings.
//! 3. **Loading:** JSON deserialization with per-field defaults.
//!
//! Every cache on the bus shares the same geometry. Use `Config::default()` or
//! `Config::from_json` and override individual fields from the CLI.

use serde::Deserialize;

use crate::common::{ConfigError, Geometry};

/// Default configuration constants for the simulator.
mod defaults {
    /// Default cache capacity (8 KiB).
    pub const CACHE_SIZE: usize = 8 * 1024;

    /// Default associativity (8 ways).
    pub const CACHE_WAYS: usize = 8;

    /// Default line size in bytes.
    pub const CACHE_LINE: usize = 64;

    /// Default number of private caches on the bus.
    pub const CORES: usize = 4;

    /// Whether a requester observes its own broadcasts by default.
    pub const SNOOP_SELF: bool = true;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Geometry shared by every private cache.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Bus population and snoop behavior.
    #[serde(default)]
    pub coherence: CoherenceConfig,
}

impl Config {
    /// Parses a JSON configuration document.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Geometry of one private cache.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total cache size in bytes
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: usize,

    /// Associativity (number of ways)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Cache line size in bytes
    #[serde(default = "CacheConfig::default_line")]
    pub line_bytes: usize,
}

impl CacheConfig {
    /// Returns the default cache size in bytes.
    const fn default_size() -> usize {
        defaults::CACHE_SIZE
    }

    /// Returns the default cache associativity (number of ways).
    const fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    /// Returns the default cache line size in bytes.
    const fn default_line() -> usize {
        defaults::CACHE_LINE
    }

    /// Validates this configuration into a [`Geometry`].
    ///
    /// # Errors
    ///
    /// Propagates the [`ConfigError`] from [`Geometry::new`].
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(self.size_bytes, self.ways, self.line_bytes)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            ways: defaults::CACHE_WAYS,
            line_bytes: defaults::CACHE_LINE,
        }
    }
}

/// Coherence bus configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoherenceConfig {
    /// Number of private caches (one per core)
    #[serde(default = "CoherenceConfig::default_cores")]
    pub cores: usize,

    /// Include the requester in its own snoop broadcasts.
    ///
    /// Turning this off is an experiment knob; traffic counts differ from the
    /// reference model when it is `false`.
    #[serde(default = "CoherenceConfig::default_snoop_self")]
    pub snoop_self: bool,
}

impl CoherenceConfig {
    /// Returns the default number of cores.
    const fn default_cores() -> usize {
        defaults::CORES
    }

    /// Returns the default self-snoop setting.
    const fn default_snoop_self() -> bool {
        defaults::SNOOP_SELF
    }
}

impl Default for CoherenceConfig {
    fn default() -> Self {
        Self {
            cores: defaults::CORES,
            snoop_self: defaults::SNOOP_SELF,
        }
    }
}
