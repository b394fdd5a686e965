//! Error definitions.
//!
//! This module defines the recoverable failures of the simulator. It provides:
//! 1. **Configuration Errors:** Inconsistent cache geometry or malformed config files.
//! 2. **Trace Errors:** Malformed trace records, reported with their line number.
//! 3. **Simulation Errors:** The union of the above plus I/O failures while replaying a trace.
//!
//! A missing replacement victim is deliberately absent here: it is an invariant
//! breach and aborts instead of returning an error.

use thiserror::Error;

/// Failure to build a cache or bus from its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Line size is zero or not a power of two.
    #[error("line size must be a non-zero power of two, got {0} bytes")]
    LineSizeNotPowerOfTwo(usize),

    /// Associativity of zero leaves no way to allocate into.
    #[error("associativity must be at least 1")]
    ZeroAssociativity,

    /// Derived set count is zero or not a power of two.
    #[error("number of sets must be a non-zero power of two, got {0}")]
    SetsNotPowerOfTwo(usize),

    /// Size is not exactly `sets * ways * line` for any power-of-two set count.
    #[error("cache size {size} is not a whole multiple of {ways} ways x {line}-byte lines")]
    GeometryMismatch {
        /// Requested total size in bytes.
        size: usize,
        /// Requested associativity.
        ways: usize,
        /// Requested line size in bytes.
        line: usize,
    },

    /// A bus needs at least one cache.
    #[error("a coherence bus needs at least one core")]
    NoCores,

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reason a trace record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceErrorKind {
    /// The record ended before the named field.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// The core field is not a decimal integer.
    #[error("invalid core id `{0}`")]
    BadCore(String),

    /// The address field is not hexadecimal.
    #[error("invalid address `{0}`")]
    BadAddress(String),

    /// The core id does not name a cache on the bus.
    #[error("core {core} out of range for {cores} cores")]
    CoreOutOfRange {
        /// Requested core id.
        core: usize,
        /// Number of caches on the bus.
        cores: usize,
    },
}

/// A rejected trace record with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("trace line {line}: {kind}")]
pub struct TraceError {
    /// 1-based line number in the trace.
    pub line: usize,
    /// What was wrong with the record.
    pub kind: TraceErrorKind,
}

/// Failure while replaying a trace.
#[derive(Debug, Error)]
pub enum SimError {
    /// Reading the trace failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record in the trace was malformed.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// The simulator could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
