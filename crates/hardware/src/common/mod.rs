//! Common utilities and types used throughout the coherence simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Access Types:** Read/write classification of processor accesses.
//! 2. **Addressing:** Validated cache geometry and tag/index/offset decomposition.
//! 3. **Error Handling:** Configuration, trace and simulation error types.

/// Cache geometry and address decomposition.
pub mod addr;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{Geometry, LineAddr};
pub use data::AccessType;
pub use error::{ConfigError, SimError, TraceError, TraceErrorKind};
