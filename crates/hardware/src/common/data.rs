//! Memory Access Types.
//!
//! This module defines the classification of processor accesses fed to a cache.
//! These types are used for the following:
//! 1. **Counter Selection:** Choosing between the read and write counters of a cache.
//! 2. **Protocol Events:** Selecting the fill or hit transition in the coherence protocol.
//! 3. **Trace Decoding:** Mapping the operation token of a trace record to an access.

use serde::{Deserialize, Serialize};

/// Type of processor access presented to a cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    /// Data read access.
    ///
    /// Also the fallback for any operation code that is not a write.
    #[default]
    Read,

    /// Data write access.
    ///
    /// A write always leaves the accessed line dirty (`Modified` or `SharedModified`).
    Write,
}

impl AccessType {
    /// Decodes an operation code character.
    ///
    /// Only `'w'` (either case) is a write. Every other code, known or not,
    /// is accepted as a read rather than rejected.
    ///
    /// # Arguments
    ///
    /// * `code` - The operation character, usually the first char of a trace token.
    pub const fn from_code(code: char) -> Self {
        match code {
            'w' | 'W' => Self::Write,
            _ => Self::Read,
        }
    }

    /// Returns `true` for [`AccessType::Write`].
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}
