//! Cache geometry and address decomposition.
//!
//! This module splits a flat byte address into the fields a set-associative cache
//! indexes by. It provides the following:
//! 1. **Validation:** A `Geometry` only exists for power-of-two sets and line sizes
//!    whose product with the associativity is exactly the cache size.
//! 2. **Decomposition:** `offset = addr mod line`, `index = (addr / line) mod sets`,
//!    `tag = (addr / line) / sets`, computed with shifts and masks.

use super::error::ConfigError;

/// Fields of an address as seen by one cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineAddr {
    /// Upper address bits identifying the block within its set.
    pub tag: u64,
    /// Set the block maps to.
    pub index: usize,
    /// Byte offset within the line (never used for lookups).
    pub offset: u64,
}

/// Validated shape of a set-associative cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    size_bytes: usize,
    sets: usize,
    ways: usize,
    line_bytes: usize,
    line_shift: u32,
    set_shift: u32,
}

impl Geometry {
    /// Validates a cache shape.
    ///
    /// # Arguments
    ///
    /// * `size_bytes` - Total capacity in bytes.
    /// * `ways` - Associativity (lines per set).
    /// * `line_bytes` - Line (block) size in bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the line size is not a power of two, the
    /// associativity is zero, the size is not `sets * ways * line_bytes` exactly,
    /// or the resulting set count is not a power of two.
    pub fn new(size_bytes: usize, ways: usize, line_bytes: usize) -> Result<Self, ConfigError> {
        if !line_bytes.is_power_of_two() {
            return Err(ConfigError::LineSizeNotPowerOfTwo(line_bytes));
        }
        if ways == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }
        let mismatch = ConfigError::GeometryMismatch {
            size: size_bytes,
            ways,
            line: line_bytes,
        };
        let Some(set_bytes) = ways.checked_mul(line_bytes) else {
            return Err(mismatch);
        };
        if size_bytes % set_bytes != 0 {
            return Err(mismatch);
        }
        let sets = size_bytes / set_bytes;
        if !sets.is_power_of_two() {
            return Err(ConfigError::SetsNotPowerOfTwo(sets));
        }

        Ok(Self {
            size_bytes,
            sets,
            ways,
            line_bytes,
            line_shift: line_bytes.trailing_zeros(),
            set_shift: sets.trailing_zeros(),
        })
    }

    /// Total capacity in bytes.
    pub const fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Number of sets.
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Line size in bytes.
    pub const fn line_bytes(&self) -> usize {
        self.line_bytes
    }

    /// Total number of lines (`sets * ways`).
    pub const fn num_lines(&self) -> usize {
        self.sets * self.ways
    }

    /// Splits `addr` into tag, set index and line offset.
    #[inline]
    pub const fn decompose(&self, addr: u64) -> LineAddr {
        let block = addr >> self.line_shift;
        LineAddr {
            tag: block >> self.set_shift,
            index: (block & (self.sets as u64 - 1)) as usize,
            offset: addr & (self.line_bytes as u64 - 1),
        }
    }

    /// Returns the set index `addr` maps to.
    #[inline]
    pub const fn index_of(&self, addr: u64) -> usize {
        self.decompose(addr).index
    }

    /// Returns the tag of `addr`.
    #[inline]
    pub const fn tag_of(&self, addr: u64) -> u64 {
        self.decompose(addr).tag
    }
}
