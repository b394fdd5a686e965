//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the line that has not been touched for the longest time.
//! Each line carries the cycle of its last touch; the victim is the line with
//! the smallest stamp. Empty slots are always filled before anything is evicted.
//!
//! Ways are scanned in increasing order and a stamp equal to the current
//! minimum replaces it, so among equally old lines the highest way wins.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1)
//!   - `victim()`: O(W) where W is the number of ways (associativity)
//! - **Space Complexity:** O(1) beyond the per-line stamp
//! - **Best Case:** Working sets that fit in a set's ways
//! - **Worst Case:** Scanning patterns larger than cache capacity (thrashing)

use super::ReplacementPolicy;
use crate::core::cache::line::CacheLine;

/// LRU Policy (stateless; stamps live in the lines).
#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Creates a new LRU policy instance.
    pub const fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Stamps `line` as the most recently used.
    fn touch(&mut self, line: &mut CacheLine, cycle: u64) {
        line.recency = cycle;
    }

    /// Returns the first invalid way, else the oldest way (ties to the highest way).
    ///
    /// Stamps never exceed `cycle`, so a non-empty set always yields a victim.
    fn victim(&mut self, set: &[CacheLine], cycle: u64) -> Option<usize> {
        if let Some(way) = set.iter().position(|line| !line.valid) {
            return Some(way);
        }

        let mut victim = None;
        let mut min = cycle;
        for (way, line) in set.iter().enumerate() {
            if line.recency <= min {
                victim = Some(way);
                min = line.recency;
            }
        }
        victim
    }
}
