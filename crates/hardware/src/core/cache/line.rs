//! Cache line slot.

use super::protocol::CoherenceState;

/// One line slot of the storage grid.
///
/// Slots are created once with the cache and reused on every fill; `state` is
/// only meaningful while `valid` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Whether the slot holds a block.
    pub valid: bool,
    /// Tag of the held block.
    pub tag: u64,
    /// Coherence state of the held block.
    pub state: CoherenceState,
    /// Cycle of the last touch; smaller is older.
    pub recency: u64,
}

impl CacheLine {
    /// Returns `true` if the slot holds `tag`.
    #[inline]
    pub const fn holds(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }

    /// Returns `true` if evicting this slot requires a writeback.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.valid && self.state.is_dirty()
    }

    /// Empties the slot.
    pub fn invalidate(&mut self) {
        self.valid = false;
        self.state = CoherenceState::Invalid;
    }
}
