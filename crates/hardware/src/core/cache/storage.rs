//! Set-associative line storage.
//!
//! Lines live in one contiguous `Vec` of `sets * ways` slots; set `s` occupies
//! `s * ways .. (s + 1) * ways`. Slots are addressed by [`LineRef`] handles so
//! the controller can hold on to a line across snoop broadcasts without
//! borrowing the grid.

use super::line::CacheLine;
use super::protocol::CoherenceState;
use crate::common::Geometry;

/// Position of one line in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineRef {
    /// Set index.
    pub set: usize,
    /// Way within the set.
    pub way: usize,
}

/// Fixed grid of cache lines.
#[derive(Clone, Debug)]
pub struct Storage {
    geometry: Geometry,
    lines: Vec<CacheLine>,
}

impl Storage {
    /// Allocates an all-invalid grid for `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            lines: vec![CacheLine::default(); geometry.num_lines()],
        }
    }

    /// Shape of the grid.
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Finds the valid line holding `addr`.
    pub fn lookup(&self, addr: u64) -> Option<LineRef> {
        let parts = self.geometry.decompose(addr);
        self.set(parts.index)
            .iter()
            .position(|line| line.holds(parts.tag))
            .map(|way| LineRef {
                set: parts.index,
                way,
            })
    }

    /// Overwrites `victim` with the block of `addr` in the
    /// [`CoherenceState::Transitional`] state.
    ///
    /// The victim's recency is left alone; the replacement policy has
    /// already stamped it.
    pub fn install(&mut self, addr: u64, victim: LineRef) {
        let tag = self.geometry.tag_of(addr);
        let line = self.line_mut(victim);
        line.tag = tag;
        line.valid = true;
        line.state = CoherenceState::Transitional;
    }

    /// Lines of set `index`, in way order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= sets`.
    pub fn set(&self, index: usize) -> &[CacheLine] {
        let ways = self.geometry.ways();
        &self.lines[index * ways..(index + 1) * ways]
    }

    /// Mutable lines of set `index`, in way order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= sets`.
    pub fn set_mut(&mut self, index: usize) -> &mut [CacheLine] {
        let ways = self.geometry.ways();
        &mut self.lines[index * ways..(index + 1) * ways]
    }

    /// Line at `at`.
    pub fn line(&self, at: LineRef) -> &CacheLine {
        &self.set(at.set)[at.way]
    }

    /// Mutable line at `at`.
    pub fn line_mut(&mut self, at: LineRef) -> &mut CacheLine {
        &mut self.set_mut(at.set)[at.way]
    }

    /// All lines, set-major.
    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }
}
