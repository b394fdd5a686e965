//! Cache Replacement Policies.
//!
//! Selects victim lines within a set and maintains the recency information
//! they are chosen by.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, driven by per-line cycle stamps.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

use super::line::CacheLine;

/// Trait for cache replacement policies.
///
/// Policies keep their bookkeeping in the [`CacheLine::recency`] field of the
/// lines they manage, so one policy value serves every set of a cache.
pub trait ReplacementPolicy: Send + Sync {
    /// Records a use of `line` at `cycle`.
    ///
    /// Called on every hit and on the victim right after it is chosen, before
    /// the new block is written into it.
    ///
    /// # Arguments
    ///
    /// * `line` - The line that was used.
    /// * `cycle` - The access clock, already advanced for the current access.
    fn touch(&mut self, line: &mut CacheLine, cycle: u64);

    /// Selects the way to fill in `set`.
    ///
    /// # Arguments
    ///
    /// * `set` - The lines of the target set, in way order.
    /// * `cycle` - The access clock, already advanced for the current access.
    ///
    /// # Returns
    ///
    /// The way to fill, or `None` if the policy found no candidate. The
    /// controller treats `None` as a fatal invariant breach.
    fn victim(&mut self, set: &[CacheLine], cycle: u64) -> Option<usize>;
}
