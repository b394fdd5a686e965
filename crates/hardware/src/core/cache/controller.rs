//! Coherence controller: the local access path.
//!
//! An access runs to completion before returning, including every snoop it
//! broadcasts. Peers are visited one at a time in slice order, and the
//! requester is part of that slice: when self-snooping is on it observes its
//! own broadcast like any other cache.

use tracing::{debug, trace};

use super::Cache;
use super::protocol::{BusTransaction, ProtocolEvent};
use super::storage::LineRef;
use crate::common::AccessType;

/// Result of the requester's local lookup.
enum Lookup {
    /// The block is present at this slot.
    Hit(LineRef),
    /// The block was installed at this slot in the `Transitional` state.
    Miss(LineRef),
}

/// Broadcasts `txn` for `addr` to `peers` in order and ORs the responses.
///
/// Every peer is visited even after one has answered `true`. The fold starts
/// from `false`, so an empty broadcast answers `false`.
///
/// # Arguments
///
/// * `peers` - All caches on the bus, requester included.
/// * `requester` - Position of the broadcasting cache in `peers`.
/// * `snoop_self` - Whether the requester is visited too.
/// * `txn` - The transaction to broadcast.
/// * `addr` - The block address.
pub fn broadcast(
    peers: &mut [Cache],
    requester: usize,
    snoop_self: bool,
    txn: BusTransaction,
    addr: u64,
) -> bool {
    peers
        .iter_mut()
        .enumerate()
        .filter(|(i, _)| snoop_self || *i != requester)
        .fold(false, |shared, (_, peer)| peer.snoop(addr, txn) || shared)
}

impl Cache {
    /// Performs one processor access against `peers[this]`.
    ///
    /// `peers` is the ordered list of every cache on the bus, including the
    /// requester itself at position `this`; the requester snoops itself.
    /// Use [`crate::soc::Bus`] to turn self-snooping off.
    ///
    /// # Arguments
    ///
    /// * `peers` - All caches on the bus.
    /// * `this` - Position of the accessing cache in `peers`.
    /// * `addr` - Byte address.
    /// * `op` - Read or write.
    ///
    /// # Panics
    ///
    /// Panics if `this >= peers.len()`, or if the replacement policy finds no
    /// victim on a miss.
    pub fn access(peers: &mut [Self], this: usize, addr: u64, op: AccessType) {
        access_on_bus(peers, this, addr, op, true);
    }

    /// Advances the clock, counts the access and resolves hit or fill.
    fn begin(&mut self, addr: u64, op: AccessType) -> Lookup {
        self.stats.current_cycle += 1;
        match op {
            AccessType::Read => self.stats.reads += 1,
            AccessType::Write => self.stats.writes += 1,
        }

        if let Some(at) = self.storage.lookup(addr) {
            self.policy
                .touch(self.storage.line_mut(at), self.stats.current_cycle);
            return Lookup::Hit(at);
        }

        let at = self.allocate(addr);
        self.storage.install(addr, at);
        Lookup::Miss(at)
    }

    /// Chooses and stamps the slot `addr` will be filled into.
    ///
    /// Counts a writeback when the evicted line was dirty.
    fn allocate(&mut self, addr: u64) -> LineRef {
        let cycle = self.stats.current_cycle;
        let set = self.storage.geometry().index_of(addr);
        let Some(way) = self.policy.victim(self.storage.set(set), cycle) else {
            panic!(
                "replacement policy found no victim in set {set} of a {}-way cache",
                self.storage.geometry().ways()
            );
        };

        let at = LineRef { set, way };
        let victim = self.storage.line_mut(at);
        self.policy.touch(victim, cycle);
        if victim.is_dirty() {
            self.stats.write_backs += 1;
            debug!(set, way, tag = victim.tag, state = ?victim.state, "writeback");
        }
        at
    }

    /// Settles a freshly filled line once the bus has answered.
    fn complete_fill(&mut self, at: LineRef, op: AccessType, shared: bool) {
        let line = self.storage.line_mut(at);
        line.state = line
            .state
            .transition(ProtocolEvent::local(op, false), shared);

        if shared {
            self.stats.cache_to_cache_transfers += 1;
        } else {
            self.stats.memory_transactions += 1;
        }
        match op {
            AccessType::Read => self.stats.read_misses += 1,
            AccessType::Write => self.stats.write_misses += 1,
        }
    }
}

/// Runs one access of `peers[this]`, optionally skipping the requester in its
/// own broadcasts.
pub(crate) fn access_on_bus(
    peers: &mut [Cache],
    this: usize,
    addr: u64,
    op: AccessType,
    snoop_self: bool,
) {
    match peers[this].begin(addr, op) {
        Lookup::Hit(at) => {
            if op.is_write() {
                let before = peers[this].storage.line(at).state;
                let shared = before.needs_update_broadcast()
                    && broadcast(peers, this, snoop_self, BusTransaction::Update, addr);
                let after = before.transition(ProtocolEvent::WriteHit, shared);
                peers[this].storage.line_mut(at).state = after;
                trace!(core = this, addr, ?op, ?before, ?after, "hit");
            } else {
                trace!(core = this, addr, ?op, "hit");
            }
        }
        Lookup::Miss(at) => {
            let shared = broadcast(peers, this, snoop_self, BusTransaction::Read, addr);
            if shared && op.is_write() {
                // Responses to the update do not change where the block came from.
                let _ = broadcast(peers, this, snoop_self, BusTransaction::Update, addr);
            }
            peers[this].complete_fill(at, op, shared);
            trace!(
                core = this,
                addr,
                ?op,
                shared,
                state = ?peers[this].storage.line(at).state,
                "miss"
            );
        }
    }
}
