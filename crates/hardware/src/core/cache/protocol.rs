//! Snooping coherence protocol.
//!
//! Five stable states plus a fill placeholder, with update-based sharing:
//! a write to a shared block broadcasts a bus update instead of invalidating
//! the other copies.
//!
//! | State | Dirty | Other copies |
//! |---|---|---|
//! | `Modified` | yes | none |
//! | `Exclusive` | no | none |
//! | `SharedModified` | yes | possibly (this cache owns the writeback) |
//! | `SharedClean` | no | possibly |
//!
//! The functions here are pure: they map a state and an event to the next
//! state (and, for snoops, to the response put on the bus). The controller in
//! [`super::Cache`] owns the storage and counters.

use serde::Serialize;

use crate::common::AccessType;

/// Coherence state of one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum CoherenceState {
    /// Slot holds nothing.
    #[default]
    Invalid,
    /// Freshly filled line whose final state is not yet known.
    ///
    /// Only exists between a fill and the end of the same access. It is
    /// visible to the requester's own snoop and answers `false` to it.
    Transitional,
    /// Sole, dirty copy.
    Modified,
    /// Sole, clean copy.
    Exclusive,
    /// Shared copy, clean with respect to the owner.
    SharedClean,
    /// Shared copy that owns the writeback.
    SharedModified,
}

/// Snoop request broadcast on the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BusTransaction {
    /// Read request (BusRd): "does anyone hold this block?".
    Read,
    /// Update (BusUpd): "I wrote this block; refresh your copy".
    Update,
}

/// Input to the transition function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtocolEvent {
    /// Local read miss filled into a fresh line.
    ReadFill,
    /// Local write miss filled into a fresh line.
    WriteFill,
    /// Local read hit.
    ReadHit,
    /// Local write hit.
    WriteHit,
    /// Remote `BusTransaction::Read` observed.
    BusRead,
    /// Remote `BusTransaction::Update` observed.
    BusUpdate,
}

impl ProtocolEvent {
    /// Local event for an access that missed (`hit == false`) or hit.
    pub const fn local(op: AccessType, hit: bool) -> Self {
        match (op, hit) {
            (AccessType::Read, false) => Self::ReadFill,
            (AccessType::Write, false) => Self::WriteFill,
            (AccessType::Read, true) => Self::ReadHit,
            (AccessType::Write, true) => Self::WriteHit,
        }
    }

    /// Snoop event for a bus transaction.
    pub const fn snoop(txn: BusTransaction) -> Self {
        match txn {
            BusTransaction::Read => Self::BusRead,
            BusTransaction::Update => Self::BusUpdate,
        }
    }
}

impl CoherenceState {
    /// Next state after `event`.
    ///
    /// `shared` is the OR of the peer responses for the broadcast tied to the
    /// event; it is ignored by events that do not broadcast.
    pub const fn transition(self, event: ProtocolEvent, shared: bool) -> Self {
        match event {
            ProtocolEvent::ReadFill => {
                if shared {
                    Self::SharedClean
                } else {
                    Self::Exclusive
                }
            }
            ProtocolEvent::WriteFill => {
                if shared {
                    Self::SharedModified
                } else {
                    Self::Modified
                }
            }
            ProtocolEvent::ReadHit => self,
            ProtocolEvent::WriteHit => match self {
                Self::Exclusive | Self::Modified => Self::Modified,
                _ if shared => Self::SharedModified,
                _ => Self::Modified,
            },
            ProtocolEvent::BusRead => match self {
                Self::Exclusive => Self::SharedClean,
                Self::Modified | Self::SharedModified => Self::SharedModified,
                other => other,
            },
            ProtocolEvent::BusUpdate => match self {
                Self::SharedClean | Self::SharedModified => Self::SharedClean,
                other => other,
            },
        }
    }

    /// Response this state puts on the bus for a snooped `txn`.
    ///
    /// Owners holding a block as `Exclusive` or `Modified` do not answer an
    /// update: no writer can be sharing a block they own outright.
    pub const fn snoop_response(self, txn: BusTransaction) -> bool {
        match txn {
            BusTransaction::Read => matches!(
                self,
                Self::Exclusive | Self::Modified | Self::SharedModified | Self::SharedClean
            ),
            BusTransaction::Update => matches!(self, Self::SharedClean | Self::SharedModified),
        }
    }

    /// Whether a write hit in this state must broadcast a bus update.
    pub const fn needs_update_broadcast(self) -> bool {
        !matches!(self, Self::Exclusive | Self::Modified)
    }

    /// Whether evicting a line in this state counts a writeback.
    pub const fn is_dirty(self) -> bool {
        matches!(self, Self::Modified | Self::SharedModified)
    }

    /// Whether this state claims sole ownership of the block.
    pub const fn is_exclusive_owner(self) -> bool {
        matches!(self, Self::Modified | Self::Exclusive)
    }
}
