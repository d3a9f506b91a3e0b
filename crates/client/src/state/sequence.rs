//! Request sequencing: the latest issued request wins.
//!
//! Every read that may overwrite shared state takes a [`Ticket`] before it is
//! sent. A slot remembers the ticket of the response that last wrote it and
//! refuses responses carrying an older ticket, so a slow early response can
//! never clobber a fast later one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Position of a request in issue order. `Ticket::default()` precedes every
/// issued ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic ticket dispenser shared by all operations of one state holder.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.last.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// A value plus the ticket of the response that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequenced<T> {
    value: T,
    applied: Ticket,
}

impl<T> Sequenced<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            applied: Ticket::default(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn applied(&self) -> Ticket {
        self.applied
    }

    /// Store `value` if `ticket` is newer than the one last applied.
    /// Returns `false` (and drops `value`) for a stale response.
    pub fn apply(&mut self, ticket: Ticket, value: T) -> bool {
        if ticket <= self.applied {
            return false;
        }
        self.value = value;
        self.applied = ticket;
        true
    }
}
