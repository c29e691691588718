//! Guards against stale responses overwriting newer ones.
//!
//! A frontend that fires a search on every page or filter change may see
//! responses arrive out of order. Each request takes a [`Ticket`] from the
//! [`RequestSequencer`]; when a response comes back, only the holder of the
//! newest ticket may apply it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Proof that a request was issued at a given point in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out monotonically increasing tickets.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket newer than every ticket issued before it.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// `true` if no request has been issued since `ticket`.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Passes `response` through only if `ticket` is still the newest.
    pub fn accept<T>(&self, ticket: Ticket, response: T) -> Option<T> {
        if self.is_latest(ticket) {
            Some(response)
        } else {
            tracing::debug!(ticket = ticket.0, "dropping superseded response");
            None
        }
    }
}
