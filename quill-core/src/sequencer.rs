//! Request sequencing for overlapping suggestion fetches.
//!
//! Every outgoing request takes a ticket. Only the response carrying the
//! most recently issued ticket may touch UI state; anything older is stale.

/// Opaque, monotonically increasing request id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn number(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    pub fn latest(&self) -> Option<Ticket> {
        (self.issued > 0).then_some(Ticket(self.issued))
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued > 0 && ticket.0 == self.issued
    }
}
