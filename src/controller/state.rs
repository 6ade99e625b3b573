// IDS Monitor - Controller State
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

/// Lifecycle of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Sequence number of one outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Fencing for overlapping requests.
///
/// A response is admitted only if its ticket is newer than every ticket
/// admitted before it, so a slow stale response never overwrites newer state.
#[derive(Debug, Default)]
pub struct Fence {
    issued: u64,
    applied: u64,
}

impl Fence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Whether `ticket` belongs to the most recently issued request.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Admit a response. Returns false for stale responses.
    pub fn admit(&mut self, ticket: Ticket) -> bool {
        if ticket.0 > self.applied {
            self.applied = ticket.0;
            true
        } else {
            false
        }
    }
}
