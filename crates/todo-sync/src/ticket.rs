//! Request Sequencing
//!
//! Every store call takes a `Ticket` before it is sent. A response for an
//! item is applied unless a response with a newer ticket has already been
//! applied to that item. Tickets that were only issued, or whose request
//! failed, never block anything.
//!
//! A load answers for every item at once: items touched by a newer
//! applied response keep their local version.

use std::collections::{HashMap, HashSet};

/// Request sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Sequencer {
    next: u64,
    /// Ticket of the newest applied load
    load_applied: Option<Ticket>,
    /// Ticket of the newest applied response per item id
    applied: HashMap<u32, Ticket>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }

    /// Claim item `id` for a response carrying `ticket`.
    ///
    /// False if a newer response for `id` was already applied.
    pub fn accept(&mut self, id: u32, ticket: Ticket) -> bool {
        if self.applied.get(&id).is_some_and(|applied| *applied > ticket) {
            return false;
        }
        self.applied.insert(id, ticket);
        true
    }

    /// Claim the list for a load response; false if a newer load was applied
    pub fn accept_load(&mut self, ticket: Ticket) -> bool {
        if self.load_applied.is_some_and(|applied| applied > ticket) {
            return false;
        }
        self.load_applied = Some(ticket);
        true
    }

    /// Items whose newest applied response is newer than `ticket`
    pub fn newer_than(&self, ticket: Ticket) -> HashSet<u32> {
        self.applied
            .iter()
            .filter(|(_, applied)| **applied > ticket)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Record that a load with `ticket` answered for `ids`
    pub fn record_load(&mut self, ticket: Ticket, ids: impl IntoIterator<Item = u32>) {
        for id in ids {
            let entry = self.applied.entry(id).or_insert(ticket);
            if *entry < ticket {
                *entry = ticket;
            }
        }
    }
}
