//! `WaitQueue`: FIFO of passengers waiting to board.
//!
//! Each entry carries the passenger's private turn signal: a condition
//! variable that is only ever waited on with the vehicle's one shared mutex.
//! Signalling an entry therefore wakes exactly that passenger and nobody
//! else, so the queue head can be called forward without a broadcast.
//!
//! The queue holds handles only.  It never owns passenger state and it is
//! only touched while the shared mutex is held.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Condvar;
use rc_core::PassengerId;

/// One waiting passenger.
#[derive(Debug)]
pub struct QueueEntry {
    pub passenger: PassengerId,
    /// Position in the run-wide order of queue joins.
    pub ticket:    u64,
    pub turn:      Arc<Condvar>,
}

/// FIFO of waiting passengers.
#[derive(Debug, Default)]
pub struct WaitQueue {
    entries:     VecDeque<QueueEntry>,
    next_ticket: u64,
}

impl WaitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `passenger` at the tail and return its ticket.
    ///
    /// Tickets increase strictly with every push, so comparing two tickets
    /// tells which passenger queued first.
    pub fn push(&mut self, passenger: PassengerId, turn: Arc<Condvar>) -> u64 {
        debug_assert!(!self.contains(passenger), "{passenger} queued twice");
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.entries.push_back(QueueEntry { passenger, ticket, turn });
        ticket
    }

    pub fn head(&self) -> Option<&QueueEntry> {
        self.entries.front()
    }

    pub fn is_head(&self, passenger: PassengerId) -> bool {
        self.head().is_some_and(|e| e.passenger == passenger)
    }

    /// Wake the head's turn signal.  Returns who was signalled.
    pub fn signal_head(&self) -> Option<PassengerId> {
        let head = self.head()?;
        head.turn.notify_one();
        Some(head.passenger)
    }

    /// Wake every queued passenger.  Only used when the ride closes.
    pub fn signal_all(&self) -> usize {
        for entry in &self.entries {
            entry.turn.notify_one();
        }
        self.entries.len()
    }

    /// Remove the head, which must be `passenger`.
    ///
    /// # Panics
    /// Panics if `passenger` is not at the head: admitting anyone else would
    /// break arrival order.
    pub fn pop_head(&mut self, passenger: PassengerId) -> QueueEntry {
        match self.entries.pop_front() {
            Some(entry) if entry.passenger == passenger => entry,
            other => panic!(
                "{passenger} admitted out of order; queue head was {:?}",
                other.map(|e| e.passenger),
            ),
        }
    }

    /// Remove `passenger` wherever it stands.  Used when the ride closes
    /// while it is still waiting.
    pub fn remove(&mut self, passenger: PassengerId) -> Option<QueueEntry> {
        let pos = self.entries.iter().position(|e| e.passenger == passenger)?;
        self.entries.remove(pos)
    }

    pub fn contains(&self, passenger: PassengerId) -> bool {
        self.entries.iter().any(|e| e.passenger == passenger)
    }

    /// Queued passengers, head first.
    pub fn passengers(&self) -> Vec<PassengerId> {
        self.entries.iter().map(|e| e.passenger).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
