//! `RideBarrier`: reusable rendezvous guarded by the shared mutex.
//!
//! The counter and generation live inside the mutex-protected state (any `T`
//! that exposes a [`BarrierState`] through `AsMut`), and waiting parties park
//! on the barrier's own condition variable, which releases that same mutex.
//! The party whose arrival completes the count bumps the generation, resets
//! the counter and wakes everyone, so the barrier is immediately ready for
//! the next round.
//!
//! Waiting is keyed on the generation rather than the counter: a party woken
//! late still sees that *its* round has been released even if a new round
//! has already started counting.

use parking_lot::{Condvar, MutexGuard};

/// Counter and round number for one [`RideBarrier`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BarrierState {
    /// Parties that have arrived in the current round.
    pub arrived:    usize,
    /// Completed rounds.
    pub generation: u64,
}

impl AsMut<BarrierState> for BarrierState {
    fn as_mut(&mut self) -> &mut BarrierState {
        self
    }
}

/// A cyclic barrier for a fixed number of parties.
#[derive(Debug)]
pub struct RideBarrier {
    parties:  usize,
    released: Condvar,
}

impl RideBarrier {
    /// # Panics
    /// Panics if `parties` is zero.
    pub fn new(parties: usize) -> Self {
        assert!(parties > 0, "a barrier needs at least one party");
        Self { parties, released: Condvar::new() }
    }

    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Arrive and block until all parties of this round have arrived.
    ///
    /// `guard` must lock the mutex that protects the barrier's state; it is
    /// released while parked and held again on return.  Returns `true` for
    /// the one party whose arrival released the round.
    pub fn arrive<T: AsMut<BarrierState>>(&self, guard: &mut MutexGuard<'_, T>) -> bool {
        let state = AsMut::<BarrierState>::as_mut(&mut **guard);
        let round = state.generation;
        state.arrived += 1;

        if state.arrived == self.parties {
            state.arrived = 0;
            state.generation += 1;
            self.released.notify_all();
            return true;
        }

        while AsMut::<BarrierState>::as_mut(&mut **guard).generation == round {
            self.released.wait(guard);
        }
        false
    }
}
