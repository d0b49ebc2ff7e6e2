//! The `Vehicle`: shared ride state and the Load → Run → Unload control loop.
//!
//! # Locking
//!
//! One mutex protects everything in [`RideState`]: the queue, the boarded
//! passengers, the phase, the barrier counter and the closed flag.  Every
//! condition variable in the system (the phase signal, each passenger's turn
//! signal, the barrier's release signal and the close signal) is only ever
//! waited on with that mutex, so a wake hands the lock straight into the
//! woken thread's continuation.
//!
//! # Trip protocol
//!
//! ```text
//! vehicle                                 passengers
//! ───────                                 ──────────
//! LOADING   while boarded < capacity:     join_queue: push, signal phase,
//!             signal queue head             wait on own turn signal
//!             wait on phase signal        board: pop self, take a seat,
//!                                           signal phase, arrive at barrier
//! RUNNING   sleep(ride_duration)          (parked in the barrier)
//! UNLOADING arrive at barrier  ────────▶  barrier releases every seat
//!           while boarded > 0:            unboard: leave seat, signal phase
//!             wait on phase signal          when the vehicle is empty
//! ```
//!
//! The barrier has `capacity + 1` parties and the vehicle only arrives once
//! the ride is over, so no passenger can get off early.
//!
//! No [`EventSink`] call is ever made with the mutex held.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex, MutexGuard};
use rc_core::{DwellTimer, EventSink, PassengerId, RideConfig, RideEvent, TripId};
use tracing::{debug, info, trace};

use crate::barrier::{BarrierState, RideBarrier};
use crate::queue::WaitQueue;
use crate::{RideClosed, RideError, RideResult};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Where the vehicle is within its lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Before the first trip.
    Idle,
    Loading,
    Running,
    Unloading,
    /// All trips done; nobody is admitted any more.
    Halted,
}

// ── Shared state ──────────────────────────────────────────────────────────────

/// Everything guarded by the vehicle's mutex.
#[derive(Debug)]
pub(crate) struct RideState {
    pub(crate) phase:      Phase,
    /// Trip currently loading, running or unloading (or the last one run).
    pub(crate) trip:       TripId,
    pub(crate) queue:      WaitQueue,
    /// Passengers aboard, in seat order.
    pub(crate) boarded:    Vec<PassengerId>,
    pub(crate) barrier:    BarrierState,
    pub(crate) closed:     bool,
    /// `(trip, passenger)` for every admission, in admission order.
    pub(crate) admissions: Vec<(TripId, PassengerId)>,
}

impl AsMut<BarrierState> for RideState {
    fn as_mut(&mut self) -> &mut BarrierState {
        &mut self.barrier
    }
}

/// A consistent copy of the ride state taken under the lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleSnapshot {
    pub phase:   Phase,
    pub trip:    TripId,
    pub boarded: Vec<PassengerId>,
    pub queued:  Vec<PassengerId>,
    pub closed:  bool,
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// The ride vehicle, shared by its own control thread and every passenger.
pub struct Vehicle<S: EventSink, D: DwellTimer> {
    capacity:      usize,
    num_trips:     u32,
    state:         Mutex<RideState>,
    /// Wakes the vehicle: someone joined the queue, boarded, or emptied it.
    phase_changed: Condvar,
    /// Wakes roaming passengers when the ride closes.
    closing:       Condvar,
    barrier:       RideBarrier,
    sink:          S,
    dwell:         D,
}

impl<S: EventSink, D: DwellTimer> Vehicle<S, D> {
    /// Build a vehicle for a validated configuration.
    pub fn new(config: &RideConfig, sink: S, dwell: D) -> RideResult<Self> {
        config.validate().map_err(RideError::Config)?;
        Ok(Self {
            capacity:      config.capacity as usize,
            num_trips:     config.num_trips,
            state:         Mutex::new(RideState {
                phase:      Phase::Idle,
                trip:       TripId::FIRST,
                queue:      WaitQueue::new(),
                boarded:    Vec::with_capacity(config.capacity as usize),
                barrier:    BarrierState::default(),
                closed:     false,
                admissions: Vec::new(),
            }),
            phase_changed: Condvar::new(),
            closing:       Condvar::new(),
            barrier:       RideBarrier::new(config.barrier_parties()),
            sink,
            dwell,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn dwell(&self) -> &D {
        &self.dwell
    }

    // ── Control loop ──────────────────────────────────────────────────────

    /// Run every configured trip, then close the ride.
    ///
    /// Returns the number of trips completed.  Blocks until the last trip
    /// is fully unloaded.
    pub fn drive(&self) -> u32 {
        let mut trip = TripId::FIRST;
        let mut completed = 0;
        for _ in 0..self.num_trips {
            info!(%trip, "trip starting");
            self.sink.record(&RideEvent::TripStarted { trip });

            self.load(trip);
            self.run(trip);
            self.unload(trip);

            completed += 1;
            trip = trip.next();
        }
        self.halt(completed);
        completed
    }

    /// LOADING: call queue heads forward one at a time until every seat is
    /// taken.
    fn load(&self, trip: TripId) {
        let mut state = self.state.lock();
        debug_assert!(state.boarded.is_empty(), "loading with passengers still aboard");
        state.phase = Phase::Loading;
        state.trip = trip;

        while state.boarded.len() < self.capacity {
            if let Some(head) = state.queue.signal_head() {
                trace!(%trip, %head, boarded = state.boarded.len(), "calling queue head");
            }
            self.phase_changed.wait(&mut state);
        }

        assert_eq!(state.boarded.len(), self.capacity, "departing with a wrong load");
        state.phase = Phase::Running;
        drop(state);

        debug!(%trip, "full, departing");
        self.sink.record(&RideEvent::Departed { trip });
    }

    /// RUNNING: the only phase with no lock held and no passenger contact.
    fn run(&self, trip: TripId) {
        let duration = self.dwell.ride_duration();
        self.sink.record(&RideEvent::RideStarted { trip, duration });
        std::thread::sleep(duration);
        self.sink.record(&RideEvent::RideFinished { trip });
    }

    /// UNLOADING: release the riders through the barrier, then wait until
    /// the last one is off.
    fn unload(&self, trip: TripId) {
        let mut state = self.state.lock();
        state.phase = Phase::Unloading;
        self.barrier.arrive(&mut state);

        while !state.boarded.is_empty() {
            trace!(%trip, aboard = state.boarded.len(), "waiting to empty");
            self.phase_changed.wait(&mut state);
        }
        drop(state);

        debug!(%trip, "empty");
        self.sink.record(&RideEvent::Emptied { trip });
    }

    /// HALTED: close the ride and announce it.
    fn halt(&self, trips_completed: u32) {
        self.close();
        info!(trips_completed, "ride closed");
        self.sink.record(&RideEvent::Halted { trips_completed });
    }

    /// Stop admitting passengers and wake every queued or roaming passenger
    /// so it can exit.  Idempotent.
    pub(crate) fn close(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        state.phase = Phase::Halted;
        let woken = state.queue.signal_all();
        self.closing.notify_all();
        trace!(woken, "woke queued passengers for close");
    }

    // ── Passenger-facing operations ───────────────────────────────────────

    /// Join the tail of the queue and wait to be called forward.
    ///
    /// On success the returned [`Admission`] still holds the shared lock,
    /// so the caller boards in the same critical section that woke it.
    /// Returns [`RideClosed`] if the ride closes first; the passenger is
    /// then no longer queued.
    pub fn join_queue(
        &self,
        passenger: PassengerId,
        turn: &Arc<Condvar>,
    ) -> Result<Admission<'_, S, D>, RideClosed> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(RideClosed);
        }

        let ticket = state.queue.push(passenger, Arc::clone(turn));
        self.phase_changed.notify_one();

        loop {
            turn.wait(&mut state);
            if state.closed {
                state.queue.remove(passenger);
                return Err(RideClosed);
            }
            if self.may_admit(&state, passenger) {
                return Ok(Admission { vehicle: self, state, passenger, ticket });
            }
        }
    }

    /// True when `passenger` heads the queue during loading and a seat is
    /// free.  Guards against stray wake-ups.
    fn may_admit(&self, state: &RideState, passenger: PassengerId) -> bool {
        state.phase == Phase::Loading
            && state.queue.is_head(passenger)
            && state.boarded.len() < self.capacity
    }

    /// Leave the vehicle once the ride is over.  Returns how many are still
    /// aboard.
    pub fn unboard(&self, passenger: PassengerId, trip: TripId) -> usize {
        let mut state = self.state.lock();
        assert_eq!(state.phase, Phase::Unloading, "{passenger} got off outside unloading");

        let Some(seat) = state.boarded.iter().position(|&p| p == passenger) else {
            unreachable!("{passenger} unboarded without being aboard");
        };
        state.boarded.remove(seat);
        let remaining = state.boarded.len();
        if remaining == 0 {
            self.phase_changed.notify_one();
        }
        drop(state);

        self.sink.record(&RideEvent::Disembarked {
            passenger,
            trip,
            remaining: remaining as u32,
        });
        remaining
    }

    /// Sleep for `duration` or until the ride closes, whichever is first.
    ///
    /// Returns `true` if the ride is still open.
    pub fn roam(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut state = self.state.lock();
        while !state.closed {
            if self.closing.wait_until(&mut state, deadline).timed_out() {
                break;
            }
        }
        !state.closed
    }

    // ── Observation ───────────────────────────────────────────────────────

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    pub fn snapshot(&self) -> VehicleSnapshot {
        let state = self.state.lock();
        VehicleSnapshot {
            phase:   state.phase,
            trip:    state.trip,
            boarded: state.boarded.clone(),
            queued:  state.queue.passengers(),
            closed:  state.closed,
        }
    }

    /// `(trip, passenger)` for every admission so far, in admission order.
    pub fn admissions(&self) -> Vec<(TripId, PassengerId)> {
        self.state.lock().admissions.clone()
    }
}

// ── Admission ─────────────────────────────────────────────────────────────────

/// Proof that a passenger was called forward, carrying the shared lock from
/// the wake-up into boarding.
#[must_use = "an admission holds the ride lock until it boards"]
pub struct Admission<'a, S: EventSink, D: DwellTimer> {
    vehicle:   &'a Vehicle<S, D>,
    state:     MutexGuard<'a, RideState>,
    passenger: PassengerId,
    ticket:    u64,
}

impl<S: EventSink, D: DwellTimer> Admission<'_, S, D> {
    pub fn passenger(&self) -> PassengerId {
        self.passenger
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Leave the queue head, take a seat and ride.
    ///
    /// Returns once the trip's ride is over and the vehicle has opened
    /// unloading.
    pub fn board(self) -> TripId {
        let Admission { vehicle, mut state, passenger, ticket } = self;

        state.queue.pop_head(passenger);
        assert!(
            state.boarded.len() < vehicle.capacity,
            "{passenger} admitted past capacity {}",
            vehicle.capacity,
        );
        state.boarded.push(passenger);
        let seat = state.boarded.len() as u32;
        let trip = state.trip;
        state.admissions.push((trip, passenger));
        vehicle.phase_changed.notify_one();
        drop(state);

        vehicle.sink.record(&RideEvent::Boarded { passenger, trip, seat, ticket });

        let mut state = vehicle.state.lock();
        vehicle.barrier.arrive(&mut state);
        drop(state);

        vehicle.sink.record(&RideEvent::RideOver { passenger, trip });
        trip
    }
}
