//! Ride events and the `EventSink` collaborator.
//!
//! The protocol reports what happens through an [`EventSink`] and never
//! depends on what the sink does with it.  Events are recorded after the
//! shared lock is released, so sinks may do I/O; the order of events from
//! any single actor is always the order in which that actor acted.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::{PassengerId, TripId};

/// Who an event is about.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Actor {
    Vehicle,
    Passenger(PassengerId),
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Vehicle => f.write_str("vehicle"),
            Actor::Passenger(p) => write!(f, "{p}"),
        }
    }
}

/// Everything the simulation reports.
///
/// `Display` renders the human-readable log line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RideEvent {
    // ── Vehicle ───────────────────────────────────────────────────────────
    /// A new trip begins; boarding opens right after.
    TripStarted { trip: TripId },

    /// Every seat is taken and the vehicle leaves the platform.
    Departed { trip: TripId },

    /// The ride is under way and will last `duration`.
    RideStarted { trip: TripId, duration: Duration },

    /// The ride is over; unloading opens next.
    RideFinished { trip: TripId },

    /// The last passenger got off; boarding may reopen.
    Emptied { trip: TripId },

    /// All configured trips are done.  No one boards after this.
    Halted { trips_completed: u32 },

    // ── Passenger ─────────────────────────────────────────────────────────
    /// The passenger heads for the tail of the queue.
    Queueing { passenger: PassengerId },

    /// The passenger left the queue head and took seat `seat` (1-based).
    /// `ticket` counts queue joins across the whole run, so comparing
    /// tickets orders arrivals.
    Boarded { passenger: PassengerId, trip: TripId, seat: u32, ticket: u64 },

    /// The ride the passenger was on has finished and it may get off.
    RideOver { passenger: PassengerId, trip: TripId },

    /// The passenger got off; `remaining` passengers are still aboard.
    Disembarked { passenger: PassengerId, trip: TripId, remaining: u32 },

    /// The passenger wanders the park for `duration` before queueing again.
    Roaming { passenger: PassengerId, duration: Duration },

    /// The ride closed and the passenger went home.
    Left { passenger: PassengerId },
}

impl RideEvent {
    pub fn actor(&self) -> Actor {
        match self {
            RideEvent::TripStarted { .. }
            | RideEvent::Departed { .. }
            | RideEvent::RideStarted { .. }
            | RideEvent::RideFinished { .. }
            | RideEvent::Emptied { .. }
            | RideEvent::Halted { .. } => Actor::Vehicle,
            RideEvent::Queueing { passenger }
            | RideEvent::Boarded { passenger, .. }
            | RideEvent::RideOver { passenger, .. }
            | RideEvent::Disembarked { passenger, .. }
            | RideEvent::Roaming { passenger, .. }
            | RideEvent::Left { passenger } => Actor::Passenger(*passenger),
        }
    }

    /// The trip the event belongs to, when there is one.
    pub fn trip(&self) -> Option<TripId> {
        match self {
            RideEvent::TripStarted { trip }
            | RideEvent::Departed { trip }
            | RideEvent::RideStarted { trip, .. }
            | RideEvent::RideFinished { trip }
            | RideEvent::Emptied { trip }
            | RideEvent::Boarded { trip, .. }
            | RideEvent::RideOver { trip, .. }
            | RideEvent::Disembarked { trip, .. } => Some(*trip),
            RideEvent::Halted { .. }
            | RideEvent::Queueing { .. }
            | RideEvent::Roaming { .. }
            | RideEvent::Left { .. } => None,
        }
    }

    /// Short machine-friendly name, e.g. for a CSV column.
    pub fn kind(&self) -> &'static str {
        match self {
            RideEvent::TripStarted { .. } => "trip_started",
            RideEvent::Departed { .. } => "departed",
            RideEvent::RideStarted { .. } => "ride_started",
            RideEvent::RideFinished { .. } => "ride_finished",
            RideEvent::Emptied { .. } => "emptied",
            RideEvent::Halted { .. } => "halted",
            RideEvent::Queueing { .. } => "queueing",
            RideEvent::Boarded { .. } => "boarded",
            RideEvent::RideOver { .. } => "ride_over",
            RideEvent::Disembarked { .. } => "disembarked",
            RideEvent::Roaming { .. } => "roaming",
            RideEvent::Left { .. } => "left",
        }
    }
}

impl fmt::Display for RideEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideEvent::TripStarted { trip } => {
                write!(f, "vehicle: {trip} starting, boarding is open")
            }
            RideEvent::Departed { trip } => write!(f, "vehicle: full, departing on {trip}"),
            RideEvent::RideStarted { trip, duration } => {
                write!(f, "vehicle: {trip} will run for {:.3}s", duration.as_secs_f64())
            }
            RideEvent::RideFinished { trip } => {
                write!(f, "vehicle: {trip} finished, unloading is open")
            }
            RideEvent::Emptied { trip } => write!(f, "vehicle: empty after {trip}"),
            RideEvent::Halted { trips_completed } => {
                write!(f, "vehicle: closed after {trips_completed} trips")
            }
            RideEvent::Queueing { passenger } => write!(f, "{passenger}: joining the queue"),
            RideEvent::Boarded { passenger, trip, seat, .. } => {
                write!(f, "{passenger}: boarded {trip} in seat {seat}")
            }
            RideEvent::RideOver { passenger, trip } => {
                write!(f, "{passenger}: {trip} is over")
            }
            RideEvent::Disembarked { passenger, trip, remaining } => {
                write!(f, "{passenger}: left the vehicle after {trip}, {remaining} still aboard")
            }
            RideEvent::Roaming { passenger, duration } => {
                write!(f, "{passenger}: roaming the park for {:.3}s", duration.as_secs_f64())
            }
            RideEvent::Left { passenger } => write!(f, "{passenger}: ride closed, going home"),
        }
    }
}

// ── EventSink ─────────────────────────────────────────────────────────────────

/// Receiver of [`RideEvent`]s.
///
/// Fire-and-forget: `record` has no return value, so a sink that can fail
/// keeps its first error and exposes it after the run (see the CSV sink in
/// `rc-output`).  Called from every actor thread.
pub trait EventSink: Send + Sync + 'static {
    fn record(&self, event: &RideEvent);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn record(&self, event: &RideEvent) {
        (**self).record(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&self, event: &RideEvent) {
        (**self).record(event);
    }
}

/// An [`EventSink`] that drops every event.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &RideEvent) {}
}

/// An [`EventSink`] that keeps every event in memory, in arrival order.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<RideEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<RideEvent> {
        self.events.lock().clone()
    }

    /// Events recorded by one actor, in that actor's order.
    pub fn events_of(&self, actor: Actor) -> Vec<RideEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.actor() == actor)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &RideEvent) {
        self.events.lock().push(event.clone());
    }
}
