//! The `Passenger` actor: queue, ride, get off, roam, repeat.

use std::sync::Arc;

use parking_lot::Condvar;
use rc_core::{DwellTimer, EventSink, PassengerId, RideEvent, TripId};
use tracing::debug;

use crate::vehicle::{Admission, Vehicle};
use crate::RideClosed;

/// One park visitor.
///
/// Holds a handle to the shared [`Vehicle`] (it does not own it) and its own
/// turn signal, which the vehicle uses to call exactly this passenger
/// forward.
pub struct Passenger<S: EventSink, D: DwellTimer> {
    id:      PassengerId,
    vehicle: Arc<Vehicle<S, D>>,
    turn:    Arc<Condvar>,
    rides:   u32,
}

impl<S: EventSink, D: DwellTimer> Passenger<S, D> {
    pub fn new(id: PassengerId, vehicle: Arc<Vehicle<S, D>>) -> Self {
        Self { id, vehicle, turn: Arc::new(Condvar::new()), rides: 0 }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    /// Completed rides so far.
    pub fn rides(&self) -> u32 {
        self.rides
    }

    /// Queue up and wait to be called forward.
    pub fn join_queue(&self) -> Result<Admission<'_, S, D>, RideClosed> {
        self.vehicle
            .sink()
            .record(&RideEvent::Queueing { passenger: self.id });
        self.vehicle.join_queue(self.id, &self.turn)
    }

    /// Take the seat granted by `admission` and stay aboard until the ride
    /// is over.
    pub fn board(&self, admission: Admission<'_, S, D>) -> TripId {
        debug_assert_eq!(admission.passenger(), self.id);
        admission.board()
    }

    pub fn unboard(&self, trip: TripId) {
        self.vehicle.unboard(self.id, trip);
    }

    /// Wander the park.  Returns `false` if the ride closed meanwhile.
    pub fn roam(&self) -> bool {
        let duration = self.vehicle.dwell().roam_duration(self.id);
        self.vehicle
            .sink()
            .record(&RideEvent::Roaming { passenger: self.id, duration });
        self.vehicle.roam(duration)
    }

    /// Loop until the ride closes.  Returns the number of rides taken.
    pub fn run(mut self) -> u32 {
        while !self.vehicle.is_closed() {
            let Ok(admission) = self.join_queue() else {
                break;
            };
            let trip = self.board(admission);
            self.rides += 1;
            self.unboard(trip);
            if !self.roam() {
                break;
            }
        }

        debug!(passenger = %self.id, rides = self.rides, "leaving the park");
        self.vehicle
            .sink()
            .record(&RideEvent::Left { passenger: self.id });
        self.rides
    }
}
