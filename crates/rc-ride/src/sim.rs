//! The `Simulation`: one vehicle thread plus one thread per passenger.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rc_core::{DwellTimer, EventSink, PassengerId, RideConfig, TripId};
use tracing::{info, warn};

use crate::{Passenger, RideError, RideResult, Vehicle};

/// What a finished run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub trips_completed:     u32,
    /// Rides taken by each passenger, including those who never rode.
    pub rides_per_passenger: BTreeMap<PassengerId, u32>,
    /// `(trip, passenger)` for every admission, in admission order.
    pub admissions:          Vec<(TripId, PassengerId)>,
}

impl RunSummary {
    pub fn total_rides(&self) -> u32 {
        self.rides_per_passenger.values().sum()
    }

    /// Passengers admitted on `trip`, in seat order.
    pub fn riders_of(&self, trip: TripId) -> Vec<PassengerId> {
        self.admissions
            .iter()
            .filter(|(t, _)| *t == trip)
            .map(|&(_, p)| p)
            .collect()
    }
}

/// A configured ride, ready to run once.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<S: EventSink, D: DwellTimer> {
    pub config: RideConfig,
    vehicle:    Arc<Vehicle<S, D>>,
}

impl<S: EventSink, D: DwellTimer> Simulation<S, D> {
    pub(crate) fn new(config: RideConfig, vehicle: Vehicle<S, D>) -> Self {
        Self { config, vehicle: Arc::new(vehicle) }
    }

    /// Shared handle to the vehicle, e.g. to take snapshots while running.
    pub fn vehicle(&self) -> Arc<Vehicle<S, D>> {
        Arc::clone(&self.vehicle)
    }

    /// Spawn every actor, drive all trips, then let the passengers leave.
    ///
    /// Blocks until every thread has exited.  Passengers are spawned before
    /// the vehicle; if one cannot be spawned the ride is closed so the
    /// already-running passengers can exit, and the error is returned.
    pub fn run(self) -> RideResult<RunSummary> {
        info!(
            passengers = self.config.total_passengers,
            capacity = self.config.capacity,
            trips = self.config.num_trips,
            "simulation starting"
        );

        let mut passengers = Vec::with_capacity(self.config.total_passengers as usize);
        let mut id = PassengerId::FIRST;
        for _ in 0..self.config.total_passengers {
            match self.spawn_passenger(id) {
                Ok(handle) => passengers.push((id, handle)),
                Err(e) => {
                    warn!(passenger = %id, "spawn failed, closing the ride");
                    self.vehicle.close();
                    join_passengers(passengers)?;
                    return Err(e);
                }
            }
            id = id.next();
        }

        let vehicle = Arc::clone(&self.vehicle);
        let driver = thread::Builder::new()
            .name("vehicle".into())
            .spawn(move || vehicle.drive());
        let trips_completed = match driver {
            Ok(handle) => handle
                .join()
                .map_err(|_| RideError::ActorPanicked { actor: "vehicle".into() }),
            Err(source) => Err(RideError::Spawn { actor: "vehicle".into(), source }),
        };
        // Whatever happened to the vehicle, the passengers must be released.
        if trips_completed.is_err() {
            self.vehicle.close();
        }
        let trips_completed = trips_completed?;

        let rides_per_passenger = join_passengers(passengers)?;
        let summary = RunSummary {
            trips_completed,
            rides_per_passenger,
            admissions: self.vehicle.admissions(),
        };
        info!(trips = summary.trips_completed, rides = summary.total_rides(), "simulation finished");
        Ok(summary)
    }

    fn spawn_passenger(&self, id: PassengerId) -> RideResult<JoinHandle<u32>> {
        let passenger = Passenger::new(id, Arc::clone(&self.vehicle));
        thread::Builder::new()
            .name(format!("passenger-{}", id.get()))
            .spawn(move || passenger.run())
            .map_err(|source| RideError::Spawn { actor: id.to_string(), source })
    }
}

fn join_passengers(
    handles: Vec<(PassengerId, JoinHandle<u32>)>,
) -> RideResult<BTreeMap<PassengerId, u32>> {
    let mut rides = BTreeMap::new();
    let mut panicked = None;
    for (id, handle) in handles {
        match handle.join() {
            Ok(n) => {
                rides.insert(id, n);
            }
            Err(_) => {
                panicked.get_or_insert(id);
            }
        }
    }
    match panicked {
        Some(id) => Err(RideError::ActorPanicked { actor: id.to_string() }),
        None => Ok(rides),
    }
}
