//! The `DwellTimer` collaborator: how long a ride lasts and how long a
//! passenger roams the park before queueing again.
//!
//! The protocol only ever sleeps for what a timer returns; it never inspects
//! the value.  Implementations must return positive, finite durations.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;

use crate::{ActorRng, PassengerId, RcResult, RideConfig};

/// Source of ride and roam durations.
///
/// Called from the vehicle thread (`ride_duration`) and from every passenger
/// thread (`roam_duration`) concurrently, so implementations must be
/// `Send + Sync` and take `&self`.
pub trait DwellTimer: Send + Sync + 'static {
    /// Length of the next ride.
    fn ride_duration(&self) -> Duration;

    /// How long `passenger` roams after disembarking.
    fn roam_duration(&self, passenger: PassengerId) -> Duration;
}

// ── UniformDwell ──────────────────────────────────────────────────────────────

/// Uniform whole-unit durations in `min..=max`, scaled by a time unit.
///
/// Each actor draws from its own [`ActorRng`], so a given seed always gives
/// passenger 3 the same sequence of roam times no matter how threads are
/// scheduled.  The per-passenger streams are created on first use.
pub struct UniformDwell {
    seed:       u64,
    unit:       Duration,
    min_units:  u32,
    max_units:  u32,
    vehicle:    Mutex<ActorRng>,
    passengers: Mutex<HashMap<PassengerId, ActorRng>>,
}

impl UniformDwell {
    /// Build from a validated configuration.
    pub fn from_config(config: &RideConfig) -> RcResult<Self> {
        config.validate()?;
        Ok(Self::new(
            config.seed,
            config.time_unit(),
            config.min_dwell_units,
            config.max_dwell_units,
        ))
    }

    /// Durations of `min_units..=max_units` multiples of `unit`.
    ///
    /// `min_units` is raised to 1 so a duration is never zero.
    pub fn new(seed: u64, unit: Duration, min_units: u32, max_units: u32) -> Self {
        let min_units = min_units.max(1);
        Self {
            seed,
            unit,
            min_units,
            max_units: max_units.max(min_units),
            vehicle: Mutex::new(ActorRng::for_vehicle(seed)),
            passengers: Mutex::new(HashMap::new()),
        }
    }

    fn scale(&self, units: u32) -> Duration {
        self.unit * units
    }
}

impl DwellTimer for UniformDwell {
    fn ride_duration(&self) -> Duration {
        let units = self.vehicle.lock().gen_range(self.min_units..=self.max_units);
        self.scale(units)
    }

    fn roam_duration(&self, passenger: PassengerId) -> Duration {
        let units = {
            let mut streams = self.passengers.lock();
            streams
                .entry(passenger)
                .or_insert_with(|| ActorRng::for_passenger(self.seed, passenger))
                .gen_range(self.min_units..=self.max_units)
        };
        self.scale(units)
    }
}

// ── FixedDwell ────────────────────────────────────────────────────────────────

/// Constant ride and roam durations.  Handy in tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedDwell {
    pub ride: Duration,
    pub roam: Duration,
}

impl FixedDwell {
    pub fn new(ride: Duration, roam: Duration) -> Self {
        Self { ride, roam }
    }

    /// Same duration for rides and roams.
    pub fn uniform(d: Duration) -> Self {
        Self::new(d, d)
    }
}

impl DwellTimer for FixedDwell {
    fn ride_duration(&self) -> Duration {
        self.ride
    }

    fn roam_duration(&self, _passenger: PassengerId) -> Duration {
        self.roam
    }
}
