//! Startup configuration.
//!
//! # Time units
//!
//! Ride and roam durations are drawn as whole "units" and scaled by
//! `time_unit_ms`.  The defaults give the classic ride timing: one unit is a
//! second and every dwell lasts 1 to 5 units.  Tests shrink the unit to a
//! millisecond so a multi-trip run finishes quickly.

use std::time::Duration;

use crate::{RcError, RcResult};

/// Everything needed to start one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideConfig {
    /// Passenger actors spawned at start.  Must be at least `capacity`.
    pub total_passengers: u32,

    /// Seats in the vehicle.  Every trip departs with exactly this many.
    pub capacity: u32,

    /// Trips to run before the vehicle halts.  Zero is allowed: the vehicle
    /// halts immediately and nobody boards.
    pub num_trips: u32,

    /// Master RNG seed for `UniformDwell`.
    pub seed: u64,

    /// Milliseconds per dwell unit.
    pub time_unit_ms: u64,

    /// Shortest ride/roam, in units.
    pub min_dwell_units: u32,

    /// Longest ride/roam, in units (inclusive).
    pub max_dwell_units: u32,
}

impl RideConfig {
    pub const DEFAULT_TIME_UNIT_MS: u64 = 1_000;
    pub const DEFAULT_MIN_DWELL_UNITS: u32 = 1;
    pub const DEFAULT_MAX_DWELL_UNITS: u32 = 5;

    /// Configuration with the default timing for the given population.
    pub fn new(total_passengers: u32, capacity: u32, num_trips: u32) -> Self {
        Self {
            total_passengers,
            capacity,
            num_trips,
            seed: 0,
            time_unit_ms: Self::DEFAULT_TIME_UNIT_MS,
            min_dwell_units: Self::DEFAULT_MIN_DWELL_UNITS,
            max_dwell_units: Self::DEFAULT_MAX_DWELL_UNITS,
        }
    }

    /// Check every precondition of the boarding protocol.
    ///
    /// A capacity larger than the passenger pool would leave the vehicle
    /// waiting forever in its first loading phase, so it is rejected here.
    pub fn validate(&self) -> RcResult<()> {
        if self.capacity == 0 {
            return Err(RcError::ZeroCapacity);
        }
        if self.total_passengers == 0 {
            return Err(RcError::NoPassengers);
        }
        if self.capacity > self.total_passengers {
            return Err(RcError::CapacityExceedsPassengers {
                capacity:   self.capacity,
                passengers: self.total_passengers,
            });
        }
        if self.time_unit_ms == 0 {
            return Err(RcError::ZeroTimeUnit);
        }
        if self.min_dwell_units == 0 || self.min_dwell_units > self.max_dwell_units {
            return Err(RcError::DwellRange {
                min: self.min_dwell_units,
                max: self.max_dwell_units,
            });
        }
        Ok(())
    }

    /// Wall-clock length of one dwell unit.
    #[inline]
    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    /// Number of parties the rendezvous barrier waits for: every seat plus
    /// the vehicle itself.
    #[inline]
    pub fn barrier_parties(&self) -> usize {
        self.capacity as usize + 1
    }
}
