//! Unit tests for rc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PassengerId, TripId};

    #[test]
    fn next_increments() {
        assert_eq!(PassengerId::FIRST.next(), PassengerId(2));
        assert_eq!(TripId(4).next(), TripId(5));
    }

    #[test]
    fn try_from_usize() {
        assert_eq!(PassengerId::try_from(7usize).unwrap(), PassengerId(7));
        assert!(TripId::try_from(usize::MAX).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(7).to_string(), "passenger 7");
        assert_eq!(TripId(2).to_string(), "trip 2");
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use proptest::prelude::*;

    use crate::{RcError, RideConfig};

    #[test]
    fn default_timing() {
        let cfg = RideConfig::new(11, 5, 3);
        assert_eq!(cfg.time_unit(), Duration::from_secs(1));
        assert_eq!(cfg.min_dwell_units, 1);
        assert_eq!(cfg.max_dwell_units, 5);
        assert_eq!(cfg.barrier_parties(), 6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn capacity_above_passengers_rejected() {
        let err = RideConfig::new(2, 3, 1).validate().unwrap_err();
        assert_eq!(err, RcError::CapacityExceedsPassengers { capacity: 3, passengers: 2 });
    }

    #[test]
    fn capacity_equal_to_passengers_accepted() {
        assert!(RideConfig::new(4, 4, 1).validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(RideConfig::new(3, 0, 1).validate(), Err(RcError::ZeroCapacity));
    }

    #[test]
    fn zero_passengers_rejected() {
        assert_eq!(RideConfig::new(0, 1, 1).validate(), Err(RcError::NoPassengers));
    }

    #[test]
    fn zero_trips_accepted() {
        assert!(RideConfig::new(3, 2, 0).validate().is_ok());
    }

    #[test]
    fn bad_dwell_ranges_rejected() {
        let mut cfg = RideConfig::new(3, 2, 1);
        cfg.min_dwell_units = 0;
        assert!(matches!(cfg.validate(), Err(RcError::DwellRange { .. })));

        cfg.min_dwell_units = 4;
        cfg.max_dwell_units = 2;
        assert_eq!(cfg.validate(), Err(RcError::DwellRange { min: 4, max: 2 }));
    }

    #[test]
    fn zero_time_unit_rejected() {
        let mut cfg = RideConfig::new(3, 2, 1);
        cfg.time_unit_ms = 0;
        assert_eq!(cfg.validate(), Err(RcError::ZeroTimeUnit));
    }

    proptest! {
        #[test]
        fn validity_matches_capacity_precondition(
            passengers in 0u32..50,
            capacity in 0u32..50,
            trips in 0u32..10,
        ) {
            let ok = RideConfig::new(passengers, capacity, trips).validate().is_ok();
            prop_assert_eq!(ok, capacity >= 1 && capacity <= passengers);
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::{ActorRng, PassengerId};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ActorRng::for_passenger(12345, PassengerId(3));
        let mut r2 = ActorRng::for_passenger(12345, PassengerId(3));
        for _ in 0..100 {
            let a: u32 = r1.random();
            let b: u32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn vehicle_and_passengers_differ() {
        let mut vehicle = ActorRng::for_vehicle(1);
        let mut p1 = ActorRng::for_passenger(1, PassengerId(1));
        let a: u64 = vehicle.random();
        let b: u64 = p1.random();
        assert_ne!(a, b, "vehicle and passenger streams should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = ActorRng::for_vehicle(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1u32..=5);
            assert!((1..=5).contains(&v));
        }
    }
}

#[cfg(test)]
mod dwell {
    use std::time::Duration;

    use crate::{DwellTimer, FixedDwell, PassengerId, RideConfig, UniformDwell};

    #[test]
    fn fixed_returns_constants() {
        let d = FixedDwell::new(Duration::from_millis(3), Duration::from_millis(7));
        assert_eq!(d.ride_duration(), Duration::from_millis(3));
        assert_eq!(d.roam_duration(PassengerId(9)), Duration::from_millis(7));
    }

    #[test]
    fn uniform_within_range() {
        let d = UniformDwell::new(42, Duration::from_millis(10), 1, 5);
        for _ in 0..200 {
            let ride = d.ride_duration();
            assert!(ride >= Duration::from_millis(10) && ride <= Duration::from_millis(50));
            assert_eq!(ride.as_millis() % 10, 0, "whole units only: {ride:?}");
        }
    }

    #[test]
    fn uniform_never_zero() {
        let d = UniformDwell::new(1, Duration::from_millis(1), 0, 0);
        for _ in 0..50 {
            assert!(d.roam_duration(PassengerId(1)) > Duration::ZERO);
        }
    }

    #[test]
    fn roam_sequence_is_per_passenger() {
        // Interleaving draws for passenger 2 must not disturb passenger 1's
        // sequence.
        let a = UniformDwell::new(7, Duration::from_millis(1), 1, 1000);
        let b = UniformDwell::new(7, Duration::from_millis(1), 1, 1000);

        let solo: Vec<_> = (0..20).map(|_| a.roam_duration(PassengerId(1))).collect();
        let mixed: Vec<_> = (0..20)
            .map(|_| {
                b.roam_duration(PassengerId(2));
                b.ride_duration();
                b.roam_duration(PassengerId(1))
            })
            .collect();
        assert_eq!(solo, mixed);
    }

    #[test]
    fn from_config_rejects_invalid() {
        assert!(UniformDwell::from_config(&RideConfig::new(1, 2, 1)).is_err());
        assert!(UniformDwell::from_config(&RideConfig::new(2, 2, 1)).is_ok());
    }
}

#[cfg(test)]
mod event {
    use std::time::Duration;

    use crate::{Actor, EventSink, MemorySink, PassengerId, RideEvent, TripId};

    #[test]
    fn actor_and_trip_classification() {
        let boarded = RideEvent::Boarded {
            passenger: PassengerId(2),
            trip:      TripId(1),
            seat:      1,
            ticket:    0,
        };
        assert_eq!(boarded.actor(), Actor::Passenger(PassengerId(2)));
        assert_eq!(boarded.trip(), Some(TripId(1)));
        assert_eq!(boarded.kind(), "boarded");

        let halted = RideEvent::Halted { trips_completed: 3 };
        assert_eq!(halted.actor(), Actor::Vehicle);
        assert_eq!(halted.trip(), None);
    }

    #[test]
    fn display_lines() {
        let e = RideEvent::RideStarted { trip: TripId(2), duration: Duration::from_millis(1500) };
        assert_eq!(e.to_string(), "vehicle: trip 2 will run for 1.500s");

        let e = RideEvent::Disembarked { passenger: PassengerId(4), trip: TripId(1), remaining: 0 };
        assert_eq!(e.to_string(), "passenger 4: left the vehicle after trip 1, 0 still aboard");
    }

    #[test]
    fn memory_sink_filters_by_actor() {
        let sink = MemorySink::new();
        sink.record(&RideEvent::TripStarted { trip: TripId(1) });
        sink.record(&RideEvent::Queueing { passenger: PassengerId(1) });
        sink.record(&RideEvent::Queueing { passenger: PassengerId(2) });

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.events_of(Actor::Vehicle).len(), 1);
        assert_eq!(
            sink.events_of(Actor::Passenger(PassengerId(2))),
            vec![RideEvent::Queueing { passenger: PassengerId(2) }],
        );
    }
}
