//! Deterministic per-actor RNG.
//!
//! # Determinism strategy
//!
//! Every actor (each passenger and the vehicle) owns an independent
//! `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (actor_key * MIXING_CONSTANT)
//!
//! where `actor_key` is the passenger id, or `0` for the vehicle.  The mixing
//! constant is the 64-bit fractional part of the golden ratio, which spreads
//! consecutive keys across the seed space.  Because actors never share a
//! stream, the sequence of durations one actor sees does not depend on how
//! the OS interleaves the threads.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PassengerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Key reserved for the vehicle; passenger ids start at 1.
const VEHICLE_KEY: u64 = 0;

/// Per-actor deterministic RNG.
pub struct ActorRng(SmallRng);

impl ActorRng {
    /// Seed the stream owned by `passenger`.
    pub fn for_passenger(global_seed: u64, passenger: PassengerId) -> Self {
        Self::keyed(global_seed, u64::from(passenger))
    }

    /// Seed the stream owned by the vehicle.
    pub fn for_vehicle(global_seed: u64) -> Self {
        Self::keyed(global_seed, VEHICLE_KEY)
    }

    fn keyed(global_seed: u64, key: u64) -> Self {
        let seed = global_seed ^ key.wrapping_mul(MIXING_CONSTANT);
        ActorRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
