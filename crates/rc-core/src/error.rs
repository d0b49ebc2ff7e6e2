//! Configuration error type.
//!
//! The boarding protocol itself has no recoverable errors: every precondition
//! is checked once here, before any thread starts.  Sub-crates wrap `RcError`
//! as one variant of their own error enums.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RcError {
    #[error("vehicle capacity must be at least 1")]
    ZeroCapacity,

    #[error("at least one passenger is required")]
    NoPassengers,

    #[error("vehicle capacity {capacity} exceeds the {passengers} passengers available; the first trip could never fill")]
    CapacityExceedsPassengers { capacity: u32, passengers: u32 },

    #[error("time unit must be a positive number of milliseconds")]
    ZeroTimeUnit,

    #[error("invalid dwell range {min}..={max}: bounds must be positive and ordered")]
    DwellRange { min: u32, max: u32 },
}

/// Shorthand result type for configuration checks.
pub type RcResult<T> = Result<T, RcError>;
