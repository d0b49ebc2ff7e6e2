//! `rc-ride`: the boarding protocol between one vehicle and its passengers.
//!
//! # Trip cycle
//!
//! ```text
//! for trip in 1..=num_trips:
//!   ① Load   : call queue heads forward one at a time (targeted wake)
//!              until every seat is taken.
//!   ② Run    : sleep for the ride duration, no lock held.
//!   ③ Unload : arrive at the rendezvous barrier, releasing the riders,
//!              then wait until the last one is off.
//! close the ride; queued and roaming passengers exit.
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`queue`]     | `WaitQueue`: FIFO with a turn signal per entry           |
//! | [`barrier`]   | `RideBarrier`: cyclic rendezvous under the shared mutex  |
//! | [`vehicle`]   | `Vehicle`, `Admission`, `Phase`, `VehicleSnapshot`        |
//! | [`passenger`] | `Passenger` actor loop                                    |
//! | [`sim`]       | `Simulation`, `RunSummary`                                |
//! | [`builder`]   | `SimBuilder`                                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rc_core::{MemorySink, RideConfig};
//! use rc_ride::SimBuilder;
//!
//! let summary = SimBuilder::new(RideConfig::new(3, 2, 1))
//!     .sink(MemorySink::new())
//!     .build()?
//!     .run()?;
//! assert_eq!(summary.total_rides(), 2);
//! ```

pub mod barrier;
pub mod builder;
pub mod error;
pub mod passenger;
pub mod queue;
pub mod sim;
pub mod vehicle;


pub use barrier::{BarrierState, RideBarrier};
pub use builder::SimBuilder;
pub use error::{RideClosed, RideError, RideResult};
pub use passenger::Passenger;
pub use queue::{QueueEntry, WaitQueue};
pub use sim::{RunSummary, Simulation};
pub use vehicle::{Admission, Phase, Vehicle, VehicleSnapshot};
