//! `rc-core`: foundational types for the roller-coaster ride simulation.
//!
//! This crate is a dependency of every other `rc-*` crate.  It has no `rc-*`
//! dependencies and knows nothing about threads or the boarding protocol;
//! it only defines the vocabulary the protocol speaks and the two
//! collaborators it calls out to.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `PassengerId`, `TripId`                                 |
//! | [`config`]    | `RideConfig` and its validation                         |
//! | [`dwell`]     | `DwellTimer` trait, `UniformDwell`, `FixedDwell`        |
//! | [`event`]     | `RideEvent`, `EventSink` trait, `NoopSink`, `MemorySink`|
//! | [`rng`]       | `ActorRng` (per-actor deterministic RNG)                |
//! | [`error`]     | `RcError`, `RcResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `RideConfig`.    |

pub mod config;
pub mod dwell;
pub mod error;
pub mod event;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RideConfig;
pub use dwell::{DwellTimer, FixedDwell, UniformDwell};
pub use error::{RcError, RcResult};
pub use event::{Actor, EventSink, MemorySink, NoopSink, RideEvent};
pub use ids::{PassengerId, TripId};
pub use rng::ActorRng;
