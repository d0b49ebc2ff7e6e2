//! Plain data row written by file backends.

use rc_core::{Actor, RideEvent};

/// One recorded event, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Arrival order at the sink, starting at 0.
    pub seq:       u64,
    /// `"vehicle"` or `"passenger"`.
    pub actor:     &'static str,
    pub passenger: Option<u32>,
    pub trip:      Option<u32>,
    pub kind:      &'static str,
    /// Human-readable log line.
    pub message:   String,
}

impl EventRow {
    pub fn from_event(seq: u64, event: &RideEvent) -> Self {
        let (actor, passenger) = match event.actor() {
            Actor::Vehicle => ("vehicle", None),
            Actor::Passenger(p) => ("passenger", Some(p.get())),
        };
        Self {
            seq,
            actor,
            passenger,
            trip: event.trip().map(|t| t.get()),
            kind: event.kind(),
            message: event.to_string(),
        }
    }

    pub fn is_vehicle(&self) -> bool {
        self.passenger.is_none()
    }
}
