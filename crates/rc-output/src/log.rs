//! `TracingSink`: one structured `tracing` line per ride event.

use rc_core::{Actor, EventSink, RideEvent};
use tracing::info;

/// Forwards every event to `tracing` at `INFO`.
///
/// Vehicle and passenger events use separate targets so a filter such as
/// `coaster::vehicle=info,coaster::passenger=warn` splits the two streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &RideEvent) {
        let trip = event.trip().map(|t| t.get());
        match event.actor() {
            Actor::Vehicle => {
                info!(target: "coaster::vehicle", trip, kind = event.kind(), "{event}");
            }
            Actor::Passenger(p) => {
                info!(
                    target: "coaster::passenger",
                    passenger = p.get(),
                    trip,
                    kind = event.kind(),
                    "{event}"
                );
            }
        }
    }
}
