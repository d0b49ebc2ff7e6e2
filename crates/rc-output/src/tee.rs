//! `Tee`: record each event in two sinks.

use rc_core::{EventSink, RideEvent};

/// Sends every event to `.0` then `.1`.  Nest for more than two.
#[derive(Debug, Default, Clone)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: EventSink, B: EventSink> EventSink for Tee<A, B> {
    fn record(&self, event: &RideEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}
