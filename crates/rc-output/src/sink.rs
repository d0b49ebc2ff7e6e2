//! `EventLogSink<W>`: bridges `EventSink` to an `EventWriter`.

use std::path::Path;

use parking_lot::Mutex;
use rc_core::{EventSink, RideEvent};
use tracing::warn;

use crate::{CsvWriter, EventRow, EventWriter, OutputError, OutputResult};

/// An [`EventSink`] that numbers events in arrival order and writes them to
/// any [`EventWriter`] backend.
///
/// Every actor thread records through `&self`, so the writer sits behind a
/// mutex.  Write errors are stored because `EventSink::record` has no return
/// value; after the run, check them with [`take_error`][Self::take_error] or
/// [`finish`][Self::finish].
pub struct EventLogSink<W: EventWriter> {
    inner: Mutex<Inner<W>>,
}

struct Inner<W> {
    writer:     W,
    next_seq:   u64,
    last_error: Option<OutputError>,
}

/// CSV-backed event log.
pub type CsvEventSink = EventLogSink<CsvWriter>;

impl CsvEventSink {
    /// Open the CSV files in `dir`.
    pub fn csv(dir: &Path) -> OutputResult<Self> {
        Ok(Self::new(CsvWriter::new(dir)?))
    }
}

impl<W: EventWriter> EventLogSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(Inner { writer, next_seq: 0, last_error: None }),
        }
    }

    /// Events written (or attempted) so far.
    pub fn recorded(&self) -> u64 {
        self.inner.lock().next_seq
    }

    /// Take the stored write error, if any.
    pub fn take_error(&self) -> Option<OutputError> {
        self.inner.lock().last_error.take()
    }

    /// Flush the writer and report the first error seen during the run.
    pub fn finish(&self) -> OutputResult<()> {
        let mut inner = self.inner.lock();
        let flushed = inner.writer.finish();
        match inner.last_error.take() {
            Some(e) => Err(e),
            None => flushed,
        }
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.inner.into_inner().writer
    }
}

impl<W: EventWriter> EventSink for EventLogSink<W> {
    fn record(&self, event: &RideEvent) {
        let mut inner = self.inner.lock();
        let row = EventRow::from_event(inner.next_seq, event);
        inner.next_seq += 1;
        if let Err(e) = inner.writer.write_event(&row) {
            // Keep only the first error.
            if inner.last_error.is_none() {
                warn!(error = %e, seq = row.seq, "event log write failed");
                inner.last_error = Some(e);
            }
        }
    }
}
