//! The `EventWriter` trait implemented by file backends.

use crate::{EventRow, OutputResult};

/// Trait implemented by event log backends.
///
/// Errors are stored by [`EventLogSink`][crate::EventLogSink] and retrieved
/// with [`take_error`][crate::EventLogSink::take_error], because recording
/// an event cannot fail from the simulation's point of view.
pub trait EventWriter: Send + 'static {
    /// Append one event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
