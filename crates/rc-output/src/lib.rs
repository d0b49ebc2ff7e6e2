//! `rc-output`: where ride events go.
//!
//! | Sink                 | Destination                                          |
//! |----------------------|------------------------------------------------------|
//! | [`TracingSink`]      | one `tracing` line per event                         |
//! | [`CsvEventSink`]     | `events.csv`, `vehicle.csv`, `passengers.csv`        |
//! | [`Tee`]              | two sinks at once, e.g. console plus files           |
//!
//! File sinks implement [`EventWriter`] and are driven by [`EventLogSink`],
//! which implements `rc_core::EventSink`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rc_output::{CsvEventSink, Tee, TracingSink};
//!
//! let files = Arc::new(CsvEventSink::csv(Path::new("./logs"))?);
//! let summary = SimBuilder::new(config)
//!     .sink(Tee(TracingSink, Arc::clone(&files)))
//!     .build()?
//!     .run()?;
//! files.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod log;
pub mod row;
pub mod sink;
pub mod tee;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use log::TracingSink;
pub use row::EventRow;
pub use sink::{CsvEventSink, EventLogSink};
pub use tee::Tee;
pub use writer::EventWriter;
