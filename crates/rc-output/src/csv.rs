//! CSV output backend.
//!
//! Creates three files in the configured directory:
//! - `events.csv`: every event
//! - `vehicle.csv`: vehicle events only
//! - `passengers.csv`: passenger events only

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

pub const EVENTS_FILE: &str = "events.csv";
pub const VEHICLE_FILE: &str = "vehicle.csv";
pub const PASSENGERS_FILE: &str = "passengers.csv";

const HEADER: [&str; 6] = ["seq", "actor", "passenger", "trip", "kind", "message"];

/// Writes ride events to three CSV files.
pub struct CsvWriter {
    all:        Writer<File>,
    vehicle:    Writer<File>,
    passengers: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the three CSV files and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let open = |name: &str| -> OutputResult<Writer<File>> {
            let mut w = Writer::from_path(dir.join(name))?;
            w.write_record(HEADER)?;
            Ok(w)
        };
        Ok(Self {
            all:        open(EVENTS_FILE)?,
            vehicle:    open(VEHICLE_FILE)?,
            passengers: open(PASSENGERS_FILE)?,
            finished:   false,
        })
    }
}

impl EventWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        let record = [
            row.seq.to_string(),
            row.actor.to_owned(),
            row.passenger.map(|p| p.to_string()).unwrap_or_default(),
            row.trip.map(|t| t.to_string()).unwrap_or_default(),
            row.kind.to_owned(),
            row.message.clone(),
        ];
        self.all.write_record(&record)?;
        if row.is_vehicle() {
            self.vehicle.write_record(&record)?;
        } else {
            self.passengers.write_record(&record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.all.flush()?;
        self.vehicle.flush()?;
        self.passengers.flush()?;
        Ok(())
    }
}
