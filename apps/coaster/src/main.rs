//! coaster: run the roller-coaster ride simulation from the command line.
//!
//! # Usage
//!
//! ```bash
//! # 11 passengers, 5 seats, 3 trips, durations of 1..=5 seconds
//! coaster 11 5 3
//!
//! # Fast deterministic run with CSV event logs
//! coaster 11 5 3 --seed 7 --time-unit-ms 10 --log-dir ./logs
//!
//! # Vehicle lines only
//! RUST_LOG=coaster::vehicle=info,coaster::passenger=off coaster 4 2 2
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rc_core::{EventSink, RideConfig};
use rc_output::{CsvEventSink, Tee, TracingSink};
use rc_ride::{RunSummary, SimBuilder};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Roller-coaster ride simulation: one vehicle, many passengers, a fixed
/// number of trips.
#[derive(Parser, Debug)]
#[command(name = "coaster")]
#[command(version)]
struct Args {
    /// Passengers in the park
    passengers: u32,

    /// Seats in the vehicle; must not exceed the passenger count
    capacity: u32,

    /// Trips the vehicle makes before closing
    trips: u32,

    /// Seed for ride and roam durations
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Length of one duration unit in milliseconds
    #[arg(long, default_value_t = RideConfig::DEFAULT_TIME_UNIT_MS)]
    time_unit_ms: u64,

    /// Shortest ride or roam, in units
    #[arg(long, default_value_t = RideConfig::DEFAULT_MIN_DWELL_UNITS)]
    min_dwell: u32,

    /// Longest ride or roam, in units
    #[arg(long, default_value_t = RideConfig::DEFAULT_MAX_DWELL_UNITS)]
    max_dwell: u32,

    /// Also write events.csv, vehicle.csv and passengers.csv here
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn config(&self) -> RideConfig {
        RideConfig {
            seed:            self.seed,
            time_unit_ms:    self.time_unit_ms,
            min_dwell_units: self.min_dwell,
            max_dwell_units: self.max_dwell,
            ..RideConfig::new(self.passengers, self.capacity, self.trips)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = args.config();
    config.validate().context("invalid ride configuration")?;

    let started = Instant::now();
    let summary = match &args.log_dir {
        Some(dir) => {
            let files = Arc::new(
                CsvEventSink::csv(dir)
                    .with_context(|| format!("opening event logs in {}", dir.display()))?,
            );
            let summary = run(config, Tee(TracingSink, Arc::clone(&files)))?;
            files.finish().context("writing event logs")?;
            tracing::info!(dir = %dir.display(), events = files.recorded(), "event logs written");
            summary
        }
        None => run(config, TracingSink)?,
    };

    print_summary(&summary, started.elapsed().as_secs_f64());
    Ok(())
}

fn run<S: EventSink>(config: RideConfig, sink: S) -> Result<RunSummary> {
    let summary = SimBuilder::new(config).sink(sink).build()?.run()?;
    Ok(summary)
}

fn print_summary(summary: &RunSummary, elapsed_secs: f64) {
    println!();
    println!("=== coaster summary ===");
    println!(
        "Trips: {}  |  Rides: {}  |  Wall time: {elapsed_secs:.2}s",
        summary.trips_completed,
        summary.total_rides()
    );
    for (passenger, rides) in &summary.rides_per_passenger {
        println!("  {:<14} {rides:>3} rides", passenger.to_string());
    }
}
