//! Fluent builder for constructing a [`Simulation`].

use rc_core::{DwellTimer, EventSink, NoopSink, RideConfig, UniformDwell};

use crate::{RideResult, Simulation, Vehicle};

/// Fluent builder for [`Simulation<S, D>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                        |
/// |-----------------|------------------------------------------------|
/// | `.sink(s)`      | [`NoopSink`]                                   |
/// | `.dwell(d)`     | [`UniformDwell`] seeded and scaled from config |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(RideConfig::new(11, 5, 3))
///     .sink(TracingSink)
///     .build()?;
/// let summary = sim.run()?;
/// ```
pub struct SimBuilder<S: EventSink, D: DwellTimer> {
    config: RideConfig,
    sink:   S,
    dwell:  D,
}

impl SimBuilder<NoopSink, UniformDwell> {
    pub fn new(config: RideConfig) -> Self {
        let dwell = UniformDwell::new(
            config.seed,
            config.time_unit(),
            config.min_dwell_units,
            config.max_dwell_units,
        );
        Self { config, sink: NoopSink, dwell }
    }
}

impl<S: EventSink, D: DwellTimer> SimBuilder<S, D> {
    /// Where ride events go.
    pub fn sink<S2: EventSink>(self, sink: S2) -> SimBuilder<S2, D> {
        SimBuilder { config: self.config, sink, dwell: self.dwell }
    }

    /// Replace the ride/roam duration source.
    pub fn dwell<D2: DwellTimer>(self, dwell: D2) -> SimBuilder<S, D2> {
        SimBuilder { config: self.config, sink: self.sink, dwell }
    }

    /// Validate the configuration and return a ready-to-run [`Simulation`].
    pub fn build(self) -> RideResult<Simulation<S, D>> {
        let vehicle = Vehicle::new(&self.config, self.sink, self.dwell)?;
        Ok(Simulation::new(self.config, vehicle))
    }
}
