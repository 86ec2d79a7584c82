//! Host-owned simulation: one grid, one clock, one save system.
//!
//! There is no global "current application". Whoever drives the loop owns
//! a [`Simulation`] and lends it to anything that needs it.

use std::path::Path;

use evos_save::{SaveError, SaveSystem, SnapshotRecord};
use evos_thermal::{TemperatureGrid, ThermalConfig};
use tracing::info;

/// A temperature grid plus the tick counter and clock that drive it.
///
/// # Examples
///
/// ```
/// use evos::prelude::*;
///
/// let config = ThermalConfig::builder().width(16).height(16).build().unwrap();
/// let mut sim = Simulation::new(&config);
///
/// for _ in 0..10 {
///     sim.step(0.1);
/// }
/// assert_eq!(sim.tick(), 10);
///
/// let bytes = sim.save("quicksave").unwrap();
/// let record = SaveSystem::new().load_game(&bytes).unwrap();
///
/// let mut other = Simulation::new(&config);
/// other.restore(&record).unwrap();
/// assert_eq!(other.grid().temperatures(), sim.grid().temperatures());
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: TemperatureGrid,
    saves: SaveSystem,
    tick: u64,
    simulation_time: f64,
}

impl Simulation {
    /// Build a simulation at tick 0 from a validated config.
    pub fn new(config: &ThermalConfig) -> Self {
        Self::with_save_system(config, SaveSystem::new())
    }

    /// Build a simulation with a custom [`SaveSystem`] (e.g. a fixed clock).
    pub fn with_save_system(config: &ThermalConfig, saves: SaveSystem) -> Self {
        Self {
            grid: TemperatureGrid::from_config(config),
            saves,
            tick: 0,
            simulation_time: 0.0,
        }
    }

    /// Advance one tick, adding `dt_seconds` to the simulation clock.
    pub fn step(&mut self, dt_seconds: f64) {
        self.tick += 1;
        self.simulation_time += dt_seconds;
        self.grid.step(self.tick);
    }

    /// Number of steps taken.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds elapsed.
    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    /// The temperature field.
    pub fn grid(&self) -> &TemperatureGrid {
        &self.grid
    }

    /// Mutable access to the temperature field, for external forcing.
    pub fn grid_mut(&mut self) -> &mut TemperatureGrid {
        &mut self.grid
    }

    /// The save system used by [`save`](Self::save).
    pub fn save_system(&self) -> &SaveSystem {
        &self.saves
    }

    /// Encode the current state as a save buffer.
    pub fn save(&self, name: &str) -> Result<Vec<u8>, SaveError> {
        let bytes = self.saves.save_game(name, &self.grid, self.simulation_time)?;
        info!(name, tick = self.tick, bytes = bytes.len(), "saved simulation");
        Ok(bytes)
    }

    /// Encode the current state and write it to `path`.
    pub fn save_to_file(&self, name: &str, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let bytes = self.save(name)?;
        self.saves.save_to_file(path, &bytes)
    }

    /// Apply a loaded record: temperatures and simulation time.
    ///
    /// The tick counter is not part of the save format and is left as is.
    /// Fails without modifying anything if the record does not match the
    /// grid's dimensions.
    pub fn restore(&mut self, record: &SnapshotRecord) -> Result<(), SaveError> {
        record.apply_to(&mut self.grid)?;
        self.simulation_time = record.world.simulation_time_seconds;
        info!(
            name = %record.save_name,
            simulation_time = self.simulation_time,
            "restored simulation"
        );
        Ok(())
    }

    /// Read, decode, and apply the save at `path`.
    pub fn restore_from_file(&mut self, path: impl AsRef<Path>) -> Result<SnapshotRecord, SaveError> {
        let bytes = self.saves.load_from_file(path)?;
        let record = self.saves.load_game(&bytes)?;
        self.restore(&record)?;
        Ok(record)
    }
}
