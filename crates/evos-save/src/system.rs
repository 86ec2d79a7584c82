//! Save coordination: grid → record → bytes → file, and back.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use evos_thermal::TemperatureGrid;
use tracing::debug;

use crate::error::SaveError;
use crate::record::SnapshotRecord;

/// Source of save timestamps, in nanoseconds since the Unix epoch.
pub type Clock = fn() -> u64;

/// Wall-clock time in nanoseconds since the Unix epoch.
///
/// Returns 0 if the system clock is set before the epoch.
pub fn system_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Builds snapshot records from a grid and moves them to and from bytes and files.
///
/// Stateless apart from its clock; one instance can serve any number of saves.
///
/// # Examples
///
/// ```
/// use evos_save::SaveSystem;
/// use evos_thermal::TemperatureGrid;
///
/// let saves = SaveSystem::with_clock(|| 42);
/// let grid = TemperatureGrid::new(4, 4, 20.0);
///
/// let bytes = saves.save_game("autosave", &grid, 1.25).unwrap();
/// let record = saves.load_game(&bytes).unwrap();
///
/// assert_eq!(record.save_name, "autosave");
/// assert_eq!(record.timestamp_nanos, 42);
/// assert_eq!(record.temperature.temperatures, grid.temperatures());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SaveSystem {
    clock: Clock,
}

impl Default for SaveSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveSystem {
    /// A save system stamping records with [`system_clock`].
    pub fn new() -> Self {
        Self {
            clock: system_clock,
        }
    }

    /// A save system with a custom timestamp source.
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }

    /// Capture `grid` into a fresh [`SnapshotRecord`] stamped with the current time.
    pub fn snapshot(
        &self,
        save_name: &str,
        grid: &TemperatureGrid,
        simulation_time_seconds: f64,
    ) -> SnapshotRecord {
        SnapshotRecord::capture(save_name, (self.clock)(), grid, simulation_time_seconds)
    }

    /// Snapshot `grid` and encode it into an enveloped byte buffer.
    pub fn save_game(
        &self,
        save_name: &str,
        grid: &TemperatureGrid,
        simulation_time_seconds: f64,
    ) -> Result<Vec<u8>, SaveError> {
        let record = self.snapshot(save_name, grid, simulation_time_seconds);
        let bytes = record.to_bytes()?;
        debug!(
            save_name,
            width = record.world.width,
            height = record.world.height,
            bytes = bytes.len(),
            "encoded save"
        );
        Ok(bytes)
    }

    /// Decode a buffer produced by [`save_game`](Self::save_game).
    ///
    /// Magic, version, and truncation failures come back as
    /// [`SaveError::Load`] with the codec error as the source. The grid is
    /// not touched; use [`SnapshotRecord::apply_to`] to restore it.
    pub fn load_game(&self, bytes: &[u8]) -> Result<SnapshotRecord, SaveError> {
        let record = SnapshotRecord::from_bytes(bytes)?;
        debug!(
            save_name = %record.save_name,
            width = record.world.width,
            height = record.world.height,
            creatures = record.creatures.len(),
            "decoded save"
        );
        Ok(record)
    }

    /// Write `bytes` to `path`, replacing any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), SaveError> {
        let path = path.as_ref();
        fs::write(path, bytes).map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote save file");
        Ok(())
    }

    /// Read the whole of `path` into memory.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, SaveError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read save file");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_clock() -> u64 {
        1_000
    }

    #[test]
    fn snapshot_uses_injected_clock() {
        let saves = SaveSystem::with_clock(fixed_clock);
        let rec = saves.snapshot("s", &TemperatureGrid::new(2, 2, 20.0), 0.0);
        assert_eq!(rec.timestamp_nanos, 1_000);
    }

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z in nanoseconds.
        assert!(system_clock() > 1_577_836_800_000_000_000);
    }

    #[test]
    fn save_is_deterministic_for_fixed_clock() {
        let saves = SaveSystem::with_clock(fixed_clock);
        let grid = TemperatureGrid::new(5, 3, 20.0);
        assert_eq!(
            saves.save_game("a", &grid, 2.0).unwrap(),
            saves.save_game("a", &grid, 2.0).unwrap()
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let saves = SaveSystem::new();
        let err = saves
            .load_from_file("/nonexistent/evos/definitely-missing.evos")
            .unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }
}
