//! The snapshot record and its binary layout.
//!
//! ```text
//! [envelope: MAGIC u32, VERSION u16]
//! save_name        string
//! timestamp_nanos  u64
//! format_version   u32          record-level echo of the envelope version
//! world            width u32, height u32, simulation_time f64
//! temperature      ambient f64, count u32, f64 × count
//! creatures        count u32, { x f32, y f32, energy f32, dna_len u32, dna } × count
//! ```
//!
//! The envelope version gates compatibility; the record-level field is
//! carried for round-tripping only.

use evos_codec::{
    decode_enveloped, encode_enveloped, BinaryReader, BinaryWriter, CodecError, CURRENT_VERSION,
};
use evos_thermal::TemperatureGrid;
use tracing::warn;

use crate::error::SaveError;

/// Encoded size of a creature with empty DNA.
const MIN_CREATURE_LEN: usize = 16;

/// World dimensions and clock at the time of the snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldInfo {
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// Simulated seconds elapsed.
    pub simulation_time_seconds: f64,
}

/// The temperature field, flattened row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureBlock {
    /// The grid's ambient (out-of-bounds) temperature.
    pub ambient_temperature: f64,
    /// `width * height` values, `y` outer, `x` inner.
    pub temperatures: Vec<f64>,
}

/// Persisted shape of a creature.
///
/// No creature simulation exists yet; snapshots taken from a grid always
/// carry an empty list.
#[derive(Clone, Debug, PartialEq)]
pub struct CreatureRecord {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Remaining energy.
    pub energy: f32,
    /// Opaque genome bytes.
    pub dna: Vec<u8>,
}

/// Complete, self-contained simulation state at one instant.
///
/// # Examples
///
/// ```
/// use evos_save::{SnapshotRecord, TemperatureBlock, WorldInfo};
///
/// let record = SnapshotRecord {
///     save_name: "slot 1".into(),
///     timestamp_nanos: 1_700_000_000_000_000_000,
///     format_version: evos_save::CURRENT_VERSION.into(),
///     world: WorldInfo { width: 2, height: 1, simulation_time_seconds: 3.5 },
///     temperature: TemperatureBlock {
///         ambient_temperature: 20.0,
///         temperatures: vec![18.0, 19.0],
///     },
///     creatures: vec![],
/// };
///
/// let bytes = record.to_bytes().unwrap();
/// assert_eq!(SnapshotRecord::from_bytes(&bytes).unwrap(), record);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotRecord {
    /// User-visible save name.
    pub save_name: String,
    /// Wall-clock time of the save, nanoseconds since the Unix epoch.
    pub timestamp_nanos: u64,
    /// Record-level format version.
    pub format_version: u32,
    /// World dimensions and clock.
    pub world: WorldInfo,
    /// The temperature field.
    pub temperature: TemperatureBlock,
    /// Creature list.
    pub creatures: Vec<CreatureRecord>,
}

impl SnapshotRecord {
    /// Capture `grid` into a new record with an empty creature list.
    pub fn capture(
        save_name: impl Into<String>,
        timestamp_nanos: u64,
        grid: &TemperatureGrid,
        simulation_time_seconds: f64,
    ) -> Self {
        let (width, height) = grid.dimensions();
        Self {
            save_name: save_name.into(),
            timestamp_nanos,
            format_version: u32::from(CURRENT_VERSION),
            world: WorldInfo {
                width,
                height,
                simulation_time_seconds,
            },
            temperature: TemperatureBlock {
                ambient_temperature: grid.ambient_temperature(),
                temperatures: grid.temperatures(),
            },
            creatures: Vec::new(),
        }
    }

    /// `world.width * world.height`.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.world.width) * u64::from(self.world.height)
    }

    /// Check that the temperature block matches the world dimensions.
    pub fn validate(&self) -> Result<(), SaveError> {
        let expected = self.cell_count();
        let found = self.temperature.temperatures.len() as u64;
        if expected != found {
            return Err(SaveError::TemperatureCountMismatch { expected, found });
        }
        Ok(())
    }

    /// Encode into an enveloped byte buffer.
    ///
    /// Fails only if [`validate`](Self::validate) fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SaveError> {
        self.validate()?;
        Ok(encode_enveloped(|w| encode_snapshot(w, self)))
    }

    /// Decode an enveloped byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SaveError> {
        let (version, record) = decode_enveloped(bytes, |r, _| decode_snapshot(r))?;
        if version < CURRENT_VERSION {
            warn!(
                version,
                current = CURRENT_VERSION,
                "decoding older save version with current layout"
            );
        }
        if record.format_version != u32::from(version) {
            warn!(
                envelope = version,
                record = record.format_version,
                "record-level format version disagrees with envelope"
            );
        }
        Ok(record)
    }

    /// Copy the recorded temperatures onto an existing grid of the same size.
    ///
    /// The grid keeps its own ambient temperature.
    pub fn apply_to(&self, grid: &mut TemperatureGrid) -> Result<(), SaveError> {
        self.validate()?;
        let snapshot = (self.world.width, self.world.height);
        if snapshot != grid.dimensions() {
            return Err(SaveError::DimensionMismatch {
                snapshot,
                grid: grid.dimensions(),
            });
        }
        let width = self.world.width as usize;
        for (i, &t) in self.temperature.temperatures.iter().enumerate() {
            grid.set_temperature((i % width) as i64, (i / width) as i64, t);
        }
        Ok(())
    }

    /// Build a fresh grid with the recorded size and ambient, then apply the record.
    pub fn to_grid(&self) -> Result<TemperatureGrid, SaveError> {
        self.validate()?;
        let mut grid = TemperatureGrid::new(
            self.world.width,
            self.world.height,
            self.temperature.ambient_temperature,
        );
        self.apply_to(&mut grid)?;
        Ok(grid)
    }
}

// ── Encode ──────────────────────────────────────────────────────

/// Write a snapshot payload (no envelope).
pub fn encode_snapshot(w: &mut BinaryWriter, record: &SnapshotRecord) {
    w.write_string(&record.save_name);
    w.write_u64(record.timestamp_nanos);
    w.write_u32(record.format_version);

    w.write_u32(record.world.width);
    w.write_u32(record.world.height);
    w.write_f64(record.world.simulation_time_seconds);

    encode_temperature_block(w, &record.temperature);

    w.write_u32(record.creatures.len() as u32);
    for creature in &record.creatures {
        encode_creature(w, creature);
    }
}

fn encode_temperature_block(w: &mut BinaryWriter, block: &TemperatureBlock) {
    w.write_f64(block.ambient_temperature);
    w.write_u32(block.temperatures.len() as u32);
    for &t in &block.temperatures {
        w.write_f64(t);
    }
}

fn encode_creature(w: &mut BinaryWriter, creature: &CreatureRecord) {
    w.write_f32(creature.x);
    w.write_f32(creature.y);
    w.write_f32(creature.energy);
    w.write_u32(creature.dna.len() as u32);
    w.write_bytes(&creature.dna);
}

// ── Decode ──────────────────────────────────────────────────────

/// Read a snapshot payload (no envelope).
///
/// A temperature count that disagrees with `width * height` is rejected
/// before any temperature is read.
pub fn decode_snapshot(r: &mut BinaryReader<'_>) -> Result<SnapshotRecord, SaveError> {
    let save_name = r.read_string()?;
    let timestamp_nanos = r.read_u64()?;
    let format_version = r.read_u32()?;

    let world = WorldInfo {
        width: r.read_u32()?,
        height: r.read_u32()?,
        simulation_time_seconds: r.read_f64()?,
    };

    let expected = u64::from(world.width) * u64::from(world.height);
    let temperature = decode_temperature_block(r, expected)?;

    let count = r.read_u32()? as usize;
    ensure_room(r, count, MIN_CREATURE_LEN)?;
    let mut creatures = Vec::with_capacity(count);
    for _ in 0..count {
        creatures.push(decode_creature(r)?);
    }

    Ok(SnapshotRecord {
        save_name,
        timestamp_nanos,
        format_version,
        world,
        temperature,
        creatures,
    })
}

fn decode_temperature_block(
    r: &mut BinaryReader<'_>,
    expected: u64,
) -> Result<TemperatureBlock, SaveError> {
    let ambient_temperature = r.read_f64()?;
    let count = r.read_u32()?;
    if u64::from(count) != expected {
        return Err(SaveError::TemperatureCountMismatch {
            expected,
            found: u64::from(count),
        });
    }
    let count = count as usize;
    ensure_room(r, count, 8)?;
    let mut temperatures = Vec::with_capacity(count);
    for _ in 0..count {
        temperatures.push(r.read_f64()?);
    }
    Ok(TemperatureBlock {
        ambient_temperature,
        temperatures,
    })
}

fn decode_creature(r: &mut BinaryReader<'_>) -> Result<CreatureRecord, SaveError> {
    let x = r.read_f32()?;
    let y = r.read_f32()?;
    let energy = r.read_f32()?;
    let len = r.read_u32()? as usize;
    let dna = r.read_bytes(len)?.to_vec();
    Ok(CreatureRecord { x, y, energy, dna })
}

/// Fail fast if `count` items of at least `item_len` bytes cannot fit.
///
/// Keeps a corrupt count from driving a huge allocation.
fn ensure_room(r: &BinaryReader<'_>, count: usize, item_len: usize) -> Result<(), CodecError> {
    let needed = count.saturating_mul(item_len);
    let available = r.remaining();
    if needed > available {
        return Err(CodecError::OutOfRange {
            offset: r.position(),
            needed,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evos_codec::{HEADER_LEN, MAGIC};

    fn record(width: u32, height: u32) -> SnapshotRecord {
        SnapshotRecord {
            save_name: "unit".into(),
            timestamp_nanos: 123_456_789,
            format_version: u32::from(CURRENT_VERSION),
            world: WorldInfo {
                width,
                height,
                simulation_time_seconds: 12.5,
            },
            temperature: TemperatureBlock {
                ambient_temperature: 20.0,
                temperatures: (0..width * height).map(f64::from).collect(),
            },
            creatures: vec![
                CreatureRecord {
                    x: 1.5,
                    y: -2.0,
                    energy: 100.0,
                    dna: vec![0xA, 0xC, 0x6, 0x7],
                },
                CreatureRecord {
                    x: 0.0,
                    y: 0.0,
                    energy: 0.0,
                    dna: vec![],
                },
            ],
        }
    }

    #[test]
    fn roundtrip_with_creatures() {
        let rec = record(3, 2);
        let bytes = rec.to_bytes().unwrap();
        assert_eq!(SnapshotRecord::from_bytes(&bytes).unwrap(), rec);
    }

    #[test]
    fn wire_layout_matches_table() {
        let rec = SnapshotRecord {
            save_name: "ab".into(),
            timestamp_nanos: 7,
            format_version: 1,
            world: WorldInfo {
                width: 1,
                height: 1,
                simulation_time_seconds: 0.5,
            },
            temperature: TemperatureBlock {
                ambient_temperature: 20.0,
                temperatures: vec![19.0],
            },
            creatures: vec![],
        };
        let bytes = rec.to_bytes().unwrap();

        let mut r = BinaryReader::new(&bytes);
        assert_eq!(r.read_u32().unwrap(), MAGIC);
        assert_eq!(r.read_u16().unwrap(), CURRENT_VERSION);
        assert_eq!(r.position(), HEADER_LEN);
        assert_eq!(r.read_string().unwrap(), "ab");
        assert_eq!(r.read_u64().unwrap(), 7);
        assert_eq!(r.read_u32().unwrap(), 1);
        assert_eq!(r.read_u32().unwrap(), 1);
        assert_eq!(r.read_u32().unwrap(), 1);
        assert_eq!(r.read_f64().unwrap(), 0.5);
        assert_eq!(r.read_f64().unwrap(), 20.0);
        assert_eq!(r.read_u32().unwrap(), 1);
        assert_eq!(r.read_f64().unwrap(), 19.0);
        assert_eq!(r.read_u32().unwrap(), 0);
        assert_eq!(r.remaining(), 0);
        // 6 + (4+2) + 8 + 4 + 4 + 4 + 8 + 8 + 4 + 8 + 4
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn encode_rejects_count_mismatch() {
        let mut rec = record(3, 3);
        rec.temperature.temperatures.pop();
        assert!(matches!(
            rec.to_bytes(),
            Err(SaveError::TemperatureCountMismatch {
                expected: 9,
                found: 8
            })
        ));
    }

    #[test]
    fn decode_rejects_count_mismatch() {
        let mut rec = record(2, 2);
        rec.world.width = 3;
        // Bypass validation by encoding the payload directly.
        let bytes = encode_enveloped(|w| encode_snapshot(w, &rec));
        assert!(matches!(
            SnapshotRecord::from_bytes(&bytes),
            Err(SaveError::TemperatureCountMismatch {
                expected: 6,
                found: 4
            })
        ));
    }

    #[test]
    fn huge_creature_count_is_structural_error() {
        let rec = SnapshotRecord {
            creatures: vec![],
            ..record(1, 1)
        };
        let mut bytes = rec.to_bytes().unwrap();
        let n = bytes.len();
        bytes[n - 4..].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(
            SnapshotRecord::from_bytes(&bytes),
            Err(SaveError::Load {
                source: CodecError::OutOfRange { .. }
            })
        ));
    }

    #[test]
    fn dna_length_past_end_is_structural_error() {
        let rec = SnapshotRecord {
            creatures: vec![CreatureRecord {
                x: 0.0,
                y: 0.0,
                energy: 1.0,
                dna: vec![1, 2, 3],
            }],
            ..record(1, 1)
        };
        let mut bytes = rec.to_bytes().unwrap();
        let n = bytes.len();
        // dna_len sits just before the 3 DNA bytes.
        bytes[n - 7..n - 3].copy_from_slice(&4u32.to_le_bytes());
        assert!(matches!(
            SnapshotRecord::from_bytes(&bytes),
            Err(SaveError::Load { .. })
        ));
    }

    #[test]
    fn capture_flattens_row_major() {
        let mut grid = TemperatureGrid::new(3, 2, 10.0);
        grid.set_temperature(2, 0, 1.0);
        grid.set_temperature(0, 1, 2.0);
        let rec = SnapshotRecord::capture("g", 5, &grid, 0.0);
        assert_eq!(rec.temperature.temperatures[2], 1.0);
        assert_eq!(rec.temperature.temperatures[3], 2.0);
        assert_eq!(rec.temperature.ambient_temperature, 10.0);
        assert_eq!(rec.format_version, u32::from(CURRENT_VERSION));
        assert!(rec.creatures.is_empty());
        rec.validate().unwrap();
    }

    #[test]
    fn apply_to_restores_temperatures() {
        let mut source = TemperatureGrid::new(4, 3, 20.0);
        source.set_temperature(1, 2, 77.0);
        source.step(1);
        let rec = SnapshotRecord::capture("g", 0, &source, 1.0);

        let mut target = TemperatureGrid::new(4, 3, 20.0);
        rec.apply_to(&mut target).unwrap();
        assert_eq!(target.temperatures(), source.temperatures());
        assert!(target.cells().iter().all(|c| c.temperature == c.next_temperature));
    }

    #[test]
    fn apply_to_rejects_other_dimensions() {
        let rec = SnapshotRecord::capture("g", 0, &TemperatureGrid::new(4, 3, 20.0), 0.0);
        let mut target = TemperatureGrid::new(3, 4, 20.0);
        assert!(matches!(
            rec.apply_to(&mut target),
            Err(SaveError::DimensionMismatch {
                snapshot: (4, 3),
                grid: (3, 4)
            })
        ));
    }

    #[test]
    fn to_grid_uses_recorded_ambient() {
        let mut source = TemperatureGrid::new(2, 2, -3.0);
        source.set_temperature(0, 0, 5.0);
        let grid = SnapshotRecord::capture("g", 0, &source, 0.0).to_grid().unwrap();
        assert_eq!(grid.ambient_temperature(), -3.0);
        assert_eq!(grid.temperature_at(0, 0), 5.0);
        assert_eq!(grid.temperature_at(9, 9), -3.0);
    }
}
