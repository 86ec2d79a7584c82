//! Test fixtures for evos development.
//!
//! Seeded generators for grids and snapshot records, plus helpers for
//! forging envelopes that a normal writer would never produce.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use evos_codec::{BinaryWriter, MAGIC};
use evos_save::{encode_snapshot, CreatureRecord, SnapshotRecord, TemperatureBlock, WorldInfo};
use evos_thermal::TemperatureGrid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Timestamp returned by [`fixed_clock`].
pub const FIXED_TIMESTAMP: u64 = 1_700_000_000_123_456_789;

/// Deterministic [`evos_save::Clock`] for reproducible saves.
pub fn fixed_clock() -> u64 {
    FIXED_TIMESTAMP
}

/// A grid whose every cell has been forced to a random temperature in `[-50, 150)`.
pub fn random_grid(width: u32, height: u32, seed: u64) -> TemperatureGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = TemperatureGrid::new(width, height, 20.0);
    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            grid.set_temperature(x, y, rng.gen_range(-50.0..150.0));
        }
    }
    grid
}

/// A creature with random position, energy, and up to 64 DNA bytes.
pub fn random_creature(rng: &mut impl Rng) -> CreatureRecord {
    let dna_len = rng.gen_range(0..=64);
    CreatureRecord {
        x: rng.gen_range(0.0..256.0),
        y: rng.gen_range(0.0..256.0),
        energy: rng.gen_range(0.0..100.0),
        dna: (0..dna_len).map(|_| rng.gen()).collect(),
    }
}

/// A structurally valid record with random contents.
///
/// Dimensions are in `1..=16`; there are up to 8 creatures.
pub fn random_record(seed: u64) -> SnapshotRecord {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let width = rng.gen_range(1..=16u32);
    let height = rng.gen_range(1..=16u32);
    let creature_count = rng.gen_range(0..=8);
    SnapshotRecord {
        save_name: format!("fixture-{seed}"),
        timestamp_nanos: rng.gen(),
        format_version: u32::from(evos_codec::CURRENT_VERSION),
        world: WorldInfo {
            width,
            height,
            simulation_time_seconds: rng.gen_range(0.0..1.0e6),
        },
        temperature: TemperatureBlock {
            ambient_temperature: rng.gen_range(-40.0..60.0),
            temperatures: (0..width * height)
                .map(|_| rng.gen_range(-50.0..150.0))
                .collect(),
        },
        creatures: (0..creature_count)
            .map(|_| random_creature(&mut rng))
            .collect(),
    }
}

/// Encode `record` behind an envelope declaring `version`, bypassing the
/// writer's fixed [`evos_codec::CURRENT_VERSION`] and record validation.
pub fn encode_with_version(record: &SnapshotRecord, version: u16) -> Vec<u8> {
    let mut w = BinaryWriter::new();
    w.write_u32(MAGIC);
    w.write_u16(version);
    encode_snapshot(&mut w, record);
    w.into_bytes()
}
