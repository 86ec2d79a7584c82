//! Benchmark profiles for the evos thermal field and save codec.
//!
//! - [`reference_grid`]: 100x100 grid (10K cells) with a few forced hot spots
//! - [`stress_grid`]: 316x316 grid (~100K cells) for stress testing
//! - [`reference_save`]: encoded save of the reference grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use evos_save::SaveSystem;
use evos_test_utils::fixed_clock;
use evos_thermal::TemperatureGrid;

/// Hot spots forced into the profile grids, as fractions of each axis.
const HOT_SPOTS: [(f64, f64, f64); 3] = [(0.25, 0.25, 120.0), (0.75, 0.5, 80.0), (0.5, 0.9, -20.0)];

fn profile_grid(side: u32) -> TemperatureGrid {
    let mut grid = TemperatureGrid::new(side, side, 20.0);
    for (fx, fy, t) in HOT_SPOTS {
        let x = (fx * f64::from(side)) as i64;
        let y = (fy * f64::from(side)) as i64;
        grid.set_temperature(x, y, t);
    }
    grid
}

/// 100x100 grid (10K cells).
pub fn reference_grid() -> TemperatureGrid {
    profile_grid(100)
}

/// 316x316 grid (~100K cells).
pub fn stress_grid() -> TemperatureGrid {
    profile_grid(316)
}

/// The reference grid after 100 ticks, encoded with a fixed timestamp.
pub fn reference_save() -> Vec<u8> {
    let mut grid = reference_grid();
    for tick in 1..=100 {
        grid.step(tick);
    }
    SaveSystem::with_clock(fixed_clock)
        .save_game("bench", &grid, 10.0)
        .expect("reference grid always produces a valid record")
}
