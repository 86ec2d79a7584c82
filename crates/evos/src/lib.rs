//! evos: the simulation substrate of an evolution-simulator game.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the evos sub-crates and adds the host-owned [`Simulation`].
//!
//! # Quick start
//!
//! ```rust
//! use evos::prelude::*;
//!
//! let mut grid = TemperatureGrid::new(32, 32, 20.0);
//! grid.set_temperature(16, 16, 90.0);
//! for tick in 1..=100 {
//!     grid.step(tick);
//! }
//!
//! let saves = SaveSystem::new();
//! let bytes = saves.save_game("demo", &grid, 10.0).unwrap();
//! let record = saves.load_game(&bytes).unwrap();
//! assert_eq!(record.temperature.temperatures, grid.temperatures());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`codec`] | `evos-codec` | `BinaryWriter`, `BinaryReader`, envelope |
//! | [`thermal`] | `evos-thermal` | `TemperatureGrid`, `ThermalConfig` |
//! | [`save`] | `evos-save` | `SnapshotRecord`, `SaveSystem`, `SaveError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Binary codec and envelope (`evos-codec`).
pub use evos_codec as codec;

/// Temperature grid and diffusion (`evos-thermal`).
pub use evos_thermal as thermal;

/// Snapshot records and save coordination (`evos-save`).
pub use evos_save as save;

pub mod simulation;

pub use simulation::Simulation;

/// Common imports for typical evos usage.
///
/// ```rust
/// use evos::prelude::*;
/// ```
pub mod prelude {
    pub use evos_codec::{BinaryReader, BinaryWriter, CodecError, CURRENT_VERSION, MAGIC};
    pub use evos_save::{
        CreatureRecord, SaveError, SaveSystem, SnapshotRecord, TemperatureBlock, WorldInfo,
    };
    pub use evos_thermal::{
        Cell, ConfigError, TemperatureGrid, ThermalConfig, DEFAULT_AMBIENT_TEMPERATURE,
        DIFFUSION_RATE,
    };

    pub use crate::Simulation;
}
