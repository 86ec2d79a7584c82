//! Grid temperature field for evos simulations.
//!
//! A single scalar field on a bounded 2D grid. Every tick each cell moves a
//! fixed fraction of the way toward the mean of its in-bounds axis
//! neighbours, using a compute-then-commit sweep so that update order never
//! matters.
//!
//! Nothing in this crate returns an error at runtime: reads outside the grid
//! fall back to the ambient temperature and writes outside the grid are
//! ignored. Only [`ThermalConfigBuilder::build`] validates input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod grid;
mod neighbours;

pub use config::{ThermalConfig, ThermalConfigBuilder, DEFAULT_AMBIENT_TEMPERATURE, DIFFUSION_RATE};
pub use error::ConfigError;
pub use grid::{Cell, TemperatureGrid};
