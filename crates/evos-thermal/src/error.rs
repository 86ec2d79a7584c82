//! Configuration errors for the thermal grid.
//!
//! Grid operations themselves never fail: out-of-range reads fall back to
//! ambient and out-of-range writes are ignored. Only building a validated
//! [`ThermalConfig`](crate::ThermalConfig) can return an error.

use std::error::Error;
use std::fmt;

/// Errors from [`ThermalConfigBuilder::build`](crate::ThermalConfigBuilder::build).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A required builder field was never set.
    Missing {
        /// Name of the missing field.
        name: &'static str,
    },
    /// A grid dimension is zero.
    EmptyDimension {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
    },
    /// `width * height` does not fit the save format's `u32` cell count.
    TooManyCells {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The ambient temperature is NaN or infinite.
    NonFiniteAmbient {
        /// The rejected value.
        value: f64,
    },
    /// The diffusion rate is outside the open interval `(0, 1)`.
    DiffusionRateOutOfRange {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(f, "{name} is required"),
            Self::EmptyDimension { name } => write!(f, "{name} must be at least 1"),
            Self::TooManyCells { width, height } => {
                write!(f, "grid {width}x{height} exceeds u32::MAX cells")
            }
            Self::NonFiniteAmbient { value } => {
                write!(f, "ambient temperature must be finite, got {value}")
            }
            Self::DiffusionRateOutOfRange { value } => {
                write!(f, "diffusion rate must be in (0, 1), got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
