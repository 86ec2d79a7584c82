//! Validated construction parameters for [`TemperatureGrid`](crate::TemperatureGrid).
//!
//! Constructed via the builder pattern: [`ThermalConfig::builder`].

use crate::error::ConfigError;

/// Ambient temperature used when none is given, in degrees Celsius.
pub const DEFAULT_AMBIENT_TEMPERATURE: f64 = 20.0;

/// Fraction of the gap between a cell and its neighbour mean closed per tick.
pub const DIFFUSION_RATE: f64 = 0.05;

/// Grid dimensions and diffusion parameters.
///
/// # Examples
///
/// ```
/// use evos_thermal::{ThermalConfig, DIFFUSION_RATE};
///
/// let config = ThermalConfig::builder()
///     .width(64)
///     .height(48)
///     .ambient_temperature(15.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cell_count(), 64 * 48);
/// assert_eq!(config.diffusion_rate(), DIFFUSION_RATE);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ThermalConfig {
    width: u32,
    height: u32,
    ambient_temperature: f64,
    diffusion_rate: f64,
}

/// Builder for [`ThermalConfig`].
///
/// `width` and `height` are required. Ambient defaults to
/// [`DEFAULT_AMBIENT_TEMPERATURE`], the rate to [`DIFFUSION_RATE`].
#[derive(Clone, Debug)]
pub struct ThermalConfigBuilder {
    width: Option<u32>,
    height: Option<u32>,
    ambient_temperature: f64,
    diffusion_rate: f64,
}

impl ThermalConfig {
    /// Create a new builder.
    pub fn builder() -> ThermalConfigBuilder {
        ThermalConfigBuilder {
            width: None,
            height: None,
            ambient_temperature: DEFAULT_AMBIENT_TEMPERATURE,
            diffusion_rate: DIFFUSION_RATE,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Out-of-bounds fallback temperature and initial gradient scale.
    pub fn ambient_temperature(&self) -> f64 {
        self.ambient_temperature
    }

    /// Per-tick diffusion rate.
    pub fn diffusion_rate(&self) -> f64 {
        self.diffusion_rate
    }

    /// `width * height`.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl ThermalConfigBuilder {
    /// Set the number of columns.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the number of rows.
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the ambient temperature (default: 20.0).
    pub fn ambient_temperature(mut self, ambient: f64) -> Self {
        self.ambient_temperature = ambient;
        self
    }

    /// Set the diffusion rate (default: [`DIFFUSION_RATE`]). Must be in `(0, 1)`.
    pub fn diffusion_rate(mut self, rate: f64) -> Self {
        self.diffusion_rate = rate;
        self
    }

    /// Build the config, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `width` or `height` is unset or zero
    /// - `width * height` overflows `u32`
    /// - the ambient temperature is not finite
    /// - the diffusion rate is not in the open interval `(0, 1)`
    pub fn build(self) -> Result<ThermalConfig, ConfigError> {
        let width = self.width.ok_or(ConfigError::Missing { name: "width" })?;
        let height = self.height.ok_or(ConfigError::Missing { name: "height" })?;
        if width == 0 {
            return Err(ConfigError::EmptyDimension { name: "width" });
        }
        if height == 0 {
            return Err(ConfigError::EmptyDimension { name: "height" });
        }
        if width.checked_mul(height).is_none() {
            return Err(ConfigError::TooManyCells { width, height });
        }
        if !self.ambient_temperature.is_finite() {
            return Err(ConfigError::NonFiniteAmbient {
                value: self.ambient_temperature,
            });
        }
        // NaN fails both comparisons.
        if !(self.diffusion_rate > 0.0 && self.diffusion_rate < 1.0) {
            return Err(ConfigError::DiffusionRateOutOfRange {
                value: self.diffusion_rate,
            });
        }
        Ok(ThermalConfig {
            width,
            height,
            ambient_temperature: self.ambient_temperature,
            diffusion_rate: self.diffusion_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ThermalConfig::builder().width(3).height(2).build().unwrap();
        assert_eq!(config.ambient_temperature(), DEFAULT_AMBIENT_TEMPERATURE);
        assert_eq!(config.diffusion_rate(), DIFFUSION_RATE);
        assert_eq!(config.cell_count(), 6);
    }

    #[test]
    fn missing_dimension() {
        let err = ThermalConfig::builder().width(3).build().unwrap_err();
        assert_eq!(err, ConfigError::Missing { name: "height" });
    }

    #[test]
    fn zero_dimension() {
        let err = ThermalConfig::builder().width(0).height(4).build().unwrap_err();
        assert_eq!(err, ConfigError::EmptyDimension { name: "width" });
    }

    #[test]
    fn cell_count_must_fit_u32() {
        let err = ThermalConfig::builder()
            .width(u32::MAX)
            .height(2)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::TooManyCells { .. }));
    }

    #[test]
    fn rejects_non_finite_ambient() {
        let err = ThermalConfig::builder()
            .width(1)
            .height(1)
            .ambient_temperature(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NonFiniteAmbient { .. }));
    }

    #[test]
    fn rejects_rate_outside_open_unit_interval() {
        for rate in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let result = ThermalConfig::builder()
                .width(2)
                .height(2)
                .diffusion_rate(rate)
                .build();
            assert!(
                matches!(result, Err(ConfigError::DiffusionRateOutOfRange { .. })),
                "rate {rate}"
            );
        }
    }
}
