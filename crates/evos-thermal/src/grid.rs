//! The temperature grid and its two-phase diffusion step.

use crate::config::{ThermalConfig, DEFAULT_AMBIENT_TEMPERATURE, DIFFUSION_RATE};
use crate::neighbours::{flat_index, neighbours_flat};

/// One grid cell.
///
/// `temperature` is the externally visible value. `next_temperature` is
/// scratch space written during the compute phase of [`TemperatureGrid::step`]
/// and committed afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Current temperature in degrees Celsius.
    pub temperature: f64,
    /// Value computed for the step in progress.
    pub next_temperature: f64,
    /// Tick of the last committed step (0 before the first step).
    pub last_update_tick: u64,
}

/// A `width × height` scalar temperature field with 4-neighbour diffusion.
///
/// Cells are stored row-major (`index = y * width + x`). The grid size and
/// ambient temperature are fixed for the grid's lifetime; nothing is
/// allocated after construction.
///
/// Each [`step`](Self::step) computes, for every cell,
/// ```text
/// next = t + (mean(t[neighbours]) - t) * diffusion_rate
/// ```
/// reading only the previous tick's temperatures, then commits all cells.
///
/// # Examples
///
/// ```
/// use evos_thermal::TemperatureGrid;
///
/// let mut grid = TemperatureGrid::new(8, 8, 20.0);
/// grid.set_temperature(4, 4, 100.0);
/// grid.step(1);
///
/// // The hot spot cools and its neighbours warm.
/// assert!(grid.temperature_at(4, 4) < 100.0);
/// assert!(grid.temperature_at(4, 3) > TemperatureGrid::new(8, 8, 20.0).temperature_at(4, 3));
///
/// // Outside the grid, ambient is returned.
/// assert_eq!(grid.temperature_at(-1, 0), 20.0);
/// ```
#[derive(Clone, Debug)]
pub struct TemperatureGrid {
    cells: Vec<Cell>,
    width: u32,
    height: u32,
    ambient_temperature: f64,
    diffusion_rate: f64,
}

impl TemperatureGrid {
    /// Create a grid with a radial initial gradient and the default diffusion rate.
    ///
    /// `width` and `height` must be non-zero; this constructor does not
    /// check. Use [`from_config`](Self::from_config) for validated input.
    pub fn new(width: u32, height: u32, ambient_temperature: f64) -> Self {
        Self::with_rate(width, height, ambient_temperature, DIFFUSION_RATE)
    }

    /// Create a grid at the default ambient temperature (20 °C).
    pub fn with_default_ambient(width: u32, height: u32) -> Self {
        Self::new(width, height, DEFAULT_AMBIENT_TEMPERATURE)
    }

    /// Create a grid from a validated [`ThermalConfig`].
    pub fn from_config(config: &ThermalConfig) -> Self {
        Self::with_rate(
            config.width(),
            config.height(),
            config.ambient_temperature(),
            config.diffusion_rate(),
        )
    }

    fn with_rate(width: u32, height: u32, ambient_temperature: f64, diffusion_rate: f64) -> Self {
        let cx = f64::from(width) / 2.0;
        let cy = f64::from(height) / 2.0;
        let max_dist = (cx * cx + cy * cy).sqrt();

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let dx = f64::from(x) - cx;
                let dy = f64::from(y) - cy;
                let d = (dx * dx + dy * dy).sqrt() / max_dist;
                let t = ambient_temperature * (1.0 - d * 0.5);
                cells.push(Cell {
                    temperature: t,
                    next_temperature: t,
                    last_update_tick: 0,
                });
            }
        }

        Self {
            cells,
            width,
            height,
            ambient_temperature,
            diffusion_rate,
        }
    }

    /// Advance the field by one tick.
    ///
    /// The compute phase fills every cell's `next_temperature` from the
    /// current temperatures; the commit phase then copies it into
    /// `temperature` and stamps `last_update_tick = tick`. No cell ever
    /// observes a neighbour value written during the same step.
    pub fn step(&mut self, tick: u64) {
        let (w, h) = (self.width, self.height);

        for y in 0..h {
            for x in 0..w {
                let i = y as usize * w as usize + x as usize;
                let t = self.cells[i].temperature;
                let nbs = neighbours_flat(x, y, w, h);
                let next = if nbs.is_empty() {
                    t
                } else {
                    let sum: f64 = nbs.iter().map(|&n| self.cells[n].temperature).sum();
                    let avg = sum / nbs.len() as f64;
                    t + (avg - t) * self.diffusion_rate
                };
                self.cells[i].next_temperature = next;
            }
        }

        for cell in &mut self.cells {
            cell.temperature = cell.next_temperature;
            cell.last_update_tick = tick;
        }
    }

    /// Temperature at `(x, y)`, or the ambient temperature if out of range.
    pub fn temperature_at(&self, x: i64, y: i64) -> f64 {
        match flat_index(x, y, self.width, self.height) {
            Some(i) => self.cells[i].temperature,
            None => self.ambient_temperature,
        }
    }

    /// Force the temperature at `(x, y)`. Out-of-range coordinates are ignored.
    ///
    /// Both `temperature` and `next_temperature` are set, so the value is
    /// visible immediately and still diffuses on the following step.
    pub fn set_temperature(&mut self, x: i64, y: i64, value: f64) {
        if let Some(i) = flat_index(x, y, self.width, self.height) {
            let cell = &mut self.cells[i];
            cell.temperature = value;
            cell.next_temperature = value;
        }
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The out-of-bounds fallback temperature.
    pub fn ambient_temperature(&self) -> f64 {
        self.ambient_temperature
    }

    /// The per-tick diffusion rate.
    pub fn diffusion_rate(&self) -> f64 {
        self.diffusion_rate
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row `y`, or `None` if out of range.
    pub fn row(&self, y: u32) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// The cell at `(x, y)`, or `None` if out of range.
    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        flat_index(i64::from(x), i64::from(y), self.width, self.height).map(|i| &self.cells[i])
    }

    /// Current temperatures flattened row-major (`y` outer, `x` inner).
    pub fn temperatures(&self) -> Vec<f64> {
        self.cells.iter().map(|c| c.temperature).collect()
    }

    /// Smallest and largest current temperature.
    pub fn temperature_range(&self) -> (f64, f64) {
        self.cells.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), c| (lo.min(c.temperature), hi.max(c.temperature)),
        )
    }
}
