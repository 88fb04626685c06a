//! Coordinate mapping for the logarithmic H-R plot axes.
//!
//! Temperature runs hot-to-cool from left to right, luminosity runs dim-to-bright
//! from bottom to top. Both axes are logarithmic.
//!
//! Inputs must be strictly positive; `log10` of zero or a negative value is not a
//! plot position. The dataset is static and trusted, so this is a documented
//! precondition rather than a runtime check. Values outside the axis ranges are
//! extrapolated, never clamped.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{format_luminosity, format_thousands, EvolutionStep, Star};

/// A position on the plot surface (origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Surface size, plot-area edges and the value ranges mapped onto them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub min_luminosity: f64,
    pub max_luminosity: f64,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            left: 80.0,
            right: 720.0,
            top: 80.0,
            bottom: 520.0,
            min_temperature: 3000.0,
            max_temperature: 30000.0,
            min_luminosity: 0.0001,
            max_luminosity: 100000.0,
        }
    }
}

/// Which axis a tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Temperature,
    Luminosity,
}

/// A labelled tick; `position` is the point on the axis line the value maps to.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub axis: Axis,
    pub value: f64,
    pub label: String,
    pub position: Point,
}

const TEMPERATURE_TICKS: [f64; 4] = [30000.0, 10000.0, 6000.0, 3000.0];
const LUMINOSITY_TICKS: [f64; 5] = [100000.0, 1000.0, 1.0, 0.01, 0.0001];

/// Pure mapping from (temperature, luminosity) to plot-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateMapper {
    geometry: PlotGeometry,
}

impl CoordinateMapper {
    pub fn new(geometry: PlotGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    /// Hotter stars map further left: `max_temperature` lands on `left`,
    /// `min_temperature` on `right`.
    pub fn temperature_to_x(&self, temperature: f64) -> f64 {
        let g = &self.geometry;
        let fraction = log_fraction(temperature, g.min_temperature, g.max_temperature);
        g.right - fraction * (g.right - g.left)
    }

    /// Brighter stars map higher up: `max_luminosity` lands on `top`,
    /// `min_luminosity` on `bottom`.
    pub fn luminosity_to_y(&self, luminosity: f64) -> f64 {
        let g = &self.geometry;
        let fraction = log_fraction(luminosity, g.min_luminosity, g.max_luminosity);
        g.bottom - fraction * (g.bottom - g.top)
    }

    pub fn position(&self, temperature: f64, luminosity: f64) -> Point {
        Point::new(
            self.temperature_to_x(temperature),
            self.luminosity_to_y(luminosity),
        )
    }

    pub fn star_position(&self, star: &Star) -> Point {
        self.position(star.temperature, star.luminosity)
    }

    pub fn step_position(&self, step: &EvolutionStep) -> Point {
        self.position(step.temperature, step.luminosity)
    }

    /// Ticks for both axes, placed through the same mapping as the data points.
    pub fn ticks(&self) -> Vec<AxisTick> {
        let g = &self.geometry;
        let temperature = TEMPERATURE_TICKS.iter().map(|&t| AxisTick {
            axis: Axis::Temperature,
            value: t,
            label: format!("{}K", format_thousands(t)),
            position: Point::new(self.temperature_to_x(t), g.bottom),
        });
        let luminosity = LUMINOSITY_TICKS.iter().map(|&l| AxisTick {
            axis: Axis::Luminosity,
            value: l,
            label: if l >= 1.0 {
                format_thousands(l)
            } else {
                format_luminosity(l)
            },
            position: Point::new(g.left, self.luminosity_to_y(l)),
        });
        temperature.chain(luminosity).collect()
    }
}

fn log_fraction(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = (min.log10(), max.log10());
    (value.log10() - lo) / (hi - lo)
}
