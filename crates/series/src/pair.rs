//! Time-stamped 2-component samples.

/// A 2-component value.
///
/// Interpreted as (u, v) velocity components or as (magnitude, direction)
/// depending on the [`SeriesFormat`](crate::SeriesFormat) tag of the series
/// it belongs to. The store itself never converts between the two.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    /// First component: eastward velocity, or magnitude.
    pub u: f64,
    /// Second component: northward velocity, or direction in degrees.
    pub v: f64,
}

impl Vec2 {
    /// The zero value.
    pub const ZERO: Vec2 = Vec2 { u: 0.0, v: 0.0 };

    /// Creates a value from its two components.
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Returns this value with both components multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            u: self.u * factor,
            v: self.v * factor,
        }
    }
}

/// One sample in a time series: an instant and the value observed at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeValuePair {
    /// Sample time in seconds since the epoch (or model start).
    pub time: i64,
    /// Observed value.
    pub value: Vec2,
}

impl TimeValuePair {
    /// Creates a sample from a time and a value.
    pub fn new(time: i64, value: Vec2) -> Self {
        Self { time, value }
    }
}
