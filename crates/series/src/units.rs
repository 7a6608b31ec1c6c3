//! Velocity units recorded at load time.

use std::fmt;

/// Units the raw series values were expressed in when loaded.
///
/// Set from file metadata when a series is read from disk, or left
/// [`Undefined`](VelocityUnits::Undefined) for in-memory construction, in
/// which case the components are conventionally u/v meters per second.
/// Read-only after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VelocityUnits {
    /// No units were recorded; values are taken as u/v meters per second.
    #[default]
    Undefined,
    /// Nautical miles per hour.
    Knots,
    /// SI meters per second.
    MetersPerSecond,
    /// Statute miles per hour.
    MilesPerHour,
}

impl VelocityUnits {
    /// Multiplier that converts a value in these units to meters per second.
    ///
    /// [`Undefined`](VelocityUnits::Undefined) values are conventionally
    /// already meters per second, so the factor is 1.
    pub fn si_factor(self) -> f64 {
        match self {
            VelocityUnits::Undefined | VelocityUnits::MetersPerSecond => 1.0,
            VelocityUnits::Knots => 0.514_444_444_444_444_4,
            VelocityUnits::MilesPerHour => 0.447_04,
        }
    }

    /// Parses a unit label as found in file metadata or CLI arguments.
    ///
    /// Returns `None` for labels outside the recognised set.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "undefined" => Some(VelocityUnits::Undefined),
            "knots" | "knot" | "kts" | "kt" => Some(VelocityUnits::Knots),
            "m/s" | "mps" | "meters per second" | "meter per second" => {
                Some(VelocityUnits::MetersPerSecond)
            }
            "mph" | "miles per hour" | "mile per hour" => Some(VelocityUnits::MilesPerHour),
            _ => None,
        }
    }

    /// Canonical label for this unit.
    pub fn label(self) -> &'static str {
        match self {
            VelocityUnits::Undefined => "undefined",
            VelocityUnits::Knots => "knots",
            VelocityUnits::MetersPerSecond => "m/s",
            VelocityUnits::MilesPerHour => "mph",
        }
    }
}

impl fmt::Display for VelocityUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
