//! Layout tags for the 2-component values of a series.

use std::fmt;

/// Layout of the two value columns in a flat time file.
///
/// The tag fixes how a [`Vec2`](crate::Vec2) is read: as velocity
/// components, or as a polar (magnitude, direction) pair. Files using the
/// direction-first column order are normalised to magnitude-first on read,
/// so a stored polar series is always (magnitude, direction).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeriesFormat {
    /// Columns are eastward and northward velocity components.
    #[default]
    Uv,
    /// Columns are magnitude then direction in degrees.
    MagnitudeDirection,
    /// Columns are direction in degrees then magnitude.
    DirectionMagnitude,
}

impl SeriesFormat {
    /// Parses a format selector name.
    ///
    /// Returns `None` for selectors outside the recognised set.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "uv" | "u-v" => Some(SeriesFormat::Uv),
            "r-theta" | "magnitude-direction" => Some(SeriesFormat::MagnitudeDirection),
            "theta-r" | "direction-magnitude" => Some(SeriesFormat::DirectionMagnitude),
            _ => None,
        }
    }

    /// Canonical selector name.
    pub fn label(self) -> &'static str {
        match self {
            SeriesFormat::Uv => "uv",
            SeriesFormat::MagnitudeDirection => "r-theta",
            SeriesFormat::DirectionMagnitude => "theta-r",
        }
    }

    /// Whether values under this tag are polar (magnitude, direction) pairs.
    pub fn is_polar(self) -> bool {
        !matches!(self, SeriesFormat::Uv)
    }
}

impl fmt::Display for SeriesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uv() {
        assert_eq!(SeriesFormat::default(), SeriesFormat::Uv);
    }

    #[test]
    fn parse_recognised_selectors() {
        assert_eq!(SeriesFormat::parse("uv"), Some(SeriesFormat::Uv));
        assert_eq!(
            SeriesFormat::parse("r-theta"),
            Some(SeriesFormat::MagnitudeDirection)
        );
        assert_eq!(
            SeriesFormat::parse("magnitude-direction"),
            Some(SeriesFormat::MagnitudeDirection)
        );
        assert_eq!(
            SeriesFormat::parse("THETA-R"),
            Some(SeriesFormat::DirectionMagnitude)
        );
    }

    #[test]
    fn parse_unrecognised_selector() {
        assert_eq!(SeriesFormat::parse("complex"), None);
        assert_eq!(SeriesFormat::parse(""), None);
    }

    #[test]
    fn polar_classification() {
        assert!(!SeriesFormat::Uv.is_polar());
        assert!(SeriesFormat::MagnitudeDirection.is_polar());
        assert!(SeriesFormat::DirectionMagnitude.is_polar());
    }

    #[test]
    fn label_round_trips_through_parse() {
        for f in [
            SeriesFormat::Uv,
            SeriesFormat::MagnitudeDirection,
            SeriesFormat::DirectionMagnitude,
        ] {
            assert_eq!(SeriesFormat::parse(f.label()), Some(f));
        }
    }
}
