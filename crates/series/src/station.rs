//! Station metadata for file-backed series.

/// A named geographic reference point associated with a time series, such
/// as a tide or current gauge. Present only when the source file carries a
/// parseable position.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station name as given in the file header.
    pub name: String,
    /// Longitude in degrees east.
    pub longitude: f64,
    /// Latitude in degrees north.
    pub latitude: f64,
    /// Elevation in meters, when the position line carries a third field.
    pub elevation: Option<f64>,
}

impl Station {
    /// Creates a station without an elevation.
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude,
            elevation: None,
        }
    }

    /// Sets the elevation in meters.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }
}
