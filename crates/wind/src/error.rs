//! Error types for spindrift-wind.

use spindrift_series::VelocityUnits;

/// Error type for all fallible operations in the spindrift-wind crate.
#[derive(Debug, thiserror::Error)]
pub enum WindError {
    /// Returned when an operation needs concrete velocity units.
    #[error("velocity units must be defined, got '{units}'")]
    InvalidUnits {
        /// The rejected units value.
        units: VelocityUnits,
    },

    /// Returned when the speed-uncertainty scale is outside (0, 0.5].
    #[error("speed uncertainty scale must be in (0, 0.5], got {scale}")]
    UncertaintyScale {
        /// The rejected scale.
        scale: f64,
    },

    /// Series store error.
    #[error(transparent)]
    Series(#[from] spindrift_series::SeriesError),

    /// Station file error.
    #[error(transparent)]
    Io(#[from] spindrift_io::IoError),
}
