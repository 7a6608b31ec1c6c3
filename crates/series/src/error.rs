//! Error types for spindrift-series.

/// Error type for all fallible operations in the spindrift-series crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a value is requested from a store holding no samples.
    #[error("time series holds no samples")]
    EmptySeries,

    /// Returned when a whole-series replacement is given no samples.
    #[error("replacement series must not be empty")]
    EmptyReplacement,

    /// Returned when a running-average window is not a positive duration.
    #[error("running-average window must be positive, got {hours} h")]
    InvalidWindow {
        /// The rejected window size in hours.
        hours: f64,
    },
}
