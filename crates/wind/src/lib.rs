//! # spindrift-wind
//!
//! Wind records for spill scenarios: a unit- and layout-converting wrapper
//! over the [`spindrift_series::TimeSeries`] store, with a
//! Rayleigh-quantile speed-uncertainty shift and station-file round trips.

mod error;
mod rayleigh;
mod transform;
mod wind;

pub use error::WindError;
pub use transform::{r_theta_to_uv, uv_to_r_theta};
pub use wind::{SpeedShift, Wind};
