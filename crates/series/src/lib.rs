//! # spindrift-series
//!
//! Core time-series value store for station wind and current records. Holds
//! an ordered sequence of (time, 2-component value) samples and answers
//! point and batch queries by linear interpolation, with a trailing
//! running-average transform. Unit and layout metadata travel alongside the
//! raw values; conversion between units and layouts is a caller concern.

mod error;
mod format;
mod pair;
mod station;
mod store;
mod units;

pub use error::SeriesError;
pub use format::SeriesFormat;
pub use pair::{TimeValuePair, Vec2};
pub use station::Station;
pub use store::{SECONDS_PER_HOUR, TimeSeries};
pub use units::VelocityUnits;
