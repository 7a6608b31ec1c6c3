//! # spindrift-io
//!
//! Read and write the flat station time files the trajectory engine
//! consumes, bridging the text format into spindrift's in-memory
//! [`TimeSeries`](spindrift_series::TimeSeries) store.

mod error;
mod reader;
mod time;
mod writer;

pub use error::IoError;
pub use reader::{RawSeries, load_series, parse_format, parse_units, read_time_file};
pub use writer::write_time_file;
