//! Flat station time-file writer.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use spindrift_series::{Station, TimeValuePair, VelocityUnits};

use crate::error::IoError;
use crate::time;

/// Write samples to a station time file.
///
/// Emits the header the engine expects: station name, position, units,
/// timezone marker, bounds line, then one `dd, mm, yyyy, hh, mm, v1, v2`
/// row per sample. Without a station the name and position lines fall back
/// to the bare placeholders.
///
/// # Errors
///
/// Returns [`IoError::InvalidTime`] if a sample timestamp cannot be
/// expressed as a calendar date, and [`IoError::Io`] on write failure.
pub fn write_time_file(
    path: &Path,
    samples: &[TimeValuePair],
    station: Option<&Station>,
    units: VelocityUnits,
) -> Result<(), IoError> {
    let mut out = String::new();

    match station {
        Some(s) => {
            out.push_str(&s.name);
            out.push('\n');
            match s.elevation {
                Some(elevation) => {
                    let _ = writeln!(out, "{:.6}, {:.6}, {elevation:.2}", s.longitude, s.latitude);
                }
                None => {
                    let _ = writeln!(out, "{:.6}, {:.6}", s.longitude, s.latitude);
                }
            }
        }
        None => {
            out.push_str("Station Name\n");
            out.push_str("Position\n");
        }
    }
    out.push_str(units.label());
    out.push('\n');
    out.push_str("LTime\n");
    out.push_str("0,0,0,0,0,0,0,0\n");

    for sample in samples {
        let (day, month, year, hour, minute) =
            time::civil_fields(sample.time).ok_or(IoError::InvalidTime { time: sample.time })?;
        let _ = writeln!(
            out,
            "{day:02}, {month:02}, {year:04}, {hour:02}, {minute:02}, {:.4}, {:.4}",
            sample.value.u, sample.value.v
        );
    }

    fs::write(path, out).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(
        path = %path.display(),
        n_samples = samples.len(),
        units = %units,
        "wrote station time file"
    );

    Ok(())
}
