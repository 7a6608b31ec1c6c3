//! Flat station time-file reader.
//!
//! The format is the OSSM-style text layout the trajectory engine consumes:
//! a station-name line, a position line, a units line, any number of
//! trailer header lines (timezone marker, bounds), then comma-delimited
//! data rows of `day, month, year, hour, minute, value1, value2`. The
//! format selector fixes what the two value columns mean.

use std::fs;
use std::path::Path;

use tracing::debug;

use spindrift_series::{SeriesFormat, Station, TimeSeries, TimeValuePair, Vec2, VelocityUnits};

use crate::error::IoError;
use crate::time;

/// The parts parsed out of a station time file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    /// Data rows in file order.
    pub samples: Vec<TimeValuePair>,
    /// Units declared in the file header; [`VelocityUnits::Undefined`]
    /// when the header omits them.
    pub units: VelocityUnits,
    /// Station metadata, when the position line carried coordinates.
    pub station: Option<Station>,
}

/// One data row split into calendar fields and the two value columns.
struct RawRow {
    day: u32,
    month: u32,
    year: i32,
    hour: u32,
    minute: u32,
    first: f64,
    second: f64,
}

/// Resolve a format selector name.
///
/// # Errors
///
/// Returns [`IoError::UnknownFormat`] for selectors outside the recognised
/// set.
pub fn parse_format(name: &str) -> Result<SeriesFormat, IoError> {
    SeriesFormat::parse(name).ok_or_else(|| IoError::UnknownFormat {
        name: name.to_string(),
    })
}

/// Resolve a unit label.
///
/// # Errors
///
/// Returns [`IoError::UnknownUnits`] for labels outside the recognised set.
pub fn parse_units(text: &str) -> Result<VelocityUnits, IoError> {
    VelocityUnits::parse(text).ok_or_else(|| IoError::UnknownUnits {
        text: text.to_string(),
    })
}

/// Read a station time file into samples plus header metadata.
///
/// Rows under a direction-first selector are normalised to
/// (magnitude, direction) column order. The units line is optional: a file
/// whose data rows start right after the position line yields
/// [`VelocityUnits::Undefined`].
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::UnknownUnits`] if a units line is present but cannot be
/// resolved, and [`IoError::Parse`] for a truncated header, a malformed or
/// impossible-date data row, or a file with no data rows.
pub fn read_time_file(path: &Path, format: SeriesFormat) -> Result<RawSeries, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 3 {
        return Err(IoError::Parse {
            path: path.to_path_buf(),
            line: lines.len(),
            reason: "truncated header: expected station name, position, and units lines"
                .to_string(),
        });
    }

    let name = lines[0].trim();
    let station = parse_position(name, lines[1]);

    // Units metadata is recorded when present; a file whose data begins
    // straight after the position line carries no units.
    let (units, data_start) = if parse_row(lines[2].trim()).is_some() {
        (VelocityUnits::Undefined, 2)
    } else {
        (parse_units(lines[2])?, 3)
    };

    // Skip trailer header lines (timezone marker, bounds) until the first
    // parseable data row; after that every non-blank line must be a row.
    let mut samples = Vec::new();
    let mut in_data = false;

    for (idx, line) in lines.iter().enumerate().skip(data_start) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_row(trimmed) {
            None if !in_data => continue,
            None => {
                return Err(IoError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason: format!("malformed data row '{trimmed}'"),
                });
            }
            Some(row) => {
                in_data = true;
                let time = time::to_epoch_seconds(row.day, row.month, row.year, row.hour, row.minute)
                    .ok_or_else(|| IoError::Parse {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        reason: format!(
                            "impossible date {:02}/{:02}/{:04} {:02}:{:02}",
                            row.day, row.month, row.year, row.hour, row.minute
                        ),
                    })?;
                let value = match format {
                    SeriesFormat::Uv | SeriesFormat::MagnitudeDirection => {
                        Vec2::new(row.first, row.second)
                    }
                    SeriesFormat::DirectionMagnitude => Vec2::new(row.second, row.first),
                };
                samples.push(TimeValuePair::new(time, value));
            }
        }
    }

    if samples.is_empty() {
        return Err(IoError::Parse {
            path: path.to_path_buf(),
            line: lines.len(),
            reason: "no data rows".to_string(),
        });
    }

    debug!(
        path = %path.display(),
        n_samples = samples.len(),
        units = %units,
        has_station = station.is_some(),
        "read station time file"
    );

    Ok(RawSeries {
        samples,
        units,
        station,
    })
}

/// Read a station time file straight into a [`TimeSeries`] store.
///
/// This is the store's from-file constructor: units and station come from
/// the header, the selector and source path are recorded as metadata.
///
/// # Errors
///
/// Propagates every error of [`read_time_file`].
pub fn load_series(path: &Path, format: SeriesFormat) -> Result<TimeSeries, IoError> {
    let raw = read_time_file(path, format)?;
    Ok(TimeSeries::from_parts(
        raw.samples,
        raw.units,
        format,
        raw.station,
        Some(path),
    ))
}

/// Parse the position header line into station metadata.
///
/// Accepts `lon, lat` or `lon, lat, elevation`; anything else (such as the
/// bare `Position` placeholder) yields no station.
fn parse_position(name: &str, line: &str) -> Option<Station> {
    let fields: Vec<f64> = line
        .split(',')
        .map(|f| f.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;

    match fields[..] {
        [longitude, latitude] => Some(Station::new(name, longitude, latitude)),
        [longitude, latitude, elevation] => {
            Some(Station::new(name, longitude, latitude).with_elevation(elevation))
        }
        _ => None,
    }
}

/// Split a line into the seven row fields, or `None` if it is not a row.
fn parse_row(line: &str) -> Option<RawRow> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 7 {
        return None;
    }
    Some(RawRow {
        day: fields[0].parse().ok()?,
        month: fields[1].parse().ok()?,
        year: fields[2].parse().ok()?,
        hour: fields[3].parse().ok()?,
        minute: fields[4].parse().ok()?,
        first: fields[5].parse().ok()?,
        second: fields[6].parse().ok()?,
    })
}
