//! The time-series value store.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SeriesError;
use crate::format::SeriesFormat;
use crate::pair::{TimeValuePair, Vec2};
use crate::station::Station;
use crate::units::VelocityUnits;

/// Seconds per hour, for window-size conversion.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// In-memory store for a sequence of time-stamped 2-component values.
///
/// Samples are held exactly as supplied: ascending order by timestamp is
/// the caller's contract, and duplicates are kept. A mutable scale factor
/// (default 1) multiplies every queried value; units, layout, station, and
/// source-path metadata are fixed at construction.
///
/// Queries interpolate linearly between the two bracketing samples and
/// clamp to the nearest endpoint sample outside the stored range.
///
/// The store provides no locking; interleaving [`replace`](Self::replace)
/// with queries requires external synchronisation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    samples: Vec<TimeValuePair>,
    scale_factor: f64,
    units: VelocityUnits,
    format: SeriesFormat,
    station: Option<Station>,
    source: Option<PathBuf>,
}

impl TimeSeries {
    /// Creates an empty placeholder store.
    ///
    /// Every query against it fails with [`SeriesError::EmptySeries`] until
    /// [`replace`](Self::replace) supplies data.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            scale_factor: 1.0,
            units: VelocityUnits::Undefined,
            format: SeriesFormat::Uv,
            station: None,
            source: None,
        }
    }

    /// Creates a store from an explicit sample sequence, stored verbatim.
    ///
    /// An empty input is replaced by a single zero-valued sample at time 0.
    /// Units are [`VelocityUnits::Undefined`]: the caller is responsible for
    /// interpreting the components, conventionally u/v meters per second.
    pub fn from_samples(mut samples: Vec<TimeValuePair>) -> Self {
        if samples.is_empty() {
            debug!("empty sample sequence, substituting a zero sample at t=0");
            samples.push(TimeValuePair::new(0, Vec2::ZERO));
        }
        Self {
            samples,
            ..Self::new()
        }
    }

    /// Creates a store from the parts produced by a file reader.
    ///
    /// Used by readers that have already parsed samples and metadata; no
    /// empty-input substitution is applied here, readers reject files
    /// without data rows.
    pub fn from_parts(
        samples: Vec<TimeValuePair>,
        units: VelocityUnits,
        format: SeriesFormat,
        station: Option<Station>,
        source: Option<&Path>,
    ) -> Self {
        Self {
            samples,
            scale_factor: 1.0,
            units,
            format,
            station,
            source: source.map(Path::to_path_buf),
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the stored samples.
    pub fn samples(&self) -> &[TimeValuePair] {
        &self.samples
    }

    /// Returns the number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the store holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the current scale factor.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Sets the scale factor applied to every queried value.
    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    /// Returns the units the raw values were expressed in at load time.
    pub fn units(&self) -> VelocityUnits {
        self.units
    }

    /// Returns the layout tag of the stored values.
    pub fn format(&self) -> SeriesFormat {
        self.format
    }

    /// Returns the station metadata, when the source carried it.
    pub fn station(&self) -> Option<&Station> {
        self.station.as_ref()
    }

    /// Returns the source path, when the store was read from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns the timestamp of the first stored sample.
    pub fn start_time(&self) -> Option<i64> {
        self.samples.first().map(|s| s.time)
    }

    /// Returns the timestamp of the last stored sample.
    pub fn end_time(&self) -> Option<i64> {
        self.samples.last().map(|s| s.time)
    }

    // -- Queries ------------------------------------------------------------

    /// Returns the value at `time`, multiplied by the scale factor.
    ///
    /// Interpolates linearly between the two bracketing samples; outside
    /// the stored range the nearest endpoint sample is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the store holds no samples.
    pub fn value_at(&self, time: i64) -> Result<Vec2, SeriesError> {
        Ok(self.interpolate(time)?.scaled(self.scale_factor))
    }

    /// Returns one value per query timestamp, in input order.
    ///
    /// Timestamps need not be sorted or within the stored range.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptySeries`] if the store holds no samples.
    pub fn values_at(&self, times: &[i64]) -> Result<Vec<Vec2>, SeriesError> {
        times.iter().map(|&t| self.value_at(t)).collect()
    }

    fn interpolate(&self, time: i64) -> Result<Vec2, SeriesError> {
        let (first, last) = match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(SeriesError::EmptySeries),
        };

        if time <= first.time {
            return Ok(first.value);
        }
        if time >= last.time {
            return Ok(last.value);
        }

        // The sequence is taken as given, so a linear scan rather than a
        // binary search; station records are short.
        for w in self.samples.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            if time > hi.time {
                continue;
            }
            if time == hi.time || hi.time == lo.time {
                return Ok(hi.value);
            }
            let frac = (time - lo.time) as f64 / (hi.time - lo.time) as f64;
            return Ok(Vec2::new(
                lo.value.u + frac * (hi.value.u - lo.value.u),
                lo.value.v + frac * (hi.value.v - lo.value.v),
            ));
        }

        Ok(last.value)
    }

    // -- Mutation -----------------------------------------------------------

    /// Replaces the whole sample sequence.
    ///
    /// The replacement is atomic as observed by subsequent queries: on
    /// error the prior samples are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::EmptyReplacement`] if `samples` is empty.
    pub fn replace(&mut self, samples: Vec<TimeValuePair>) -> Result<(), SeriesError> {
        if samples.is_empty() {
            return Err(SeriesError::EmptyReplacement);
        }
        self.samples = samples;
        Ok(())
    }

    // -- Transforms ---------------------------------------------------------

    /// Trailing running average over a window of `window_hours`.
    ///
    /// Produces one output sample per stored sample, with the same
    /// timestamps in the same order. Each output value is the arithmetic
    /// mean of the raw stored values whose timestamps fall in the inclusive
    /// window `[t - w, t]` ending at that sample's timestamp; the scale
    /// factor is not applied. A window longer than the full span reduces to
    /// the series-wide mean at every output point.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidWindow`] for a non-positive or
    /// non-finite window, and [`SeriesError::EmptySeries`] when the store
    /// holds no samples.
    pub fn running_average(&self, window_hours: f64) -> Result<Vec<TimeValuePair>, SeriesError> {
        if !window_hours.is_finite() || window_hours <= 0.0 {
            return Err(SeriesError::InvalidWindow {
                hours: window_hours,
            });
        }
        if self.samples.is_empty() {
            return Err(SeriesError::EmptySeries);
        }

        let window = (window_hours * SECONDS_PER_HOUR).round() as i64;

        // Membership is by timestamp, not index, so each output point scans
        // the full sequence; the sample itself always lies in its own
        // window, so the count is never zero.
        let averaged = self
            .samples
            .iter()
            .map(|sample| {
                let cutoff = sample.time - window;
                let mut sum = Vec2::ZERO;
                let mut count = 0usize;
                for other in &self.samples {
                    if other.time >= cutoff && other.time <= sample.time {
                        sum.u += other.value.u;
                        sum.v += other.value.v;
                        count += 1;
                    }
                }
                TimeValuePair::new(
                    sample.time,
                    Vec2::new(sum.u / count as f64, sum.v / count as f64),
                )
            })
            .collect();

        Ok(averaged)
    }

    // -- Comparison ---------------------------------------------------------

    /// Metadata-only comparison: same source path (or both absent), layout,
    /// scale factor, station, and units, ignoring the sample sequence.
    ///
    /// Full structural equality, including the samples, is `==`.
    pub fn same_source(&self, other: &Self) -> bool {
        self.source == other.source
            && self.format == other.format
            && self.scale_factor == other.scale_factor
            && self.station == other.station
            && self.units == other.units
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::new()
    }
}
