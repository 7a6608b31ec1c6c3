//! Wind record over a time-series store.

use std::path::Path;

use tracing::debug;

use spindrift_series::{SeriesFormat, Station, TimeSeries, TimeValuePair, Vec2, VelocityUnits};

use crate::error::WindError;
use crate::{rayleigh, transform};

/// Direction of a speed-uncertainty shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedShift {
    /// Shift every speed up to the quantile above the median.
    Up,
    /// Shift every speed down to the quantile below the median.
    Down,
}

/// A wind record for a spill scenario.
///
/// Wraps a [`TimeSeries`] that always holds (u, v) components in meters per
/// second; units and layout are converted at this type's boundary, so the
/// record can be fed data in knots or miles per hour, polar or component
/// layout, and read back the same way. The units the caller last supplied
/// (or the source file declared) are the default for output.
#[derive(Debug, Clone, PartialEq)]
pub struct Wind {
    /// Backing store, (u, v) meters per second.
    series: TimeSeries,
    /// Units used for input/output at the API boundary.
    units: VelocityUnits,
    /// Free-form description of the record.
    description: String,
    /// Fractional speed uncertainty in (0, 0.5], or 0 when disabled.
    speed_uncertainty_scale: f64,
}

impl Wind {
    /// Creates a wind record from samples in the given units and layout.
    ///
    /// An empty sample sequence yields a single zero-valued sample at
    /// time 0, matching the store's construction rule.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InvalidUnits`] if `units` is
    /// [`VelocityUnits::Undefined`]: wind data is meaningless without
    /// concrete units.
    pub fn from_samples(
        samples: &[TimeValuePair],
        units: VelocityUnits,
        format: SeriesFormat,
    ) -> Result<Self, WindError> {
        check_units(units)?;
        Ok(Self {
            series: TimeSeries::from_samples(to_mps_uv(samples, units, format)),
            units,
            description: String::new(),
            speed_uncertainty_scale: 0.0,
        })
    }

    /// Reads a wind record from a station time file.
    ///
    /// Units come from the file header; station metadata and the source
    /// path are preserved on the backing store.
    ///
    /// # Errors
    ///
    /// Propagates reader errors, and returns [`WindError::InvalidUnits`]
    /// if the file omits units or declares them undefined.
    pub fn from_file(path: &Path, format: SeriesFormat) -> Result<Self, WindError> {
        let loaded = spindrift_io::load_series(path, format)?;
        check_units(loaded.units())?;

        // Polar rows are already magnitude-first after reading.
        let layout = if format.is_polar() {
            SeriesFormat::MagnitudeDirection
        } else {
            SeriesFormat::Uv
        };
        let units = loaded.units();
        let converted = to_mps_uv(loaded.samples(), units, layout);
        let series = TimeSeries::from_parts(
            converted,
            VelocityUnits::MetersPerSecond,
            SeriesFormat::Uv,
            loaded.station().cloned(),
            loaded.source(),
        );

        debug!(
            path = %path.display(),
            n_samples = series.len(),
            units = %units,
            "loaded wind record"
        );

        Ok(Self {
            series,
            units,
            description: String::new(),
            speed_uncertainty_scale: 0.0,
        })
    }

    /// A constant wind: a single (speed, direction) sample at time 0.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InvalidUnits`] for undefined units.
    pub fn constant(speed: f64, direction: f64, units: VelocityUnits) -> Result<Self, WindError> {
        let sample = TimeValuePair::new(0, Vec2::new(speed, direction));
        Self::from_samples(&[sample], units, SeriesFormat::MagnitudeDirection)
    }

    // -- Accessors ----------------------------------------------------------

    /// Units used for input/output.
    pub fn units(&self) -> VelocityUnits {
        self.units
    }

    /// Changes the input/output units without touching stored data.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InvalidUnits`] for undefined units.
    pub fn set_units(&mut self, units: VelocityUnits) -> Result<(), WindError> {
        check_units(units)?;
        self.units = units;
        Ok(())
    }

    /// Free-form description of the record.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Station metadata from the source file, when present.
    pub fn station(&self) -> Option<&Station> {
        self.series.station()
    }

    /// The backing store.
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Scale factor applied to queried values.
    pub fn scale_factor(&self) -> f64 {
        self.series.scale_factor()
    }

    /// Sets the scale factor applied to queried values.
    pub fn set_scale_factor(&mut self, factor: f64) {
        self.series.set_scale_factor(factor);
    }

    /// Fractional speed uncertainty used by
    /// [`apply_speed_uncertainty`](Self::apply_speed_uncertainty).
    pub fn speed_uncertainty_scale(&self) -> f64 {
        self.speed_uncertainty_scale
    }

    /// Sets the fractional speed uncertainty; validated when applied.
    pub fn set_speed_uncertainty_scale(&mut self, scale: f64) {
        self.speed_uncertainty_scale = scale;
    }

    // -- Timeseries access --------------------------------------------------

    /// Returns the whole series in the given units and layout.
    ///
    /// Pass `None` for `units` to use the record's input/output units.
    pub fn timeseries(
        &self,
        units: Option<VelocityUnits>,
        format: SeriesFormat,
    ) -> Vec<TimeValuePair> {
        from_mps_uv(self.series.samples(), units.unwrap_or(self.units), format)
    }

    /// Replaces the whole series with samples in the given units and layout.
    ///
    /// The new units become the record's input/output units.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::InvalidUnits`] for undefined units, and
    /// propagates the store's empty-replacement error for an empty
    /// sequence, leaving the record untouched.
    pub fn set_timeseries(
        &mut self,
        samples: &[TimeValuePair],
        units: VelocityUnits,
        format: SeriesFormat,
    ) -> Result<(), WindError> {
        check_units(units)?;
        self.series.replace(to_mps_uv(samples, units, format))?;
        self.units = units;
        Ok(())
    }

    /// Interpolated (speed, direction) at `time`, in meters per second.
    ///
    /// # Errors
    ///
    /// Propagates the store's empty-series error.
    pub fn value_at(&self, time: i64) -> Result<(f64, f64), WindError> {
        let value = self.series.value_at(time)?;
        Ok(transform::uv_to_r_theta(value.u, value.v))
    }

    // -- Transforms ---------------------------------------------------------

    /// Shifts every speed to a Rayleigh quantile above or below the median,
    /// scaled by the configured uncertainty fraction. Directions are kept.
    ///
    /// The shift rewrites the stored values, so it should be applied once
    /// per realisation.
    ///
    /// # Errors
    ///
    /// Returns [`WindError::UncertaintyScale`] if the configured scale is
    /// outside (0, 0.5].
    pub fn apply_speed_uncertainty(&mut self, shift: SpeedShift) -> Result<(), WindError> {
        let scale = self.speed_uncertainty_scale;
        if !(scale > 0.0 && scale <= 0.5) {
            return Err(WindError::UncertaintyScale { scale });
        }
        let p = match shift {
            SpeedShift::Up => 0.5 + scale,
            SpeedShift::Down => 0.5 - scale,
        };

        let shifted = self
            .series
            .samples()
            .iter()
            .map(|sample| {
                let (speed, direction) = transform::uv_to_r_theta(sample.value.u, sample.value.v);
                let sigma = rayleigh::sigma_from_mean(speed);
                TimeValuePair::new(
                    sample.time,
                    transform::r_theta_to_uv(rayleigh::quantile(p, sigma), direction),
                )
            })
            .collect();
        self.series.replace(shifted)?;

        debug!(p, ?shift, "applied speed uncertainty shift");
        Ok(())
    }

    /// Writes the record to a station time file in its input/output units,
    /// magnitude-direction layout.
    ///
    /// # Errors
    ///
    /// Propagates writer errors.
    pub fn save(&self, path: &Path) -> Result<(), WindError> {
        let rows = self.timeseries(None, SeriesFormat::MagnitudeDirection);
        spindrift_io::write_time_file(path, &rows, self.station(), self.units)?;
        Ok(())
    }
}

fn check_units(units: VelocityUnits) -> Result<(), WindError> {
    if units == VelocityUnits::Undefined {
        return Err(WindError::InvalidUnits { units });
    }
    Ok(())
}

/// Convert samples in the given units and layout to (u, v) meters per
/// second.
fn to_mps_uv(
    samples: &[TimeValuePair],
    units: VelocityUnits,
    format: SeriesFormat,
) -> Vec<TimeValuePair> {
    let factor = units.si_factor();
    samples
        .iter()
        .map(|sample| {
            let value = match format {
                SeriesFormat::Uv => sample.value.scaled(factor),
                SeriesFormat::MagnitudeDirection => {
                    transform::r_theta_to_uv(sample.value.u * factor, sample.value.v)
                }
                SeriesFormat::DirectionMagnitude => {
                    transform::r_theta_to_uv(sample.value.v * factor, sample.value.u)
                }
            };
            TimeValuePair::new(sample.time, value)
        })
        .collect()
}

/// Convert (u, v) meters-per-second samples out to the given units and
/// layout.
fn from_mps_uv(
    samples: &[TimeValuePair],
    units: VelocityUnits,
    format: SeriesFormat,
) -> Vec<TimeValuePair> {
    let factor = 1.0 / units.si_factor();
    samples
        .iter()
        .map(|sample| {
            let value = match format {
                SeriesFormat::Uv => sample.value.scaled(factor),
                SeriesFormat::MagnitudeDirection => {
                    let (magnitude, direction) =
                        transform::uv_to_r_theta(sample.value.u, sample.value.v);
                    Vec2::new(magnitude * factor, direction)
                }
                SeriesFormat::DirectionMagnitude => {
                    let (magnitude, direction) =
                        transform::uv_to_r_theta(sample.value.u, sample.value.v);
                    Vec2::new(direction, magnitude * factor)
                }
            };
            TimeValuePair::new(sample.time, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < TOL, "{a} != {b}");
    }

    #[test]
    fn undefined_units_rejected() {
        let err = Wind::from_samples(&[], VelocityUnits::Undefined, SeriesFormat::Uv).unwrap_err();
        assert!(matches!(err, WindError::InvalidUnits { .. }));
    }

    #[test]
    fn empty_samples_become_zero_wind() {
        let wind = Wind::from_samples(&[], VelocityUnits::Knots, SeriesFormat::Uv).unwrap();
        assert_eq!(wind.series().len(), 1);
        let (speed, _) = wind.value_at(0).unwrap();
        assert_close(speed, 0.0);
    }

    #[test]
    fn knots_convert_to_mps_internally() {
        let samples = [TimeValuePair::new(0, Vec2::new(10.0, 0.0))];
        let wind =
            Wind::from_samples(&samples, VelocityUnits::Knots, SeriesFormat::Uv).unwrap();
        assert_close(wind.series().samples()[0].value.u, 5.144_444_444_444_444);
    }

    #[test]
    fn constant_wind_is_uniform_in_time() {
        let wind = Wind::constant(10.0, 270.0, VelocityUnits::MetersPerSecond).unwrap();
        for t in [-3600, 0, 86_400] {
            let (speed, direction) = wind.value_at(t).unwrap();
            assert_close(speed, 10.0);
            assert_close(direction, 270.0);
        }
    }

    #[test]
    fn timeseries_round_trips_through_units_and_layout() {
        let samples = [
            TimeValuePair::new(0, Vec2::new(10.0, 0.0)),
            TimeValuePair::new(3600, Vec2::new(20.0, 90.0)),
        ];
        let wind = Wind::from_samples(
            &samples,
            VelocityUnits::Knots,
            SeriesFormat::MagnitudeDirection,
        )
        .unwrap();

        let out = wind.timeseries(None, SeriesFormat::MagnitudeDirection);
        for (a, b) in samples.iter().zip(&out) {
            assert_eq!(a.time, b.time);
            assert_close(a.value.u, b.value.u);
            assert_close(a.value.v, b.value.v);
        }
    }

    #[test]
    fn direction_first_layout_honoured_on_input_and_output() {
        let samples = [TimeValuePair::new(0, Vec2::new(180.0, 6.0))];
        let wind = Wind::from_samples(
            &samples,
            VelocityUnits::MetersPerSecond,
            SeriesFormat::DirectionMagnitude,
        )
        .unwrap();

        let out = wind.timeseries(None, SeriesFormat::DirectionMagnitude);
        assert_close(out[0].value.u, 180.0);
        assert_close(out[0].value.v, 6.0);

        // Same data magnitude-first.
        let polar = wind.timeseries(None, SeriesFormat::MagnitudeDirection);
        assert_close(polar[0].value.u, 6.0);
        assert_close(polar[0].value.v, 180.0);
    }

    #[test]
    fn unit_conversion_on_output() {
        let samples = [TimeValuePair::new(0, Vec2::new(1.0, 0.0))];
        let wind =
            Wind::from_samples(&samples, VelocityUnits::MetersPerSecond, SeriesFormat::Uv)
                .unwrap();
        let knots = wind.timeseries(Some(VelocityUnits::Knots), SeriesFormat::Uv);
        assert_close(knots[0].value.u, 1.0 / 0.514_444_444_444_444_4);
    }

    #[test]
    fn set_timeseries_switches_units() {
        let mut wind = Wind::constant(5.0, 0.0, VelocityUnits::Knots).unwrap();
        wind.set_timeseries(
            &[TimeValuePair::new(0, Vec2::new(3.0, 4.0))],
            VelocityUnits::MetersPerSecond,
            SeriesFormat::Uv,
        )
        .unwrap();
        assert_eq!(wind.units(), VelocityUnits::MetersPerSecond);
        let (speed, _) = wind.value_at(0).unwrap();
        assert_close(speed, 5.0);
    }

    #[test]
    fn set_timeseries_empty_leaves_record_untouched() {
        let mut wind = Wind::constant(5.0, 0.0, VelocityUnits::Knots).unwrap();
        let before = wind.clone();
        assert!(wind
            .set_timeseries(&[], VelocityUnits::Knots, SeriesFormat::Uv)
            .is_err());
        assert_eq!(wind, before);
    }

    #[test]
    fn scale_factor_applies_to_queries() {
        let mut wind = Wind::constant(2.0, 90.0, VelocityUnits::MetersPerSecond).unwrap();
        wind.set_scale_factor(3.0);
        let (speed, direction) = wind.value_at(0).unwrap();
        assert_close(speed, 6.0);
        assert_close(direction, 90.0);
    }

    #[test]
    fn uncertainty_requires_valid_scale() {
        let mut wind = Wind::constant(10.0, 0.0, VelocityUnits::MetersPerSecond).unwrap();
        let err = wind.apply_speed_uncertainty(SpeedShift::Up).unwrap_err();
        assert!(matches!(err, WindError::UncertaintyScale { scale } if scale == 0.0));

        wind.set_speed_uncertainty_scale(0.9);
        assert!(wind.apply_speed_uncertainty(SpeedShift::Up).is_err());
    }

    #[test]
    fn uncertainty_shifts_speeds_not_directions() {
        let mut up = Wind::constant(10.0, 45.0, VelocityUnits::MetersPerSecond).unwrap();
        up.set_speed_uncertainty_scale(0.3);
        up.apply_speed_uncertainty(SpeedShift::Up).unwrap();
        let (speed_up, direction) = up.value_at(0).unwrap();
        assert!(speed_up > 10.0 * 0.8);
        assert_close(direction, 45.0);

        let mut down = Wind::constant(10.0, 45.0, VelocityUnits::MetersPerSecond).unwrap();
        down.set_speed_uncertainty_scale(0.3);
        down.apply_speed_uncertainty(SpeedShift::Down).unwrap();
        let (speed_down, _) = down.value_at(0).unwrap();
        assert!(speed_down < speed_up);
    }

    #[test]
    fn description_and_units_setters() {
        let mut wind = Wind::constant(1.0, 0.0, VelocityUnits::Knots).unwrap();
        wind.set_description("harbour gauge");
        assert_eq!(wind.description(), "harbour gauge");

        wind.set_units(VelocityUnits::MilesPerHour).unwrap();
        assert_eq!(wind.units(), VelocityUnits::MilesPerHour);
        assert!(wind.set_units(VelocityUnits::Undefined).is_err());
    }
}
