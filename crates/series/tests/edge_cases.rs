use std::path::Path;

use spindrift_series::{
    SeriesError, SeriesFormat, Station, TimeSeries, TimeValuePair, Vec2, VelocityUnits,
};

fn hourly(values: &[(f64, f64)]) -> Vec<TimeValuePair> {
    values
        .iter()
        .enumerate()
        .map(|(i, &(u, v))| TimeValuePair::new(i as i64 * 3600, Vec2::new(u, v)))
        .collect()
}

#[test]
fn query_after_replace_reflects_only_new_series() {
    let mut ts = TimeSeries::from_samples(hourly(&[(1.0, 0.0), (3.0, 0.0)]));
    assert_eq!(ts.value_at(1800).unwrap(), Vec2::new(2.0, 0.0));

    ts.replace(hourly(&[(10.0, 0.0), (30.0, 0.0)])).unwrap();

    // Old values are gone entirely, including at their former timestamps.
    assert_eq!(ts.value_at(0).unwrap(), Vec2::new(10.0, 0.0));
    assert_eq!(ts.value_at(1800).unwrap(), Vec2::new(20.0, 0.0));
    assert_eq!(ts.value_at(3600).unwrap(), Vec2::new(30.0, 0.0));
}

#[test]
fn failed_replace_keeps_queries_on_old_series() {
    let mut ts = TimeSeries::from_samples(hourly(&[(1.0, 2.0)]));
    assert!(ts.replace(Vec::new()).is_err());
    assert_eq!(ts.value_at(0).unwrap(), Vec2::new(1.0, 2.0));
}

#[test]
fn from_parts_carries_metadata() {
    let station = Station::new("Santa Barbara", -119.69, 34.41);
    let ts = TimeSeries::from_parts(
        hourly(&[(5.0, 180.0)]),
        VelocityUnits::Knots,
        SeriesFormat::MagnitudeDirection,
        Some(station.clone()),
        Some(Path::new("/data/sb.ossm")),
    );

    assert_eq!(ts.units(), VelocityUnits::Knots);
    assert_eq!(ts.format(), SeriesFormat::MagnitudeDirection);
    assert_eq!(ts.station(), Some(&station));
    assert_eq!(ts.source(), Some(Path::new("/data/sb.ossm")));
    assert_eq!(ts.start_time(), Some(0));
    assert_eq!(ts.end_time(), Some(0));
}

#[test]
fn batch_query_accepts_unsorted_and_out_of_range_times() {
    let ts = TimeSeries::from_samples(hourly(&[(0.0, 0.0), (4.0, 8.0)]));
    let out = ts.values_at(&[900_000, 1800, -3600]).unwrap();
    assert_eq!(out[0], Vec2::new(4.0, 8.0));
    assert_eq!(out[1], Vec2::new(2.0, 4.0));
    assert_eq!(out[2], Vec2::new(0.0, 0.0));
}

#[test]
fn running_average_counts_duplicate_timestamps_once_each() {
    let ts = TimeSeries::from_samples(vec![
        TimeValuePair::new(0, Vec2::new(1.0, 0.0)),
        TimeValuePair::new(0, Vec2::new(3.0, 0.0)),
        TimeValuePair::new(3600, Vec2::new(5.0, 0.0)),
    ]);
    let out = ts.running_average(1.0).unwrap();

    // Both t=0 samples fall inside each other's window.
    assert_eq!(out[0].value, Vec2::new(2.0, 0.0));
    assert_eq!(out[1].value, Vec2::new(2.0, 0.0));
    // All three lie within one hour of t=3600.
    assert_eq!(out[2].value, Vec2::new(3.0, 0.0));
}

#[test]
fn running_average_of_substituted_zero_sample() {
    let ts = TimeSeries::from_samples(Vec::new());
    let out = ts.running_average(2.0).unwrap();
    assert_eq!(out, vec![TimeValuePair::new(0, Vec2::ZERO)]);
}

#[test]
fn empty_store_running_average_and_query_both_fail() {
    let ts = TimeSeries::new();
    assert!(matches!(ts.value_at(42), Err(SeriesError::EmptySeries)));
    assert!(matches!(
        ts.running_average(1.0),
        Err(SeriesError::EmptySeries)
    ));
}

#[test]
fn deep_copy_snapshots_are_independent() {
    let mut ts = TimeSeries::from_samples(hourly(&[(1.0, 1.0), (2.0, 2.0)]));
    let snapshot = ts.clone();
    ts.replace(hourly(&[(9.0, 9.0)])).unwrap();
    ts.set_scale_factor(5.0);

    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.scale_factor(), 1.0);
    assert_eq!(snapshot.value_at(3600).unwrap(), Vec2::new(2.0, 2.0));
}
