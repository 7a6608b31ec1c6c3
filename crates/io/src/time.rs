//! Calendar-row to epoch-second conversion.

use chrono::{DateTime, Datelike, NaiveDate, Timelike};

/// Expand a two-digit year using a 1950 pivot: 0..=49 map to 2000..=2049,
/// 50..=99 to 1950..=1999. Four-digit years pass through.
pub(crate) fn expand_year(year: i32) -> i32 {
    match year {
        0..=49 => year + 2000,
        50..=99 => year + 1900,
        _ => year,
    }
}

/// Convert calendar fields from a data row to epoch seconds, treating the
/// wall-clock time as UTC. Returns `None` for impossible dates.
pub(crate) fn to_epoch_seconds(
    day: u32,
    month: u32,
    year: i32,
    hour: u32,
    minute: u32,
) -> Option<i64> {
    let date = NaiveDate::from_ymd_opt(expand_year(year), month, day)?;
    let datetime = date.and_hms_opt(hour, minute, 0)?;
    Some(datetime.and_utc().timestamp())
}

/// Split an epoch-second timestamp back into (day, month, year, hour,
/// minute) calendar fields. Returns `None` outside chrono's date range.
pub(crate) fn civil_fields(time: i64) -> Option<(u32, u32, i32, u32, u32)> {
    let datetime = DateTime::from_timestamp(time, 0)?;
    Some((
        datetime.day(),
        datetime.month(),
        datetime.year(),
        datetime.hour(),
        datetime.minute(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_year_pivot() {
        assert_eq!(expand_year(0), 2000);
        assert_eq!(expand_year(49), 2049);
        assert_eq!(expand_year(50), 1950);
        assert_eq!(expand_year(99), 1999);
        assert_eq!(expand_year(1987), 1987);
        assert_eq!(expand_year(2024), 2024);
    }

    #[test]
    fn epoch_zero() {
        assert_eq!(to_epoch_seconds(1, 1, 1970, 0, 0), Some(0));
    }

    #[test]
    fn known_instant() {
        // 2000-03-01 12:30 UTC.
        let t = to_epoch_seconds(1, 3, 2000, 12, 30).unwrap();
        assert_eq!(t, 951_913_800);
    }

    #[test]
    fn two_digit_year_in_row() {
        assert_eq!(
            to_epoch_seconds(1, 1, 0, 0, 0),
            to_epoch_seconds(1, 1, 2000, 0, 0)
        );
        assert_eq!(
            to_epoch_seconds(1, 1, 70, 0, 0),
            to_epoch_seconds(1, 1, 1970, 0, 0)
        );
    }

    #[test]
    fn impossible_dates_rejected() {
        assert_eq!(to_epoch_seconds(31, 2, 2000, 0, 0), None);
        assert_eq!(to_epoch_seconds(1, 13, 2000, 0, 0), None);
        assert_eq!(to_epoch_seconds(1, 1, 2000, 25, 0), None);
        assert_eq!(to_epoch_seconds(1, 1, 2000, 0, 61), None);
    }

    #[test]
    fn leap_day_accepted() {
        assert!(to_epoch_seconds(29, 2, 2000, 0, 0).is_some());
        assert_eq!(to_epoch_seconds(29, 2, 1900, 0, 0), None);
    }

    #[test]
    fn round_trip_through_civil_fields() {
        let t = to_epoch_seconds(15, 6, 2003, 8, 45).unwrap();
        assert_eq!(civil_fields(t), Some((15, 6, 2003, 8, 45)));
    }

    #[test]
    fn negative_timestamps_round_trip() {
        let t = to_epoch_seconds(31, 12, 1969, 23, 0).unwrap();
        assert!(t < 0);
        assert_eq!(civil_fields(t), Some((31, 12, 1969, 23, 0)));
    }
}
