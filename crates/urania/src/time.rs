//! Local wall-clock birth time to Universal Time and Julian Day.

use crate::error::ChartError;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Largest accepted distance from UTC, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

const UTC_OFFSET_SYNTAX: &str =
    r"^(?i:utc|gmt)?\s*([+-])?(?:(\d{1,2}):([0-5]\d)|(\d{1,2}(?:\.\d+)?))$";

lazy_static::lazy_static! {
    static ref UTC_OFFSET_PATTERN: Result<Regex, regex::Error> = Regex::new(UTC_OFFSET_SYNTAX);
}

/// A calendar date plus a fractional hour in [0, 24), both in UT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniversalTime {
    pub date: NaiveDate,
    pub hour: f64,
}

/// Shift a local date and time by a UTC offset.
///
/// At most one day of rollover is applied, which is enough for offsets
/// within +/-14 hours. Sub-second precision of `time` is ignored.
pub fn to_universal_time(
    date: NaiveDate,
    time: NaiveTime,
    utc_offset_hours: f64,
) -> Result<UniversalTime, ChartError> {
    let local_hour =
        time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0;
    let mut hour = local_hour - utc_offset_hours;
    let mut date = date;

    if hour < 0.0 {
        date = date.pred_opt().ok_or_else(|| {
            ChartError::InvalidCalendarDate(format!("no day before {}", date))
        })?;
        hour += 24.0;
    } else if hour >= 24.0 {
        date = date.succ_opt().ok_or_else(|| {
            ChartError::InvalidCalendarDate(format!("no day after {}", date))
        })?;
        hour -= 24.0;
    }

    Ok(UniversalTime { date, hour })
}

/// Julian Day Number of a proleptic Gregorian calendar date.
///
/// This is the day count at noon; midnight of the same date is `JDN - 0.5`.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let year = year as i64;
    let month = month as i64;
    let day = day as i64;

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Julian Day in UT of a local birth moment.
pub fn to_julian_day_ut(
    date: NaiveDate,
    time: NaiveTime,
    utc_offset_hours: f64,
) -> Result<f64, ChartError> {
    let ut = to_universal_time(date, time, utc_offset_hours)?;
    Ok(julian_day(&ut))
}

/// Julian Day of an already normalized UT moment.
pub fn julian_day(ut: &UniversalTime) -> f64 {
    let jdn = julian_day_number(ut.date.year(), ut.date.month(), ut.date.day());
    jdn as f64 - 0.5 + ut.hour / 24.0
}

/// Parse a UTC offset such as `3`, `+3`, `-5.5`, `+05:30` or `UTC+3` into hours.
pub fn parse_utc_offset(input: &str) -> Result<f64, ChartError> {
    let trimmed = input.trim();
    let pattern = UTC_OFFSET_PATTERN
        .as_ref()
        .map_err(|e| ChartError::Pattern(e.clone()))?;
    let caps = pattern
        .captures(trimmed)
        .ok_or_else(|| ChartError::InvalidUtcOffset(trimmed.to_string()))?;

    let magnitude = match (caps.get(2), caps.get(3), caps.get(4)) {
        (Some(hours), Some(minutes), _) => {
            let hours: f64 = hours
                .as_str()
                .parse()
                .map_err(|_| ChartError::InvalidUtcOffset(trimmed.to_string()))?;
            let minutes: f64 = minutes
                .as_str()
                .parse()
                .map_err(|_| ChartError::InvalidUtcOffset(trimmed.to_string()))?;
            hours + minutes / 60.0
        }
        (_, _, Some(decimal)) => decimal
            .as_str()
            .parse()
            .map_err(|_| ChartError::InvalidUtcOffset(trimmed.to_string()))?,
        _ => return Err(ChartError::InvalidUtcOffset(trimmed.to_string())),
    };

    let offset = match caps.get(1).map(|m| m.as_str()) {
        Some("-") => -magnitude,
        _ => magnitude,
    };

    check_utc_offset(offset)?;
    Ok(offset)
}

/// Reject offsets that are not finite or lie outside [-14, 14].
pub fn check_utc_offset(offset: f64) -> Result<(), ChartError> {
    if !offset.is_finite() || offset.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(ChartError::UtcOffsetOutOfRange(offset));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_jdn_reference_dates() {
        assert_eq!(julian_day_number(2000, 1, 1), 2451545);
        assert_eq!(julian_day_number(1972, 3, 13), 2441390);
        assert_eq!(julian_day_number(1858, 11, 17), 2400001);
    }

    #[test]
    fn test_j2000_noon() {
        let jd = to_julian_day_ut(date(2000, 1, 1), time(12, 0), 0.0).unwrap();
        assert!((jd - 2451545.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_within_day() {
        let ut = to_universal_time(date(1972, 3, 13), time(18, 35), 3.0).unwrap();
        assert_eq!(ut.date, date(1972, 3, 13));
        assert!((ut.hour - (15.0 + 35.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rollover_backward() {
        let ut = to_universal_time(date(1990, 1, 1), time(1, 0), 3.0).unwrap();
        assert_eq!(ut.date, date(1989, 12, 31));
        assert!((ut.hour - 22.0).abs() < 1e-12);
    }

    #[test]
    fn test_rollover_forward() {
        let ut = to_universal_time(date(2024, 2, 28), time(22, 30), -5.0).unwrap();
        assert_eq!(ut.date, date(2024, 2, 29));
        assert!((ut.hour - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_rollover_past_calendar_range() {
        let result = to_universal_time(NaiveDate::MIN, time(0, 30), 2.0);
        assert!(matches!(result, Err(ChartError::InvalidCalendarDate(_))));
    }

    #[test]
    fn test_offset_pattern_compiles() {
        assert!(UTC_OFFSET_PATTERN.is_ok(), "{:?}", UTC_OFFSET_PATTERN.as_ref().err());
    }

    #[test]
    fn test_parse_utc_offset_forms() {
        assert_eq!(parse_utc_offset("3").unwrap(), 3.0);
        assert_eq!(parse_utc_offset("+3").unwrap(), 3.0);
        assert_eq!(parse_utc_offset("-5.5").unwrap(), -5.5);
        assert_eq!(parse_utc_offset("+05:30").unwrap(), 5.5);
        assert_eq!(parse_utc_offset("-03:00").unwrap(), -3.0);
        assert_eq!(parse_utc_offset("UTC+3").unwrap(), 3.0);
        assert_eq!(parse_utc_offset("gmt-10").unwrap(), -10.0);
    }

    #[test]
    fn test_parse_utc_offset_rejects() {
        assert!(matches!(
            parse_utc_offset("+15"),
            Err(ChartError::UtcOffsetOutOfRange(_))
        ));
        assert!(matches!(
            parse_utc_offset("three"),
            Err(ChartError::InvalidUtcOffset(_))
        ));
        assert!(parse_utc_offset("+3:75").is_err());
        assert!(parse_utc_offset("3.5:30").is_err());
        assert!(parse_utc_offset("").is_err());
    }
}
