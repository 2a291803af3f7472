//! Field parsing utilities for the source datasets
//!
//! The datasets carry every value as text. These helpers turn those strings
//! into numbers and timestamps without failing the whole load: numeric
//! fields degrade to NaN or zero, timestamps to `None`.

use crate::constants::{COMBINED_DATE_FORMATS, OBSERVATION_DATETIME_FORMAT};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a numeric field, yielding NaN when the text is not a number
///
/// Blank text reads as zero, the way the loaders always treated it.
pub fn parse_numeric_or_nan(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the leading number of a field, yielding zero on failure
///
/// Trailing units are ignored ("12.5mm" reads as 12.5). Only finite
/// values escape: NaN and infinity read as zero.
pub fn parse_leading_or_zero(value: &str) -> f64 {
    let trimmed = value.trim();
    let parsed = trimmed
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .unwrap_or(0.0);

    if parsed.is_finite() { parsed } else { 0.0 }
}

/// Parse a numeric field, yielding zero for blank or non-numeric text
pub fn parse_numeric_or_zero(value: &str) -> f64 {
    let parsed = parse_numeric_or_nan(value);
    if parsed.is_nan() { 0.0 } else { parsed }
}

/// Truncate a station identifier to its first `len` characters
pub fn normalize_station_id(station_id: &str, len: usize) -> String {
    station_id.trim().chars().take(len).collect()
}

/// Parse a rainfall or wind timestamp such as `2024-10-01 00:00`
pub fn parse_observation_time(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, OBSERVATION_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y/%m/%d %H:%M"))
        .ok()
}

/// Compose a track fix time from its separate year, month, day and hour fields
pub fn compose_track_time(year: &str, month: &str, day: &str, hour: &str) -> Option<NaiveDateTime> {
    let year: i32 = year.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    let hour: u32 = hour.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, 0, 0)
}

/// Compose a combined-observation time from its date and hour fields
///
/// Hour `24` is the end of the observation day and reads as midnight of
/// the following day.
pub fn compose_combined_time(date: &str, hour: &str) -> Option<NaiveDateTime> {
    let date_str = date.trim();
    let date = COMBINED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_str, format).ok())?;

    let hour_str = hour.trim();
    let hour: u32 = hour_str
        .split(':')
        .next()
        .and_then(|h| h.trim().parse().ok())?;

    match hour {
        0..=23 => Some(date.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?)),
        24 => date.and_hms_opt(0, 0, 0).map(|dt| dt + Duration::days(1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_or_nan() {
        assert_eq!(parse_numeric_or_nan("12.5"), 12.5);
        assert_eq!(parse_numeric_or_nan(" 90 "), 90.0);
        assert_eq!(parse_numeric_or_nan(""), 0.0);
        assert!(parse_numeric_or_nan("abc").is_nan());
        assert!(parse_numeric_or_nan("12.5mm").is_nan());
    }

    #[test]
    fn test_parse_leading_or_zero() {
        assert_eq!(parse_leading_or_zero("12.5mm"), 12.5);
        assert_eq!(parse_leading_or_zero("3.0"), 3.0);
        assert_eq!(parse_leading_or_zero("T"), 0.0);
        assert_eq!(parse_leading_or_zero(""), 0.0);
        assert_eq!(parse_leading_or_zero("-"), 0.0);
        assert_eq!(parse_leading_or_zero("inf"), 0.0);
        assert_eq!(parse_leading_or_zero("Infinity"), 0.0);
        assert_eq!(parse_leading_or_zero("infmm"), 0.0);
        assert_eq!(parse_leading_or_zero("-inf"), 0.0);
    }

    #[test]
    fn test_normalize_station_id() {
        assert_eq!(normalize_station_id("466880X", 6), "466880");
        assert_eq!(normalize_station_id("C0A520(新屋)", 6), "C0A520");
        assert_eq!(normalize_station_id("4668", 6), "4668");
    }

    #[test]
    fn test_parse_observation_time() {
        let expected = NaiveDate::from_ymd_opt(2024, 10, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_observation_time("2024-10-01 00:00"), Some(expected));
        assert_eq!(parse_observation_time("2024-10-01 00:00:00"), Some(expected));
        assert_eq!(parse_observation_time("2024/10/01 00:00"), Some(expected));
        assert_eq!(parse_observation_time("yesterday"), None);
    }

    #[test]
    fn test_compose_track_time() {
        let time = compose_track_time("2024", "10", "31", "6").unwrap();
        assert_eq!(time.to_string(), "2024-10-31 06:00:00");
        assert!(compose_track_time("2024", "2", "30", "0").is_none());
        assert!(compose_track_time("2024", "x", "1", "0").is_none());
    }

    #[test]
    fn test_compose_combined_time() {
        let time = compose_combined_time("2024-10-01", "13").unwrap();
        assert_eq!(time.to_string(), "2024-10-01 13:00:00");

        let slashed = compose_combined_time("2024/10/01", "01").unwrap();
        assert_eq!(slashed.to_string(), "2024-10-01 01:00:00");

        let end_of_day = compose_combined_time("2024-10-01", "24").unwrap();
        assert_eq!(end_of_day.to_string(), "2024-10-02 00:00:00");

        assert!(compose_combined_time("2024-10-01", "25").is_none());
        assert!(compose_combined_time("not a date", "1").is_none());
    }
}
