//! Decoding of NWS `validTime` intervals
//!
//! A `validTime` is `<start>/<duration>` where the duration is a compact
//! ISO-8601 form such as `PT3H`, `P1DT6H` or `P2D`.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{EngineError, EngineResult};

/// Longest single interval accepted: 400 days, past any forecast horizon.
pub const MAX_INTERVAL_HOURS: i64 = 400 * 24;

/// Decode a duration into whole hours (`days * 24 + hours`).
///
/// The leading `P` and the `T` separator are optional, as is each of the day
/// and hour components. Minute, second, week and month components are
/// ignored. Fails with [`EngineError::MalformedDuration`] when neither a day
/// nor an hour component can be read.
pub fn parse_duration_hours(text: &str) -> EngineResult<i64> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('P')
        .or_else(|| trimmed.strip_prefix('p'))
        .unwrap_or(trimmed);

    let mut days: Option<i64> = None;
    let mut hours: Option<i64> = None;
    let mut digits = String::new();

    for ch in body.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            'D' | 'd' => {
                days = digits.parse().ok();
                digits.clear();
            }
            'H' | 'h' => {
                hours = digits.parse().ok();
                digits.clear();
            }
            _ => digits.clear(),
        }
    }

    if days.is_none() && hours.is_none() {
        return Err(EngineError::MalformedDuration(text.to_string()));
    }

    let total = days
        .unwrap_or(0)
        .saturating_mul(24)
        .saturating_add(hours.unwrap_or(0));
    if total > MAX_INTERVAL_HOURS {
        return Err(EngineError::MalformedDuration(text.to_string()));
    }
    Ok(total)
}

/// Parse the start of an interval, accepting RFC 3339 with or without seconds.
///
/// A timestamp without any offset is taken as UTC.
pub fn parse_instant(text: &str) -> EngineResult<DateTime<Utc>> {
    let trimmed = text.trim();
    let zulu_expanded = match trimmed.strip_suffix('Z').or_else(|| trimmed.strip_suffix('z')) {
        Some(prefix) => format!("{}+00:00", prefix),
        None => trimmed.to_string(),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&zulu_expanded) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_str(&zulu_expanded, "%Y-%m-%dT%H:%M%:z") {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(EngineError::MalformedValidTime(text.to_string()))
}

/// Split a `validTime` into its hour-aligned start and its length in hours
pub fn parse_valid_time(valid_time: &str) -> EngineResult<(DateTime<Utc>, i64)> {
    let (start, duration) = valid_time
        .split_once('/')
        .ok_or_else(|| EngineError::MalformedValidTime(valid_time.to_string()))?;

    let start = parse_instant(start)
        .map_err(|_| EngineError::MalformedValidTime(valid_time.to_string()))?;
    let hours = parse_duration_hours(duration)?;
    Ok((truncate_to_hour(start), hours))
}

/// Drop minutes and seconds so every field joins on the same key
pub fn truncate_to_hour(instant: DateTime<Utc>) -> DateTime<Utc> {
    let seconds = instant.timestamp();
    DateTime::from_timestamp(seconds - seconds.rem_euclid(3600), 0).unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration_days_and_hours() {
        assert_eq!(parse_duration_hours("P1DT3H").unwrap(), 27);
    }

    #[test]
    fn test_duration_hours_only() {
        assert_eq!(parse_duration_hours("PT6H").unwrap(), 6);
        assert_eq!(parse_duration_hours("3H").unwrap(), 3);
    }

    #[test]
    fn test_duration_days_only() {
        assert_eq!(parse_duration_hours("P2D").unwrap(), 48);
        assert_eq!(parse_duration_hours("P1DT").unwrap(), 24);
    }

    #[test]
    fn test_duration_zero() {
        assert_eq!(parse_duration_hours("PT0H").unwrap(), 0);
    }

    #[test]
    fn test_duration_without_day_or_hour_is_malformed() {
        for text in ["", "P", "PT", "PT30M", "garbage", "P1W"] {
            assert_eq!(
                parse_duration_hours(text),
                Err(EngineError::MalformedDuration(text.to_string())),
                "expected '{}' to be rejected",
                text
            );
        }
    }

    #[test]
    fn test_duration_ignores_minutes_alongside_hours() {
        assert_eq!(parse_duration_hours("PT2H30M").unwrap(), 2);
    }

    #[test]
    fn test_duration_rejects_absurd_length() {
        assert!(parse_duration_hours("P100000D").is_err());
    }

    #[test]
    fn test_parse_instant_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_instant("2024-01-01T00:00:00+00:00").unwrap(), expected);
        assert_eq!(parse_instant("2024-01-01T00:00Z").unwrap(), expected);
        assert_eq!(parse_instant("2024-01-01T00:00:00").unwrap(), expected);
        assert_eq!(
            parse_instant("2023-12-31T18:00:00-06:00").unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_valid_time() {
        let (start, hours) = parse_valid_time("2024-01-01T00:00:00+00:00/P1DT3H").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(hours, 27);
    }

    #[test]
    fn test_parse_valid_time_truncates_to_hour() {
        let (start, _) = parse_valid_time("2024-01-01T05:45:10+00:00/PT1H").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_valid_time_without_separator() {
        assert_eq!(
            parse_valid_time("2024-01-01T00:00:00+00:00"),
            Err(EngineError::MalformedValidTime(
                "2024-01-01T00:00:00+00:00".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_valid_time_propagates_malformed_duration() {
        assert_eq!(
            parse_valid_time("2024-01-01T00:00:00+00:00/PT15M"),
            Err(EngineError::MalformedDuration("PT15M".to_string()))
        );
    }
}
