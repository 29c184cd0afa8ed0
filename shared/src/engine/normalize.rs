//! Unit conversion and timezone localization
//!
//! Converted values are floored to whole display units (68.9 °F shows as 68).
//! A missing or non-finite input always stays missing.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::models::{ForecastField, MergedRecord, NormalizedRecord};

const KMH_TO_MPH: f64 = 0.621371;
const METERS_TO_FEET: f64 = 3.28084;

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn floor_to_display(value: f64) -> i64 {
    value.floor() as i64
}

pub fn celsius_to_fahrenheit(celsius: Option<f64>) -> Option<i64> {
    finite(celsius).map(|c| floor_to_display(c * 9.0 / 5.0 + 32.0))
}

pub fn kmh_to_mph(kmh: Option<f64>) -> Option<i64> {
    finite(kmh).map(|v| floor_to_display(v * KMH_TO_MPH))
}

pub fn meters_to_feet(meters: Option<f64>) -> Option<i64> {
    finite(meters).map(|v| floor_to_display(v * METERS_TO_FEET))
}

/// Resolve an IANA timezone name, falling back to UTC when unknown or empty
pub fn resolve_time_zone(name: &str) -> Tz {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        tracing::warn!("no time zone given, falling back to UTC");
        return Tz::UTC;
    }
    match trimmed.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(time_zone = %trimmed, "unknown time zone, falling back to UTC");
            Tz::UTC
        }
    }
}

/// Human-readable local time, e.g. `2024-07-04 13:00 CDT`
pub fn local_display(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%Y-%m-%d %H:%M %Z")
        .to_string()
}

/// Bring one merged record to display units and local time
pub fn normalize_record(record: &MergedRecord, tz: Tz) -> NormalizedRecord {
    let local = record.instant.with_timezone(&tz);
    let value = |field: ForecastField| record.value(field);

    NormalizedRecord {
        instant: record.instant,
        local_time: local_display(record.instant, tz),
        local_date: local.date_naive(),
        local_hour: local.hour(),
        temperature_f: celsius_to_fahrenheit(value(ForecastField::Temperature)),
        dewpoint_f: celsius_to_fahrenheit(value(ForecastField::Dewpoint)),
        relative_humidity: finite(value(ForecastField::RelativeHumidity)),
        wind_speed_mph: kmh_to_mph(value(ForecastField::WindSpeed)),
        wind_direction_deg: finite(value(ForecastField::WindDirection)),
        sky_cover: finite(value(ForecastField::SkyCover)),
        precipitation_probability: finite(value(ForecastField::ProbabilityOfPrecipitation)),
        mixing_height_ft: meters_to_feet(value(ForecastField::MixingHeight)),
        transport_wind_speed_mph: kmh_to_mph(value(ForecastField::TransportWindSpeed)),
        transport_wind_direction_deg: finite(value(ForecastField::TransportWindDirection)),
    }
}

/// Normalize a merged timeline against a caller-supplied timezone name
pub fn normalize_records(records: &[MergedRecord], time_zone: &str) -> Vec<NormalizedRecord> {
    let tz = resolve_time_zone(time_zone);
    records.iter().map(|r| normalize_record(r, tz)).collect()
}
