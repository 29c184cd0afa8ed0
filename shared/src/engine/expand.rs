//! Run-length expansion of raw forecast series into hourly samples

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use super::duration::parse_valid_time;
use crate::error::EngineResult;
use crate::models::{ForecastField, GridForecast, HourlySample, RawFieldSeries, RawSample};

/// Repeat `value` once per hour for `hours` hours starting at `start`.
///
/// A non-positive length produces no samples.
pub fn expand_duration(start: DateTime<Utc>, hours: i64, value: Option<f64>) -> Vec<HourlySample> {
    (0..hours.max(0))
        .map(|offset| HourlySample {
            instant: start + Duration::hours(offset),
            value,
        })
        .collect()
}

/// Expand one `validTime`/`value` tuple
pub fn expand_sample(sample: &RawSample) -> EngineResult<Vec<HourlySample>> {
    let (start, hours) = parse_valid_time(&sample.valid_time)?;
    Ok(expand_duration(start, hours, sample.value))
}

/// Expand every tuple of a series, concatenated in tuple order (not sorted)
pub fn expand_field(series: &RawFieldSeries) -> EngineResult<Vec<HourlySample>> {
    let mut samples = Vec::new();
    for raw in &series.values {
        samples.extend(expand_sample(raw)?);
    }
    Ok(samples)
}

/// Expand every field present in the forecast
pub fn expand_forecast(
    forecast: &GridForecast,
) -> EngineResult<BTreeMap<ForecastField, Vec<HourlySample>>> {
    let mut expanded = BTreeMap::new();
    for (field, series) in &forecast.series {
        let samples = expand_field(series).map_err(|e| {
            tracing::debug!(field = %field, error = %e, "failed to expand forecast field");
            e
        })?;
        tracing::trace!(field = %field, samples = samples.len(), "expanded forecast field");
        expanded.insert(*field, samples);
    }
    Ok(expanded)
}
