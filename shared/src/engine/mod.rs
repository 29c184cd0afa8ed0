//! Forecast normalization and prescription evaluation engine
//!
//! Data flows strictly through the stages in order:
//! expand → merge → normalize → classify → calendar grid.
//! Every stage is pure; nothing here performs I/O or keeps state between calls.

pub mod calendar;
pub mod classify;
pub mod duration;
pub mod expand;
pub mod merge;
pub mod normalize;
pub mod wind;

pub use calendar::build_calendar_grid;
pub use classify::{classify_record, evaluate_records};
pub use duration::{parse_duration_hours, parse_valid_time};
pub use expand::{expand_duration, expand_field, expand_forecast, expand_sample};
pub use merge::merge_fields;
pub use normalize::{
    celsius_to_fahrenheit, kmh_to_mph, meters_to_feet, normalize_record, normalize_records,
    resolve_time_zone,
};
pub use wind::{matches_wind_direction, octants_for_heading};

use crate::error::EngineResult;
use crate::models::{ForecastEvaluation, ForecastInput, Prescription};

/// Run the whole pipeline once for one submitted forecast and prescription.
///
/// Only a malformed `validTime` fails the run. Missing fields and null values
/// surface as `InsufficientData` hours instead.
pub fn evaluate_forecast(
    input: &ForecastInput,
    prescription: &Prescription,
) -> EngineResult<ForecastEvaluation> {
    let expanded = expand_forecast(&input.forecast)?;
    let merged = merge_fields(expanded);
    let normalized = normalize_records(&merged, &input.time_zone);
    let records = evaluate_records(normalized, prescription);
    let grid = build_calendar_grid(&input.time_zone, &records);

    tracing::debug!(
        fields = input.forecast.series.len(),
        hours = records.len(),
        days = grid.days.len(),
        "evaluated forecast"
    );

    Ok(ForecastEvaluation {
        location: input.location.clone(),
        time_zone: grid.time_zone.clone(),
        records,
        grid,
    })
}
