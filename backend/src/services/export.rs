//! CSV export of evaluated forecast hours

use serde::Serialize;
use shared::EvaluatedRecord;

use crate::error::{AppError, AppResult};

/// One flat CSV row per forecast hour
#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub instant_utc: String,
    pub local_time: String,
    pub status: String,
    pub temperature_f: Option<i64>,
    pub dewpoint_f: Option<i64>,
    pub relative_humidity: Option<f64>,
    pub wind_speed_mph: Option<i64>,
    pub wind_direction_deg: Option<f64>,
    pub sky_cover: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub mixing_height_ft: Option<i64>,
    pub transport_wind_speed_mph: Option<i64>,
    pub transport_wind_direction_deg: Option<f64>,
}

impl From<&EvaluatedRecord> for ExportRow {
    fn from(evaluated: &EvaluatedRecord) -> Self {
        let r = &evaluated.record;
        Self {
            instant_utc: r.instant.to_rfc3339(),
            local_time: r.local_time.clone(),
            status: evaluated.status.to_string(),
            temperature_f: r.temperature_f,
            dewpoint_f: r.dewpoint_f,
            relative_humidity: r.relative_humidity,
            wind_speed_mph: r.wind_speed_mph,
            wind_direction_deg: r.wind_direction_deg,
            sky_cover: r.sky_cover,
            precipitation_probability: r.precipitation_probability,
            mixing_height_ft: r.mixing_height_ft,
            transport_wind_speed_mph: r.transport_wind_speed_mph,
            transport_wind_direction_deg: r.transport_wind_direction_deg,
        }
    }
}

/// Render evaluated hours as CSV; missing values become empty cells
pub fn export_to_csv(records: &[EvaluatedRecord]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(ExportRow::from(record))
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::{normalize_record, BurnStatus, ForecastField, MergedRecord};

    #[test]
    fn test_csv_has_header_and_blank_missing_values() {
        let instant = Utc.with_ymd_and_hms(2024, 4, 10, 15, 0, 0).unwrap();
        let mut merged = MergedRecord::new(instant);
        merged.fields.insert(ForecastField::Temperature, Some(20.0));
        let record = normalize_record(&merged, shared::resolve_time_zone("UTC"));

        let csv = export_to_csv(&[EvaluatedRecord {
            record,
            status: BurnStatus::InsufficientData,
        }])
        .unwrap();

        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("instant_utc,local_time,status,temperature_f,dewpoint_f"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("2024-04-10T15:00:00+00:00,2024-04-10 15:00 UTC,Insufficient Data,68,,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_export() {
        assert_eq!(export_to_csv(&[]).unwrap(), "");
    }
}
