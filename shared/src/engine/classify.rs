//! Two-tier prescription classification

use super::wind::matches_wind_direction;
use crate::models::{
    BurnStatus, EvaluatedRecord, NormalizedRecord, Prescription, PrescriptionCriteria,
};

/// The four values every tier tests; all must be present to classify
#[derive(Debug, Clone, Copy, PartialEq)]
struct BurnConditions {
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    wind_direction: f64,
}

impl BurnConditions {
    fn from_record(record: &NormalizedRecord) -> Option<Self> {
        Some(Self {
            temperature: record.temperature_f? as f64,
            humidity: record.relative_humidity?,
            wind_speed: record.wind_speed_mph? as f64,
            wind_direction: record.wind_direction_deg?,
        })
    }

    fn meets(&self, criteria: &PrescriptionCriteria) -> bool {
        criteria.temperature.contains(self.temperature)
            && criteria.humidity.contains(self.humidity)
            && criteria.wind_speed.contains(self.wind_speed)
            && matches_wind_direction(&criteria.wind_directions, self.wind_direction)
    }
}

/// Classify one hour.
///
/// Missing temperature, humidity, wind speed or wind direction yields
/// `InsufficientData` before either tier is tried.
pub fn classify_record(record: &NormalizedRecord, prescription: &Prescription) -> BurnStatus {
    let Some(conditions) = BurnConditions::from_record(record) else {
        return BurnStatus::InsufficientData;
    };

    if conditions.meets(&prescription.preferred) {
        BurnStatus::Preferred
    } else if conditions.meets(&prescription.acceptable) {
        BurnStatus::Acceptable
    } else {
        BurnStatus::Unsuitable
    }
}

pub fn evaluate_records(
    records: Vec<NormalizedRecord>,
    prescription: &Prescription,
) -> Vec<EvaluatedRecord> {
    records
        .into_iter()
        .map(|record| {
            let status = classify_record(&record, prescription);
            EvaluatedRecord { record, status }
        })
        .collect()
}
