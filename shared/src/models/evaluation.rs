//! Evaluation output models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::forecast::NormalizedRecord;

/// How suitable an hour is for conducting a burn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BurnStatus {
    Preferred,
    Acceptable,
    Unsuitable,
    /// Temperature, humidity, wind speed or wind direction is missing
    InsufficientData,
}

impl std::fmt::Display for BurnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BurnStatus::Preferred => write!(f, "Preferred"),
            BurnStatus::Acceptable => write!(f, "Acceptable"),
            BurnStatus::Unsuitable => write!(f, "Not in Prescription"),
            BurnStatus::InsufficientData => write!(f, "Insufficient Data"),
        }
    }
}

/// A normalized hour with its classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluatedRecord {
    #[serde(flatten)]
    pub record: NormalizedRecord,
    pub status: BurnStatus,
}

/// Contents of one local hour in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "record", rename_all = "camelCase")]
pub enum HourSlot {
    Record(EvaluatedRecord),
    InsufficientData(EvaluatedRecord),
    NoData,
}

impl HourSlot {
    pub fn record(&self) -> Option<&EvaluatedRecord> {
        match self {
            HourSlot::Record(record) | HourSlot::InsufficientData(record) => Some(record),
            HourSlot::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, HourSlot::NoData)
    }
}

/// First and last local hour shown in the burn-hours view (08:00 to 20:00)
pub const BURN_HOURS_START: usize = 8;
pub const BURN_HOURS_END: usize = 20;

/// One local calendar date with exactly 24 hour slots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Short header such as `Mon 1/1`
    pub label: String,
    pub slots: Vec<HourSlot>,
}

impl CalendarDay {
    pub fn slot(&self, hour: u32) -> Option<&HourSlot> {
        self.slots.get(hour as usize)
    }

    /// Slots for the daylight burn hours, 08:00 through 20:00 inclusive
    pub fn burn_hours(&self) -> &[HourSlot] {
        self.slots
            .get(BURN_HOURS_START..=BURN_HOURS_END)
            .unwrap_or(&[])
    }
}

/// Classified forecast bucketed by local date and hour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid {
    pub time_zone: String,
    pub days: Vec<CalendarDay>,
}

/// Complete result of one evaluation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEvaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub time_zone: String,
    pub records: Vec<EvaluatedRecord>,
    pub grid: CalendarGrid,
}
