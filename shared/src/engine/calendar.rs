//! Calendar grid indexer: buckets classified hours by local date and hour

use std::collections::BTreeMap;

use chrono::{NaiveDate, Timelike};

use super::normalize::resolve_time_zone;
use crate::models::{BurnStatus, CalendarDay, CalendarGrid, EvaluatedRecord, HourSlot};

const HOURS_PER_DAY: usize = 24;

fn day_label(date: NaiveDate) -> String {
    date.format("%a %-m/%-d").to_string()
}

fn slot_for(record: &EvaluatedRecord) -> HourSlot {
    match record.status {
        BurnStatus::InsufficientData => HourSlot::InsufficientData(record.clone()),
        _ => HourSlot::Record(record.clone()),
    }
}

/// Group records by local calendar date, each date holding 24 hour slots.
///
/// Dates and hours are derived from each record's UTC instant in
/// `time_zone`. A later record landing in an occupied slot replaces it;
/// hours without any record are [`HourSlot::NoData`].
pub fn build_calendar_grid(time_zone: &str, records: &[EvaluatedRecord]) -> CalendarGrid {
    let tz = resolve_time_zone(time_zone);
    let mut days: BTreeMap<NaiveDate, Vec<HourSlot>> = BTreeMap::new();

    for record in records {
        let local = record.record.instant.with_timezone(&tz);
        let slots = days
            .entry(local.date_naive())
            .or_insert_with(|| vec![HourSlot::NoData; HOURS_PER_DAY]);
        slots[local.hour() as usize] = slot_for(record);
    }

    tracing::debug!(days = days.len(), records = records.len(), "built calendar grid");

    CalendarGrid {
        time_zone: tz.name().to_string(),
        days: days
            .into_iter()
            .map(|(date, slots)| CalendarDay {
                date,
                label: day_label(date),
                slots,
            })
            .collect(),
    }
}
