//! Timeline merger: joins independently expanded fields on the hour

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{ForecastField, HourlySample, MergedRecord};

/// Union per-field samples into one record per instant, ascending.
///
/// Each sample upserts `fields[field] = value` on the record for its instant.
/// Within one field a later sample for the same hour overwrites an earlier
/// one. Different fields never touch each other's keys, so the result does
/// not depend on the order in which fields are supplied.
pub fn merge_fields<I>(fields: I) -> Vec<MergedRecord>
where
    I: IntoIterator<Item = (ForecastField, Vec<HourlySample>)>,
{
    let mut timeline: BTreeMap<DateTime<Utc>, MergedRecord> = BTreeMap::new();

    for (field, samples) in fields {
        for sample in samples {
            timeline
                .entry(sample.instant)
                .or_insert_with(|| MergedRecord::new(sample.instant))
                .fields
                .insert(field, sample.value);
        }
    }

    timeline.into_values().collect()
}
