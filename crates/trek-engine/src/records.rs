//! Listing helpers: status classification, filtering, sorting, calendar days.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trek_core::entities::TravelRecord;
use trek_core::enums::{SortColumn, TripStatus};

use crate::interval::DateInterval;

/// Notes longer than this are shortened in listings.
pub const COMMENT_PREVIEW_CHARS: usize = 50;

/// A record together with its position in the collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IndexedRecord {
    pub index: usize,
    pub record: TravelRecord,
}

/// Status of a record relative to `today`; `None` when its dates do not parse.
#[must_use]
pub fn trip_status(record: &TravelRecord, today: NaiveDate) -> Option<TripStatus> {
    let trip = DateInterval::from_record(record)?;
    Some(if trip.end < today {
        TripStatus::Past
    } else if trip.start <= today {
        TripStatus::Current
    } else {
        TripStatus::Future
    })
}

/// Records whose status is in `statuses`, newest start date first.
#[must_use]
pub fn filter_by_status(
    records: &[TravelRecord],
    statuses: &[TripStatus],
    today: NaiveDate,
) -> Vec<IndexedRecord> {
    let mut matched: Vec<IndexedRecord> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            trip_status(record, today).is_some_and(|status| statuses.contains(&status))
        })
        .map(|(index, record)| IndexedRecord {
            index,
            record: record.clone(),
        })
        .collect();
    matched.sort_by(|a, b| b.record.start_date.cmp(&a.record.start_date));
    matched
}

/// Stable sort by one column. Dates compare as stored ISO text, locations
/// without regard to case.
pub fn sort_records(records: &mut [IndexedRecord], column: SortColumn, descending: bool) {
    records.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Start => a.record.start_date.cmp(&b.record.start_date),
            SortColumn::End => a.record.end_date.cmp(&b.record.end_date),
            SortColumn::Location => a
                .record
                .location
                .to_lowercase()
                .cmp(&b.record.location.to_lowercase()),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Distinct non-blank locations, sorted.
#[must_use]
pub fn known_locations(records: &[TravelRecord]) -> BTreeSet<String> {
    records
        .iter()
        .map(|record| record.location.trim())
        .filter(|location| !location.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shorten notes for a listing column.
#[must_use]
pub fn truncate_comment(text: &str) -> String {
    if text.chars().count() <= COMMENT_PREVIEW_CHARS {
        return text.to_string();
    }
    let kept: String = text.chars().take(COMMENT_PREVIEW_CHARS - 3).collect();
    format!("{kept}...")
}

/// Days of `month` in `year` covered by at least one trip.
#[must_use]
pub fn travel_days_in_month(records: &[TravelRecord], year: i32, month: u32) -> BTreeSet<u32> {
    let Some(window) = month_bounds(year, month) else {
        return BTreeSet::new();
    };
    records
        .iter()
        .filter_map(DateInterval::from_record)
        .filter_map(|trip| trip.clip(&window))
        .flat_map(|clipped| clipped.iter_days())
        .map(|day| day.day())
        .collect()
}

fn month_bounds(year: i32, month: u32) -> Option<DateInterval> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(DateInterval::new(start, next.pred_opt()?))
}
