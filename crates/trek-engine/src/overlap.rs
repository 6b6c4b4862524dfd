//! Overlap detection between a candidate trip and the stored trips.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trek_core::entities::TravelRecord;
use trek_core::settings::ValidationSettings;

use crate::interval::DateInterval;

/// A stored trip sharing at least one day with the candidate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Conflict {
    /// Position of the record in the collection that was scanned.
    pub index: usize,
    pub record: TravelRecord,
}

/// Find every stored trip that overlaps `candidate`.
///
/// `exclude_index` names the record being edited so it is not reported
/// against itself. Records whose dates do not parse are skipped. When
/// overlaps are allowed nothing is scanned.
#[must_use]
pub fn find_conflicts(
    candidate: DateInterval,
    records: &[TravelRecord],
    exclude_index: Option<usize>,
    settings: &ValidationSettings,
) -> Vec<Conflict> {
    if settings.allow_overlaps {
        return Vec::new();
    }

    records
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != exclude_index)
        .filter_map(|(index, record)| {
            let Some(existing) = DateInterval::from_record(record) else {
                tracing::debug!(index, "skipping record with unparseable dates in overlap scan");
                return None;
            };
            candidate.overlaps(&existing).then(|| Conflict {
                index,
                record: record.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use trek_core::enums::TravelType;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(start: NaiveDate, end: NaiveDate, location: &str) -> TravelRecord {
        TravelRecord::new(start, end, location, TravelType::Personal, "")
    }

    fn sample() -> Vec<TravelRecord> {
        vec![
            record(ymd(2024, 1, 1), ymd(2024, 1, 5), "Paris"),
            record(ymd(2024, 2, 10), ymd(2024, 2, 12), "Berlin"),
            record(ymd(2024, 1, 4), ymd(2024, 1, 8), "Lyon"),
        ]
    }

    #[test]
    fn reports_every_overlap_with_original_index() {
        let candidate = DateInterval::new(ymd(2024, 1, 5), ymd(2024, 1, 6));
        let conflicts = find_conflicts(candidate, &sample(), None, &ValidationSettings::default());
        let indices: Vec<usize> = conflicts.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(conflicts[1].record.location, "Lyon");
    }

    #[test]
    fn adjacent_trip_is_not_a_conflict() {
        let candidate = DateInterval::new(ymd(2024, 1, 9), ymd(2024, 1, 20));
        let conflicts = find_conflicts(candidate, &sample(), None, &ValidationSettings::default());
        assert!(conflicts.is_empty());
    }

    #[test]
    fn excluded_index_is_skipped() {
        let candidate = DateInterval::new(ymd(2024, 1, 1), ymd(2024, 1, 5));
        let conflicts =
            find_conflicts(candidate, &sample(), Some(0), &ValidationSettings::default());
        let indices: Vec<usize> = conflicts.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![2]);
    }

    #[test]
    fn allow_overlaps_short_circuits() {
        let settings = ValidationSettings {
            allow_overlaps: true,
            ..Default::default()
        };
        let candidate = DateInterval::new(ymd(2024, 1, 1), ymd(2024, 12, 31));
        assert!(find_conflicts(candidate, &sample(), None, &settings).is_empty());
    }

    #[test]
    fn unparseable_records_are_ignored() {
        let mut records = sample();
        records[0].start_date = "garbage".into();
        let candidate = DateInterval::new(ymd(2024, 1, 1), ymd(2024, 1, 2));
        let conflicts = find_conflicts(candidate, &records, None, &ValidationSettings::default());
        assert!(conflicts.is_empty());
    }
}
