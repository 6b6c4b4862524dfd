//! Trip validation.
//!
//! A draft goes through the checks below, in this order:
//!
//! ```text
//! 1. parse and range-check start and end dates
//! 2. end >= start, span <= 730 days
//! 3. date-age warnings
//! 4. overlap scan (only when 1 and 2 passed)
//! 5. location: trimmed, non-empty, bounded, unusual characters, all caps
//! 6. travel type membership
//! 7. notes length
//! ```
//!
//! Blocking errors from every step are collected before anything is decided.
//! Overlaps and warnings are only surfaced when there are no errors at all.

use chrono::NaiveDate;
use trek_core::entities::{TravelRecord, TripDraft};
use trek_core::enums::TravelType;
use trek_core::settings::ValidationSettings;

use crate::date::parse_date;
use crate::interval::DateInterval;
use crate::overlap::{Conflict, find_conflicts};

/// Longest allowed distance between start and end date, in days.
pub const MAX_TRIP_SPAN_DAYS: i64 = 730;

/// Characters that are flagged (but allowed) in a location.
pub const SUSPICIOUS_LOCATION_CHARS: [char; 7] = ['<', '>', '"', '\'', '\\', '/', '|'];

/// What the caller should do with the collection once a trip is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordChange {
    Append(TravelRecord),
    Replace { index: usize, record: TravelRecord },
}

impl RecordChange {
    #[must_use]
    pub const fn record(&self) -> &TravelRecord {
        match self {
            Self::Append(record) | Self::Replace { record, .. } => record,
        }
    }

    #[must_use]
    pub fn into_record(self) -> TravelRecord {
        match self {
            Self::Append(record) | Self::Replace { record, .. } => record,
        }
    }
}

/// Answer to an overlap question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapDecision {
    /// Drop the trip.
    Cancel,
    /// Drop the trip and go back to the date fields.
    Adjust,
    /// Keep the trip as if nothing overlapped.
    SaveAnyway,
}

/// Answer to a warning confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningDecision {
    Proceed,
    Cancel,
}

/// A valid trip that overlaps stored trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOverlap {
    pub conflicts: Vec<Conflict>,
    /// Warnings to confirm if the overlap is accepted.
    pub warnings: Vec<String>,
    pub change: RecordChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlapResolution {
    Cancelled,
    AdjustDates,
    Continue(Outcome),
}

impl PendingOverlap {
    #[must_use]
    pub fn resolve(self, decision: OverlapDecision) -> OverlapResolution {
        match decision {
            OverlapDecision::Cancel => OverlapResolution::Cancelled,
            OverlapDecision::Adjust => OverlapResolution::AdjustDates,
            OverlapDecision::SaveAnyway => {
                OverlapResolution::Continue(settle(self.warnings, self.change))
            }
        }
    }
}

/// A valid, non-overlapping trip with advisory warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWarnings {
    pub warnings: Vec<String>,
    pub change: RecordChange,
}

impl PendingWarnings {
    #[must_use]
    pub fn confirm(self, decision: WarningDecision) -> Option<RecordChange> {
        match decision {
            WarningDecision::Proceed => Some(self.change),
            WarningDecision::Cancel => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One or more blocking errors, all of them.
    Rejected(Vec<String>),
    NeedsOverlapDecision(PendingOverlap),
    NeedsWarningConfirmation(PendingWarnings),
    Accepted(RecordChange),
}

fn settle(warnings: Vec<String>, change: RecordChange) -> Outcome {
    if warnings.is_empty() {
        Outcome::Accepted(change)
    } else {
        Outcome::NeedsWarningConfirmation(PendingWarnings { warnings, change })
    }
}

/// Validate a draft against the stored trips.
///
/// `edit_index` names the record being replaced: it is excluded from the
/// overlap scan and the accepted change replaces it instead of appending.
#[must_use]
pub fn validate(
    draft: &TripDraft,
    records: &[TravelRecord],
    settings: &ValidationSettings,
    edit_index: Option<usize>,
    today: NaiveDate,
) -> Outcome {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let start = parse_field("Start date", &draft.start_date, &mut errors);
    let end = parse_field("End date", &draft.end_date, &mut errors);

    let interval = match (start, end) {
        (Some(start), Some(end)) => check_span(start, end, &mut errors),
        _ => None,
    };

    date_age_warnings(start, end, today, settings, &mut warnings);

    let conflicts = interval
        .map(|candidate| find_conflicts(candidate, records, edit_index, settings))
        .unwrap_or_default();

    let location = check_location(&draft.location, settings, &mut errors, &mut warnings);

    let travel_type = TravelType::parse(&draft.travel_type);
    if travel_type.is_none() {
        errors.push(String::from("Travel type must be 'Personal' or 'Work'"));
    }

    let comment = draft.comment.trim();
    if comment.chars().count() > settings.max_comment_length {
        errors.push(format!(
            "Notes cannot exceed {} characters",
            settings.max_comment_length
        ));
    }

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        conflicts = conflicts.len(),
        edit_index = ?edit_index,
        "validated trip draft"
    );

    match (interval, location, travel_type) {
        (Some(interval), Some(location), Some(travel_type)) if errors.is_empty() => {
            let record =
                TravelRecord::new(interval.start, interval.end, location, travel_type, comment);
            let change = match edit_index {
                Some(index) => RecordChange::Replace { index, record },
                None => RecordChange::Append(record),
            };
            if conflicts.is_empty() {
                settle(warnings, change)
            } else {
                Outcome::NeedsOverlapDecision(PendingOverlap {
                    conflicts,
                    warnings,
                    change,
                })
            }
        }
        _ => Outcome::Rejected(errors),
    }
}

fn parse_field(label: &str, text: &str, errors: &mut Vec<String>) -> Option<NaiveDate> {
    match parse_date(text) {
        Ok(date) => Some(date),
        Err(error) => {
            errors.push(format!("{label}: {error}"));
            None
        }
    }
}

fn check_span(start: NaiveDate, end: NaiveDate, errors: &mut Vec<String>) -> Option<DateInterval> {
    if end < start {
        errors.push(String::from("End date cannot be before start date"));
        return None;
    }
    if (end - start).num_days() > MAX_TRIP_SPAN_DAYS {
        errors.push(format!(
            "Trip cannot span more than {MAX_TRIP_SPAN_DAYS} days"
        ));
        return None;
    }
    Some(DateInterval::new(start, end))
}

/// Far-future trips are flagged on the start date, or on the end date when
/// only the end is beyond the threshold. Far-past trips are flagged on the
/// start date.
fn date_age_warnings(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    settings: &ValidationSettings,
    warnings: &mut Vec<String>,
) {
    if settings.warn_future_dates {
        let far_ahead = [("Start date", start), ("End date", end)]
            .into_iter()
            .filter_map(|(label, date)| date.map(|date| (label, (date - today).num_days())))
            .find(|(_, ahead)| *ahead > settings.future_warning_days);
        if let Some((label, ahead)) = far_ahead {
            warnings.push(format!("{label} is {} in the future", describe_days(ahead)));
        }
    }

    if let Some(start) = start {
        let behind = (today - start).num_days();
        if settings.warn_past_dates && behind > settings.past_warning_days {
            warnings.push(format!(
                "Start date is {} in the past",
                describe_days(behind)
            ));
        }
    }
}

/// Returns the trimmed location when it is usable.
fn check_location(
    raw: &str,
    settings: &ValidationSettings,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> Option<String> {
    let location = raw.trim();
    if location.is_empty() {
        errors.push(String::from("Location cannot be empty"));
        return None;
    }

    let length = location.chars().count();
    if length > settings.max_location_length {
        errors.push(format!(
            "Location cannot exceed {} characters",
            settings.max_location_length
        ));
        return None;
    }

    let found: Vec<String> = SUSPICIOUS_LOCATION_CHARS
        .iter()
        .filter(|ch| location.contains(**ch))
        .map(char::to_string)
        .collect();
    if !found.is_empty() {
        warnings.push(format!(
            "Location contains unusual characters: {}",
            found.join(" ")
        ));
    }

    if length > 3 && is_all_caps(location) {
        warnings.push(format!("Location '{location}' is written in all capitals"));
    }

    Some(location.to_string())
}

/// At least one uppercase letter and no lowercase ones.
fn is_all_caps(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Turn a day count into `"N days"` or `"N years and M days"`.
#[must_use]
pub fn describe_days(days: i64) -> String {
    if days >= 365 {
        let years = days / 365;
        let rest = days % 365;
        format!("{} and {}", plural(years, "year"), plural(rest, "day"))
    } else {
        plural(days, "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
