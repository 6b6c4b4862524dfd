//! Past-year and future-year windows around a reference date.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use trek_core::entities::TravelRecord;
use trek_core::responses::{MonthTally, TripLengthStats, YearStats, YearWindow};

use super::{MONTHS, percentage};
use crate::interval::{DateInterval, days_in_year, year_bounds};

/// Statistics for a past year and a future year, both relative to `today`.
#[must_use]
pub fn compute_year_window(
    records: &[TravelRecord],
    past_year: i32,
    future_year: i32,
    today: NaiveDate,
) -> YearWindow {
    YearWindow {
        past: past_year_stats(records, past_year, today),
        future: future_year_stats(records, future_year, today),
    }
}

/// Travel that has already happened in `year`.
///
/// A trip counts when it has started by `today` and touches the year. Its
/// days are clipped to the year, ending no later than `today`. Trip lengths
/// use the whole trip; the month histogram uses the start month.
#[must_use]
pub fn past_year_stats(records: &[TravelRecord], year: i32, today: NaiveDate) -> YearStats {
    let Some(bounds) = year_bounds(year) else {
        return empty_year(year);
    };
    let elapsed = DateInterval::new(bounds.start, bounds.end.min(today));

    let mut acc = YearAccumulator::default();
    for (record, interval) in parsed(records) {
        if interval.start > today || !interval.overlaps(&bounds) {
            continue;
        }
        acc.trip(&record.location, interval);
        acc.month(interval.start);
        if let Some(clipped) = interval.clip(&elapsed) {
            acc.days(clipped);
        }
    }

    let elapsed_days = if year == today.year() {
        (today - bounds.start).num_days() + 1
    } else {
        days_in_year(year)
    };
    let travel_days = acc.travel_days;
    acc.finish(year, travel_days, elapsed_days)
}

/// Travel still ahead in `year`.
///
/// A trip counts when it ends after `today` and touches the year. Days,
/// weekends, and the month histogram only see the part after `today` that
/// lies inside the year; a trip whose remaining days fall outside the year
/// still counts as a trip. The percentage instead uses every day of the
/// year any trip touches, including days already gone, over the full year
/// length.
#[must_use]
pub fn future_year_stats(records: &[TravelRecord], year: i32, today: NaiveDate) -> YearStats {
    let Some(bounds) = year_bounds(year) else {
        return empty_year(year);
    };
    let tomorrow = today.succ_opt();
    let upcoming =
        tomorrow.map(|tomorrow| DateInterval::new(bounds.start.max(tomorrow), bounds.end));

    let mut acc = YearAccumulator::default();
    let mut covered_days = 0;
    for (record, interval) in parsed(records) {
        let Some(in_year) = interval.clip(&bounds) else {
            continue;
        };
        covered_days += in_year.days();

        if tomorrow.is_none_or(|tomorrow| interval.end < tomorrow) {
            continue;
        }
        acc.trip(&record.location, interval);
        if let Some(clipped) = upcoming.and_then(|window| interval.clip(&window)) {
            acc.month(clipped.start);
            acc.days(clipped);
        }
    }

    acc.finish(year, covered_days, days_in_year(year))
}

fn parsed(records: &[TravelRecord]) -> impl Iterator<Item = (&TravelRecord, DateInterval)> {
    records.iter().enumerate().filter_map(|(index, record)| {
        let interval = DateInterval::from_record(record);
        if interval.is_none() {
            tracing::debug!(index, "skipping record with unparseable dates in year stats");
        }
        interval.map(|interval| (record, interval))
    })
}

#[derive(Default)]
struct YearAccumulator<'a> {
    trips: i64,
    travel_days: i64,
    weekend_days: i64,
    locations: HashSet<&'a str>,
    lengths: Vec<i64>,
    months: [i64; 12],
}

impl<'a> YearAccumulator<'a> {
    fn trip(&mut self, location: &'a str, whole: DateInterval) {
        self.trips += 1;
        self.locations.insert(location);
        self.lengths.push(whole.days());
    }

    fn month(&mut self, day: NaiveDate) {
        self.months[day.month0() as usize] += 1;
    }

    fn days(&mut self, clipped: DateInterval) {
        self.travel_days += clipped.days();
        self.weekend_days += clipped.weekend_days();
    }

    fn finish(self, year: i32, covered_days: i64, denominator_days: i64) -> YearStats {
        YearStats {
            year,
            trips: self.trips,
            travel_days: self.travel_days,
            weekend_days: self.weekend_days,
            locations: i64::try_from(self.locations.len()).unwrap_or(i64::MAX),
            trip_length: length_stats(&self.lengths),
            months: MONTHS
                .iter()
                .zip(self.months)
                .filter(|(_, count)| *count > 0)
                .map(|(month, count)| MonthTally {
                    month: (*month).to_string(),
                    count,
                })
                .collect(),
            covered_days,
            denominator_days,
            percentage_of_year: percentage(covered_days, denominator_days),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn length_stats(lengths: &[i64]) -> Option<TripLengthStats> {
    let shortest = *lengths.iter().min()?;
    let longest = *lengths.iter().max()?;
    let total: i64 = lengths.iter().sum();
    Some(TripLengthStats {
        average: total as f64 / lengths.len() as f64,
        shortest,
        longest,
    })
}

fn empty_year(year: i32) -> YearStats {
    YearAccumulator::default().finish(year, 0, 0)
}
