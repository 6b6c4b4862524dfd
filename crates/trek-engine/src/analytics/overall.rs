//! All-time statistics.

use chrono::{Datelike, NaiveDate};
use trek_core::entities::TravelRecord;
use trek_core::enums::TravelType;
use trek_core::responses::{LocationTally, OverallStats, TypeTally, YearTally};

use super::month_name;
use super::tally::FirstSeenTally;
use crate::interval::{DateInterval, year_bounds};

/// Statistics over every record, all time.
///
/// Overlapping trips each count in full. `today` only supplies the
/// most-traveled year when nothing can be counted.
#[must_use]
pub fn compute_overall(records: &[TravelRecord], today: NaiveDate) -> OverallStats {
    let mut skipped = 0_i64;
    let mut earliest: Option<NaiveDate> = None;
    let mut latest: Option<NaiveDate> = None;
    let mut locations = FirstSeenTally::new();
    let mut months = FirstSeenTally::new();
    let mut years = FirstSeenTally::new();
    let mut types = FirstSeenTally::new();
    let mut type_days = FirstSeenTally::new();
    let mut total_days = 0;
    let mut weekend_days = 0;

    for (index, record) in records.iter().enumerate() {
        let Some(trip) = DateInterval::from_record(record) else {
            tracing::debug!(index, "skipping record with unparseable dates in overall stats");
            skipped += 1;
            continue;
        };

        earliest = Some(earliest.map_or(trip.start, |date| date.min(trip.start)));
        latest = Some(latest.map_or(trip.end, |date| date.max(trip.end)));
        locations.add(record.location.as_str(), 1);

        let days = trip.days();
        total_days += days;
        weekend_days += trip.weekend_days();
        types.add(record.travel_type, 1);
        type_days.add(record.travel_type, days);

        for day in trip.iter_days() {
            months.add(month_name(day), 1);
        }
        for year in trip.start.year()..=trip.end.year() {
            let clipped = year_bounds(year).and_then(|bounds| trip.clip(&bounds));
            if let Some(clipped) = clipped {
                years.add(year, clipped.days());
            }
        }
    }

    let most_visited_location = locations.leader().map(|location| (*location).to_string());
    let peak_travel_month = months.leader().map(|month| (*month).to_string());
    let most_traveled_year = years.leader().copied().unwrap_or_else(|| today.year());

    let mut days_by_year: Vec<YearTally> = years
        .into_entries()
        .into_iter()
        .map(|(year, days)| YearTally { year, days })
        .collect();
    days_by_year.sort_by_key(|tally| tally.year);

    let days_by_type = type_totals(types.into_entries(), type_days.into_entries());

    OverallStats {
        total_records: i64::try_from(records.len()).unwrap_or(i64::MAX),
        skipped_records: skipped,
        earliest_trip: earliest,
        latest_trip: latest,
        location_counts: locations
            .into_entries()
            .into_iter()
            .map(|(location, trips)| LocationTally {
                location: location.to_string(),
                trips,
            })
            .collect(),
        most_visited_location,
        total_travel_days: total_days,
        total_weekend_days: weekend_days,
        peak_travel_month,
        most_traveled_year,
        days_by_year,
        days_by_type,
    }
}

fn type_totals(trips: Vec<(TravelType, i64)>, days: Vec<(TravelType, i64)>) -> Vec<TypeTally> {
    trips
        .into_iter()
        .zip(days)
        .map(|((travel_type, trips), (_, days))| TypeTally {
            travel_type,
            trips,
            days,
        })
        .collect()
}
