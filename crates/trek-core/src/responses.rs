//! Statistic types returned by the analytics aggregator.
//!
//! These structs define the JSON shape of `trek stats` and `trek report`.
//! Tallies are vectors rather than maps so their order is part of the output:
//! months run January to December, everything else is in first-seen order.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TravelType;

/// Average, shortest, and longest trip length, in whole days.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TripLengthStats {
    pub average: f64,
    pub shortest: i64,
    pub longest: i64,
}

/// Count attached to an abbreviated month name (`"Jan"` .. `"Dec"`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthTally {
    pub month: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LocationTally {
    pub location: String,
    pub trips: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct YearTally {
    pub year: i32,
    pub days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TypeTally {
    pub travel_type: TravelType,
    pub trips: i64,
    pub days: i64,
}

/// Statistics for one calendar year.
///
/// `percentage_of_year` is `100 * covered_days / denominator_days`. For the
/// past-year window `covered_days` equals `travel_days` and the denominator is
/// the elapsed part of the year. For the future-year window `covered_days`
/// counts every day of the year touched by a trip, elapsed or not, and the
/// denominator is the full year.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct YearStats {
    pub year: i32,
    pub trips: i64,
    pub travel_days: i64,
    pub weekend_days: i64,
    pub locations: i64,
    pub trip_length: Option<TripLengthStats>,
    pub months: Vec<MonthTally>,
    pub covered_days: i64,
    pub denominator_days: i64,
    pub percentage_of_year: f64,
}

/// Response from `trek report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct YearWindow {
    pub past: YearStats,
    pub future: YearStats,
}

/// Response from `trek stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverallStats {
    /// Every record in the collection, including ones skipped below.
    pub total_records: i64,
    /// Records whose dates could not be parsed; they contribute nothing else.
    pub skipped_records: i64,
    pub earliest_trip: Option<NaiveDate>,
    pub latest_trip: Option<NaiveDate>,
    pub location_counts: Vec<LocationTally>,
    pub most_visited_location: Option<String>,
    pub total_travel_days: i64,
    pub total_weekend_days: i64,
    pub peak_travel_month: Option<String>,
    pub most_traveled_year: i32,
    pub days_by_year: Vec<YearTally>,
    pub days_by_type: Vec<TypeTally>,
}
