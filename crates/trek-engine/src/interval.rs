//! Closed date intervals.
//!
//! Both ends are inclusive: a trip from the 1st to the 5th covers five days,
//! and two trips touching on the same day overlap.

use chrono::{Datelike, NaiveDate, Weekday};
use trek_core::entities::TravelRecord;

use crate::date::parse_stored;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Read a stored record's dates. `None` if either date does not parse.
    #[must_use]
    pub fn from_record(record: &TravelRecord) -> Option<Self> {
        let start = parse_stored(&record.start_date)?;
        let end = parse_stored(&record.end_date)?;
        Some(Self::new(start, end))
    }

    /// Whether the two intervals share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The part of `self` inside `window`, if any.
    #[must_use]
    pub fn clip(&self, window: &Self) -> Option<Self> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        (start <= end).then_some(Self::new(start, end))
    }

    /// Number of days covered, counting both ends. Zero for a reversed interval.
    #[must_use]
    pub fn days(&self) -> i64 {
        if self.start > self.end {
            return 0;
        }
        (self.end - self.start).num_days() + 1
    }

    /// Every day in the interval, in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Number of Saturdays and Sundays in the interval.
    #[must_use]
    pub fn weekend_days(&self) -> i64 {
        let count = self.iter_days().filter(|day| is_weekend(*day)).count();
        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

/// Calendar year `year` as an interval, Jan 1 through Dec 31.
#[must_use]
pub fn year_bounds(year: i32) -> Option<DateInterval> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some(DateInterval::new(start, end))
}

#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Gregorian leap year: divisible by 4, and either not by 100 or by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[must_use]
pub const fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) { 366 } else { 365 }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(a: (i32, u32, u32), b: (i32, u32, u32)) -> DateInterval {
        DateInterval::new(ymd(a.0, a.1, a.2), ymd(b.0, b.1, b.2))
    }

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        let first = span((2024, 1, 1), (2024, 1, 5));
        let second = span((2024, 1, 6), (2024, 1, 10));
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn shared_day_overlaps() {
        let first = span((2024, 1, 1), (2024, 1, 5));
        let second = span((2024, 1, 5), (2024, 1, 10));
        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first));
    }

    #[test]
    fn clip_keeps_only_the_window() {
        let trip = span((2023, 12, 20), (2024, 1, 10));
        let year = year_bounds(2023).unwrap();
        let clipped = trip.clip(&year).unwrap();
        assert_eq!(clipped, span((2023, 12, 20), (2023, 12, 31)));
        assert_eq!(clipped.days(), 12);
    }

    #[test]
    fn clip_outside_window_is_none() {
        let trip = span((2022, 3, 1), (2022, 3, 9));
        assert_eq!(trip.clip(&year_bounds(2023).unwrap()), None);
    }

    #[test]
    fn single_day_counts_as_one() {
        let day = span((2024, 7, 4), (2024, 7, 4));
        assert_eq!(day.days(), 1);
        assert_eq!(day.iter_days().count(), 1);
    }

    #[test]
    fn reversed_interval_is_empty() {
        let reversed = span((2024, 7, 9), (2024, 7, 4));
        assert_eq!(reversed.days(), 0);
        assert_eq!(reversed.iter_days().count(), 0);
        assert_eq!(reversed.clip(&reversed), None);
    }

    #[test]
    fn full_week_has_two_weekend_days() {
        // Monday through Sunday.
        assert_eq!(span((2024, 1, 1), (2024, 1, 7)).weekend_days(), 2);
        // Saturday alone.
        assert_eq!(span((2024, 1, 6), (2024, 1, 6)).weekend_days(), 1);
        // Tuesday through Thursday.
        assert_eq!(span((2024, 1, 2), (2024, 1, 4)).weekend_days(), 0);
    }

    #[rstest]
    #[case(2024, true)]
    #[case(2023, false)]
    #[case(1900, false)]
    #[case(2000, true)]
    #[case(2100, false)]
    fn leap_years(#[case] year: i32, #[case] leap: bool) {
        assert_eq!(is_leap_year(year), leap);
        assert_eq!(days_in_year(year), if leap { 366 } else { 365 });
        assert_eq!(year_bounds(year).unwrap().days(), days_in_year(year));
    }

    #[test]
    fn from_record_skips_bad_dates() {
        let mut record = TravelRecord::new(
            ymd(2024, 1, 1),
            ymd(2024, 1, 3),
            "Rome",
            trek_core::enums::TravelType::Personal,
            "",
        );
        assert!(DateInterval::from_record(&record).is_some());
        record.end_date = "soon".into();
        assert!(DateInterval::from_record(&record).is_none());
    }
}
