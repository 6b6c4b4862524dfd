//! End-to-end behaviour of the engine's public surface.

use chrono::{Days, NaiveDate};
use pretty_assertions::assert_eq;
use rstest::rstest;
use trek_core::entities::{TravelRecord, TripDraft};
use trek_core::enums::TravelType;
use trek_core::settings::ValidationSettings;
use trek_engine::{
    DateInterval, DisplayFormat, Outcome, compute_overall, compute_year_window, find_conflicts,
    parse_date, validate,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn trip(start: NaiveDate, end: NaiveDate, location: &str) -> TravelRecord {
    TravelRecord::new(start, end, location, TravelType::Personal, "")
}

fn quiet_settings() -> ValidationSettings {
    ValidationSettings {
        warn_future_dates: false,
        warn_past_dates: false,
        ..Default::default()
    }
}

fn draft(start: &str, end: &str, location: &str) -> TripDraft {
    TripDraft {
        start_date: start.into(),
        end_date: end.into(),
        location: location.into(),
        travel_type: "Personal".into(),
        comment: String::new(),
    }
}

#[rstest]
#[case((2024, 1, 1), (2024, 1, 5), (2024, 1, 3), (2024, 1, 9))]
#[case((2024, 1, 1), (2024, 1, 5), (2024, 1, 6), (2024, 1, 9))]
#[case((2024, 2, 1), (2024, 2, 1), (2024, 2, 1), (2024, 2, 1))]
#[case((2020, 1, 1), (2030, 1, 1), (2024, 6, 1), (2024, 6, 2))]
fn overlap_is_symmetric(
    #[case] a0: (i32, u32, u32),
    #[case] a1: (i32, u32, u32),
    #[case] b0: (i32, u32, u32),
    #[case] b1: (i32, u32, u32),
) {
    let a = DateInterval::new(ymd(a0.0, a0.1, a0.2), ymd(a1.0, a1.1, a1.2));
    let b = DateInterval::new(ymd(b0.0, b0.1, b0.2), ymd(b1.0, b1.1, b1.2));
    assert_eq!(a.overlaps(&b), b.overlaps(&a));
}

#[test]
fn overlap_boundary_is_inclusive() {
    let stored = vec![trip(ymd(2024, 1, 1), ymd(2024, 1, 5), "Ghent")];
    let settings = ValidationSettings::default();

    let adjacent = DateInterval::new(ymd(2024, 1, 6), ymd(2024, 1, 10));
    assert!(find_conflicts(adjacent, &stored, None, &settings).is_empty());

    let touching = DateInterval::new(ymd(2024, 1, 5), ymd(2024, 1, 10));
    assert_eq!(find_conflicts(touching, &stored, None, &settings).len(), 1);
}

#[test]
fn every_display_format_round_trips_across_a_leap_year() {
    let mut day = ymd(2024, 1, 1);
    while day <= ymd(2024, 12, 31) {
        for format in DisplayFormat::ALL {
            assert_eq!(parse_date(&format.format(day)), Ok(day));
        }
        day = day.checked_add_days(Days::new(1)).unwrap();
    }
}

#[test]
fn duration_cap_sits_at_730_days() {
    let today = ymd(2024, 6, 1);
    let start = ymd(2023, 1, 1);
    let at_cap = start.checked_add_days(Days::new(730)).unwrap();
    let over_cap = start.checked_add_days(Days::new(731)).unwrap();

    let accepted = validate(
        &draft("2023-01-01", &at_cap.to_string(), "Oslo"),
        &[],
        &quiet_settings(),
        None,
        today,
    );
    assert!(matches!(accepted, Outcome::Accepted(_)));

    let rejected = validate(
        &draft("2023-01-01", &over_cap.to_string(), "Oslo"),
        &[],
        &quiet_settings(),
        None,
        today,
    );
    assert!(matches!(rejected, Outcome::Rejected(errors) if errors.len() == 1));
}

#[test]
fn past_year_clipping_ignores_the_next_year() {
    let records = vec![trip(ymd(2023, 12, 20), ymd(2024, 1, 10), "Vienna")];
    let window = compute_year_window(&records, 2023, 2024, ymd(2024, 6, 1));
    assert_eq!(window.past.travel_days, 12);
}

#[rstest]
#[case(2024, 366)]
#[case(2023, 365)]
fn elapsed_days_follow_leap_years(#[case] year: i32, #[case] expected: i64) {
    let window = compute_year_window(&[], year, year, ymd(2024, 12, 31));
    assert_eq!(window.past.denominator_days, expected);
}

#[test]
fn one_full_week_has_two_weekend_days() {
    let records = vec![trip(ymd(2024, 1, 1), ymd(2024, 1, 7), "Bruges")];
    let stats = compute_overall(&records, ymd(2024, 6, 1));
    assert_eq!(stats.total_weekend_days, 2);

    let window = compute_year_window(&records, 2024, 2024, ymd(2024, 6, 1));
    assert_eq!(window.past.weekend_days, 2);
}

#[test]
fn overall_stats_are_idempotent() {
    let records = vec![
        trip(ymd(2023, 3, 1), ymd(2023, 3, 9), "Lagos"),
        trip(ymd(2024, 3, 1), ymd(2024, 3, 2), "Accra"),
        trip(ymd(2024, 3, 2), ymd(2024, 3, 4), "Lagos"),
    ];
    let today = ymd(2024, 6, 1);
    assert_eq!(compute_overall(&records, today), compute_overall(&records, today));
}

#[test]
fn malformed_record_contributes_nothing() {
    let good = vec![trip(ymd(2024, 2, 5), ymd(2024, 2, 9), "Turin")];
    let mut broken = trip(ymd(2024, 2, 1), ymd(2024, 2, 20), "Milan");
    broken.start_date = "Feb 1st".into();
    let mut with_broken = good.clone();
    with_broken.push(broken);

    let today = ymd(2024, 6, 1);
    let clean = compute_overall(&good, today);
    let dirty = compute_overall(&with_broken, today);
    assert_eq!(dirty.total_travel_days, clean.total_travel_days);
    assert_eq!(dirty.location_counts, clean.location_counts);
    assert_eq!(dirty.days_by_year, clean.days_by_year);
    assert_eq!(dirty.skipped_records, 1);

    assert_eq!(
        compute_year_window(&with_broken, 2024, 2024, today),
        compute_year_window(&good, 2024, 2024, today)
    );

    let candidate = DateInterval::new(ymd(2024, 2, 10), ymd(2024, 2, 12));
    assert!(find_conflicts(candidate, &with_broken, None, &ValidationSettings::default()).is_empty());
}

#[test]
fn empty_location_and_backward_range_are_reported_together() {
    let outcome = validate(
        &draft("2024-03-10", "2024-03-01", ""),
        &[],
        &ValidationSettings::default(),
        None,
        ymd(2024, 6, 1),
    );
    let Outcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(
        errors,
        vec![
            "End date cannot be before start date".to_string(),
            "Location cannot be empty".to_string(),
        ]
    );
}
