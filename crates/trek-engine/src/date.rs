//! Date parsing and display.
//!
//! Typed dates are tried against a fixed list of formats, in order, and the
//! first one that parses wins. Numeric dates where both leading fields could
//! be a month (`03-04-2024`) therefore always read month-first; there is no
//! locale guessing.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use trek_core::entities::ISO_DATE_FORMAT;

/// Earliest year a typed date may fall in.
pub const MIN_YEAR: i32 = 1900;
/// Latest year a typed date may fall in.
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("Date cannot be empty")]
    Empty,

    #[error("Invalid date format: '{input}'. Use MM/DD/YYYY, YYYY-MM-DD, or Month DD, YYYY")]
    Unrecognized { input: String },

    #[error("Date must be between 1900-01-01 and 2100-12-31 (got {date})")]
    OutOfRange { date: NaiveDate },
}

// ---------------------------------------------------------------------------
// InputFormat
// ---------------------------------------------------------------------------

/// A format accepted when reading a typed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    MonthDayYearSlash,
    MonthDayYearDash,
    MonthNameDayYear,
    MonthNameDash,
    DayMonthYearDash,
    YearMonthDayDash,
    DayMonthYearSlash,
    YearMonthDaySlash,
}

impl InputFormat {
    /// Formats in the order they are tried.
    pub const PRIORITY: [Self; 8] = [
        Self::MonthDayYearSlash,
        Self::MonthDayYearDash,
        Self::MonthNameDayYear,
        Self::MonthNameDash,
        Self::DayMonthYearDash,
        Self::YearMonthDayDash,
        Self::DayMonthYearSlash,
        Self::YearMonthDaySlash,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MonthDayYearSlash => "MM/DD/YYYY",
            Self::MonthDayYearDash => "MM-DD-YYYY",
            Self::MonthNameDayYear => "Month DD, YYYY",
            Self::MonthNameDash => "Month-DD-YYYY",
            Self::DayMonthYearDash => "DD-MM-YYYY",
            Self::YearMonthDayDash => "YYYY-MM-DD",
            Self::DayMonthYearSlash => "DD/MM/YYYY",
            Self::YearMonthDaySlash => "YYYY/MM/DD",
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYearSlash => "%m/%d/%Y",
            Self::MonthDayYearDash => "%m-%d-%Y",
            Self::MonthNameDayYear => "%B %d, %Y",
            Self::MonthNameDash => "%B-%d-%Y",
            Self::DayMonthYearDash => "%d-%m-%Y",
            Self::YearMonthDayDash => ISO_DATE_FORMAT,
            Self::DayMonthYearSlash => "%d/%m/%Y",
            Self::YearMonthDaySlash => "%Y/%m/%d",
        }
    }

    fn try_parse(self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text, self.pattern()).ok()
    }
}

// ---------------------------------------------------------------------------
// DisplayFormat
// ---------------------------------------------------------------------------

/// A format dates can be shown in.
///
/// Each of these reads back to the same date through [`parse_date`]; day-first
/// layouts are deliberately absent because the parser reads them month-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayFormat {
    MonthDayYearSlash,
    MonthDayYearDash,
    YearMonthDayDash,
    YearMonthDaySlash,
    MonthNameDayYear,
}

impl DisplayFormat {
    pub const ALL: [Self; 5] = [
        Self::MonthDayYearSlash,
        Self::MonthDayYearDash,
        Self::YearMonthDayDash,
        Self::YearMonthDaySlash,
        Self::MonthNameDayYear,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MonthDayYearSlash => "MM/DD/YYYY",
            Self::MonthDayYearDash => "MM-DD-YYYY",
            Self::YearMonthDayDash => "YYYY-MM-DD",
            Self::YearMonthDaySlash => "YYYY/MM/DD",
            Self::MonthNameDayYear => "Month DD, YYYY",
        }
    }

    /// Look a format up by its display name (`"YYYY-MM-DD"`), ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYearSlash => "%m/%d/%Y",
            Self::MonthDayYearDash => "%m-%d-%Y",
            Self::YearMonthDayDash => ISO_DATE_FORMAT,
            Self::YearMonthDaySlash => "%Y/%m/%d",
            Self::MonthNameDayYear => "%B %d, %Y",
        }
    }

    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// Where a formatted date is going to be shown. Decides the fallback format
/// when a configured format name is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayContext {
    /// Dates echoed back into entry fields.
    Entry,
    /// Dates in listings and reports.
    Report,
}

impl DisplayContext {
    #[must_use]
    pub const fn fallback(self) -> DisplayFormat {
        match self {
            Self::Entry => DisplayFormat::MonthDayYearSlash,
            Self::Report => DisplayFormat::MonthDayYearDash,
        }
    }

    #[must_use]
    pub fn resolve(self, name: &str) -> DisplayFormat {
        DisplayFormat::from_name(name).unwrap_or_else(|| self.fallback())
    }
}

// ---------------------------------------------------------------------------
// Parsing and formatting
// ---------------------------------------------------------------------------

/// Parse a date typed by a user.
///
/// # Errors
///
/// Returns `DateParseError::Empty` for blank input,
/// `DateParseError::Unrecognized` when no accepted format matches, and
/// `DateParseError::OutOfRange` when the date falls outside 1900 to 2100.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }

    let date = InputFormat::PRIORITY
        .into_iter()
        .find_map(|format| format.try_parse(trimmed))
        .ok_or_else(|| DateParseError::Unrecognized {
            input: trimmed.to_string(),
        })?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(DateParseError::OutOfRange { date });
    }
    Ok(date)
}

/// Parse a stored date. Stored dates are always canonical `YYYY-MM-DD`.
#[must_use]
pub fn parse_stored(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ISO_DATE_FORMAT).ok()
}

/// Render a date in the named display format, falling back per `context`.
#[must_use]
pub fn format_date(date: NaiveDate, format_name: &str, context: DisplayContext) -> String {
    context.resolve(format_name).format(date)
}

/// Re-render a stored date for display. Text that does not parse is returned
/// unchanged so damaged records remain visible.
#[must_use]
pub fn format_stored(text: &str, format_name: &str, context: DisplayContext) -> String {
    parse_stored(text).map_or_else(
        || text.to_string(),
        |date| format_date(date, format_name, context),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("03/04/2024", ymd(2024, 3, 4))]
    #[case("03-04-2024", ymd(2024, 3, 4))]
    #[case("March 4, 2024", ymd(2024, 3, 4))]
    #[case("march 04, 2024", ymd(2024, 3, 4))]
    #[case("March-04-2024", ymd(2024, 3, 4))]
    #[case("13-04-2024", ymd(2024, 4, 13))]
    #[case("2024-03-04", ymd(2024, 3, 4))]
    #[case("13/04/2024", ymd(2024, 4, 13))]
    #[case("2024/03/04", ymd(2024, 3, 4))]
    #[case("  2024-03-04  ", ymd(2024, 3, 4))]
    fn parses_every_accepted_format(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_date(input), Ok(expected));
    }

    #[test]
    fn ambiguous_numeric_date_reads_month_first() {
        assert_eq!(parse_date("03-04-2024"), Ok(ymd(2024, 3, 4)));
        assert_eq!(parse_date("04/03/2024"), Ok(ymd(2024, 4, 3)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_input_is_empty_error(#[case] input: &str) {
        assert_eq!(parse_date(input), Err(DateParseError::Empty));
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2024-02-30")]
    #[case("13/13/2024")]
    #[case("2024.03.04")]
    fn garbage_is_unrecognized(#[case] input: &str) {
        assert!(matches!(
            parse_date(input),
            Err(DateParseError::Unrecognized { .. })
        ));
    }

    #[rstest]
    #[case("12/31/1899")]
    #[case("2101-01-01")]
    fn out_of_range_years_are_rejected(#[case] input: &str) {
        assert!(matches!(
            parse_date(input),
            Err(DateParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert_eq!(parse_date("1900-01-01"), Ok(ymd(1900, 1, 1)));
        assert_eq!(parse_date("2100-12-31"), Ok(ymd(2100, 12, 31)));
    }

    #[test]
    fn every_display_format_reads_back() {
        let dates = [
            ymd(1900, 1, 1),
            ymd(2024, 2, 29),
            ymd(2024, 3, 4),
            ymd(2023, 12, 13),
            ymd(2100, 12, 31),
        ];
        for format in DisplayFormat::ALL {
            for date in dates {
                let text = format.format(date);
                assert_eq!(parse_date(&text), Ok(date), "{} -> {text}", format.name());
            }
        }
    }

    #[test]
    fn unknown_format_name_falls_back_per_context() {
        let date = ymd(2024, 3, 4);
        assert_eq!(format_date(date, "nonsense", DisplayContext::Entry), "03/04/2024");
        assert_eq!(format_date(date, "nonsense", DisplayContext::Report), "03-04-2024");
        assert_eq!(format_date(date, "yyyy-mm-dd", DisplayContext::Report), "2024-03-04");
        assert_eq!(
            format_date(date, "Month DD, YYYY", DisplayContext::Entry),
            "March 04, 2024"
        );
    }

    #[test]
    fn stored_dates_are_iso_only() {
        assert_eq!(parse_stored("2024-03-04"), Some(ymd(2024, 3, 4)));
        assert_eq!(parse_stored("03/04/2024"), None);
        assert_eq!(parse_stored("not a date"), None);
    }

    #[test]
    fn damaged_stored_text_is_shown_as_is() {
        assert_eq!(
            format_stored("20x4-01-01", "MM/DD/YYYY", DisplayContext::Report),
            "20x4-01-01"
        );
        assert_eq!(
            format_stored("2024-01-05", "YYYY/MM/DD", DisplayContext::Report),
            "2024/01/05"
        );
    }
}
