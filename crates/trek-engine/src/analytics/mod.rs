//! Travel statistics.
//!
//! Every count here is derived by clipping a trip's closed interval to a
//! window and counting the days that remain. Records whose stored dates do
//! not parse are skipped in every pass.

mod overall;
mod tally;
mod year;

pub use overall::compute_overall;
pub use year::{compute_year_window, future_year_stats, past_year_stats};

use chrono::{Datelike, NaiveDate};

/// Abbreviated month names, January first.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[must_use]
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}
