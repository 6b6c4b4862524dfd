use std::collections::BTreeSet;

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use trek_engine::analytics::MONTHS;
use trek_engine::records::travel_days_in_month;

use crate::cli::root_commands::CalendarArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CalendarResponse {
    year: i32,
    month: u32,
    month_name: &'static str,
    travel_days: Vec<u32>,
}

/// Handle `trek calendar`. Table output draws a month grid with travel days
/// marked `*`; other formats return the day list.
pub fn handle(args: &CalendarArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let year = args.year.unwrap_or_else(|| ctx.today.year());
    let month = args.month.unwrap_or_else(|| ctx.today.month());
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("no such month: {year}-{month:02}"))?;

    let days = travel_days_in_month(ctx.store.records(), year, month);
    if flags.format == OutputFormat::Table {
        println!("{}", render_month(first, &days));
        return Ok(());
    }

    let response = CalendarResponse {
        year,
        month,
        month_name: MONTHS[first.month0() as usize],
        travel_days: days.into_iter().collect(),
    };
    output(&response, flags)
}

fn render_month(first: NaiveDate, travel_days: &BTreeSet<u32>) -> String {
    let mut lines = vec![
        first.format("%B %Y").to_string(),
        String::from("Mo  Tu  We  Th  Fr  Sa  Su"),
    ];

    let mut line = "    ".repeat(first.weekday().num_days_from_monday() as usize);
    for date in first.iter_days().take_while(|date| date.month() == first.month()) {
        let mark = if travel_days.contains(&date.day()) { '*' } else { ' ' };
        line.push_str(&format!("{:>2}{mark} ", date.day()));
        if date.weekday().num_days_from_monday() == 6 {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
    }
    if !line.trim().is_empty() {
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
