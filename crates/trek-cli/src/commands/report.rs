use chrono::Datelike;
use trek_engine::compute_year_window;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `trek report`.
pub fn handle(args: &ReportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let this_year = ctx.today.year();
    let window = compute_year_window(
        ctx.store.records(),
        args.past_year.unwrap_or(this_year),
        args.future_year.unwrap_or(this_year),
        ctx.today,
    );
    output(&window, flags)
}
