use trek_core::enums::{SortColumn, TripStatus};
use trek_engine::{filter_by_status, sort_records};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::views::TripRow;
use crate::context::AppContext;
use crate::output::output;

/// Handle `trek list`.
pub fn handle(args: &ListArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let statuses = args
        .status
        .iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_enum::<TripStatus>(raw, "status"))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut listed = filter_by_status(ctx.store.records(), &statuses, ctx.today);
    if let Some(raw) = &args.sort {
        let column = parse_enum::<SortColumn>(raw, "sort")?;
        sort_records(&mut listed, column, args.desc);
    }

    let rows = listed
        .iter()
        .map(|entry| TripRow::new(entry.index, &entry.record, ctx))
        .collect::<Vec<_>>();
    output(&rows, flags)
}
