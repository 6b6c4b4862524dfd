use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::commands::shared::parse::record_index;
use crate::commands::shared::views::TripRow;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    status: &'static str,
    trip: TripRow,
}

/// Handle `trek delete`.
pub fn handle(args: &DeleteArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = record_index(args.index)?;
    let removed = ctx.store.remove(index)?;
    ctx.store.save()?;
    tracing::info!(trip = args.index, location = %removed.location, "trip deleted");

    let response = DeleteResponse {
        status: "deleted",
        trip: TripRow::new(index, &removed, ctx),
    };
    output(&response, flags)
}
