use trek_engine::records::known_locations;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `trek locations`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let locations = known_locations(ctx.store.records())
        .into_iter()
        .collect::<Vec<_>>();
    output(&locations, flags)
}
