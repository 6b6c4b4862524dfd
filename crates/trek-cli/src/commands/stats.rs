use trek_engine::compute_overall;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `trek stats`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = compute_overall(ctx.store.records(), ctx.today);
    if stats.skipped_records > 0 {
        tracing::warn!(
            skipped = stats.skipped_records,
            "some trips have unreadable dates and were left out"
        );
    }
    output(&stats, flags)
}
