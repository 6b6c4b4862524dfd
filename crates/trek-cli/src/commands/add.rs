use trek_core::entities::TripDraft;
use trek_engine::validate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::{resolve, save};
use crate::context::AppContext;

/// Handle `trek add`.
pub fn handle(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = TripDraft {
        start_date: args.start.clone(),
        end_date: args.end.clone(),
        location: args.location.clone(),
        travel_type: args.travel_type.clone(),
        comment: args.notes.clone(),
    };

    let outcome = validate(
        &draft,
        ctx.store.records(),
        &ctx.config.validation,
        None,
        ctx.today,
    );
    let resolution = resolve::resolve(outcome, &args.confirm)?;
    save::finish(resolution, ctx, flags)
}
