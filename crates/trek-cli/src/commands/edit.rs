use trek_core::entities::{TravelRecord, TripDraft};
use trek_core::errors::CoreError;
use trek_engine::date::format_stored;
use trek_engine::{DisplayContext, validate};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EditArgs;
use crate::commands::shared::parse::record_index;
use crate::commands::shared::{resolve, save};
use crate::context::AppContext;

/// Handle `trek edit`.
pub fn handle(args: &EditArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = record_index(args.index)?;
    let records = ctx.store.records();
    let stored = records.get(index).ok_or(CoreError::NotFound {
        index,
        len: records.len(),
    })?;

    let draft = prefilled_draft(args, stored, &ctx.config.display.date_format);
    let outcome = validate(
        &draft,
        records,
        &ctx.config.validation,
        Some(index),
        ctx.today,
    );
    let resolution = resolve::resolve(outcome, &args.confirm)?;
    save::finish(resolution, ctx, flags)
}

/// Fields not given on the command line are echoed from the stored record,
/// dates in the entry format, so the whole trip is validated again.
fn prefilled_draft(args: &EditArgs, stored: &TravelRecord, date_format: &str) -> TripDraft {
    let echo = |text: &str| format_stored(text, date_format, DisplayContext::Entry);
    TripDraft {
        start_date: args.start.clone().unwrap_or_else(|| echo(&stored.start_date)),
        end_date: args.end.clone().unwrap_or_else(|| echo(&stored.end_date)),
        location: args.location.clone().unwrap_or_else(|| stored.location.clone()),
        travel_type: args
            .travel_type
            .clone()
            .unwrap_or_else(|| stored.travel_type.as_str().to_string()),
        comment: args.notes.clone().unwrap_or_else(|| stored.comment.clone()),
    }
}
