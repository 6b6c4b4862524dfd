use serde::Serialize;

use super::resolve::Resolution;
use super::views::TripRow;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    Saved,
    Updated,
    Cancelled,
}

/// Response from `trek add` and `trek edit`.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: SaveStatus,
    pub trip: Option<TripRow>,
    pub reason: Option<String>,
    pub warnings: Vec<String>,
    pub conflicts: Vec<TripRow>,
}

/// Apply a resolved change to the store, write it, and report what happened.
pub fn finish(
    resolution: Resolution,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match resolution {
        Resolution::Save {
            change,
            warnings,
            conflicts,
        } => {
            let status = match change {
                trek_engine::RecordChange::Append(_) => SaveStatus::Saved,
                trek_engine::RecordChange::Replace { .. } => SaveStatus::Updated,
            };
            let conflicts = conflict_rows(&conflicts, ctx);
            let index = ctx.store.apply(change)?;
            ctx.store.save()?;
            tracing::info!(trip = index + 1, "trip stored");
            SaveResponse {
                status,
                trip: ctx
                    .store
                    .records()
                    .get(index)
                    .map(|record| TripRow::new(index, record, ctx)),
                reason: None,
                warnings,
                conflicts,
            }
        }
        Resolution::Cancelled {
            reason,
            warnings,
            conflicts,
        } => SaveResponse {
            status: SaveStatus::Cancelled,
            trip: None,
            reason: Some(reason),
            warnings,
            conflicts: conflict_rows(&conflicts, ctx),
        },
    };
    output(&response, flags)
}

fn conflict_rows(conflicts: &[trek_engine::Conflict], ctx: &AppContext) -> Vec<TripRow> {
    conflicts
        .iter()
        .map(|conflict| TripRow::new(conflict.index, &conflict.record, ctx))
        .collect()
}
