use serde::Serialize;
use trek_config::TrekConfig;
use trek_engine::DisplayFormat;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConfigResponse<'a> {
    data_file: String,
    date_formats: Vec<&'static str>,
    #[serde(flatten)]
    config: &'a TrekConfig,
}

/// Handle `trek config`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ConfigResponse {
        data_file: ctx.store.path().display().to_string(),
        date_formats: DisplayFormat::ALL.iter().map(|format| format.name()).collect(),
        config: &ctx.config,
    };
    output(&response, flags)
}
